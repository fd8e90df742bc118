//! Opt-in tracing setup for hosts embedding the story engine.
//!
//! The engine logs step activations at `debug` and per-advance
//! scheduler work at `trace`; hosts that want either wire a
//! subscriber themselves or call [`init_default_tracing`].

/// Directives used when `RUST_LOG` is unset: step-level debug from
/// this crate, info from everything else. Per-frame trace events stay
/// off unless the host opts in explicitly.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info,scrolly_rs=debug";

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `true` when the subscriber was installed. Returns `false`
/// when the `telemetry` feature is disabled or the host application
/// already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
