pub mod band_scale;
pub mod easing;
pub mod month;
pub mod scale;
pub mod types;

pub use band_scale::BandScale;
pub use easing::Easing;
pub use month::MonthScale;
pub use scale::LinearScale;
pub use types::{Margins, PlotArea, PointPx, Viewport};

/// Lenient numeric coercion for tabular cells: malformed or empty input
/// becomes NaN and flows through downstream math unchanged.
#[must_use]
pub fn coerce_f64(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
