use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Easing, PointPx};
use crate::error::{StoryError, StoryResult};
use crate::render::Color;
use crate::scene::{Channel, ElementId, Scene};

/// Default transition length, matching the story-wide fade duration.
pub const DEFAULT_DURATION_S: f64 = 0.5;

/// What happens when a transition reaches its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopMode {
    #[default]
    Once,
    /// Re-arm with endpoints swapped instead of retiring. Used by the
    /// scroll-prompt bounce.
    PingPong,
}

/// Authored end state for one channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelTarget {
    Scalar(f64),
    Color(Color),
    Points(Vec<PointPx>),
}

/// One authored transition. The starting value is not part of the spec;
/// it is captured from the scene when the transition begins, so
/// retargeting something mid-flight picks up from wherever it currently
/// is.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSpec {
    pub element: ElementId,
    pub channel: Channel,
    pub target: ChannelTarget,
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: Easing,
    pub loop_mode: LoopMode,
}

impl TransitionSpec {
    #[must_use]
    pub fn scalar(element: ElementId, channel: Channel, to: f64) -> Self {
        Self {
            element,
            channel,
            target: ChannelTarget::Scalar(to),
            duration_s: DEFAULT_DURATION_S,
            delay_s: 0.0,
            easing: Easing::default(),
            loop_mode: LoopMode::default(),
        }
    }

    #[must_use]
    pub fn color(element: ElementId, channel: Channel, to: Color) -> Self {
        Self {
            element,
            channel,
            target: ChannelTarget::Color(to),
            duration_s: DEFAULT_DURATION_S,
            delay_s: 0.0,
            easing: Easing::default(),
            loop_mode: LoopMode::default(),
        }
    }

    #[must_use]
    pub fn polyline(element: ElementId, to: Vec<PointPx>) -> Self {
        Self {
            element,
            channel: Channel::Points,
            target: ChannelTarget::Points(to),
            duration_s: DEFAULT_DURATION_S,
            delay_s: 0.0,
            easing: Easing::default(),
            loop_mode: LoopMode::default(),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_s = seconds;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, seconds: f64) -> Self {
        self.delay_s = seconds;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    fn validate(&self) -> StoryResult<()> {
        if !self.duration_s.is_finite() || self.duration_s < 0.0 {
            return Err(StoryError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        if !self.delay_s.is_finite() || self.delay_s < 0.0 {
            return Err(StoryError::InvalidData(
                "transition delay must be finite and >= 0".to_owned(),
            ));
        }
        if self.loop_mode == LoopMode::PingPong && self.duration_s <= 0.0 {
            return Err(StoryError::InvalidData(
                "ping-pong transition needs a duration > 0".to_owned(),
            ));
        }
        match &self.target {
            ChannelTarget::Scalar(to) => {
                if !to.is_finite() {
                    return Err(StoryError::InvalidData(
                        "scalar transition target must be finite".to_owned(),
                    ));
                }
            }
            ChannelTarget::Color(to) => to.validate()?,
            ChannelTarget::Points(to) => {
                if to.iter().any(|point| !point.is_finite()) {
                    return Err(StoryError::InvalidData(
                        "polyline transition target must be finite".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Route {
    Scalar { from: f64, to: f64 },
    Color { from: Color, to: Color },
    Points { from: Vec<PointPx>, to: Vec<PointPx> },
}

impl Route {
    fn reverse(&mut self) {
        match self {
            Self::Scalar { from, to } => std::mem::swap(from, to),
            Self::Color { from, to } => std::mem::swap(from, to),
            Self::Points { from, to } => std::mem::swap(from, to),
        }
    }
}

#[derive(Debug, Clone)]
struct Flight {
    easing: Easing,
    duration_s: f64,
    delay_s: f64,
    loop_mode: LoopMode,
    elapsed_s: f64,
    route: Route,
}

/// Drives every in-flight transition and writes interpolated values into
/// the scene.
///
/// At most one transition is in flight per `(element, channel)`:
/// beginning a new one replaces whatever was there, and the replacement
/// starts from the current scene value, so fast step changes retarget
/// smoothly instead of stacking.
#[derive(Debug, Default)]
pub struct TransitionScheduler {
    flights: IndexMap<(ElementId, Channel), Flight>,
}

impl TransitionScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current channel value as the starting point and puts
    /// the transition in flight.
    pub fn begin(&mut self, scene: &mut Scene, spec: TransitionSpec) -> StoryResult<()> {
        spec.validate()?;

        let route = match &spec.target {
            ChannelTarget::Scalar(to) => {
                let mut from = scene.scalar(spec.element, spec.channel)?;
                if !from.is_finite() {
                    // Degenerate current value (e.g. a position derived from
                    // missing data) cannot be interpolated; snap instead.
                    from = *to;
                }
                Route::Scalar { from, to: *to }
            }
            ChannelTarget::Color(to) => Route::Color {
                from: scene.color(spec.element, spec.channel)?,
                to: *to,
            },
            ChannelTarget::Points(to) => {
                let from = scene.points(spec.element)?.to_vec();
                if from.len() != to.len() {
                    return Err(StoryError::InvalidData(format!(
                        "polyline transition needs equal point counts, got {} -> {}",
                        from.len(),
                        to.len()
                    )));
                }
                Route::Points {
                    from,
                    to: to.clone(),
                }
            }
        };

        trace!(
            element = spec.element.index(),
            channel = spec.channel.name(),
            duration_s = spec.duration_s,
            delay_s = spec.delay_s,
            "transition begins"
        );

        self.flights.insert(
            (spec.element, spec.channel),
            Flight {
                easing: spec.easing,
                duration_s: spec.duration_s,
                delay_s: spec.delay_s,
                loop_mode: spec.loop_mode,
                elapsed_s: 0.0,
                route,
            },
        );
        Ok(())
    }

    /// Steps every in-flight transition by `delta_seconds` and writes the
    /// interpolated values into `scene`. Returns whether any transitions
    /// remain in flight.
    pub fn advance(&mut self, delta_seconds: f64, scene: &mut Scene) -> StoryResult<bool> {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return Err(StoryError::InvalidData(format!(
                "advance delta must be finite and >= 0, got {delta_seconds}"
            )));
        }
        if self.flights.is_empty() {
            return Ok(false);
        }

        let mut finished: SmallVec<[(ElementId, Channel); 4]> = SmallVec::new();

        for (key, flight) in &mut self.flights {
            flight.elapsed_s += delta_seconds;
            let local = flight.elapsed_s - flight.delay_s;
            if local < 0.0 {
                continue;
            }

            let raw = if flight.duration_s <= 0.0 {
                1.0
            } else {
                (local / flight.duration_s).min(1.0)
            };
            let eased = flight.easing.apply(raw);

            let (element, channel) = *key;
            match &flight.route {
                Route::Scalar { from, to } => {
                    scene.set_scalar(element, channel, from + (to - from) * eased)?;
                }
                Route::Color { from, to } => {
                    scene.set_color(element, channel, from.lerp(*to, eased))?;
                }
                Route::Points { from, to } => {
                    let blended: Vec<PointPx> = from
                        .iter()
                        .zip(to)
                        .map(|(a, b)| a.lerp(*b, eased))
                        .collect();
                    scene.set_points(element, blended)?;
                }
            }

            if raw >= 1.0 {
                match flight.loop_mode {
                    LoopMode::Once => finished.push(*key),
                    LoopMode::PingPong => {
                        flight.route.reverse();
                        // Carry the overshoot into the next leg so the bounce
                        // keeps a steady period. The delay only applies once.
                        flight.elapsed_s = flight.delay_s + (local - flight.duration_s);
                    }
                }
            }
        }

        for key in finished {
            self.flights.shift_remove(&key);
        }
        Ok(!self.flights.is_empty())
    }

    /// Drops the in-flight transition on one channel, leaving the scene
    /// at whatever value was last written.
    pub fn cancel(&mut self, element: ElementId, channel: Channel) -> bool {
        self.flights.shift_remove(&(element, channel)).is_some()
    }

    /// Drops every in-flight transition touching `element`.
    pub fn cancel_element(&mut self, element: ElementId) -> usize {
        let before = self.flights.len();
        self.flights.retain(|(id, _), _| *id != element);
        before - self.flights.len()
    }

    pub fn clear(&mut self) {
        self.flights.clear();
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.flights.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.flights.is_empty()
    }

    #[must_use]
    pub fn is_animating(&self, element: ElementId, channel: Channel) -> bool {
        self.flights.contains_key(&(element, channel))
    }
}
