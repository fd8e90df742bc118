//! Scroll-driven choreography: the step contract, the storyboard that
//! replays skipped steps, and the scroll-to-step tracker.

mod board;
mod handler;
mod tracker;

pub use board::{Storyboard, StoryboardBuilder};
pub use handler::{ChartScales, StageContext, StepHandler, StepStyle};
pub use tracker::{ScrollTracker, StepEvent};
