//! scrolly-rs: scroll-driven data presentation engine.
//!
//! This crate turns a scroll offset into a choreographed sequence of chart
//! scenes: a retained element tree, a transition scheduler, and a step
//! storyboard sit behind one engine that hosts drive frame by frame.

pub mod anim;
pub mod api;
pub mod charts;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod scene;
pub mod story;
pub mod telemetry;
pub mod treemap;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{StoryConfig, StoryEngine};
pub use error::{StoryError, StoryResult};
