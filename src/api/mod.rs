//! Public embedding surface: configuration plus the scroll-driven
//! engine.

mod config;
mod engine;
mod frame_builder;
mod setup;
mod steps;

pub use config::StoryConfig;
pub use engine::StoryEngine;
