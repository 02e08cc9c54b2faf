//! Platform abstraction layer
//!
//! Handles native differences for:
//! - Time/ticks (fixed-step accumulator)
//! - Input events (translated into `sim::InputEvent`)
//! - Window and canvas (SDL2, behind the `sdl` feature)
//! - Headless runs when no window is available

pub mod headless;
#[cfg(feature = "sdl")]
pub mod sdl;
pub mod time;

pub use headless::{HeadlessReport, run_headless};
pub use time::FixedTicker;
