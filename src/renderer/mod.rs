//! Immediate-mode rendering
//!
//! Everything on screen is a solid rectangle. The scene is built as a plain
//! draw list so any 2D canvas can present it.

pub mod fill;
pub mod scene;
pub mod seven_segment;
pub mod shapes;

pub use fill::{FillRect, colors};
pub use seven_segment::SevenSegmentDisplay;
