//! Draw command for immediate-mode 2D rendering

use crate::sim::{Rect, Rgb};

/// A solid rectangle in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillRect {
    pub rect: Rect,
    pub colour: Rgb,
}

impl FillRect {
    pub const fn new(rect: Rect, colour: Rgb) -> Self {
        Self { rect, colour }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::sim::Rgb;

    pub const ASPHALT: Rgb = Rgb::new(76, 72, 72);
    pub const ROAD_MARKING: Rgb = Rgb::WHITE;
    pub const SIDEBAR: Rgb = Rgb::new(238, 238, 238);
    pub const SIDEBAR_TEXT: Rgb = Rgb::new(20, 20, 20);
    pub const BUTTON_FACE: Rgb = Rgb::new(200, 210, 225);
    pub const BUTTON_EDGE: Rgb = Rgb::new(120, 130, 150);
}
