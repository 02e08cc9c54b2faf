//! Shared car body used by the player and enemy cars

use super::geometry::{Position, Rect};
use super::paint::Rgb;
use crate::consts::{CAR_HEIGHT, CAR_WIDTH};

/// A car footprint with its spawn point and two-tone paint
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub body: Rect,
    start: Position,
    /// Main body colour
    pub body_colour: Rgb,
    /// Window / detail colour
    pub detail_colour: Rgb,
}

impl Car {
    pub fn new(start: Position, body_colour: Rgb, detail_colour: Rgb) -> Self {
        Self {
            body: Rect::at(start, CAR_WIDTH, CAR_HEIGHT),
            start,
            body_colour,
            detail_colour,
        }
    }

    /// Move back to the spawn point
    pub fn reset(&mut self) {
        self.body.pos = self.start;
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.body.pos
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn is_intersecting(&self, other: &Rect) -> bool {
        self.body.intersects(other)
    }

    pub fn is_position_inside(&self, point: Position) -> bool {
        self.body.contains(point)
    }

    /// The two window strips drawn over the body
    pub fn windows(&self) -> [Rect; 2] {
        let Rect { pos, width, height } = self.body;
        let inset = width / 7;
        let strip_width = width * 5 / 7;
        let strip_height = height / 6;
        [
            Rect::new(pos.x + inset, pos.y + height / 5, strip_width, strip_height),
            Rect::new(pos.x + inset, pos.y + height * 3 / 5, strip_width, strip_height),
        ]
    }
}
