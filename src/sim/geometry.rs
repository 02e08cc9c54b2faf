//! Integer geometry for cars and pointer hit tests

use glam::IVec2;

/// A point on the play field (pixels, y grows downward)
pub type Position = IVec2;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: Position,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            width,
            height,
        }
    }

    pub fn at(pos: Position, width: i32, height: i32) -> Self {
        Self { pos, width, height }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.height
    }

    /// True when the two rectangles share a non-empty area.
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment, inclusive on the top/left edge and exclusive on the bottom/right
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }

    /// Same rectangle shifted by `delta`
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            pos: self.pos + delta,
            ..*self
        }
    }
}
