//! Scrolling lane dividers that make the road look like it is moving

use super::geometry::Rect;
use super::timer::ActionTimer;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct AnimatedRoad {
    lanes: usize,
    /// Vertical shift of the dash pattern, always below one pattern period
    offset: i32,
    offset_timer: ActionTimer,
}

impl AnimatedRoad {
    /// Dash pattern period, in pixels
    pub const PATTERN_PERIOD: i32 = ROAD_SEGMENT_LENGTH * 2 - 1;

    pub fn new(lanes: usize) -> Self {
        Self {
            lanes,
            offset: 0,
            offset_timer: ActionTimer::new(ROAD_STEP_MS),
        }
    }

    pub fn update(&mut self, dt_ms: u32) {
        self.offset_timer.update(dt_ms);
        if self.offset_timer.is_triggered() {
            self.offset = (self.offset + ROAD_MOVE_SPEED) % Self::PATTERN_PERIOD;
            self.offset_timer.reset();
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Divider dashes between neighbouring lanes
    pub fn dashes(&self) -> Vec<Rect> {
        if self.lanes < 2 {
            return Vec::new();
        }
        let lane_width = PANEL_WIDTH / self.lanes as i32;
        let segments = PANEL_HEIGHT / ROAD_SEGMENT_LENGTH + 3;
        let rows: Vec<i32> = (-1..segments - 1).step_by(2).collect();

        let mut dashes = Vec::with_capacity((self.lanes - 1) * rows.len());
        for column in 1..self.lanes as i32 {
            for &row in &rows {
                dashes.push(Rect::new(
                    column * lane_width,
                    row * ROAD_SEGMENT_LENGTH + self.offset,
                    ROAD_DASH_WIDTH,
                    ROAD_SEGMENT_LENGTH,
                ));
            }
        }
        dashes
    }
}
