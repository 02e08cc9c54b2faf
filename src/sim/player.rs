//! The player's police car
//!
//! Follows the pointer horizontally while dragged and flashes its roof lights.

use super::car::Car;
use super::geometry::{Position, Rect};
use super::paint::Rgb;
use super::timer::ActionTimer;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct PlayerCar {
    pub car: Car,
    /// While true the car tracks the pointer
    moving: bool,
    /// Left light is blue while set, red otherwise
    flash_blue: bool,
    animation_timer: ActionTimer,
}

impl Default for PlayerCar {
    fn default() -> Self {
        Self::new(Self::start_position())
    }
}

impl PlayerCar {
    pub fn new(start: Position) -> Self {
        Self {
            car: Car::new(start, Rgb::BLACK, Rgb::WHITE),
            moving: false,
            flash_blue: true,
            animation_timer: ActionTimer::new(FLASH_PERIOD_MS),
        }
    }

    /// Bottom-centre spawn used by the game
    pub fn start_position() -> Position {
        Position::new(PANEL_WIDTH / 2, PANEL_HEIGHT - CAR_HEIGHT - 50)
    }

    /// Advance the light animation
    pub fn update(&mut self, dt_ms: u32) {
        self.animation_timer.update(dt_ms);
        if self.animation_timer.is_triggered() {
            self.flash_blue = !self.flash_blue;
            self.animation_timer.reset();
        }
    }

    /// Centre the car on the pointer's x, kept inside the play field.
    /// Dragging too far above or below the car lets go of it.
    pub fn update_position(&mut self, pointer: Position) {
        let width = self.car.body.width;
        self.car.body.pos.x = (pointer.x - width / 2).clamp(0, PANEL_WIDTH - width);
        if (pointer.y - self.car.body.pos.y).abs() > DRAG_DETACH_DISTANCE {
            self.moving = false;
        }
    }

    pub fn reset(&mut self) {
        self.car.reset();
        self.moving = false;
    }

    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn flash_blue(&self) -> bool {
        self.flash_blue
    }

    pub fn rect(&self) -> &Rect {
        &self.car.body
    }

    /// Roof lights as (rect, colour), left then right
    pub fn lights(&self) -> [(Rect, Rgb); 2] {
        let Rect { pos, width, height } = self.car.body;
        let size = (width * 4 / 7) / 2;
        let light_height = height / 7;
        let y = pos.y + height / 2 - light_height;
        let (left, right) = if self.flash_blue {
            (Rgb::BLUE, Rgb::RED)
        } else {
            (Rgb::RED, Rgb::BLUE)
        };
        [
            (Rect::new(pos.x + width / 2 - size - 1, y, size, light_height), left),
            (Rect::new(pos.x + width / 2 - 1, y, size, light_height), right),
        ]
    }
}
