//! Car Dodger - A lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cars, lanes, collisions, game state)
//! - `renderer`: Immediate-mode rectangle scene building
//! - `platform`: Input events, fixed ticking, native window
//! - `status`: Score / best / crash sidebar state
//! - `config`: Data-driven game setup

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod status;

pub use config::{ConfigError, GameConfig};
pub use status::StatusBoard;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const PANEL_WIDTH: i32 = 500;
    pub const PANEL_HEIGHT: i32 = 500;
    /// Status sidebar width (sits to the right of the play field)
    pub const SIDEBAR_WIDTH: i32 = 260;
    pub const WINDOW_WIDTH: i32 = PANEL_WIDTH + SIDEBAR_WIDTH;
    pub const WINDOW_HEIGHT: i32 = PANEL_HEIGHT;

    /// Fixed simulation timestep in milliseconds (50 Hz)
    pub const TICK_INTERVAL_MS: u32 = 20;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Lane defaults
    pub const NUMBER_OF_LANES: usize = 14;
    pub const MAX_ACTIVE_LANES: usize = 10;

    /// Every car shares one footprint
    pub const CAR_WIDTH: i32 = 30;
    pub const CAR_HEIGHT: i32 = 60;

    /// Player drag detaches when the pointer strays this far vertically
    pub const DRAG_DETACH_DISTANCE: i32 = 100;
    /// Player light flash period (ms)
    pub const FLASH_PERIOD_MS: u32 = 80;

    /// Road animation
    pub const ROAD_STEP_MS: u32 = 40;
    pub const ROAD_SEGMENT_LENGTH: i32 = 10;
    pub const ROAD_MOVE_SPEED: i32 = 3;
    pub const ROAD_DASH_WIDTH: i32 = 3;
}
