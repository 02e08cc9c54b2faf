//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by lane)
//! - No rendering or platform dependencies

pub mod car;
pub mod enemy;
pub mod game;
pub mod geometry;
pub mod paint;
pub mod player;
pub mod road;
pub mod timer;
pub mod traffic;

pub use car::Car;
pub use enemy::{CarKind, EnemyCar};
pub use game::{Control, Game, InputEvent, Key};
pub use geometry::{Position, Rect};
pub use paint::Rgb;
pub use player::PlayerCar;
pub use road::AnimatedRoad;
pub use timer::ActionTimer;
pub use traffic::{EnemyCarManager, TrafficEvent};
