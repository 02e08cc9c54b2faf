//! Windowless run: the traffic plays out against a parked player

use crate::config::GameConfig;
use crate::sim::{Game, TrafficEvent};

/// Outcome of a headless session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub ticks: u32,
    pub dodged: u32,
    pub crashes: u32,
    pub score: u32,
    pub best_score: u32,
}

/// Simulate `config.headless_ticks` ticks with no input
pub fn run_headless(config: &GameConfig, seed: u64) -> HeadlessReport {
    let mut game = Game::new(config, seed);
    let mut dodged = 0;

    for _ in 0..config.headless_ticks {
        for event in game.tick() {
            if let TrafficEvent::Dodged { .. } = event {
                dodged += 1;
            }
        }
    }

    let status = game.status();
    log::info!(
        "Headless run finished after {} ticks: {}",
        config.headless_ticks,
        status.summary()
    );
    HeadlessReport {
        ticks: config.headless_ticks,
        dodged,
        crashes: game.crashes(),
        score: game.score(),
        best_score: status.best_score(),
    }
}
