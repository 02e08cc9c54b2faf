//! Car Dodger entry point
//!
//! Loads the config (optional JSON path as the first argument) and runs the
//! game in an SDL2 window, or headless when built without the `sdl` feature.

use std::path::PathBuf;
use std::process::ExitCode;

use car_dodger::GameConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Car Dodger starting...");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match GameConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let seed = config.resolve_seed();

    match run(&config, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "sdl")]
fn run(config: &GameConfig, seed: u64) -> Result<(), String> {
    car_dodger::platform::sdl::run(config, seed)
}

#[cfg(not(feature = "sdl"))]
fn run(config: &GameConfig, seed: u64) -> Result<(), String> {
    log::info!("Native window needs the `sdl` feature - running headless");
    let report = car_dodger::platform::run_headless(config, seed);
    println!(
        "{} ticks (seed {}): {} cars dodged, {} crashes, final score {}, best {}",
        report.ticks, seed, report.dodged, report.crashes, report.score, report.best_score
    );
    Ok(())
}
