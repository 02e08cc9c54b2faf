//! Game setup: lane counts, tick rate and RNG seed
//!
//! Read from an optional JSON file; any field left out keeps its default.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of lanes (one enemy car each)
    pub lanes: usize,
    /// Lanes allowed to have a moving car at once
    pub max_active_lanes: usize,
    /// Simulation step in milliseconds
    pub tick_interval_ms: u32,
    /// Traffic seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Ticks to simulate when running without a window
    pub headless_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lanes: NUMBER_OF_LANES,
            max_active_lanes: MAX_ACTIVE_LANES,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
            headless_ticks: 3000,
        }
    }
}

/// Why a configuration could not be used
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read config: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config: {}", e),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, or fall back to defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let config = Self::from_json(&json)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes == 0 {
            return Err(ConfigError::Invalid("lanes must be at least 1".into()));
        }
        if self.lanes > PANEL_WIDTH as usize {
            return Err(ConfigError::Invalid(format!(
                "lanes must be at most {}",
                PANEL_WIDTH
            )));
        }
        if self.max_active_lanes > self.lanes {
            return Err(ConfigError::Invalid(format!(
                "max_active_lanes ({}) exceeds lanes ({})",
                self.max_active_lanes, self.lanes
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        Ok(())
    }

    /// Configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::random::<u64>())
    }
}
