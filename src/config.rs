//! Game configuration
//!
//! Every tuning value the simulation and the window need lives here, in an
//! immutable tree handed to constructors. Loaded once at startup from an
//! optional JSON file named by `GAP_RUNNER_CONFIG`; missing keys fall back
//! to the defaults in [`crate::consts`].

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "GAP_RUNNER_CONFIG";

/// Configuration load/validation failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulation tuning (world units, per-tick speeds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity after a jump (negative = up)
    pub jump_impulse: f32,
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub gap_size: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Top-left corner of the entity at start/restart
    pub entity_start: Vec2,
    pub entity_size: Vec2,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            spawn_interval: SPAWN_INTERVAL,
            entity_start: Vec2::new(ENTITY_START_X, ENTITY_START_Y),
            entity_size: Vec2::splat(ENTITY_SIZE),
        }
    }
}

/// Fill colors (linear RGBA)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [f32; 4],
    pub entity: [f32; 4],
    pub obstacle: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0.0, 1.0, 1.0, 1.0],
            entity: [1.0, 1.0, 0.0, 1.0],
            obstacle: [0.0, 1.0, 0.0, 1.0],
        }
    }
}

/// Window presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    /// Maximum frames per second (also the tick rate)
    pub frame_rate_cap: u32,
    pub palette: Palette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Flappy Bird Clone".to_string(),
            frame_rate_cap: FRAME_RATE_CAP,
            palette: Palette::default(),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
    pub world: WorldConfig,
    pub display: DisplayConfig,
}

impl GameConfig {
    /// Load from `GAP_RUNNER_CONFIG` if set, defaults otherwise
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let config = Self::from_path(Path::new(&path))?;
                log::info!("Loaded config from {}", Path::new(&path).display());
                Ok(config)
            }
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        let positive = [
            ("window_width", w.window_width),
            ("window_height", w.window_height),
            ("gravity", w.gravity),
            ("obstacle_speed", w.obstacle_speed),
            ("obstacle_width", w.obstacle_width),
            ("gap_size", w.gap_size),
            ("spawn_interval", w.spawn_interval),
            ("entity_size.x", w.entity_size.x),
            ("entity_size.y", w.entity_size.y),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if w.gap_size > w.window_height {
            return Err(ConfigError::Invalid(format!(
                "gap_size {} exceeds window_height {}",
                w.gap_size, w.window_height
            )));
        }
        for (name, value) in [("window_height", w.window_height), ("gap_size", w.gap_size)] {
            if value.fract() != 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a whole number of units, got {value}"
                )));
            }
        }
        if !w.jump_impulse.is_finite() || w.jump_impulse >= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "jump_impulse must be negative (upward), got {}",
                w.jump_impulse
            )));
        }

        let start = w.entity_start;
        let fits_x = start.x >= 0.0 && start.x + w.entity_size.x <= w.window_width;
        let fits_y = start.y >= 0.0 && start.y + w.entity_size.y <= w.window_height;
        if !start.is_finite() || !fits_x || !fits_y {
            return Err(ConfigError::Invalid(format!(
                "entity_start {start} places the entity outside the window"
            )));
        }

        if self.display.frame_rate_cap == 0 {
            return Err(ConfigError::Invalid("frame_rate_cap must be at least 1".into()));
        }

        Ok(())
    }
}
