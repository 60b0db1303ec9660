//! Gap Runner - A side-scrolling gap-threading arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `config`: Data-driven game tuning and display settings
//! - `platform`: Render surface abstraction (native window, headless)
//! - `renderer`: WebGPU rendering pipeline
//! - `app`: Cooperative frame loop tying it all together

pub mod app;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, DisplayConfig, GameConfig, Palette, WorldConfig};

/// Default tuning values (one tick = one rendered frame at the frame cap)
pub mod consts {
    /// Visible area dimensions
    pub const WINDOW_WIDTH: f32 = 1920.0;
    pub const WINDOW_HEIGHT: f32 = 1080.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Jump velocity override (negative = up, units/tick)
    pub const JUMP_IMPULSE: f32 = -11.5;

    /// Obstacle scroll speed (units/tick)
    pub const OBSTACLE_SPEED: f32 = 4.0;
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Vertical opening between the upper and lower block
    pub const GAP_SIZE: f32 = 300.0;
    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 1.5;

    /// Entity defaults - fixed column, vertically centered
    pub const ENTITY_START_X: f32 = 100.0;
    pub const ENTITY_START_Y: f32 = WINDOW_HEIGHT / 2.0;
    pub const ENTITY_SIZE: f32 = 40.0;

    /// Frame cap (frames per second)
    pub const FRAME_RATE_CAP: u32 = 60;
}
