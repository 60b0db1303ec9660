//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Motion expressed per tick (one tick = one frame)
//! - Randomness only through an injected RNG
//! - Obstacles kept in spawn order

pub mod collision;
pub mod rect;
pub mod state;
pub mod stream;
pub mod tick;

pub use collision::{check, hits_obstacle, out_of_bounds};
pub use rect::Rect;
pub use state::{Entity, GamePhase, GameState, Obstacle};
pub use stream::{ObstacleStream, SpawnTimer};
pub use tick::{TickInput, restart, tick};
