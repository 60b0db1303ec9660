//! Game state and core simulation types

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::stream::{ObstacleStream, SpawnTimer};
use crate::config::WorldConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; world frozen until restart
    GameOver,
}

/// The player-controlled falling body
///
/// Only moves vertically: `pos.x` never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity in units/tick (positive = downward)
    pub velocity_y: f32,
    pub size: Vec2,
    start: Vec2,
}

impl Entity {
    pub fn new(start: Vec2, size: Vec2) -> Self {
        Self {
            pos: start,
            velocity_y: 0.0,
            size,
            start,
        }
    }

    /// Apply one tick of gravity. No clamping: leaving the window is
    /// detected by the collision check, not prevented here.
    pub fn integrate(&mut self, gravity: f32) {
        self.velocity_y += gravity;
        self.pos.y += self.velocity_y;
    }

    /// Overwrite vertical velocity with the jump impulse
    pub fn impulse(&mut self, jump_impulse: f32) {
        self.velocity_y = jump_impulse;
    }

    /// Back to the start position at rest
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.velocity_y = 0.0;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }
}

/// A pipe-style obstacle: an upper and a lower block with a gap between
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Height of the upper block (gap starts here)
    pub gap_top: f32,
    pub gap_size: f32,
    pub width: f32,
    /// Full height both blocks span (window height)
    pub height: f32,
    /// Whether the entity has cleared this obstacle
    pub passed: bool,
}

impl Obstacle {
    /// Create an obstacle at `start_x` with a uniformly random gap placement.
    ///
    /// The upper block height is drawn from `[0, window_height - gap_size]`
    /// in whole units, so whole-unit dimensions keep the height invariant exact.
    /// A fractional range is floored; `GameConfig::validate` rejects those.
    pub fn spawn<R: Rng>(
        start_x: f32,
        window_height: f32,
        gap_size: f32,
        width: f32,
        rng: &mut R,
    ) -> Self {
        let max_top = (window_height - gap_size).max(0.0).floor() as u32;
        let gap_top = rng.random_range(0..=max_top) as f32;

        Self {
            x: start_x,
            gap_top,
            gap_size,
            width,
            height: window_height,
            passed: false,
        }
    }

    /// Top edge of the lower block
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_size
    }

    /// Height of the lower block
    #[inline]
    pub fn lower_height(&self) -> f32 {
        self.height - self.gap_bottom()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Scroll left by `speed`
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// True once the right edge has passed the left edge of the window
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn upper_block(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    pub fn lower_block(&self) -> Rect {
        Rect::new(self.x, self.gap_bottom(), self.width, self.lower_height())
    }

    pub fn blocks(&self) -> [Rect; 2] {
        [self.upper_block(), self.lower_block()]
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Immutable tuning for this run
    pub world: WorldConfig,
    /// Current phase
    pub phase: GamePhase,
    pub entity: Entity,
    /// Live obstacles, oldest first
    pub obstacles: ObstacleStream,
    /// Seconds since the last spawn
    pub spawn_timer: SpawnTimer,
    /// Playing ticks simulated in the current run
    pub time_ticks: u64,
    /// Obstacles cleared in the current run
    pub obstacles_passed: u32,
}

impl GameState {
    /// Create a new run with one obstacle waiting at the right edge
    pub fn new<R: Rng>(world: WorldConfig, rng: &mut R) -> Self {
        let mut state = Self {
            world,
            phase: GamePhase::Playing,
            entity: Entity::new(world.entity_start, world.entity_size),
            obstacles: ObstacleStream::new(),
            spawn_timer: SpawnTimer::default(),
            time_ticks: 0,
            obstacles_passed: 0,
        };

        state.seed_obstacle(rng);

        state
    }

    /// Spawn an obstacle at the right edge of the window
    pub fn seed_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let obstacle = self.world.spawn_obstacle(rng);
        self.obstacles.push(obstacle);
    }
}

impl WorldConfig {
    /// Spawn an obstacle at the right edge using this world's dimensions
    pub fn spawn_obstacle<R: Rng>(&self, rng: &mut R) -> Obstacle {
        Obstacle::spawn(
            self.window_width,
            self.window_height,
            self.gap_size,
            self.obstacle_width,
            rng,
        )
    }
}
