//! Obstacle stream: spawn timing, scrolling and eviction
//!
//! Obstacles are kept in spawn order. All of them scroll at the same speed,
//! so they can never reorder: the front is always the leftmost, and it is the
//! only one that ever needs an off-screen check.

use std::collections::VecDeque;

use rand::Rng;

use super::state::Obstacle;
use crate::config::WorldConfig;

/// Seconds accumulated since the last spawn
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnTimer {
    pub elapsed: f32,
}

impl SpawnTimer {
    /// Add `dt` seconds. Returns true (and resets to exactly zero) once the
    /// total exceeds `threshold`.
    ///
    /// The overshoot is discarded rather than carried over, so at most one
    /// spawn fires per tick and the interval drifts slightly long under
    /// uneven frame times.
    pub fn accumulate(&mut self, dt: f32, threshold: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed > threshold {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Ordered obstacles, oldest (leftmost) first
#[derive(Debug, Clone, Default)]
pub struct ObstacleStream {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly spawned obstacle at the back
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push_back(obstacle);
    }

    /// Advance the spawn timer and append one obstacle at the right edge if due
    pub fn spawn_if_due<R: Rng>(
        &mut self,
        timer: &mut SpawnTimer,
        dt: f32,
        world: &WorldConfig,
        rng: &mut R,
    ) -> bool {
        if !timer.accumulate(dt, world.spawn_interval) {
            return false;
        }

        let obstacle = world.spawn_obstacle(rng);
        log::debug!(
            "Spawned obstacle at x={} gap_top={} ({} live)",
            obstacle.x,
            obstacle.gap_top,
            self.obstacles.len() + 1
        );
        self.push(obstacle);
        true
    }

    /// Scroll every obstacle left by `speed`
    pub fn advance_all(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed);
        }
    }

    /// Remove the front obstacle if, and only if, it is off-screen
    pub fn evict_off_screen(&mut self) -> Option<Obstacle> {
        if self.obstacles.front().is_some_and(Obstacle::is_off_screen) {
            self.obstacles.pop_front()
        } else {
            None
        }
    }

    /// Flag obstacles whose right edge is now left of `entity_x`.
    /// Returns how many were newly cleared.
    pub fn mark_passed(&mut self, entity_x: f32) -> u32 {
        let mut newly_passed = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.right() < entity_x {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl<'a> IntoIterator for &'a ObstacleStream {
    type Item = &'a Obstacle;
    type IntoIter = std::collections::vec_deque::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}
