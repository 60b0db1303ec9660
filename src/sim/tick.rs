//! Per-frame simulation tick
//!
//! Core game loop step that advances the simulation by one frame.

use rand::Rng;

use super::collision;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
///
/// A restart is applied first, so a jump in the same input lands on the
/// fresh run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key pressed this frame (honored only while playing)
    pub jump: bool,
    /// Restart key pressed this frame (honored only after game over)
    pub restart: bool,
}

/// Advance the game state by one frame.
///
/// `dt` is the wall-clock time since the previous frame in seconds; it only
/// feeds the spawn timer. All motion is expressed per tick.
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut R) {
    if state.phase == GamePhase::GameOver {
        if !input.restart {
            return;
        }
        // The fresh run is simulated on this same tick
        restart(state, rng);
    }

    state.time_ticks += 1;

    if input.jump {
        state.entity.impulse(state.world.jump_impulse);
    }
    state.entity.integrate(state.world.gravity);

    state
        .obstacles
        .spawn_if_due(&mut state.spawn_timer, dt, &state.world, rng);
    state.obstacles.advance_all(state.world.obstacle_speed);
    if let Some(evicted) = state.obstacles.evict_off_screen() {
        log::debug!("Evicted obstacle at x={}", evicted.x);
    }

    state.obstacles_passed += state.obstacles.mark_passed(state.entity.pos.x);

    if collision::check(&state.entity, &state.obstacles, state.world.window_height) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: {} obstacles passed",
            state.time_ticks,
            state.obstacles_passed
        );
    }
}

/// Start a fresh run: entity back at start, one obstacle at the right edge
pub fn restart<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.entity.reset();
    state.obstacles.clear();
    state.seed_obstacle(rng);
    state.spawn_timer.reset();
    state.time_ticks = 0;
    state.obstacles_passed = 0;
    state.phase = GamePhase::Playing;
    log::info!("Restarted");
}
