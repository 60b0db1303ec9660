//! Frame loop
//!
//! One iteration per presented frame: drain input, tick the simulation,
//! draw. Runs until the surface closes.

use std::time::Instant;

use rand::Rng;

use crate::config::{GameConfig, Palette};
use crate::platform::{Key, RenderSurface, SurfaceEvent};
use crate::renderer::draw_scene;
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Wall-clock time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or construction)
    pub fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Collapse a frame's key presses into tick commands, in arrival order.
///
/// R only counts during game over and puts the run back into play, so a
/// Space after it jumps on the fresh run while a Space before it is dropped.
pub fn input_from_events(events: &[SurfaceEvent], phase: GamePhase) -> TickInput {
    let mut input = TickInput::default();
    let mut playing = phase == GamePhase::Playing;
    for event in events {
        match event {
            SurfaceEvent::KeyPressed(Key::Space) if playing => input.jump = true,
            SurfaceEvent::KeyPressed(Key::R) if !playing => {
                input.restart = true;
                playing = true;
            }
            _ => {}
        }
    }
    input
}

/// Run one frame. Returns false once the surface has closed.
pub fn step<S, R>(
    state: &mut GameState,
    surface: &mut S,
    palette: &Palette,
    dt: f32,
    rng: &mut R,
) -> bool
where
    S: RenderSurface + ?Sized,
    R: Rng,
{
    let events = surface.poll_events();
    if events.contains(&SurfaceEvent::Closed) {
        surface.close();
        return false;
    }

    let input = input_from_events(&events, state.phase);
    if input != TickInput::default() {
        log::trace!("Input: {:?}", input);
    }

    tick(state, &input, dt, rng);
    draw_scene(state, palette, surface);

    surface.is_open()
}

/// Play until the surface closes. Returns the final game state.
pub fn run<S, R>(surface: &mut S, config: &GameConfig, rng: &mut R) -> GameState
where
    S: RenderSurface + ?Sized,
    R: Rng,
{
    surface.set_frame_rate_cap(config.display.frame_rate_cap);
    log::debug!("Frame rate cap: {} fps", config.display.frame_rate_cap);

    let mut state = GameState::new(config.world, rng);
    let mut clock = FrameClock::new();

    log::info!("Starting game loop");
    while surface.is_open() {
        let dt = clock.restart();
        if !step(&mut state, surface, &config.display.palette, dt, rng) {
            break;
        }
    }
    log::info!(
        "Shutting down after {} ticks ({} obstacles passed)",
        state.time_ticks,
        state.obstacles_passed
    );

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessSurface;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn press(key: Key) -> Vec<SurfaceEvent> {
        vec![SurfaceEvent::KeyPressed(key)]
    }

    #[test]
    fn test_input_mapping() {
        use GamePhase::{GameOver, Playing};
        let space = SurfaceEvent::KeyPressed(Key::Space);
        let r = SurfaceEvent::KeyPressed(Key::R);
        let jump = TickInput {
            jump: true,
            restart: false,
        };
        let restart = TickInput {
            jump: false,
            restart: true,
        };

        assert_eq!(input_from_events(&[], Playing), TickInput::default());
        assert_eq!(
            input_from_events(&[SurfaceEvent::KeyPressed(Key::Other), space], Playing),
            jump
        );
        assert_eq!(input_from_events(&[r], Playing), TickInput::default());
        assert_eq!(input_from_events(&[space], GameOver), TickInput::default());
        assert_eq!(input_from_events(&[r], GameOver), restart);
    }

    #[test]
    fn test_key_order_around_restart() {
        let space = SurfaceEvent::KeyPressed(Key::Space);
        let r = SurfaceEvent::KeyPressed(Key::R);

        assert_eq!(
            input_from_events(&[r, space], GamePhase::GameOver),
            TickInput {
                jump: true,
                restart: true
            }
        );
        assert_eq!(
            input_from_events(&[space, r], GamePhase::GameOver),
            TickInput {
                jump: false,
                restart: true
            }
        );
    }

    #[test]
    fn test_frame_clock_is_monotonic() {
        let mut clock = FrameClock::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(clock.restart() > 0.0);
        assert!(clock.restart() >= 0.0);
    }

    #[test]
    fn test_run_until_closed() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut surface = HeadlessSurface::new().close_after(5);

        let state = run(&mut surface, &config, &mut rng);

        assert_eq!(surface.frame_rate_cap(), Some(config.display.frame_rate_cap));
        assert_eq!(surface.frames().len(), 5);
        assert_eq!(state.time_ticks, 5);
        assert!(
            surface
                .frames()
                .iter()
                .all(|f| f.clear == config.display.palette.background)
        );
    }

    #[test]
    fn test_close_abandons_frame() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut surface = HeadlessSurface::new().with_script([
            vec![],
            vec![],
            vec![SurfaceEvent::KeyPressed(Key::Space), SurfaceEvent::Closed],
            vec![],
        ]);

        let state = run(&mut surface, &config, &mut rng);

        assert!(!surface.is_open());
        assert_eq!(surface.frames().len(), 2);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_space_jumps() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(config.world, &mut rng);
        let mut surface = HeadlessSurface::new().with_script([press(Key::Space)]);

        assert!(step(&mut state, &mut surface, &config.display.palette, 0.0, &mut rng));

        let world = config.world;
        assert_eq!(state.entity.velocity_y, world.jump_impulse + world.gravity);
        let frame = surface.last_frame().unwrap();
        assert_eq!(frame.rects[0].position, state.entity.pos);
    }

    #[test]
    fn test_restart_key_after_game_over() {
        let config = GameConfig::default();
        let palette = config.display.palette;
        let mut rng = Pcg32::seed_from_u64(4);
        let mut state = GameState::new(config.world, &mut rng);
        let mut surface = HeadlessSurface::new().with_script([
            vec![],
            vec![],
            press(Key::Space),
            vec![SurfaceEvent::KeyPressed(Key::R), SurfaceEvent::KeyPressed(Key::Space)],
        ]);

        // Out of the window on the first tick
        state.entity.pos.y = -100.0;
        step(&mut state, &mut surface, &palette, 0.0, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        let frozen = state.entity.clone();

        // Frozen frames are still drawn
        step(&mut state, &mut surface, &palette, 0.0, &mut rng);
        step(&mut state, &mut surface, &palette, 0.0, &mut rng);
        assert_eq!(state.entity, frozen);
        assert_eq!(surface.frames().len(), 3);

        // R then Space: the fresh run is simulated and jumps on this frame
        step(&mut state, &mut surface, &palette, 0.0, &mut rng);
        let world = config.world;
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.entity.velocity_y, world.jump_impulse + world.gravity);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(
            state.obstacles.front().map(|o| o.x),
            Some(world.window_width - world.obstacle_speed)
        );

        let frame = surface.last_frame().unwrap();
        assert_eq!(frame.rects.len(), 3);
        assert_eq!(frame.rects[0].position, state.entity.pos);
    }

    #[test]
    fn test_space_before_restart_is_dropped() {
        let config = GameConfig::default();
        let palette = config.display.palette;
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = GameState::new(config.world, &mut rng);
        let mut surface = HeadlessSurface::new().with_script([
            vec![],
            vec![SurfaceEvent::KeyPressed(Key::Space), SurfaceEvent::KeyPressed(Key::R)],
        ]);

        state.entity.pos.y = -100.0;
        step(&mut state, &mut surface, &palette, 0.0, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);

        step(&mut state, &mut surface, &palette, 0.0, &mut rng);
        let world = config.world;
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.entity.velocity_y, world.gravity);
        assert_eq!(state.entity.pos.y, world.entity_start.y + world.gravity);
    }
}
