//! Scene composition
//!
//! Turns a [`GameState`] into draw commands. Draw order: background, entity,
//! then every obstacle (upper block, lower block), oldest first.

use crate::config::Palette;
use crate::platform::{DrawRect, RenderSurface};
use crate::sim::{GameState, Rect};

fn filled(rect: Rect, color: [f32; 4]) -> DrawRect {
    DrawRect {
        position: rect.min,
        size: rect.size,
        color,
    }
}

/// Draw one complete frame of `state` and present it
pub fn draw_scene<S: RenderSurface + ?Sized>(state: &GameState, palette: &Palette, surface: &mut S) {
    surface.clear(palette.background);
    surface.draw(&filled(state.entity.bounds(), palette.entity));

    for obstacle in &state.obstacles {
        for block in obstacle.blocks() {
            surface.draw(&filled(block, palette.obstacle));
        }
    }

    surface.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::platform::HeadlessSurface;
    use crate::sim::{TickInput, tick};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_scene_draws_entity_then_obstacles() {
        let mut rng = Pcg32::seed_from_u64(11);
        let state = GameState::new(WorldConfig::default(), &mut rng);
        let palette = Palette::default();
        let mut surface = HeadlessSurface::new();

        draw_scene(&state, &palette, &mut surface);

        let frame = surface.last_frame().unwrap();
        assert_eq!(frame.clear, palette.background);
        assert_eq!(frame.rects.len(), 3);

        let entity = frame.rects[0];
        assert_eq!(entity.position, state.world.entity_start);
        assert_eq!(entity.size, state.world.entity_size);
        assert_eq!(entity.color, palette.entity);

        let obstacle = state.obstacles.front().unwrap();
        let upper = frame.rects[1];
        let lower = frame.rects[2];
        assert_eq!(upper.position, Vec2::new(obstacle.x, 0.0));
        assert_eq!(upper.size.y, obstacle.gap_top);
        assert_eq!(lower.position.y, obstacle.gap_bottom());
        assert_eq!(upper.size.y + obstacle.gap_size + lower.size.y, state.world.window_height);
        assert!(frame.rects[1..].iter().all(|r| r.color == palette.obstacle));
    }

    #[test]
    fn test_rect_count_tracks_obstacles() {
        let mut rng = Pcg32::seed_from_u64(12);
        let mut state = GameState::new(WorldConfig::default(), &mut rng);
        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), 0.2, &mut rng);
        }
        assert!(state.obstacles.len() > 1);

        let mut surface = HeadlessSurface::new();
        draw_scene(&state, &Palette::default(), &mut surface);

        let frame = surface.last_frame().unwrap();
        assert_eq!(frame.rects.len(), 1 + 2 * state.obstacles.len());
    }
}
