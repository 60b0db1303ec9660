//! Collision and bounds detection
//!
//! Pure checks over entity and obstacle bounds. Obstacle counts are small
//! (bounded by window width / scroll speed), so every obstacle is tested
//! each tick with no spatial indexing.

use super::rect::Rect;
use super::state::{Entity, Obstacle};

/// True if the entity has left the vertical play area
pub fn out_of_bounds(bounds: &Rect, window_height: f32) -> bool {
    bounds.top() < 0.0 || bounds.bottom() > window_height
}

/// True if the entity overlaps either block of the obstacle
pub fn hits_obstacle(bounds: &Rect, obstacle: &Obstacle) -> bool {
    obstacle
        .blocks()
        .iter()
        .any(|block| bounds.intersects(block))
}

/// Loss check: out of vertical bounds, or touching any obstacle block.
///
/// Short-circuits on the first hit.
pub fn check<'a, I>(entity: &Entity, obstacles: I, window_height: f32) -> bool
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    let bounds = entity.bounds();

    out_of_bounds(&bounds, window_height)
        || obstacles
            .into_iter()
            .any(|obstacle| hits_obstacle(&bounds, obstacle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const HEIGHT: f32 = 1080.0;
    const NO_OBSTACLES: [Obstacle; 0] = [];

    fn entity_at(x: f32, y: f32) -> Entity {
        Entity::new(Vec2::new(x, y), Vec2::splat(40.0))
    }

    fn obstacle(x: f32, gap_top: f32) -> Obstacle {
        Obstacle {
            x,
            gap_top,
            gap_size: 300.0,
            width: 80.0,
            height: HEIGHT,
            passed: false,
        }
    }

    #[test]
    fn test_inside_window_no_obstacles() {
        let e = entity_at(100.0, 540.0);
        assert!(!check(&e, &NO_OBSTACLES, HEIGHT));
    }

    #[test]
    fn test_above_window_always_collides() {
        let e = entity_at(100.0, -5.0);
        assert!(check(&e, &NO_OBSTACLES, HEIGHT));
        assert!(check(&e, &[obstacle(1000.0, 400.0)], HEIGHT));
    }

    #[test]
    fn test_below_window_collides() {
        let e = entity_at(100.0, HEIGHT - 39.0);
        assert!(check(&e, &NO_OBSTACLES, HEIGHT));

        let e = entity_at(100.0, HEIGHT - 40.0);
        assert!(!check(&e, &NO_OBSTACLES, HEIGHT));
    }

    #[test]
    fn test_passing_through_gap() {
        // Gap spans 400..700, entity spans 500..540
        let e = entity_at(100.0, 500.0);
        assert!(!check(&e, &[obstacle(90.0, 400.0)], HEIGHT));
    }

    #[test]
    fn test_hits_upper_block() {
        let e = entity_at(100.0, 380.0);
        assert!(check(&e, &[obstacle(90.0, 400.0)], HEIGHT));
    }

    #[test]
    fn test_hits_lower_block() {
        let e = entity_at(100.0, 680.0);
        assert!(check(&e, &[obstacle(90.0, 400.0)], HEIGHT));
    }

    #[test]
    fn test_horizontally_clear_of_obstacle() {
        // Vertically inside the upper block's band but obstacle is far right
        let e = entity_at(100.0, 100.0);
        assert!(!check(&e, &[obstacle(500.0, 400.0)], HEIGHT));
    }

    #[test]
    fn test_checks_every_obstacle() {
        let e = entity_at(100.0, 100.0);
        let obstacles = [obstacle(900.0, 400.0), obstacle(120.0, 400.0)];
        assert!(check(&e, &obstacles, HEIGHT));
    }

    proptest! {
        #[test]
        fn prop_check_matches_model(
            ey in -100.0f32..1200.0,
            ox in -100.0f32..300.0,
            gap_top in 0.0f32..780.0,
        ) {
            let e = entity_at(100.0, ey);
            let o = obstacle(ox, gap_top);

            let (el, er, et, eb) = (100.0f32, 140.0f32, ey, ey + 40.0);
            let overlaps = |l: f32, r: f32, t: f32, b: f32| {
                el.max(l) < er.min(r) && et.max(t) < eb.min(b)
            };
            let expected = et < 0.0
                || eb > HEIGHT
                || overlaps(ox, ox + 80.0, 0.0, gap_top)
                || overlaps(ox, ox + 80.0, gap_top + 300.0, HEIGHT);

            prop_assert_eq!(check(&e, [&o], HEIGHT), expected);
        }
    }
}
