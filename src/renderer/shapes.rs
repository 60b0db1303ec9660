//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::platform::DrawRect;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Tessellate a draw command
pub fn draw_rect(cmd: &DrawRect) -> Vec<Vertex> {
    rect(cmd.position, cmd.size, cmd.color)
}
