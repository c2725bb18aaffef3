//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a straight line segment drawn as a thin quad
pub fn line_segment(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a1 = a + perp;
    let a2 = a - perp;
    let b1 = b + perp;
    let b2 = b - perp;

    // Two triangles
    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::new(10.0, 10.0), 2.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 16 * 3);
    }

    #[test]
    fn test_circle_edge_vertices_on_radius() {
        let center = Vec2::new(5.0, -3.0);
        let verts = circle(center, 4.0, [1.0; 4], 12);
        for chunk in verts.chunks(3) {
            let edge = Vec2::new(chunk[1].position[0], chunk[1].position[1]);
            assert!((edge.distance(center) - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_line_segment_quad() {
        let verts = line_segment(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0.5, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        // Horizontal segment of width 0.5: corners sit 0.25 off the axis.
        for v in &verts {
            assert!((v.position[1].abs() - 0.25).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_line_segment_is_empty() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line_segment(p, p, 0.5, [1.0; 4]).is_empty());
    }
}
