//! Frame geometry assembly
//!
//! Builds the vertex list for one frame from the field state: a filled disc
//! per particle, then the proximity links over them. Positions stay in
//! surface pixels; the pipeline converts to NDC at upload time.

use super::shapes;
use super::vertex::{colors, Vertex};
use crate::field::{proximity_links, FieldState};

/// Triangle-fan resolution for particle discs.
pub const DISC_SEGMENTS: u32 = 16;
/// Link line thickness in pixels.
pub const LINK_WIDTH: f32 = 0.5;

/// Build the vertex list for the current field state.
pub fn build_frame(state: &FieldState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(state.particles.len() * (DISC_SEGMENTS as usize) * 3);

    for p in &state.particles {
        vertices.extend(shapes::circle(
            p.pos,
            p.radius,
            colors::PARTICLE,
            DISC_SEGMENTS,
        ));
    }

    for link in proximity_links(state) {
        let mut color = colors::LINK;
        color[3] = link.opacity;
        vertices.extend(shapes::line_segment(link.a, link.b, LINK_WIDTH, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldOptions, Particle};
    use glam::Vec2;

    fn state_with(particles: Vec<Particle>) -> FieldState {
        let options = FieldOptions {
            particle_count: particles.len(),
            ..Default::default()
        };
        let mut state = FieldState::new(800.0, 600.0, options, 3);
        state.particles = particles;
        state
    }

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::new(0.1, -0.1),
            radius: 2.0,
        }
    }

    #[test]
    fn test_frame_has_discs_and_link() {
        let state = state_with(vec![particle_at(100.0, 100.0), particle_at(150.0, 100.0)]);

        let verts = build_frame(&state);
        let disc_verts = 2 * DISC_SEGMENTS as usize * 3;
        assert_eq!(verts.len(), disc_verts + 6);

        // The link quad carries the distance-faded alpha.
        let expected = 1.0 - 50.0 / 150.0;
        for v in &verts[disc_verts..] {
            assert!((v.color[3] - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_distant_particles_have_no_link_geometry() {
        let state = state_with(vec![particle_at(0.0, 0.0), particle_at(700.0, 0.0)]);

        let verts = build_frame(&state);
        assert_eq!(verts.len(), 2 * DISC_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_disc_color_is_particle_palette() {
        let state = state_with(vec![particle_at(10.0, 10.0)]);
        let verts = build_frame(&state);
        assert_eq!(verts[0].color, colors::PARTICLE);
    }
}
