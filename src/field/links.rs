//! Proximity links between particle pairs
//!
//! Every unordered pair closer than the link radius gets a line whose opacity
//! fades linearly with distance. The scan is the plain O(n²) pass; at the
//! default particle count that is 1770 pairs per frame.

use glam::Vec2;

use super::state::FieldState;

/// A line to draw between two particles this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    /// 1 when the particles touch, fading to 0 at the link radius.
    pub opacity: f32,
}

/// Collect the links for the current particle positions.
pub fn proximity_links(state: &FieldState) -> Vec<Link> {
    let radius = state.options.link_radius;
    let mut links = Vec::new();
    for i in 0..state.particles.len() {
        for j in (i + 1)..state.particles.len() {
            let a = state.particles[i].pos;
            let b = state.particles[j].pos;
            let distance = a.distance(b);
            if distance < radius {
                links.push(Link {
                    a,
                    b,
                    opacity: 1.0 - distance / radius,
                });
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::options::FieldOptions;
    use crate::field::state::Particle;

    fn state_with(particles: Vec<Particle>) -> FieldState {
        let options = FieldOptions {
            particle_count: particles.len(),
            ..Default::default()
        };
        let mut state = FieldState::new(800.0, 600.0, options, 7);
        state.particles = particles;
        state
    }

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::new(0.1, 0.1),
            radius: 2.0,
        }
    }

    #[test]
    fn test_link_iff_within_radius() {
        let state = state_with(vec![
            particle_at(0.0, 0.0),
            particle_at(149.0, 0.0),
            particle_at(400.0, 0.0),
        ]);

        let links = proximity_links(&state);
        // Only the first pair is under the radius; 149 to 400 is 251 apart
        // and 0 to 400 is 400 apart.
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].a, Vec2::new(0.0, 0.0));
        assert_eq!(links[0].b, Vec2::new(149.0, 0.0));
    }

    #[test]
    fn test_opacity_fades_with_distance() {
        let state = state_with(vec![particle_at(100.0, 100.0), particle_at(175.0, 100.0)]);

        let links = proximity_links(&state);
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_distance_exactly_at_radius_is_no_link() {
        let state = state_with(vec![particle_at(0.0, 0.0), particle_at(150.0, 0.0)]);
        assert!(proximity_links(&state).is_empty());
    }

    #[test]
    fn test_coincident_particles_link_at_full_opacity() {
        let state = state_with(vec![particle_at(50.0, 50.0), particle_at(50.0, 50.0)]);

        let links = proximity_links(&state);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].opacity, 1.0);
    }

    #[test]
    fn test_pair_count_is_unordered() {
        // Three mutually close particles give exactly three links, one per
        // unordered pair.
        let state = state_with(vec![
            particle_at(0.0, 0.0),
            particle_at(10.0, 0.0),
            particle_at(0.0, 10.0),
        ]);
        assert_eq!(proximity_links(&state).len(), 3);
    }
}
