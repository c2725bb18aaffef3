//! Field state and particle entities
//!
//! A [`FieldState`] owns everything the backdrop simulates: the surface
//! bounds, the particle set, and the last reported pointer position. The
//! particle set is generated wholesale and regenerated on every resize; no
//! particle carries identity across a resize.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::options::FieldOptions;

/// A simulated point: position and velocity in surface units, plus the disc
/// radius it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Applied once per frame; there is no timestep scaling
    pub vel: Vec2,
    /// Fixed at creation
    pub radius: f32,
}

/// Complete simulation state for one particle field.
#[derive(Debug, Clone)]
pub struct FieldState {
    /// Surface width in surface units
    pub width: f32,
    /// Surface height in surface units
    pub height: f32,
    /// Tunables consumed by spawning, the tick, and the link pass
    pub options: FieldOptions,
    /// Live particles; regenerated from scratch on resize
    pub particles: Vec<Particle>,
    /// Last pointer position in surface-local coordinates, `None` while the
    /// pointer is outside the tracked surface. Last write wins.
    pub pointer: Option<Vec2>,
    rng: Pcg32,
}

impl FieldState {
    /// Create a field sized `width` x `height` with a freshly generated
    /// particle set.
    pub fn new(width: f32, height: f32, options: FieldOptions, seed: u64) -> Self {
        let mut state = Self {
            width,
            height,
            options,
            particles: Vec::new(),
            pointer: None,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.regenerate();
        state
    }

    /// Throw away all particles and spawn `particle_count` new ones within
    /// the current bounds.
    pub fn regenerate(&mut self) {
        let count = self.options.particle_count;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.spawn_particle();
            self.particles.push(particle);
        }
    }

    /// Sample one particle. Inclusive ranges keep a zero-size surface from
    /// panicking on an empty sample range; everything collapses to a single
    /// point instead.
    fn spawn_particle(&mut self) -> Particle {
        let v = self.options.velocity_range;
        Particle {
            pos: Vec2::new(
                self.rng.random_range(0.0..=self.width),
                self.rng.random_range(0.0..=self.height),
            ),
            vel: Vec2::new(
                self.rng.random_range(-v..=v),
                self.rng.random_range(-v..=v),
            ),
            radius: self
                .rng
                .random_range(self.options.radius_min..=self.options.radius_max),
        }
    }

    /// Set new surface dimensions and regenerate the particle set.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    /// Pointer moved within the surface (surface-local coordinates).
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Pointer left the surface.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spawns_within_bounds() {
        let state = FieldState::new(640.0, 480.0, FieldOptions::default(), 7);
        assert_eq!(state.particles.len(), 60);
        for p in &state.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 480.0);
            assert!(p.vel.x >= -0.25 && p.vel.x <= 0.25);
            assert!(p.vel.y >= -0.25 && p.vel.y <= 0.25);
            assert!(p.radius >= 1.0 && p.radius <= 3.0);
        }
    }

    #[test]
    fn test_resize_regenerates_everything() {
        let mut state = FieldState::new(1920.0, 1080.0, FieldOptions::default(), 7);
        let before = state.particles.clone();

        state.resize(800.0, 600.0);

        assert_eq!(state.particles.len(), state.options.particle_count);
        assert_ne!(state.particles, before);
        for p in &state.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
        }
    }

    #[test]
    fn test_zero_size_surface_degrades_to_a_point() {
        let state = FieldState::new(0.0, 0.0, FieldOptions::default(), 7);
        assert_eq!(state.particles.len(), 60);
        for p in &state.particles {
            assert_eq!(p.pos, Vec2::ZERO);
        }
    }

    #[test]
    fn test_pointer_toggles() {
        let mut state = FieldState::new(100.0, 100.0, FieldOptions::default(), 7);
        assert_eq!(state.pointer, None);

        state.set_pointer(Vec2::new(10.0, 20.0));
        state.set_pointer(Vec2::new(30.0, 40.0));
        // Only the most recent position is retained
        assert_eq!(state.pointer, Some(Vec2::new(30.0, 40.0)));

        state.clear_pointer();
        assert_eq!(state.pointer, None);
    }

    #[test]
    fn test_custom_particle_count() {
        let options = FieldOptions {
            particle_count: 5,
            ..Default::default()
        };
        let state = FieldState::new(200.0, 200.0, options, 7);
        assert_eq!(state.particles.len(), 5);
    }
}
