//! Per-frame field update
//!
//! One tick advances every particle by its velocity, reflects velocity at the
//! surface edges, and applies the pointer repulsion nudge. Velocities are
//! per-frame deltas; a tick is one animation frame, with no timestep scaling.

use glam::Vec2;

use super::state::FieldState;

/// Advance the field by one animation frame.
pub fn tick(state: &mut FieldState) {
    let (w, h) = (state.width, state.height);
    let pointer = state.pointer;
    let radius = state.options.repulsion_radius;
    let strength = state.options.repulsion_strength;

    for p in &mut state.particles {
        p.pos += p.vel;

        // Reflect velocity when a coordinate has drifted past an edge. The
        // position itself is never clamped; the flipped velocity walks the
        // particle back inside over the following frames.
        if p.pos.x < 0.0 || p.pos.x > w {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y < 0.0 || p.pos.y > h {
            p.vel.y = -p.vel.y;
        }

        if let Some(m) = pointer {
            p.pos += repulsion(p.pos, m, radius, strength);
        }
    }
}

/// Linear repulsion falloff: 1 at zero distance, 0 at `radius`.
/// Callers gate on distance, so values beyond the radius never apply.
#[inline]
pub fn falloff(distance: f32, radius: f32) -> f32 {
    (radius - distance) / radius
}

/// Displacement pushing a particle at `pos` directly away from a pointer at
/// `m`. Zero at or beyond `radius`; inside, `strength` of the full delta
/// scaled by the falloff. A particle sitting exactly on the pointer has a
/// zero delta and stays put.
pub fn repulsion(pos: Vec2, m: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = m - pos;
    let distance = delta.length();
    if distance >= radius {
        return Vec2::ZERO;
    }
    -delta * falloff(distance, radius) * strength
}
