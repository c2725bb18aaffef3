//! Geofield - interactive particle backdrop for a portfolio page
//!
//! Core modules:
//! - `field`: pure particle simulation (motion, reflection, pointer repulsion)
//! - `renderer`: WebGPU pipeline drawing discs and proximity links
//! - `gallery`: project grid, filters, and page flourishes

pub mod field;
pub mod gallery;
pub mod renderer;

pub use field::{FieldOptions, FieldState};

/// Field tuning defaults
pub mod consts {
    /// Particles kept alive in the field
    pub const PARTICLE_COUNT: usize = 60;

    /// Pointer influence reach (surface units)
    pub const REPULSION_RADIUS: f32 = 100.0;
    /// Fraction of the pointer delta applied per frame inside the radius
    pub const REPULSION_STRENGTH: f32 = 0.03;

    /// Pair distance below which a connecting line is drawn
    pub const LINK_RADIUS: f32 = 150.0;

    /// Velocity components are sampled uniformly from ±this (units/frame)
    pub const VELOCITY_RANGE: f32 = 0.25;

    /// Disc radius bounds (surface units)
    pub const RADIUS_MIN: f32 = 1.0;
    pub const RADIUS_MAX: f32 = 3.0;
}
