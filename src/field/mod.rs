//! Particle field simulation
//!
//! All backdrop motion lives here and stays pure: positions and velocities in
//! surface pixels, velocities as per-frame deltas, randomness from a seeded
//! PCG stream. Nothing in this module touches the GPU or the DOM, so every
//! rule is testable headless.

pub mod links;
pub mod options;
pub mod state;
pub mod tick;

pub use links::{proximity_links, Link};
pub use options::FieldOptions;
pub use state::{FieldState, Particle};
pub use tick::tick;
