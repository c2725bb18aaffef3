//! Field tuning options
//!
//! Every constant the simulation and link pass consume lives here instead of
//! being hardcoded at the use site. Defaults mirror [`crate::consts`]; the
//! hosting page can override any subset through a JSON `data-field-options`
//! attribute on the canvas element.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Simulation and rendering tunables for the particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Number of particles generated at init and on every resize
    pub particle_count: usize,
    /// Pointer influence reach (surface units)
    pub repulsion_radius: f32,
    /// Fraction of the pointer delta applied per frame inside the radius
    pub repulsion_strength: f32,
    /// Pair distance below which a connecting line is drawn
    pub link_radius: f32,
    /// Velocity components are sampled uniformly from ±this (units/frame)
    pub velocity_range: f32,
    /// Smallest disc radius
    pub radius_min: f32,
    /// Largest disc radius
    pub radius_max: f32,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            particle_count: consts::PARTICLE_COUNT,
            repulsion_radius: consts::REPULSION_RADIUS,
            repulsion_strength: consts::REPULSION_STRENGTH,
            link_radius: consts::LINK_RADIUS,
            velocity_range: consts::VELOCITY_RANGE,
            radius_min: consts::RADIUS_MIN,
            radius_max: consts::RADIUS_MAX,
        }
    }
}

impl FieldOptions {
    /// Parse a JSON override blob, e.g. `{"particle_count": 80}`.
    ///
    /// Keys left out keep their defaults. Callers treat a parse error as
    /// "use the defaults"; the field never fails to start over bad config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let options = FieldOptions::default();
        assert_eq!(options.particle_count, 60);
        assert_eq!(options.repulsion_radius, 100.0);
        assert_eq!(options.repulsion_strength, 0.03);
        assert_eq!(options.link_radius, 150.0);
        assert_eq!(options.velocity_range, 0.25);
        assert_eq!(options.radius_min, 1.0);
        assert_eq!(options.radius_max, 3.0);
    }

    #[test]
    fn test_partial_override_keeps_rest() {
        let options = FieldOptions::from_json(r#"{"particle_count": 120, "link_radius": 90.0}"#)
            .expect("valid override");
        assert_eq!(options.particle_count, 120);
        assert_eq!(options.link_radius, 90.0);
        // Untouched keys fall back to defaults
        assert_eq!(options.repulsion_radius, 100.0);
        assert_eq!(options.velocity_range, 0.25);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FieldOptions::from_json("{particle_count: sixty}").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let options = FieldOptions {
            particle_count: 10,
            ..Default::default()
        };
        let json = serde_json::to_string(&options).expect("serialize");
        assert_eq!(FieldOptions::from_json(&json).expect("parse"), options);
    }
}
