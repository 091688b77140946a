//! The shared galaxy parameter record.
//!
//! One flat struct owned by the app, mutated by the panel, and read by the
//! generator, integrator, and renderer. Shape fields take effect on commit
//! (they require regenerating the point cloud); `size`, `gravity`, and
//! `gravity_power` are read fresh every frame.

use glam::Vec3;

/// Everything that defines the galaxy's look and behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyParams {
    /// Number of particles.
    pub count: u32,
    /// Point sprite size in clip-space units.
    pub size: f32,
    /// Maximum arm radius in world units.
    pub radius: f32,
    /// Number of spiral arms.
    pub branches: u32,
    /// Arm twist per unit radius, in radians.
    pub spin: f32,
    /// Scatter amplitude relative to each particle's radius.
    pub randomness: f32,
    /// Exponent biasing scatter magnitude toward the arm.
    pub randomness_power: f32,
    /// Cursor attraction strength.
    pub gravity: f32,
    /// Exponent on the squared distance in the force law. 1 is plain
    /// softened inverse-square.
    pub gravity_power: f32,
    /// Color at the galactic core.
    pub inside_color: Vec3,
    /// Color at the arm tips.
    pub outside_color: Vec3,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 10_000,
            size: 0.02,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            gravity: 1.0,
            gravity_power: 1.0,
            inside_color: Vec3::new(1.0, 0.42, 0.0),
            outside_color: Vec3::new(0.1, 0.22, 0.78),
        }
    }
}

/// Panel bounds as `(min, max, step)` per field.
///
/// Step values feed the sliders; integer fields carry the step as f64 for
/// egui's `step_by`.
pub mod bounds {
    pub const COUNT: (u32, u32, f64) = (100, 100_000, 100.0);
    pub const SIZE: (f32, f32, f64) = (0.001, 0.1, 0.001);
    pub const RADIUS: (f32, f32, f64) = (0.01, 20.0, 0.01);
    pub const BRANCHES: (u32, u32, f64) = (2, 20, 1.0);
    pub const SPIN: (f32, f32, f64) = (-5.0, 5.0, 0.001);
    pub const RANDOMNESS: (f32, f32, f64) = (0.0, 1.0, 0.01);
    pub const RANDOMNESS_POWER: (f32, f32, f64) = (1.0, 10.0, 0.001);
    pub const GRAVITY: (f32, f32, f64) = (0.0, 10.0, 0.1);
    pub const GRAVITY_POWER: (f32, f32, f64) = (1.0, 4.0, 0.1);
}
