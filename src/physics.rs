//! Cursor-gravity frame integration.
//!
//! Runs once per displayed frame, unconditionally, nudging every particle
//! toward the pointer target. This is a damped attraction, not a physical
//! gravity model: force falls off with distance squared but is not
//! mass-weighted, and damping is a flat per-frame multiplier.

use glam::Vec3;

/// Softening added to the squared distance so the force stays finite when a
/// particle sits on the target.
pub const EPSILON: f32 = 0.1;
/// Explicit-Euler acceleration scale per frame.
pub const STEP_SCALE: f32 = 0.01;
/// Per-frame multiplicative velocity decay.
pub const DAMPING: f32 = 0.95;

/// Per-particle velocity storage.
///
/// Lives independently of the particle buffer and persists across frames.
/// Must be [`reset`](VelocityField::reset) whenever the particle count
/// changes so the two stay indexed by the same particle index.
#[derive(Debug, Clone)]
pub struct VelocityField {
    data: Vec<f32>,
}

impl VelocityField {
    /// Zeroed velocities for `count` particles.
    pub fn new(count: usize) -> Self {
        Self {
            data: vec![0.0; count * 3],
        }
    }

    /// Resize for a new particle count, zeroing every velocity.
    pub fn reset(&mut self, count: usize) {
        self.data.clear();
        self.data.resize(count * 3, 0.0);
    }

    /// Number of particles tracked.
    pub fn count(&self) -> usize {
        self.data.len() / 3
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Velocity of particle `i`.
    pub fn velocity(&self, i: usize) -> Vec3 {
        let i3 = i * 3;
        Vec3::new(self.data[i3], self.data[i3 + 1], self.data[i3 + 2])
    }
}

/// Advance every particle one frame toward `target`.
///
/// Per particle: accelerate along the offset to the target with magnitude
/// `gravity / (dist_sq^gravity_power + EPSILON)`, damp the velocity, then
/// integrate position. With `gravity_power = 1.0` the force law is plain
/// softened inverse-square.
///
/// `positions` and `velocities` must be the same length; both are mutated in
/// place.
pub fn integrate(
    positions: &mut [f32],
    velocities: &mut [f32],
    target: Vec3,
    gravity: f32,
    gravity_power: f32,
) {
    debug_assert_eq!(positions.len(), velocities.len());

    for (p, v) in positions
        .chunks_exact_mut(3)
        .zip(velocities.chunks_exact_mut(3))
    {
        let pos = Vec3::new(p[0], p[1], p[2]);
        let mut vel = Vec3::new(v[0], v[1], v[2]);

        let offset = target - pos;
        let dist_sq = offset.length_squared();
        let force = gravity / (dist_sq.powf(gravity_power) + EPSILON);

        vel += offset * force * STEP_SCALE;
        vel *= DAMPING;
        let pos = pos + vel;

        p.copy_from_slice(&pos.to_array());
        v.copy_from_slice(&vel.to_array());
    }
}
