//! Spiral galaxy point generation.
//!
//! [`generate`] is a pure function of the parameter record and the RNG draws.
//! Each call produces a complete new buffer; the previous one is discarded
//! wholesale by the caller, never patched.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::params::GalaxyParams;

/// Flat position/color storage for one generated galaxy.
///
/// Both arrays are `3 * count` long and indexed by the same particle index,
/// laid out x,y,z / r,g,b per particle.
#[derive(Debug, Clone)]
pub struct ParticleBuffer {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl ParticleBuffer {
    /// Number of particles in the buffer.
    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Position of particle `i`.
    pub fn position(&self, i: usize) -> Vec3 {
        let i3 = i * 3;
        Vec3::new(self.positions[i3], self.positions[i3 + 1], self.positions[i3 + 2])
    }

    /// Color of particle `i`.
    pub fn color(&self, i: usize) -> Vec3 {
        let i3 = i * 3;
        Vec3::new(self.colors[i3], self.colors[i3 + 1], self.colors[i3 + 2])
    }
}

/// Generate a galaxy from the current parameters.
///
/// Per particle: a radius is drawn uniformly in `[0, params.radius)`, the
/// branch assignment fixes a base angle, spin twists it proportionally to the
/// radius, and per-axis scatter displaces the point off the arm. Color is the
/// inside/outside gradient keyed by the same radius.
///
/// Callers are responsible for keeping parameters inside the panel bounds
/// (`count >= 1`, `radius > 0`, `branches >= 1`, `randomness_power >= 1`);
/// no validation happens here.
pub fn generate<R: Rng>(params: &GalaxyParams, rng: &mut R) -> ParticleBuffer {
    let count = params.count as usize;
    let mut positions = vec![0.0f32; count * 3];
    let mut colors = vec![0.0f32; count * 3];

    for i in 0..count {
        let i3 = i * 3;

        let radius = rng.gen_range(0.0..params.radius);
        let branch_angle = (i as u32 % params.branches) as f32 / params.branches as f32 * TAU;
        let spin_angle = radius * params.spin;
        let angle = branch_angle + spin_angle;

        let rx = scatter(rng, params, radius);
        let ry = scatter(rng, params, radius);
        let rz = scatter(rng, params, radius);

        positions[i3] = angle.cos() * radius + rx;
        positions[i3 + 1] = ry;
        positions[i3 + 2] = angle.sin() * radius + rz;

        let color = params
            .inside_color
            .lerp(params.outside_color, radius / params.radius);
        colors[i3] = color.x;
        colors[i3 + 1] = color.y;
        colors[i3 + 2] = color.z;
    }

    ParticleBuffer { positions, colors }
}

/// One axis of scatter: a uniform draw raised to `randomness_power` biases the
/// magnitude toward zero, a random sign picks the side, and the result scales
/// with the particle's radius rather than a fixed magnitude.
fn scatter<R: Rng>(rng: &mut R, params: &GalaxyParams, radius: f32) -> f32 {
    let magnitude = rng.gen_range(0.0f32..1.0).powf(params.randomness_power);
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    magnitude * sign * params.randomness * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn buffer_lengths_match_count() {
        let params = GalaxyParams {
            count: 1234,
            ..Default::default()
        };
        let buf = generate(&params, &mut rng());
        assert_eq!(buf.positions.len(), 3 * 1234);
        assert_eq!(buf.colors.len(), 3 * 1234);
        assert_eq!(buf.count(), 1234);
    }

    #[test]
    fn regeneration_replaces_rather_than_accumulates() {
        let params = GalaxyParams {
            count: 500,
            ..Default::default()
        };
        let mut buf = generate(&params, &mut rng());
        for _ in 0..3 {
            buf = generate(&params, &mut rng());
            assert_eq!(buf.positions.len(), 3 * 500);
            assert_eq!(buf.colors.len(), 3 * 500);
        }
    }

    #[test]
    fn colors_are_convex_combinations_of_endpoints() {
        let params = GalaxyParams {
            count: 2000,
            ..Default::default()
        };
        let buf = generate(&params, &mut rng());
        let lo = params.inside_color.min(params.outside_color);
        let hi = params.inside_color.max(params.outside_color);
        for i in 0..buf.count() {
            let c = buf.color(i);
            for axis in 0..3 {
                assert!(
                    c[axis] >= lo[axis] - 1e-6 && c[axis] <= hi[axis] + 1e-6,
                    "particle {i} channel {axis} out of gradient range: {c:?}"
                );
            }
        }
    }

    #[test]
    fn xz_distance_bounded_by_radius_and_scatter() {
        let params = GalaxyParams {
            count: 5000,
            radius: 5.0,
            randomness: 0.5,
            ..Default::default()
        };
        let buf = generate(&params, &mut rng());
        // Worst case: on-arm distance r plus scatter of randomness * r on both
        // horizontal axes.
        let bound = params.radius * (1.0 + 2.0 * params.randomness) + 1e-4;
        for i in 0..buf.count() {
            let p = buf.position(i);
            let xz = (p.x * p.x + p.z * p.z).sqrt();
            assert!(xz <= bound, "particle {i} at xz distance {xz} exceeds {bound}");
        }
    }

    #[test]
    fn scatter_scales_with_radius() {
        // With full randomness and power 1, vertical scatter of far particles
        // must be able to exceed anything near the center.
        let params = GalaxyParams {
            count: 5000,
            radius: 10.0,
            randomness: 1.0,
            randomness_power: 1.0,
            ..Default::default()
        };
        let buf = generate(&params, &mut rng());
        for i in 0..buf.count() {
            let p = buf.position(i);
            // |y| is pure scatter and bounded by randomness * radius draw,
            // itself bounded by randomness * params.radius.
            assert!(p.y.abs() <= params.randomness * params.radius + 1e-4);
        }
    }

    #[test]
    fn two_branches_without_spin_form_opposing_arms() {
        let params = GalaxyParams {
            count: 100,
            branches: 2,
            radius: 5.0,
            spin: 0.0,
            randomness: 0.0,
            ..Default::default()
        };
        let buf = generate(&params, &mut rng());
        for i in 0..buf.count() {
            let p = buf.position(i);
            assert!(p.y.abs() < 1e-6);
            // Branch angle 0 for even indices, pi for odd.
            if i % 2 == 0 {
                assert!(p.x >= -1e-4, "even particle {i} off the 0-angle arm: {p:?}");
            } else {
                assert!(p.x <= 1e-4, "odd particle {i} off the pi-angle arm: {p:?}");
            }
            assert!(p.z.abs() < 1e-3, "particle {i} off the arm axis: {p:?}");
        }
    }

    #[test]
    fn zero_randomness_puts_every_particle_on_its_arm() {
        let params = GalaxyParams {
            count: 300,
            branches: 4,
            spin: 2.0,
            randomness: 0.0,
            ..Default::default()
        };
        let buf = generate(&params, &mut rng());
        for i in 0..buf.count() {
            let p = buf.position(i);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!(r <= params.radius + 1e-4);
            assert_eq!(p.y, 0.0);
        }
    }
}
