//! End-to-end tests of the CPU pipeline through the public API:
//! generate a galaxy, then pull it around with the integrator.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use whorl::{galaxy, physics, GalaxyParams, VelocityField};

#[test]
fn generated_galaxy_feeds_straight_into_the_integrator() {
    let params = GalaxyParams {
        count: 500,
        ..GalaxyParams::default()
    };
    let mut rng = SmallRng::seed_from_u64(99);
    let mut buffer = galaxy::generate(&params, &mut rng);
    let mut velocities = VelocityField::new(buffer.count());

    let target = Vec3::new(2.0, 0.0, -1.0);
    let before: Vec<f32> = (0..buffer.count())
        .map(|i| buffer.position(i).distance(target))
        .collect();

    for _ in 0..120 {
        physics::integrate(
            &mut buffer.positions,
            velocities.as_mut_slice(),
            target,
            params.gravity,
            params.gravity_power,
        );
    }

    // After a couple seconds of pull the bulk of the cloud has drifted
    // toward the target. Particles that started almost on top of it may
    // overshoot, so ask for a strong majority rather than all.
    let closer = (0..buffer.count())
        .filter(|&i| buffer.position(i).distance(target) < before[i])
        .count();
    assert!(
        closer * 10 > buffer.count() * 9,
        "only {closer} of {} particles moved toward the target",
        buffer.count()
    );
}

#[test]
fn regeneration_with_new_count_resizes_both_arrays() {
    let mut params = GalaxyParams {
        count: 1_000,
        ..GalaxyParams::default()
    };
    let mut rng = SmallRng::seed_from_u64(5);
    let mut buffer = galaxy::generate(&params, &mut rng);
    let mut velocities = VelocityField::new(buffer.count());

    // Accumulate some motion, then commit a smaller count.
    physics::integrate(
        &mut buffer.positions,
        velocities.as_mut_slice(),
        Vec3::ZERO,
        5.0,
        1.0,
    );
    assert!(velocities.as_slice().iter().any(|&v| v != 0.0));

    params.count = 300;
    buffer = galaxy::generate(&params, &mut rng);
    velocities.reset(buffer.count());

    assert_eq!(buffer.count(), 300);
    assert_eq!(buffer.positions.len(), 900);
    assert_eq!(velocities.as_slice().len(), 900);
    assert!(velocities.as_slice().iter().all(|&v| v == 0.0));
}
