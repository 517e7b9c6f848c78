use clothy::{DistanceConstraint, Particle, Vec3};
use clothy::vec::Vec;

#[test]
fn free_fall_matches_closed_form() {
    let mass = 0.1;
    let mut p: Particle<Vec3<f64>> = Particle::new(Vec3::new(0.0, 100.0, 0.0), mass);
    let dt = 0.018;
    let steps = 50;

    for _ in 0..steps {
        p.apply_force(Vec3::new(0.0, -100.0 * mass, 0.0));
        p.integrate(dt * dt, 1.0);
    }

    // Starting at rest, Verlet drops a * dt² * n(n+1)/2 after n steps.
    let n = steps as f64;
    let expected_y = 100.0 - 100.0 * dt * dt * n * (n + 1.0) / 2.0;
    assert!((p.position.y - expected_y).abs() < 1e-6, "pos.y = {}, expected {}", p.position.y, expected_y);
}

#[test]
fn damping_slows_the_fall() {
    let mut free: Particle<Vec3<f64>> = Particle::new(Vec3::new(0.0, 0.0, 0.0), 0.1);
    let mut damped = free.clone();
    for _ in 0..100 {
        free.apply_force(Vec3::new(0.0, -10.0, 0.0));
        damped.apply_force(Vec3::new(0.0, -10.0, 0.0));
        free.integrate(0.018 * 0.018, 1.0);
        damped.integrate(0.018 * 0.018, 0.995);
    }
    assert!(damped.position.y > free.position.y);
    assert!(damped.position.y < 0.0);
}

#[test]
fn accumulated_forces_are_divided_by_mass() {
    let mut p: Particle<Vec3<f32>> = Particle::new(Vec3::new(0.0, 0.0, 0.0), 2.0);
    p.apply_force(Vec3::new(4.0, 0.0, 0.0));
    p.apply_force(Vec3::new(0.0, -2.0, 0.0));
    assert_eq!(p.acceleration, Vec3::new(2.0, -1.0, 0.0));
}

#[test]
fn relaxation_is_symmetric_and_keeps_midpoint() {
    let a0 = Vec3::new(1.0f64, -2.0, 3.0);
    let b0 = Vec3::new(-4.0f64, 6.0, 0.5);
    let mut particles = [Particle::new(a0, 0.1), Particle::new(b0, 0.1)];

    DistanceConstraint::new(0, 1, 2.0).solve(&mut particles);

    let da = particles[0].position - a0;
    let db = particles[1].position - b0;
    assert!((da + db).length() < 1e-12, "corrections {:?} and {:?} are not opposite", da, db);
    assert!(a0.midpoint(b0).distance(particles[0].position.midpoint(particles[1].position)) < 1e-12);
    assert!((particles[0].position.distance(particles[1].position) - 2.0).abs() < 1e-12);
}

#[test]
fn coincident_particles_produce_no_nan() {
    let at = Vec3::new(3.0f32, 3.0, 3.0);
    let mut particles = [Particle::new(at, 0.1), Particle::new(at, 0.1)];
    DistanceConstraint::new(0, 1, 10.0).solve(&mut particles);
    assert_eq!(particles[0].position, at);
    assert_eq!(particles[1].position, at);
    assert!(!particles[0].position.x.is_nan());
}
