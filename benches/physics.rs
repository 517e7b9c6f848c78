//! Benchmarks for clothy simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use clothy::*;

fn bench_reference_cloth(c: &mut Criterion) {
    c.bench_function("cloth_9x16_60_steps", |b| {
        b.iter(|| {
            let mut cloth: Cloth<f32> = Cloth::from_config(&ClothConfig::default()).unwrap();
            let camera = CameraPose::looking_down_negative_z();
            for frame in 0..60 {
                cloth.step(frame as f32 * 16.6, &camera, None, &mut NoOpStepObserver);
            }
            cloth.positions()
        });
    });
}

fn bench_dense_cloth(c: &mut Criterion) {
    c.bench_function("cloth_40x60_60_steps_rotated_parent", |b| {
        b.iter(|| {
            let config = ClothConfig::new().with_segments(40, 60);
            let mut cloth: Cloth<f32> = Cloth::from_config(&config).unwrap();
            let camera = CameraPose::looking_down_negative_z();
            let parent = Some(Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.3));
            for frame in 0..60 {
                cloth.step(frame as f32 * 16.6, &camera, parent, &mut NoOpStepObserver);
            }
            cloth.positions()
        });
    });
}

fn bench_constraint_pass(c: &mut Criterion) {
    let mut cloth: Cloth<f32> = Cloth::from_config(&ClothConfig::new().with_segments(40, 60)).unwrap();
    let constraints = ConstraintSet::from_grid(cloth.grid(), 1.0);
    let solver = ConstraintSolver::new();
    c.bench_function("single_relaxation_pass_40x60", |b| {
        b.iter(|| {
            solver.relax(&constraints, cloth.grid_mut().particles_mut());
        });
    });
}

criterion_group!(benches, bench_reference_cloth, bench_dense_cloth, bench_constraint_pass);
criterion_main!(benches);
