//! Per-frame relaxation of the cloth's distance constraints.

use crate::constraint::ConstraintSet;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::{Vec, Vec3};

/// Relaxes a `ConstraintSet` in a single pass per frame.
///
/// One pass is not enough to reach the rest lengths, so the cloth stretches
/// visibly under load. That elasticity is the expected look.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstraintSolver;

impl ConstraintSolver {
    pub fn new() -> Self {
        ConstraintSolver
    }

    /// Solve every constraint once, in creation order.
    pub fn relax<F: Float>(&self, constraints: &ConstraintSet<F>, particles: &mut [Particle<Vec3<F>>]) {
        for c in constraints {
            c.solve(particles);
        }
    }

    /// Largest relative deviation from rest length across the set.
    pub fn max_strain<F: Float>(&self, constraints: &ConstraintSet<F>, particles: &[Particle<Vec3<F>>]) -> F {
        let mut worst = F::zero();
        for c in constraints {
            let d = particles[c.a].position.distance(particles[c.b].position);
            let strain = ((d - c.rest_length) / c.rest_length).abs();
            if strain > worst {
                worst = strain;
            }
        }
        worst
    }
}
