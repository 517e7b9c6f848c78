//! Distance constraints linking neighbouring grid particles.

use crate::float::Float;
use crate::grid::{ParticleGrid, Surface};
use crate::particle::Particle;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Keeps particles `a` and `b` near `rest_length` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// Move both ends toward the rest length, half the correction each.
    ///
    /// Masses are uniform across the cloth, so the split is even and the
    /// pair's midpoint does not move. Coincident particles are left alone.
    pub fn solve<V: Vec<Scalar = F>>(&self, particles: &mut [Particle<V>]) {
        let delta = particles[self.b].position - particles[self.a].position;
        let current = delta.length();
        if current == F::zero() {
            return;
        }

        let correction = delta.scale(F::one() - self.rest_length / current);
        let half = correction.scale(F::half());
        particles[self.a].position = particles[self.a].position + half;
        particles[self.b].position = particles[self.b].position - half;
    }
}

/// The fixed constraint list of a grid. Built once, never resized.
pub struct ConstraintSet<F: Float> {
    constraints: AllocVec<DistanceConstraint<F>>,
}

impl<F: Float> ConstraintSet<F> {
    /// Structural constraints for a `W × H` grid, `2·W·H + H + W` in total.
    ///
    /// Each cell links its top-left particle to the one below and the one
    /// to the right; the last column and last row are then closed with
    /// vertical and horizontal edges respectively.
    pub fn from_grid<S: Surface<F>>(grid: &ParticleGrid<F, S>, rest_length: F) -> Self {
        let w = grid.width_segments();
        let h = grid.height_segments();
        let mut constraints = AllocVec::with_capacity(2 * w * h + w + h);

        for v in 0..h {
            for u in 0..w {
                constraints.push(DistanceConstraint::new(grid.index(u, v), grid.index(u, v + 1), rest_length));
                constraints.push(DistanceConstraint::new(grid.index(u, v), grid.index(u + 1, v), rest_length));
            }
        }

        // Right edge
        for v in 0..h {
            constraints.push(DistanceConstraint::new(grid.index(w, v), grid.index(w, v + 1), rest_length));
        }

        // Bottom edge
        for u in 0..w {
            constraints.push(DistanceConstraint::new(grid.index(u, h), grid.index(u + 1, h), rest_length));
        }

        ConstraintSet { constraints }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, DistanceConstraint<F>> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<'a, F: Float> IntoIterator for &'a ConstraintSet<F> {
    type Item = &'a DistanceConstraint<F>;
    type IntoIter = core::slice::Iter<'a, DistanceConstraint<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
