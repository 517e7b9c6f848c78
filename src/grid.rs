//! Rectangular particle grid laid out on a parametric rest surface.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Maps normalized `(u, v)` in `[0, 1]²` to a rest position.
pub trait Surface<F: Float> {
    fn sample(&self, u: F, v: F) -> Vec3<F>;
}

impl<F: Float, S: Fn(F, F) -> Vec3<F>> Surface<F> for S {
    fn sample(&self, u: F, v: F) -> Vec3<F> {
        self(u, v)
    }
}

/// A vertical plane hanging down from its top edge: `(u·width, -v·height, 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Plane<F> {
    pub fn new(width: F, height: F) -> Self {
        Plane { width, height }
    }
}

impl<F: Float> Surface<F> for Plane<F> {
    fn sample(&self, u: F, v: F) -> Vec3<F> {
        Vec3::new(u * self.width, -v * self.height, F::zero())
    }
}

/// Owns every particle of the cloth.
///
/// The grid has `width_segments + 1` columns and `height_segments + 1`
/// rows; particle `(u, v)` lives at index `u + v * (width_segments + 1)`.
/// Constraints, pins and the collider refer to particles by that index.
pub struct ParticleGrid<F: Float, S: Surface<F> = Plane<F>> {
    particles: AllocVec<Particle<Vec3<F>>>,
    width_segments: usize,
    height_segments: usize,
    offset: Vec3<F>,
    surface: S,
}

impl<F: Float, S: Surface<F>> ParticleGrid<F, S> {
    /// Build the grid, every particle at rest on `surface + offset`.
    ///
    /// Both segment counts must be at least 1; this is not checked.
    pub fn new(
        width_segments: usize,
        height_segments: usize,
        surface: S,
        offset: Vec3<F>,
        mass: F,
    ) -> Self {
        let cols = width_segments + 1;
        let rows = height_segments + 1;
        let mut particles = AllocVec::with_capacity(cols * rows);

        let w = F::from_usize(width_segments);
        let h = F::from_usize(height_segments);
        for v in 0..rows {
            for u in 0..cols {
                let rest = surface.sample(F::from_usize(u) / w, F::from_usize(v) / h) + offset;
                particles.push(Particle::new(rest, mass));
            }
        }

        ParticleGrid { particles, width_segments, height_segments, offset, surface }
    }

    pub fn index(&self, u: usize, v: usize) -> usize {
        u + v * (self.width_segments + 1)
    }

    /// Row of a particle index.
    pub fn row_of(&self, index: usize) -> usize {
        index / (self.width_segments + 1)
    }

    /// World-space point on the rest surface at normalized `(u, v)`.
    pub fn rest_point(&self, u: F, v: F) -> Vec3<F> {
        self.surface.sample(u, v) + self.offset
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn position_at(&self, u: usize, v: usize) -> Vec3<F> {
        self.particles[self.index(u, v)].position
    }

    pub fn particles(&self) -> &[Particle<Vec3<F>>] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle<Vec3<F>>] {
        &mut self.particles
    }

    pub fn particle(&self, index: usize) -> &Particle<Vec3<F>> {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<Vec3<F>> {
        &mut self.particles[index]
    }

    pub fn offset(&self) -> Vec3<F> { self.offset }
    pub fn width_segments(&self) -> usize { self.width_segments }
    pub fn height_segments(&self) -> usize { self.height_segments }
    pub fn particle_count(&self) -> usize { self.particles.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec;

    fn small_grid() -> ParticleGrid<f32> {
        ParticleGrid::new(3, 2, Plane::new(3.0, 2.0), Vec3::new(-1.5, 0.0, 0.0), 1.0)
    }

    #[test]
    fn correct_particle_count() {
        assert_eq!(small_grid().particle_count(), 12); // 4 * 3
    }

    #[test]
    fn row_major_indexing() {
        let grid = small_grid();
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(3, 0), 3);
        assert_eq!(grid.index(0, 1), 4);
        assert_eq!(grid.row_of(11), 2);
        assert_eq!(grid.row_of(3), 0);
    }

    #[test]
    fn particles_rest_on_the_offset_surface() {
        let grid = small_grid();
        assert_eq!(grid.position_at(0, 0), Vec3::new(-1.5, 0.0, 0.0));
        assert_eq!(grid.position_at(3, 2), Vec3::new(1.5, -2.0, 0.0));
        for p in grid.particles() {
            assert_eq!(p.position, p.previous);
            assert_eq!(p.position, p.original());
        }
    }

    #[test]
    fn closure_surfaces_are_accepted() {
        let grid = ParticleGrid::new(
            1,
            1,
            |u: f64, v: f64| Vec3::new(u, v, u * v),
            Vec3::zero(),
            1.0,
        );
        assert_eq!(grid.position_at(1, 1), Vec3::new(1.0, 1.0, 1.0));
    }
}
