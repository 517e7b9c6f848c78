//! Pins: particles driven to a prescribed target every frame.

use crate::error::ClothError;
use crate::float::Float;
use crate::grid::{ParticleGrid, Surface};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A pinned particle and the row fraction its target is computed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pin<F: Float> {
    pub index: usize,
    pub row_fraction: F,
}

/// Holds pinned particles on the cloth's leading edge.
///
/// Each pin's target is the right-edge point of its row on the rest
/// surface, shifted sideways by `standoff` so the edge hugs the pole
/// instead of the cloth's own rest position.
#[derive(Clone, Debug)]
pub struct PinController<F: Float> {
    pins: AllocVec<Pin<F>>,
    standoff: Vec3<F>,
}

impl<F: Float> PinController<F> {
    /// One pin per row along the right-hand column.
    pub fn right_edge<S: Surface<F>>(grid: &ParticleGrid<F, S>, standoff: Vec3<F>) -> Self {
        let w = grid.width_segments();
        let indices: AllocVec<usize> = (0..=grid.height_segments()).map(|v| grid.index(w, v)).collect();
        Self::build(grid, &indices, standoff)
    }

    /// Pins at explicit particle indices.
    ///
    /// Every index must address a particle of `grid`. A repeated index is
    /// kept; holding the same particle twice lands it on the same target.
    pub fn from_indices<S: Surface<F>>(
        grid: &ParticleGrid<F, S>,
        indices: &[usize],
        standoff: Vec3<F>,
    ) -> Result<Self, ClothError> {
        let count = grid.particle_count();
        if let Some(&index) = indices.iter().find(|&&index| index >= count) {
            return Err(ClothError::PinOutOfBounds { index, count });
        }
        Ok(Self::build(grid, indices, standoff))
    }

    fn build<S: Surface<F>>(grid: &ParticleGrid<F, S>, indices: &[usize], standoff: Vec3<F>) -> Self {
        let h = F::from_usize(grid.height_segments());
        let pins = indices
            .iter()
            .map(|&index| Pin {
                index,
                row_fraction: F::from_usize(grid.row_of(index)) / h,
            })
            .collect();
        PinController { pins, standoff }
    }

    /// Where `pin` is held this frame.
    pub fn target<S: Surface<F>>(&self, grid: &ParticleGrid<F, S>, pin: &Pin<F>) -> Vec3<F> {
        grid.rest_point(F::one(), pin.row_fraction) + self.standoff
    }

    /// Snap every pinned particle onto its target with zero velocity.
    pub fn apply<S: Surface<F>>(&self, grid: &mut ParticleGrid<F, S>) {
        for pin in &self.pins {
            let target = self.target(grid, pin);
            grid.particle_mut(pin.index).teleport(target);
        }
    }

    pub fn pins(&self) -> &[Pin<F>] {
        &self.pins
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        self.pins.iter().any(|p| p.index == index)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
