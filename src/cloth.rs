//! The cloth itself: grid, constraints, pins and pole, stepped per frame.

use crate::collider::{ColliderResolver, Pole};
use crate::config::ClothConfig;
use crate::constraint::ConstraintSet;
use crate::error::ClothError;
use crate::float::Float;
use crate::force::{CameraPose, ForceModel, FrameForces};
use crate::grid::{ParticleGrid, Plane};
use crate::observer::StepObserver;
use crate::pin::PinController;
use crate::quat::Quat;
use crate::solver::ConstraintSolver;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A cloth hanging from a pole.
///
/// Each [`step`](Cloth::step) runs, in order: force derivation, Verlet
/// integration, one constraint pass, pin placement and pole collision.
/// Pins come after the constraint pass so they never get dragged, and
/// collision comes last so it sees the final pinned layout.
pub struct Cloth<F: Float> {
    grid: ParticleGrid<F, Plane<F>>,
    constraints: ConstraintSet<F>,
    solver: ConstraintSolver,
    forces: ForceModel<F>,
    pins: PinController<F>,
    collider: ColliderResolver<F>,
    drag: F,
    timestep_sq: F,
}

impl<F: Float> Cloth<F> {
    /// Build the grid, its constraints, the pins and the pole together.
    pub fn from_config(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        let surface = Plane::new(config.cloth_width, config.cloth_height());
        let grid = ParticleGrid::new(
            config.width_segments,
            config.height_segments,
            surface,
            config.grid_offset(),
            config.particle_mass,
        );
        let constraints = ConstraintSet::from_grid(&grid, config.rest_distance());

        let standoff = Vec3::new(config.standoff(), F::zero(), F::zero());
        let pins = match &config.pin_indices {
            Some(indices) => PinController::from_indices(&grid, indices, standoff)?,
            None => PinController::right_edge(&grid, standoff),
        };

        Ok(Cloth {
            grid,
            constraints,
            solver: ConstraintSolver::new(),
            forces: ForceModel::new(config.gravity, config.min_wind, config.max_wind),
            pins,
            collider: ColliderResolver::new(config.pole()),
            drag: config.drag(),
            timestep_sq: config.timestep_sq(),
        })
    }

    /// Advance one fixed timestep.
    ///
    /// `elapsed_millis` only drives the wind oscillation; the integration
    /// step length is always the configured timestep.
    pub fn step<O: StepObserver<F>>(
        &mut self,
        elapsed_millis: F,
        camera: &CameraPose<F>,
        parent_orientation: Option<Quat<F>>,
        observer: &mut O,
    ) -> FrameForces<F> {
        let mass = self.grid.particle(0).mass();
        let forces = self.forces.frame_forces(camera, parent_orientation, elapsed_millis, mass);
        observer.on_forces(&forces);

        for p in self.grid.particles_mut() {
            p.apply_force(forces.gravity);
            p.apply_force(forces.wind);
            p.integrate(self.timestep_sq, self.drag);
        }
        observer.on_integrate();

        self.solver.relax(&self.constraints, self.grid.particles_mut());
        observer.on_relax();

        self.pins.apply(&mut self.grid);
        observer.on_pins();

        self.collider.resolve(self.grid.particles_mut());
        observer.on_collide();

        observer.on_step_complete();
        forces
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.grid.positions()
    }

    pub fn grid(&self) -> &ParticleGrid<F, Plane<F>> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut ParticleGrid<F, Plane<F>> {
        &mut self.grid
    }

    pub fn constraints(&self) -> &ConstraintSet<F> {
        &self.constraints
    }

    pub fn pins(&self) -> &PinController<F> {
        &self.pins
    }

    pub fn pole(&self) -> &Pole<F> {
        self.collider.pole()
    }

    /// Largest relative stretch of any constraint right now.
    pub fn max_strain(&self) -> F {
        self.solver.max_strain(&self.constraints, self.grid.particles())
    }

    pub fn particle_count(&self) -> usize { self.grid.particle_count() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}
