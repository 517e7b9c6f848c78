//! Step observer trait for monitoring the per-frame pipeline.

use crate::float::Float;
use crate::force::FrameForces;

/// Hooks called at each stage of a cloth step, in pipeline order.
///
/// All methods default to no-ops.
pub trait StepObserver<F: Float> {
    /// Called once the frame's gravity and wind are known.
    fn on_forces(&mut self, _forces: &FrameForces<F>) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after the constraint pass.
    fn on_relax(&mut self) {}

    /// Called after pins have been re-applied.
    fn on_pins(&mut self) {}

    /// Called after pole collision.
    fn on_collide(&mut self) {}

    /// Called when the step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Emits a `trace` event per stage.
#[derive(Default)]
pub struct TracingObserver {
    steps: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        TracingObserver { steps: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<F: Float> StepObserver<F> for TracingObserver {
    fn on_forces(&mut self, forces: &FrameForces<F>) {
        tracing::trace!(
            step = self.steps,
            wind_strength = ?forces.wind_strength,
            wind = ?forces.wind,
            gravity = ?forces.gravity,
            "frame forces"
        );
    }

    fn on_collide(&mut self) {
        tracing::trace!(step = self.steps, "pole collision resolved");
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
