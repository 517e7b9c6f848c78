//! Verlet particles: position-based dynamics with implicit velocity.

use crate::float::Float;
use crate::vec::Vec;

/// A single cloth particle.
///
/// Velocity is never stored; it is the difference between `position` and
/// `previous`. `original` is the rest-state position and never changes
/// after construction.
#[derive(Clone, Debug)]
pub struct Particle<V: Vec> {
    pub position: V,
    pub previous: V,
    original: V,
    pub acceleration: V,
    mass: V::Scalar,
    inv_mass: V::Scalar,
}

impl<V: Vec> Particle<V> {
    /// Create a particle at rest at `pos`.
    ///
    /// `mass` must be positive; it is not checked.
    pub fn new(pos: V, mass: V::Scalar) -> Self {
        Particle {
            position: pos,
            previous: pos,
            original: pos,
            acceleration: V::zero(),
            mass,
            inv_mass: V::Scalar::one() / mass,
        }
    }

    pub fn original(&self) -> V {
        self.original
    }

    pub fn mass(&self) -> V::Scalar {
        self.mass
    }

    pub fn inv_mass(&self) -> V::Scalar {
        self.inv_mass
    }

    /// Accumulate a force as acceleration (`force / mass`).
    pub fn apply_force(&mut self, force: V) {
        self.acceleration = self.acceleration + force.scale(self.inv_mass);
    }

    /// Verlet step, then clear the accumulated acceleration.
    ///
    /// `drag` is the fraction of the implied velocity kept (`1 - damping`).
    pub fn integrate(&mut self, timestep_sq: V::Scalar, drag: V::Scalar) {
        let velocity = self.velocity_raw().scale(drag);
        let new_pos = velocity + self.position + self.acceleration.scale(timestep_sq);
        self.previous = self.position;
        self.position = new_pos;
        self.acceleration = V::zero();
    }

    /// Place the particle at `pos` with zero implied velocity.
    pub fn teleport(&mut self, pos: V) {
        self.position = pos;
        self.previous = pos;
    }

    pub fn velocity_raw(&self) -> V {
        self.position - self.previous
    }

    pub fn displacement(&self) -> V::Scalar {
        self.position.distance(self.original)
    }
}
