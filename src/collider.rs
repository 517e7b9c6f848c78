//! The pole: an infinite vertical cylinder the cloth cannot enter.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::{Vec, Vec2, Vec3};

/// Pole geometry.
///
/// Only `center.x`, `center.z` and `radius` take part in collision; `height`
/// and `center.y` place the render mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pole<F: Float> {
    pub center: Vec3<F>,
    pub radius: F,
    pub height: F,
}

impl<F: Float> Pole<F> {
    pub fn new(center: Vec3<F>, radius: F, height: F) -> Self {
        Pole { center, radius, height }
    }

    /// Horizontal distance from the pole axis.
    pub fn planar_distance(&self, point: Vec3<F>) -> F {
        (point.xz() - self.center.xz()).length()
    }
}

/// Pushes particles radially out of the pole.
#[derive(Clone, Copy, Debug)]
pub struct ColliderResolver<F: Float> {
    pole: Pole<F>,
}

impl<F: Float> ColliderResolver<F> {
    pub fn new(pole: Pole<F>) -> Self {
        ColliderResolver { pole }
    }

    pub fn pole(&self) -> &Pole<F> {
        &self.pole
    }

    /// Resolve penetration for every particle. Height is never changed.
    ///
    /// A particle exactly on the axis has no outward direction and is left
    /// where it is.
    pub fn resolve(&self, particles: &mut [Particle<Vec3<F>>]) {
        let axis = self.pole.center.xz();
        let radius = self.pole.radius;
        for p in particles.iter_mut() {
            let d: Vec2<F> = p.position.xz() - axis;
            let dist = d.length();
            if dist > F::zero() && dist < radius {
                let push = d.scale((radius - dist) / dist);
                p.position.x = p.position.x + push.x;
                p.position.z = p.position.z + push.y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ColliderResolver<f64> {
        ColliderResolver::new(Pole::new(Vec3::new(10.0, -300.0, 0.0), 2.5, 800.0))
    }

    #[test]
    fn penetrating_particle_lands_on_surface() {
        let mut ps = [Particle::new(Vec3::new(11.0, 40.0, 0.0), 0.1)];
        resolver().resolve(&mut ps);
        assert!((ps[0].position.x - 12.5).abs() < 1e-12);
        assert_eq!(ps[0].position.y, 40.0);
        assert_eq!(ps[0].position.z, 0.0);
    }

    #[test]
    fn outside_particle_is_untouched() {
        let at = Vec3::new(20.0, 0.0, 3.0);
        let mut ps = [Particle::new(at, 0.1)];
        resolver().resolve(&mut ps);
        assert_eq!(ps[0].position, at);
    }

    #[test]
    fn particle_on_axis_is_skipped() {
        let at = Vec3::new(10.0, 7.0, 0.0);
        let mut ps = [Particle::new(at, 0.1)];
        resolver().resolve(&mut ps);
        assert_eq!(ps[0].position, at);
    }

    #[test]
    fn previous_position_is_not_touched() {
        let mut ps = [Particle::new(Vec3::new(10.0, 0.0, 1.0), 0.1)];
        resolver().resolve(&mut ps);
        assert_eq!(ps[0].previous, Vec3::new(10.0, 0.0, 1.0));
        assert!((resolver().pole().planar_distance(ps[0].position) - 2.5).abs() < 1e-12);
    }
}
