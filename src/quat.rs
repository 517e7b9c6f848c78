//! Unit quaternions for re-expressing world forces in a parent frame.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// Rotation quaternion `w + xi + yj + zk`. Assumed unit length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quat<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Quat<F> {
    pub fn new(x: F, y: F, z: F, w: F) -> Self {
        Quat { x, y, z, w }
    }

    pub fn identity() -> Self {
        Quat::new(F::zero(), F::zero(), F::zero(), F::one())
    }

    /// Rotation of `angle` radians about `axis` (normalized here).
    pub fn from_axis_angle(axis: Vec3<F>, angle: F) -> Self {
        let axis = axis.normalize();
        let half = angle * F::half();
        let s = half.sin();
        Quat::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    /// Inverse rotation. Equal to the conjugate for unit quaternions.
    pub fn inverse(self) -> Self {
        Quat::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotate a vector: `q * v * q⁻¹`, expanded.
    pub fn rotate(self, v: Vec3<F>) -> Vec3<F> {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v).scale(F::two());
        v + t.scale(self.w) + u.cross(t)
    }
}

impl<F: Float> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3<f64>, b: Vec3<f64>) -> bool {
        a.distance(b) < 1e-12
    }

    #[test]
    fn identity_leaves_vector_alone() {
        let v = Vec3::new(1.0f64, -2.0, 3.0);
        assert_eq!(Quat::identity().rotate(v), v);
    }

    #[test]
    fn quarter_turn_about_y() {
        let q = Quat::from_axis_angle(Vec3::new(0.0f64, 1.0, 0.0), core::f64::consts::PI * 0.5);
        let r = q.rotate(Vec3::new(1.0, 0.0, 0.0));
        assert!(close(r, Vec3::new(0.0, 0.0, -1.0)), "got {:?}", r);
    }

    #[test]
    fn inverse_undoes_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(1.0f64, 1.0, 0.0), 0.7);
        let v = Vec3::new(0.0, -10.0, 0.0);
        assert!(close(q.inverse().rotate(q.rotate(v)), v));
    }
}
