//! Gravity and camera-relative wind.

use crate::float::Float;
use crate::quat::Quat;
use crate::vec::{Vec, Vec3};

/// Camera orientation sampled for one frame, in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose<F: Float> {
    pub forward: Vec3<F>,
    pub up: Vec3<F>,
}

impl<F: Float> CameraPose<F> {
    pub fn new(forward: Vec3<F>, up: Vec3<F>) -> Self {
        CameraPose { forward, up }
    }

    /// Camera looking down `-z` with `+y` up.
    pub fn looking_down_negative_z() -> Self {
        CameraPose {
            forward: Vec3::new(F::zero(), F::zero(), -F::one()),
            up: Vec3::new(F::zero(), F::one(), F::zero()),
        }
    }
}

/// External forces for one frame, already expressed in the cloth's frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameForces<F: Float> {
    pub gravity: Vec3<F>,
    pub wind: Vec3<F>,
    pub wind_strength: F,
}

/// Derives gravity and wind each frame. Holds no per-frame state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceModel<F: Float> {
    pub gravity_magnitude: F,
    pub min_wind: F,
    pub max_wind: F,
}

impl<F: Float> ForceModel<F> {
    pub fn new(gravity_magnitude: F, min_wind: F, max_wind: F) -> Self {
        ForceModel { gravity_magnitude, min_wind, max_wind }
    }

    /// Wind strength oscillates between the two bounds with a period of
    /// `2π` seconds.
    pub fn wind_strength(&self, elapsed_millis: F) -> F {
        let phase = ((elapsed_millis / F::from_f32(1000.0)).sin() + F::one()) * F::half();
        self.min_wind.lerp(self.max_wind, phase)
    }

    /// Wind blows toward the camera's left.
    pub fn compute_wind(&self, forward: Vec3<F>, up: Vec3<F>, elapsed_millis: F) -> Vec3<F> {
        let right = forward.cross(up).normalize();
        (-right).scale(self.wind_strength(elapsed_millis))
    }

    pub fn compute_gravity(&self, mass: F) -> Vec3<F> {
        Vec3::new(F::zero(), -self.gravity_magnitude * mass, F::zero())
    }

    /// Gravity and wind for this frame.
    ///
    /// `parent_orientation` is the world orientation of the node the cloth
    /// hangs from, or `None` when that node is the world root. It must be
    /// sampled fresh every frame since the parent may be moving.
    pub fn frame_forces(
        &self,
        camera: &CameraPose<F>,
        parent_orientation: Option<Quat<F>>,
        elapsed_millis: F,
        mass: F,
    ) -> FrameForces<F> {
        let wind_strength = self.wind_strength(elapsed_millis);
        let gravity = self.compute_gravity(mass);
        let wind = self.compute_wind(camera.forward, camera.up, elapsed_millis);

        match parent_orientation {
            Some(orientation) => {
                let to_local = orientation.inverse();
                FrameForces {
                    gravity: to_local.rotate(gravity),
                    wind: to_local.rotate(wind),
                    wind_strength,
                }
            }
            None => FrameForces { gravity, wind, wind_strength },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ForceModel<f64> {
        ForceModel::new(100.0, 24.0, 228.0)
    }

    #[test]
    fn wind_strength_spans_range() {
        let m = model();
        assert!((m.wind_strength(0.0) - 126.0).abs() < 1e-9);
        let peak = 1000.0 * core::f64::consts::PI * 0.5;
        assert!((m.wind_strength(peak) - 228.0).abs() < 1e-9);
        assert!((m.wind_strength(3.0 * peak) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn wind_blows_to_camera_left() {
        let cam = CameraPose::<f64>::looking_down_negative_z();
        let wind = model().compute_wind(cam.forward, cam.up, 0.0);
        assert!((wind.x + 126.0).abs() < 1e-9);
        assert_eq!(wind.y, 0.0);
        assert_eq!(wind.z, 0.0);
    }

    #[test]
    fn gravity_scales_with_mass() {
        assert_eq!(model().compute_gravity(0.1), Vec3::new(0.0, -100.0 * 0.1, 0.0));
    }

    #[test]
    fn world_root_leaves_forces_unrotated() {
        let cam = CameraPose::looking_down_negative_z();
        let forces = model().frame_forces(&cam, None, 0.0, 0.1);
        assert_eq!(forces.gravity, model().compute_gravity(0.1));
        assert_eq!(forces.wind, model().compute_wind(cam.forward, cam.up, 0.0));
    }

    #[test]
    fn rotated_parent_sees_forces_in_local_frame() {
        // Parent rolled 90° about z: world down is local -x.
        let parent = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), core::f64::consts::PI * 0.5);
        let cam = CameraPose::looking_down_negative_z();
        let forces = model().frame_forces(&cam, Some(parent), 0.0, 0.1);
        assert!((forces.gravity.x + 10.0).abs() < 1e-9, "{:?}", forces.gravity);
        assert!(forces.gravity.y.abs() < 1e-9);
    }
}
