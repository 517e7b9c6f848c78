//! What the hosting render loop provides to a cloth.

use crate::float::Float;
use crate::force::CameraPose;
use crate::material::{MaterialConfig, Phong};
use crate::mesh::RenderMesh;
use crate::quat::Quat;
use crate::vec::Vec3;

/// Registration token for a per-frame step callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepHandle(pub u64);

/// A mesh the cloth asks the host to create and attach to its parent node.
#[derive(Clone, Debug)]
pub enum MeshDesc<'a, F: Float> {
    /// The cloth surface: one vertex per particle, row-major.
    Cloth {
        rest_positions: &'a [Vec3<F>],
        width_segments: usize,
        height_segments: usize,
        material: &'a MaterialConfig,
        phong: Phong,
    },
    /// The pole, drawn as a box of `thickness × height × thickness`.
    Pole {
        center: Vec3<F>,
        thickness: F,
        height: F,
        phong: Phong,
    },
}

/// Host services consumed by [`ClothSimulation`](crate::simulation::ClothSimulation).
///
/// Meshes handed out by `create_mesh` come back through `release_mesh`
/// exactly once. Releasing a mesh frees its geometry, material and any
/// texture the host loaded for it.
pub trait SimulationContext<F: Float> {
    type Mesh: RenderMesh<F>;

    /// Current camera orientation, or `None` if the host has no camera.
    fn camera(&self) -> Option<CameraPose<F>>;

    /// World orientation of the cloth's parent node, or `None` when the
    /// parent is the world root.
    fn parent_orientation(&self) -> Option<Quat<F>>;

    fn create_mesh(&mut self, desc: MeshDesc<'_, F>) -> Self::Mesh;

    fn release_mesh(&mut self, mesh: Self::Mesh);

    /// Start delivering frames to this cloth.
    fn register_step(&mut self) -> StepHandle;

    /// Stop delivering frames. Takes effect before the next frame.
    fn unregister_step(&mut self, handle: StepHandle);
}

impl<F: Float, C: SimulationContext<F> + ?Sized> SimulationContext<F> for &mut C {
    type Mesh = C::Mesh;

    fn camera(&self) -> Option<CameraPose<F>> {
        (**self).camera()
    }

    fn parent_orientation(&self) -> Option<Quat<F>> {
        (**self).parent_orientation()
    }

    fn create_mesh(&mut self, desc: MeshDesc<'_, F>) -> Self::Mesh {
        (**self).create_mesh(desc)
    }

    fn release_mesh(&mut self, mesh: Self::Mesh) {
        (**self).release_mesh(mesh)
    }

    fn register_step(&mut self) -> StepHandle {
        (**self).register_step()
    }

    fn unregister_step(&mut self, handle: StepHandle) {
        (**self).unregister_step(handle)
    }
}
