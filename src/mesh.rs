//! Copying simulated positions into the host's vertex buffer.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// Vertex buffer owned by the rendering host.
///
/// Vertex `i` corresponds to particle `i` of the grid.
pub trait RenderMesh<F: Float> {
    fn set_position(&mut self, index: usize, x: F, y: F, z: F);
    /// Flag the buffer for re-upload.
    fn mark_dirty(&mut self);
    fn compute_vertex_normals(&mut self);
    fn compute_bounding_sphere(&mut self);
}

/// Writes a full particle pass into a [`RenderMesh`].
pub struct MeshSync;

impl MeshSync {
    pub fn write<F: Float, M: RenderMesh<F> + ?Sized>(particles: &[Particle<Vec3<F>>], mesh: &mut M) {
        for (i, p) in particles.iter().enumerate() {
            let pos = p.position;
            mesh.set_position(i, pos.x, pos.y, pos.z);
        }
        mesh.mark_dirty();
        mesh.compute_vertex_normals();
        mesh.compute_bounding_sphere();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec as AllocVec;

    #[derive(Default)]
    struct Buffer {
        vertices: AllocVec<(usize, f32, f32, f32)>,
        dirty: bool,
        normals: usize,
        bounds: usize,
    }

    impl RenderMesh<f32> for Buffer {
        fn set_position(&mut self, index: usize, x: f32, y: f32, z: f32) {
            self.vertices.push((index, x, y, z));
        }
        fn mark_dirty(&mut self) { self.dirty = true; }
        fn compute_vertex_normals(&mut self) { self.normals += 1; }
        fn compute_bounding_sphere(&mut self) { self.bounds += 1; }
    }

    #[test]
    fn writes_every_particle_then_refreshes() {
        let particles = [
            Particle::new(Vec3::new(1.0f32, 2.0, 3.0), 0.1),
            Particle::new(Vec3::new(4.0f32, 5.0, 6.0), 0.1),
        ];
        let mut buf = Buffer::default();
        MeshSync::write(&particles, &mut buf);
        assert_eq!(buf.vertices, [(0, 1.0, 2.0, 3.0), (1, 4.0, 5.0, 6.0)]);
        assert!(buf.dirty);
        assert_eq!((buf.normals, buf.bounds), (1, 1));
    }
}
