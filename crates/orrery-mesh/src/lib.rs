//! Procedural CPU-side geometry for the solar system scene: UV spheres,
//! orbit circle polylines, textured annuli, and the fullscreen backdrop quad.

pub mod annulus;
pub mod orbit;
pub mod quad;
pub mod sphere;

pub use annulus::generate_annulus;
pub use orbit::{generate_orbit_circle, orbit_loop_indices};
pub use quad::generate_fullscreen_quad;
pub use sphere::generate_uv_sphere;

/// Interleaved mesh data ready for GPU upload: one position, normal, and UV
/// per vertex, plus a triangle index list.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
