//! UV sphere generation with poles on the Z axis.
//!
//! The pole convention matches classic quadric spheres: geometry is generated
//! around +Z, and the scene applies a fixed 90° axis-correction rotation to
//! align the pole with the world's vertical axis.

use crate::MeshData;

/// Generate a UV sphere of the given radius.
///
/// `slices` is the segment count around the equator, `stacks` the count from
/// pole to pole. Texture coordinates wrap u around the equator and run v from
/// the -Z pole (v=0) to the +Z pole (v=1).
pub fn generate_uv_sphere(radius: f32, slices: u32, stacks: u32) -> MeshData {
    let slices = slices.max(3);
    let stacks = stacks.max(2);

    let mut mesh = MeshData::default();
    let vertex_count = ((slices + 1) * (stacks + 1)) as usize;
    mesh.positions.reserve(vertex_count);
    mesh.normals.reserve(vertex_count);
    mesh.uvs.reserve(vertex_count);

    for stack in 0..=stacks {
        // Polar angle from the +Z pole.
        let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for slice in 0..=slices {
            let theta = std::f32::consts::TAU * slice as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let normal = [sin_phi * cos_theta, sin_phi * sin_theta, cos_phi];
            mesh.positions
                .push([normal[0] * radius, normal[1] * radius, normal[2] * radius]);
            mesh.normals.push(normal);
            mesh.uvs.push([
                slice as f32 / slices as f32,
                1.0 - stack as f32 / stacks as f32,
            ]);
        }
    }

    let ring = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * ring + slice;
            let b = a + ring;
            mesh.indices.extend_from_slice(&[a, b, a + 1]);
            mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
        }
    }

    mesh
}
