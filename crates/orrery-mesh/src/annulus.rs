//! Flat textured annulus generation for planetary rings.

use crate::MeshData;

/// Generate a flat annulus in the y=0 plane as a triangle list equivalent to
/// a closed triangle strip.
///
/// Texture coordinates map the inner edge to u=0 and the outer edge to u=1,
/// with v sweeping 0→1 around the circle. Normals face +Y. `segments`
/// controls tessellation smoothness and is caller-chosen.
pub fn generate_annulus(inner_radius: f32, outer_radius: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();

    for i in 0..=segments {
        let theta = std::f32::consts::TAU * i as f32 / segments as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let v = i as f32 / segments as f32;

        mesh.positions
            .push([inner_radius * cos_theta, 0.0, inner_radius * sin_theta]);
        mesh.normals.push([0.0, 1.0, 0.0]);
        mesh.uvs.push([0.0, v]);

        mesh.positions
            .push([outer_radius * cos_theta, 0.0, outer_radius * sin_theta]);
        mesh.normals.push([0.0, 1.0, 0.0]);
        mesh.uvs.push([1.0, v]);
    }

    // Strip order: inner_i, outer_i, inner_{i+1}, outer_{i+1}.
    for i in 0..segments {
        let a = i * 2;
        mesh.indices.extend_from_slice(&[a, a + 1, a + 2]);
        mesh.indices.extend_from_slice(&[a + 2, a + 1, a + 3]);
    }

    mesh
}
