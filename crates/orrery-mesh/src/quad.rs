//! Fullscreen backdrop quad in normalized device coordinates.

use crate::MeshData;

/// Generate a quad spanning the full viewport in NDC ([-1, 1] on both axes),
/// with UVs oriented so v=0 is the top row of the source image.
pub fn generate_fullscreen_quad() -> MeshData {
    MeshData {
        positions: vec![
            [-1.0, -1.0, 0.0],
            [1.0, -1.0, 0.0],
            [1.0, 1.0, 0.0],
            [-1.0, 1.0, 0.0],
        ],
        normals: vec![[0.0, 0.0, 1.0]; 4],
        uvs: vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_spans_ndc() {
        let mesh = generate_fullscreen_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        let xs: Vec<f32> = mesh.positions.iter().map(|p| p[0]).collect();
        assert!(xs.contains(&-1.0) && xs.contains(&1.0));
    }

    #[test]
    fn test_uv_corners_cover_texture() {
        let mesh = generate_fullscreen_quad();
        assert!(mesh.uvs.contains(&[0.0, 0.0]));
        assert!(mesh.uvs.contains(&[1.0, 1.0]));
    }
}
