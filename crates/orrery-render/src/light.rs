//! The single point light at the heart of the system.

use bytemuck::{Pod, Zeroable};

/// Ambient intensity, applied uniformly to all channels.
pub const LIGHT_AMBIENT: f32 = 1.5;
/// Diffuse intensity.
pub const LIGHT_DIFFUSE: f32 = 5.0;
/// Specular intensity.
pub const LIGHT_SPECULAR: f32 = 5.0;

/// GPU-side point light data, 64 bytes. The light sits at the origin,
/// coincident with the sun, and never moves.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PointLightUniform {
    /// xyz = world-space position, w = 1 (positional light).
    pub position: [f32; 4],
    /// xyz = ambient intensity, w unused.
    pub ambient: [f32; 4],
    /// xyz = diffuse intensity, w unused.
    pub diffuse: [f32; 4],
    /// xyz = specular intensity, w unused.
    pub specular: [f32; 4],
}

impl PointLightUniform {
    /// The sun's light: positioned at the origin with fixed intensities.
    pub fn solar() -> Self {
        Self {
            position: [0.0, 0.0, 0.0, 1.0],
            ambient: [LIGHT_AMBIENT, LIGHT_AMBIENT, LIGHT_AMBIENT, 1.0],
            diffuse: [LIGHT_DIFFUSE, LIGHT_DIFFUSE, LIGHT_DIFFUSE, 1.0],
            specular: [LIGHT_SPECULAR, LIGHT_SPECULAR, LIGHT_SPECULAR, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_light_sits_at_origin() {
        let light = PointLightUniform::solar();
        assert_eq!(light.position, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_solar_light_intensities() {
        let light = PointLightUniform::solar();
        assert_eq!(light.ambient[0], 1.5);
        assert_eq!(light.diffuse[0], 5.0);
        assert_eq!(light.specular[0], 5.0);
    }

    #[test]
    fn test_uniform_size_matches_shader_layout() {
        assert_eq!(std::mem::size_of::<PointLightUniform>(), 64);
    }
}
