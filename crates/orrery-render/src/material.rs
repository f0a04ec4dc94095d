//! Phong material derivation and the per-node GPU uniform.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use orrery_scene::SurfaceColor;

/// CPU-side Phong material for a rendered body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Ambient reflectance, linear RGB.
    pub ambient: [f32; 3],
    /// Diffuse reflectance, linear RGB.
    pub diffuse: [f32; 3],
    /// Specular reflectance, linear RGB.
    pub specular: [f32; 3],
    /// Specular exponent.
    pub shininess: f32,
    /// Emitted light, linear RGB. Zero for non-luminous bodies.
    pub emissive: [f32; 3],
}

impl Material {
    /// Derive a material from a base surface color.
    ///
    /// Ambient is 20% of the base color, diffuse is the base color itself,
    /// and specular is always white.
    pub fn surface(r: f32, g: f32, b: f32, shininess: f32) -> Self {
        Self {
            ambient: [0.2 * r, 0.2 * g, 0.2 * b],
            diffuse: [r, g, b],
            specular: [1.0, 1.0, 1.0],
            shininess,
            emissive: [0.0, 0.0, 0.0],
        }
    }

    /// Set the emissive term, consuming and returning the material.
    pub fn with_emissive(mut self, emissive: [f32; 3]) -> Self {
        self.emissive = emissive;
        self
    }

    /// Build the GPU uniform for this material under the given model transform.
    pub fn to_uniform(&self, model: Mat4) -> NodeUniform {
        NodeUniform {
            model: model.to_cols_array_2d(),
            ambient: [self.ambient[0], self.ambient[1], self.ambient[2], 1.0],
            diffuse: [self.diffuse[0], self.diffuse[1], self.diffuse[2], 1.0],
            specular_shininess: [
                self.specular[0],
                self.specular[1],
                self.specular[2],
                self.shininess,
            ],
            emissive: [self.emissive[0], self.emissive[1], self.emissive[2], 0.0],
        }
    }
}

impl From<&SurfaceColor> for Material {
    fn from(color: &SurfaceColor) -> Self {
        Self::surface(color.rgb[0], color.rgb[1], color.rgb[2], color.shininess)
            .with_emissive(color.emissive)
    }
}

/// Per-node GPU data: model matrix plus material terms, 128 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct NodeUniform {
    /// Model matrix in column-major order.
    pub model: [[f32; 4]; 4],
    /// xyz = ambient reflectance, w unused.
    pub ambient: [f32; 4],
    /// xyz = diffuse reflectance, w unused.
    pub diffuse: [f32; 4],
    /// xyz = specular reflectance, w = shininess.
    pub specular_shininess: [f32; 4],
    /// xyz = emitted light, w unused.
    pub emissive: [f32; 4],
}
