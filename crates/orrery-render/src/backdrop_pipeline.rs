//! Full-screen backdrop pipeline for the galaxy image.
//!
//! The backdrop quad is drawn first each frame, directly in clip space with
//! no camera transform. Depth testing is disabled so everything else renders
//! on top of it.

use crate::buffer::{MeshBuffer, SceneVertex};

/// Pipeline for the full-screen star field backdrop.
pub struct BackdropPipeline {
    /// The underlying wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
}

impl BackdropPipeline {
    /// Create a new backdrop pipeline.
    ///
    /// `texture_bind_group_layout` is the layout for group 0 (texture + sampler).
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        texture_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("backdrop-shader"),
            source: wgpu::ShaderSource::Wgsl(BACKDROP_SHADER_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("backdrop-pipeline-layout"),
            bind_group_layouts: &[texture_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("backdrop-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SceneVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            // The pass carries a depth attachment, so the state must be
            // present, but the backdrop neither tests nor writes depth.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self { pipeline }
    }
}

/// Draw the backdrop quad.
pub fn draw_backdrop<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipeline: &BackdropPipeline,
    texture_bind_group: &'a wgpu::BindGroup,
    quad: &'a MeshBuffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, texture_bind_group, &[]);
    quad.bind(render_pass);
    quad.draw(render_pass);
}

/// WGSL shader source for the backdrop: textured quad dimmed to half alpha.
pub const BACKDROP_SHADER_SOURCE: &str = r#"
@group(0) @binding(0)
var t_backdrop: texture_2d<f32>;
@group(0) @binding(1)
var s_backdrop: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    // Positions are already in clip space.
    out.clip_position = vec4<f32>(in.position.xy, 0.0, 1.0);
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let tex = textureSample(t_backdrop, s_backdrop, in.uv);
    return vec4<f32>(tex.rgb, tex.a * 0.5);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::create_test_device_queue;

    #[test]
    fn test_backdrop_pipeline_creation() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let texture_manager = crate::texture::TextureManager::new(&device);
        let _pipeline = BackdropPipeline::new(
            &device,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            crate::depth::DepthBuffer::FORMAT,
            texture_manager.bind_group_layout(),
        );
    }

    #[test]
    fn test_backdrop_shader_compiles() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let _shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("backdrop-shader-test"),
            source: wgpu::ShaderSource::Wgsl(BACKDROP_SHADER_SOURCE.into()),
        });
    }
}
