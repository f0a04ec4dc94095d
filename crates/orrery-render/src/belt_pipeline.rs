//! Instanced rendering pipeline for the asteroid belt.
//!
//! All asteroids share one small sphere mesh and one material; per-asteroid
//! world positions arrive as an instance buffer of `vec3` offsets.

use crate::buffer::{MeshBuffer, SceneVertex};

/// Byte size of one instance: a single world-space offset.
pub const INSTANCE_STRIDE: u64 = std::mem::size_of::<[f32; 3]>() as u64;

/// Vertex buffer layout for the per-instance offset (slot 1).
pub fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![3 => Float32x3];
    wgpu::VertexBufferLayout {
        array_stride: INSTANCE_STRIDE,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRIBUTES,
    }
}

/// Pipeline for the instanced asteroid belt.
pub struct BeltPipeline {
    /// The underlying wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
}

impl BeltPipeline {
    /// Create a new belt pipeline.
    ///
    /// Reuses the body pipeline's bind group layouts so the same camera,
    /// light, and node bind groups can be shared.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
        node_bind_group_layout: &wgpu::BindGroupLayout,
        texture_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("belt-shader"),
            source: wgpu::ShaderSource::Wgsl(BELT_SHADER_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("belt-pipeline-layout"),
            bind_group_layouts: &[
                camera_bind_group_layout,
                light_bind_group_layout,
                node_bind_group_layout,
                texture_bind_group_layout,
            ],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("belt-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SceneVertex::layout(), instance_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::GreaterEqual,
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

/// Draw the asteroid belt with one instanced call.
#[allow(clippy::too_many_arguments)]
pub fn draw_belt<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipeline: &BeltPipeline,
    camera_bind_group: &'a wgpu::BindGroup,
    light_bind_group: &'a wgpu::BindGroup,
    node_bind_group: &'a wgpu::BindGroup,
    texture_bind_group: &'a wgpu::BindGroup,
    mesh: &'a MeshBuffer,
    instance_buffer: &'a wgpu::Buffer,
    instance_count: u32,
) {
    if instance_count == 0 {
        return;
    }
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, light_bind_group, &[]);
    render_pass.set_bind_group(2, node_bind_group, &[]);
    render_pass.set_bind_group(3, texture_bind_group, &[]);
    render_pass.set_vertex_buffer(1, instance_buffer.slice(..));
    mesh.bind(render_pass);
    mesh.draw_instanced(render_pass, instance_count);
}

/// WGSL shader source for instanced asteroid rendering.
pub const BELT_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    eye: vec4<f32>,
};

struct PointLight {
    position: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
};

struct NodeUniform {
    model: mat4x4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular_shininess: vec4<f32>,
    emissive: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var<uniform> light: PointLight;

@group(2) @binding(0)
var<uniform> node: NodeUniform;

@group(3) @binding(0)
var t_diffuse: texture_2d<f32>;
@group(3) @binding(1)
var s_diffuse: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) offset: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = (node.model * vec4<f32>(in.position, 1.0)).xyz + in.offset;
    out.clip_position = camera.view_proj * vec4<f32>(world, 1.0);
    out.world_position = world;
    out.world_normal = (node.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let tex = textureSample(t_diffuse, s_diffuse, in.uv);
    let n = normalize(in.world_normal);
    let to_light = normalize(light.position.xyz - in.world_position);
    let to_eye = normalize(camera.eye.xyz - in.world_position);

    let ambient = light.ambient.rgb * node.ambient.rgb;

    let n_dot_l = max(dot(n, to_light), 0.0);
    let diffuse = light.diffuse.rgb * node.diffuse.rgb * n_dot_l;

    let reflected = reflect(-to_light, n);
    let r_dot_v = max(dot(reflected, to_eye), 0.0);
    var specular = vec3<f32>(0.0);
    if (n_dot_l > 0.0) {
        specular = light.specular.rgb * node.specular_shininess.rgb
            * pow(r_dot_v, node.specular_shininess.w);
    }

    let lit = node.emissive.rgb + ambient + diffuse + specular;
    return vec4<f32>(lit * tex.rgb, tex.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::create_test_device_queue;

    #[test]
    fn test_instance_layout_stride() {
        let layout = instance_layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(layout.attributes[0].shader_location, 3);
    }

    #[test]
    fn test_belt_pipeline_creation() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let texture_manager = crate::texture::TextureManager::new(&device);
        let body = crate::body_pipeline::BodyPipeline::new(
            &device,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            crate::depth::DepthBuffer::FORMAT,
            texture_manager.bind_group_layout(),
        );
        let _belt = BeltPipeline::new(
            &device,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            crate::depth::DepthBuffer::FORMAT,
            &body.camera_bind_group_layout,
            &body.light_bind_group_layout,
            &body.node_bind_group_layout,
            texture_manager.bind_group_layout(),
        );
    }

    #[test]
    fn test_belt_shader_compiles() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let _shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("belt-shader-test"),
            source: wgpu::ShaderSource::Wgsl(BELT_SHADER_SOURCE.into()),
        });
    }
}
