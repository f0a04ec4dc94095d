//! Line-strip pipeline for the orbital path circles.
//!
//! Orbit lines are unlit, drawn as translucent white line strips that close
//! back on their first point. They test against depth but never write it, so
//! bodies always occlude them without the thin lines punching holes.

use std::num::NonZeroU64;

use crate::buffer::{LineVertex, MeshBuffer};

/// Pipeline for orbit path circles.
pub struct OrbitPipeline {
    /// The underlying wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Camera uniform bind group layout (group 0).
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
}

impl OrbitPipeline {
    /// Create a new orbit line pipeline.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orbit-shader"),
            source: wgpu::ShaderSource::Wgsl(ORBIT_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("orbit-camera-bind-group-layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    // Same visibility as the body pipeline's camera layout, so
                    // one camera bind group serves both pipelines.
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(80), // CameraUniform: mat4x4 + vec4
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("orbit-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("orbit-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[LineVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: Some(wgpu::IndexFormat::Uint32),
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: false,
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

        Self {
            pipeline,
            camera_bind_group_layout,
        }
    }
}

/// Draw one orbit circle.
pub fn draw_orbit<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipeline: &OrbitPipeline,
    camera_bind_group: &'a wgpu::BindGroup,
    orbit: &'a MeshBuffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    orbit.bind(render_pass);
    orbit.draw(render_pass);
}

/// WGSL shader source for orbit lines: constant translucent white.
pub const ORBIT_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    eye: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return camera.view_proj * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, 0.5);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::create_test_device_queue;

    #[test]
    fn test_orbit_pipeline_creation() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let _pipeline = OrbitPipeline::new(
            &device,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            crate::depth::DepthBuffer::FORMAT,
        );
    }

    #[test]
    fn test_camera_bind_group_from_body_layout_draws_orbits() {
        use wgpu::util::DeviceExt;

        use crate::body_pipeline::BodyPipeline;
        use crate::buffer::{BufferAllocator, IndexData};
        use crate::camera::SolarCamera;
        use crate::depth::DepthBuffer;
        use crate::texture::TextureManager;

        let Some((device, queue)) = create_test_device_queue() else {
            return;
        };
        let format = wgpu::TextureFormat::Bgra8UnormSrgb;

        // The app creates one camera bind group from the body pipeline's
        // layout and binds it for every pipeline, so the orbit layout must
        // stay group-equivalent to the body one.
        let textures = TextureManager::new(&device);
        let body = BodyPipeline::new(
            &device,
            format,
            DepthBuffer::FORMAT,
            textures.bind_group_layout(),
        );
        let orbit_pipeline = OrbitPipeline::new(&device, format, DepthBuffer::FORMAT);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera-uniform"),
            contents: bytemuck::cast_slice(&[SolarCamera::default().to_uniform()]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &body.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let allocator = BufferAllocator::new(&device);
        let points = [
            LineVertex {
                position: [1.0, 0.0, 0.0],
            },
            LineVertex {
                position: [0.0, 0.0, 1.0],
            },
            LineVertex {
                position: [-1.0, 0.0, 0.0],
            },
        ];
        let orbit = allocator.create_mesh(
            "orbit-test",
            bytemuck::cast_slice(&points),
            IndexData::U32(&[0, 1, 2, 0]),
        );

        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("orbit-test-target"),
            size: wgpu::Extent3d {
                width: 16,
                height: 16,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());
        let depth = DepthBuffer::new(&device, 16, 16);

        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let mut encoder =
            device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orbit-test-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target_view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(DepthBuffer::CLEAR_VALUE),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            draw_orbit(&mut pass, &orbit_pipeline, &camera_bind_group, &orbit);
        }
        queue.submit([encoder.finish()]);

        let error = pollster::block_on(error_scope.pop());
        assert!(error.is_none(), "orbit draw failed validation: {error:?}");
    }

    #[test]
    fn test_orbit_shader_compiles() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let _shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orbit-shader-test"),
            source: wgpu::ShaderSource::Wgsl(ORBIT_SHADER_SOURCE.into()),
        });
    }
}
