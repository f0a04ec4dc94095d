//! GPU-resident solar system scene: meshes, textures, uniforms, and the
//! per-frame draw sequence.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glam::Mat4;
use tracing::info;
use wgpu::util::DeviceExt;

use orrery_assets::{AssetError, TextureSources, file_name};
use orrery_config::SceneConfig;
use orrery_mesh::{
    generate_annulus, generate_fullscreen_quad, generate_orbit_circle, generate_uv_sphere,
    orbit_loop_indices,
};
use orrery_render::{
    BackdropPipeline, BeltPipeline, BodyPipeline, BufferAllocator, DepthBuffer, FrameEncoder,
    IndexData, LineVertex, ManagedTexture, Material, MeshBuffer, OrbitPipeline, PointLightUniform,
    RenderContext, RenderPassBuilder, SPACE_BLACK, SolarCamera, SurfaceError, TextureError,
    TextureManager, draw_backdrop, draw_belt, draw_body, draw_orbit,
};
use orrery_scene::{AsteroidBelt, PLANETS, SUN, SceneComposer, SurfaceColor, TextureKey};

/// Sphere tessellation for the sun and planets.
const PLANET_TESSELLATION: u32 = 32;
/// Sphere tessellation for small bodies (moon, asteroids).
const SMALL_BODY_TESSELLATION: u32 = 16;
/// Asteroid sphere radius.
const ASTEROID_RADIUS: f32 = 0.1;
/// Asteroid surface: mid grey, lightly specular.
const ASTEROID_COLOR: SurfaceColor = SurfaceColor::surface(0.5, 0.5, 0.5, 10.0);

/// Errors that can occur while building the scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneBuildError {
    /// A texture file failed to load or decode.
    #[error(transparent)]
    Asset(#[from] AssetError),
    /// A decoded image could not be uploaded to the GPU.
    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// One drawable body: its mesh, material, and GPU-side node uniform.
struct BodyNode {
    mesh: MeshBuffer,
    material: Material,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    texture: Arc<ManagedTexture>,
}

/// The full GPU scene, built once at startup and drawn every frame.
pub struct SolarSystem {
    composer: SceneComposer,

    body_pipeline: BodyPipeline,
    belt_pipeline: BeltPipeline,
    orbit_pipeline: OrbitPipeline,
    backdrop_pipeline: BackdropPipeline,

    camera_bind_group: wgpu::BindGroup,
    light_bind_group: wgpu::BindGroup,
    // Held so the GPU buffers outlive their bind groups.
    _camera_buffer: wgpu::Buffer,
    _light_buffer: wgpu::Buffer,

    sun: BodyNode,
    planets: Vec<BodyNode>,
    ring: BodyNode,
    moon: BodyNode,

    belt_node: BodyNode,
    belt_instances: wgpu::Buffer,
    belt_instance_count: u32,

    orbits: Vec<MeshBuffer>,
    backdrop_quad: MeshBuffer,
    backdrop_texture: Arc<ManagedTexture>,
}

impl SolarSystem {
    /// Load textures, build all meshes and uniforms, and wire up the
    /// pipelines. Fails fast if any texture is missing or undecodable.
    pub fn new(gpu: &RenderContext, scene_config: &SceneConfig) -> Result<Self, SceneBuildError> {
        let sources = TextureSources::load_all(Path::new(&scene_config.texture_dir))?;

        let mut texture_manager = TextureManager::new(&gpu.device);
        let mut textures: HashMap<TextureKey, Arc<ManagedTexture>> = HashMap::new();
        for key in TextureKey::ALL {
            let image = sources
                .get(key)
                .expect("load_all fills every key or errors");
            let managed = texture_manager.create_texture(
                &gpu.device,
                &gpu.queue,
                file_name(key),
                &image.pixels,
                image.width,
                image.height,
                wgpu::TextureFormat::Rgba8UnormSrgb,
                true,
            )?;
            textures.insert(key, managed);
        }
        // The moon carries no image; a white texel lets its material show.
        let white = texture_manager.create_white(&gpu.device, &gpu.queue)?;

        let body_pipeline = BodyPipeline::new(
            &gpu.device,
            gpu.surface_format,
            DepthBuffer::FORMAT,
            texture_manager.bind_group_layout(),
        );
        let belt_pipeline = BeltPipeline::new(
            &gpu.device,
            gpu.surface_format,
            DepthBuffer::FORMAT,
            &body_pipeline.camera_bind_group_layout,
            &body_pipeline.light_bind_group_layout,
            &body_pipeline.node_bind_group_layout,
            texture_manager.bind_group_layout(),
        );
        let orbit_pipeline =
            OrbitPipeline::new(&gpu.device, gpu.surface_format, DepthBuffer::FORMAT);
        let backdrop_pipeline = BackdropPipeline::new(
            &gpu.device,
            gpu.surface_format,
            DepthBuffer::FORMAT,
            texture_manager.bind_group_layout(),
        );

        // Camera and light never change after startup.
        let camera = SolarCamera::default();
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("camera-uniform"),
                contents: bytemuck::cast_slice(&[camera.to_uniform()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &body_pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let light_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("light-uniform"),
                contents: bytemuck::cast_slice(&[PointLightUniform::solar()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let light_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("light-bind-group"),
            layout: &body_pipeline.light_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: light_buffer.as_entire_binding(),
            }],
        });

        let allocator = BufferAllocator::new(&gpu.device);

        let make_node = |label: &str,
                         mesh: MeshBuffer,
                         color: &SurfaceColor,
                         texture: Arc<ManagedTexture>| {
            let material = Material::from(color);
            let uniform_buffer =
                gpu.device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some(&format!("{label}-node-uniform")),
                        contents: bytemuck::cast_slice(&[material.to_uniform(Mat4::IDENTITY)]),
                        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    });
            let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("{label}-node-bind-group")),
                layout: &body_pipeline.node_bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            BodyNode {
                mesh,
                material,
                uniform_buffer,
                bind_group,
                texture,
            }
        };

        let sun = make_node(
            "sun",
            allocator.upload_mesh(
                "sun",
                &generate_uv_sphere(SUN.body_radius, PLANET_TESSELLATION, PLANET_TESSELLATION),
            ),
            &SUN.color,
            Arc::clone(&textures[&SUN.texture]),
        );

        let planets: Vec<BodyNode> = PLANETS
            .iter()
            .map(|body| {
                make_node(
                    body.name,
                    allocator.upload_mesh(
                        body.name,
                        &generate_uv_sphere(
                            body.body_radius,
                            PLANET_TESSELLATION,
                            PLANET_TESSELLATION,
                        ),
                    ),
                    &body.color,
                    Arc::clone(&textures[&body.texture]),
                )
            })
            .collect();

        let ring_def = PLANETS
            .iter()
            .find_map(|body| body.ring.as_ref())
            .expect("one planet is ringed");
        let ring = make_node(
            "saturn-ring",
            allocator.upload_mesh(
                "saturn-ring",
                &generate_annulus(
                    ring_def.inner_radius,
                    ring_def.outer_radius,
                    ring_def.segments,
                ),
            ),
            &SurfaceColor::surface(1.0, 1.0, 1.0, 10.0),
            Arc::clone(&textures[&ring_def.texture]),
        );

        let moon_def = PLANETS
            .iter()
            .find_map(|body| body.moon.as_ref())
            .expect("one planet has a moon");
        let moon = make_node(
            "moon",
            allocator.upload_mesh(
                "moon",
                &generate_uv_sphere(
                    moon_def.body_radius,
                    SMALL_BODY_TESSELLATION,
                    SMALL_BODY_TESSELLATION,
                ),
            ),
            &moon_def.color,
            white,
        );

        // The belt is rescattered every frame; the seed only makes the
        // sequence of scatters reproducible run to run.
        let belt = AsteroidBelt::new(
            scene_config.belt_inner_radius,
            scene_config.belt_outer_radius,
            scene_config.asteroid_count as usize,
        );
        let mut composer = SceneComposer::new(belt, scene_config.belt_seed);

        let belt_node = make_node(
            "asteroid",
            allocator.upload_mesh(
                "asteroid",
                &generate_uv_sphere(
                    ASTEROID_RADIUS,
                    SMALL_BODY_TESSELLATION,
                    SMALL_BODY_TESSELLATION,
                ),
            ),
            &ASTEROID_COLOR,
            Arc::clone(&textures[&TextureKey::Asteroid]),
        );

        let offsets: Vec<[f32; 3]> = composer
            .compose(0.0)
            .asteroids
            .iter()
            .map(|p| p.to_array())
            .collect();
        let belt_instances = allocator.create_vertex_buffer(
            "belt-instances",
            bytemuck::cast_slice(&offsets),
        );
        let belt_instance_count = offsets.len() as u32;

        let orbits = PLANETS
            .iter()
            .map(|body| {
                let points: Vec<LineVertex> = generate_orbit_circle(body.orbital_radius)
                    .into_iter()
                    .map(|position| LineVertex { position })
                    .collect();
                allocator.create_mesh(
                    &format!("{}-orbit", body.name),
                    bytemuck::cast_slice(&points),
                    IndexData::U32(&orbit_loop_indices()),
                )
            })
            .collect();

        let backdrop_quad = allocator.upload_mesh("backdrop", &generate_fullscreen_quad());
        let backdrop_texture = Arc::clone(&textures[&TextureKey::Backdrop]);

        info!(
            asteroids = belt_instance_count,
            textures = textures.len(),
            "Solar system scene built"
        );

        Ok(Self {
            composer,
            body_pipeline,
            belt_pipeline,
            orbit_pipeline,
            backdrop_pipeline,
            camera_bind_group,
            light_bind_group,
            _camera_buffer: camera_buffer,
            _light_buffer: light_buffer,
            sun,
            planets,
            ring,
            moon,
            belt_node,
            belt_instances,
            belt_instance_count,
            orbits,
            backdrop_quad,
            backdrop_texture,
        })
    }

    /// Pose every body for `elapsed` seconds, push the node uniforms, and
    /// upload this frame's belt scatter.
    fn update_uniforms(&mut self, queue: &wgpu::Queue, elapsed: f32) {
        let frame = self.composer.compose(elapsed);

        let offsets: Vec<[f32; 3]> = frame.asteroids.iter().map(|p| p.to_array()).collect();
        queue.write_buffer(&self.belt_instances, 0, bytemuck::cast_slice(&offsets));

        let write = |node: &BodyNode, model: Mat4| {
            queue.write_buffer(
                &node.uniform_buffer,
                0,
                bytemuck::cast_slice(&[node.material.to_uniform(model)]),
            );
        };

        write(&self.sun, frame.sun);
        for (node, posed) in self.planets.iter().zip(&frame.planets) {
            write(node, posed.transform);
            if let Some((_, ring_transform)) = posed.ring {
                write(&self.ring, ring_transform);
            }
            if let Some(moon) = &posed.moon {
                write(&self.moon, moon.transform);
            }
        }
        write(&self.belt_node, Mat4::IDENTITY);
    }

    /// Draw one frame at the given elapsed simulation time.
    pub fn render(
        &mut self,
        gpu: &RenderContext,
        depth: &DepthBuffer,
        elapsed: f32,
    ) -> Result<(), SurfaceError> {
        self.update_uniforms(&gpu.queue, elapsed);

        let surface_texture = gpu.get_current_texture()?;
        let mut frame =
            FrameEncoder::new(&gpu.device, Arc::new(gpu.queue.clone()), surface_texture);

        {
            let builder = RenderPassBuilder::new()
                .label("solar-system-pass")
                .clear_color(SPACE_BLACK)
                .depth(depth.view.clone(), DepthBuffer::CLEAR_VALUE);
            let mut pass = frame.begin_render_pass(&builder);

            // Back to front: backdrop first with depth off, then orbit lines,
            // then the lit bodies, then the belt.
            draw_backdrop(
                &mut pass,
                &self.backdrop_pipeline,
                &self.backdrop_texture.bind_group,
                &self.backdrop_quad,
            );

            for orbit in &self.orbits {
                draw_orbit(&mut pass, &self.orbit_pipeline, &self.camera_bind_group, orbit);
            }

            let mut draw = |node: &BodyNode| {
                draw_body(
                    &mut pass,
                    &self.body_pipeline,
                    &self.camera_bind_group,
                    &self.light_bind_group,
                    &node.bind_group,
                    &node.texture.bind_group,
                    &node.mesh,
                );
            };

            draw(&self.sun);
            for (node, body) in self.planets.iter().zip(PLANETS.iter()) {
                draw(node);
                if body.ring.is_some() {
                    draw(&self.ring);
                }
                if body.moon.is_some() {
                    draw(&self.moon);
                }
            }

            draw_belt(
                &mut pass,
                &self.belt_pipeline,
                &self.camera_bind_group,
                &self.light_bind_group,
                &self.belt_node.bind_group,
                &self.belt_node.texture.bind_group,
                &self.belt_node.mesh,
                &self.belt_instances,
                self.belt_instance_count,
            );
        }

        frame.submit();
        Ok(())
    }
}
