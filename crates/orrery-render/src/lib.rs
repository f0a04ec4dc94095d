//! wgpu rendering for the solar system: surface management, GPU resources,
//! render passes, and the four draw pipelines (bodies, belt, orbits, backdrop).

pub mod backdrop_pipeline;
pub mod belt_pipeline;
pub mod body_pipeline;
pub mod buffer;
pub mod camera;
pub mod depth;
pub mod gpu;
pub mod light;
pub mod material;
pub mod orbit_pipeline;
pub mod pass;
pub mod texture;

pub use backdrop_pipeline::{BACKDROP_SHADER_SOURCE, BackdropPipeline, draw_backdrop};
pub use belt_pipeline::{BELT_SHADER_SOURCE, BeltPipeline, draw_belt, instance_layout};
pub use body_pipeline::{BODY_SHADER_SOURCE, BodyPipeline, draw_body};
pub use buffer::{BufferAllocator, IndexData, LineVertex, MeshBuffer, SceneVertex, interleave};
pub use camera::{CameraUniform, SolarCamera};
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use light::PointLightUniform;
pub use material::{Material, NodeUniform};
pub use orbit_pipeline::{ORBIT_SHADER_SOURCE, OrbitPipeline, draw_orbit};
pub use pass::{DepthAttachmentConfig, FrameEncoder, RenderPassBuilder, SPACE_BLACK};
pub use texture::{ManagedTexture, TextureError, TextureManager, mip_level_count};
