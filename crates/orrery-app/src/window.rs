//! Window creation and event handling via winit.
//!
//! [`OrreryApp`] implements winit's [`ApplicationHandler`]: `resumed` builds
//! the window, GPU context, and scene, and `RedrawRequested` advances the
//! clock and draws a frame.

use std::sync::Arc;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use orrery_config::Config;
use orrery_render::{DepthBuffer, RenderContext, SurfaceError, init_render_context_blocking};
use orrery_scene::SimClock;

use crate::frame::FrameTimer;
use crate::solar_system::SolarSystem;

/// Errors that end the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The winit event loop could not be created or run.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Startup failed inside the event loop (GPU init or scene build).
    #[error("startup failed: {0}")]
    Startup(String),
}

/// Window attributes derived from the configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Application state driving the window, GPU, clock, and scene.
pub struct OrreryApp {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    depth: Option<DepthBuffer>,
    scene: Option<SolarSystem>,
    clock: SimClock,
    timer: FrameTimer,
    startup_failure: Option<String>,
}

impl OrreryApp {
    /// Create the application from a loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            depth: None,
            scene: None,
            clock: SimClock::new(),
            timer: FrameTimer::new(),
            startup_failure: None,
        }
    }

    fn fail_startup(&mut self, event_loop: &ActiveEventLoop, message: String) {
        error!("{message}");
        self.startup_failure = Some(message);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.timer.tick();
        self.clock.advance(dt);

        let (Some(gpu), Some(depth), Some(scene)) = (&self.gpu, &self.depth, &mut self.scene)
        else {
            return;
        };

        match scene.render(gpu, depth, self.clock.elapsed() as f32) {
            Ok(()) => {}
            Err(SurfaceError::Lost) => {
                warn!("Surface lost, recreating");
                let (w, h) = (gpu.surface_config.width, gpu.surface_config.height);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(w, h);
                }
            }
            Err(SurfaceError::OutOfMemory) => {
                error!("Surface out of memory, shutting down");
                event_loop.exit();
                return;
            }
            Err(SurfaceError::Timeout) => {
                warn!("Surface acquire timed out, skipping frame");
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for OrreryApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail_startup(event_loop, format!("Failed to create window: {e}"));
                return;
            }
        };

        let gpu = match init_render_context_blocking(window.clone(), self.config.window.vsync) {
            Ok(gpu) => gpu,
            Err(e) => {
                self.fail_startup(event_loop, format!("GPU initialization failed: {e}"));
                return;
            }
        };

        let size = window.inner_size();
        let depth = DepthBuffer::new(&gpu.device, size.width.max(1), size.height.max(1));

        let scene = match SolarSystem::new(&gpu, &self.config.scene) {
            Ok(scene) => scene,
            Err(e) => {
                self.fail_startup(event_loop, format!("Scene build failed: {e}"));
                return;
            }
        };

        info!(
            width = size.width,
            height = size.height,
            "Window and GPU initialized"
        );

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.depth = Some(depth);
        self.scene = Some(scene);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let (w, h) = (new_size.width.max(1), new_size.height.max(1));
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(w, h);
                }
                if let (Some(depth), Some(gpu)) = (&mut self.depth, &self.gpu) {
                    depth.resize(&gpu.device, w, h);
                }
                info!("Window resized to {w}x{h}");
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}

/// Run the application to completion.
pub fn run(config: Config) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    let mut app = OrreryApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.startup_failure {
        Some(message) => Err(AppError::Startup(message)),
        None => Ok(()),
    }
}
