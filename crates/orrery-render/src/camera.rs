//! Fixed observer camera for view and projection matrix generation.

use glam::{Mat4, Vec3};

/// Vertical field of view, 45 degrees.
pub const DEFAULT_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
/// Near clip plane distance.
pub const DEFAULT_NEAR: f32 = 1.0;
/// Far clip plane distance.
pub const DEFAULT_FAR: f32 = 500.0;
/// Default observer position above the ecliptic plane.
pub const DEFAULT_EYE: Vec3 = Vec3::new(35.0, 35.0, 35.0);

/// A look-at camera that generates view and projection matrices.
///
/// The projection uses reverse-Z depth: near maps to z=1, far to z=0, which
/// pairs with a [`GreaterEqual`](wgpu::CompareFunction::GreaterEqual) depth
/// test and a clear value of 0.0.
#[derive(Debug, Clone)]
pub struct SolarCamera {
    /// Observer position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World-space up direction.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

/// GPU-side camera data, uploaded once per frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix in column-major order.
    pub view_proj: [[f32; 4]; 4],
    /// Observer position (w unused).
    pub eye: [f32; 4],
}

impl SolarCamera {
    /// Create the standard observer: eye at (35, 35, 35) looking at the origin.
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            eye: DEFAULT_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: DEFAULT_FOV_Y,
            aspect_ratio,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Compute the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Compute the projection matrix with reverse-Z.
    pub fn projection_matrix(&self) -> Mat4 {
        // Reverse-Z: near plane maps to z=1, far plane maps to z=0.
        // This is handled by swapping near/far in the projection matrix.
        Mat4::perspective_rh(
            self.fov_y,
            self.aspect_ratio,
            self.far,  // swapped: far as "near" parameter
            self.near, // swapped: near as "far" parameter
        )
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Convert the camera to a uniform suitable for GPU upload.
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection_matrix().to_cols_array_2d(),
            eye: [self.eye.x, self.eye.y, self.eye.z, 1.0],
        }
    }
}

impl Default for SolarCamera {
    fn default() -> Self {
        Self::new(800.0 / 600.0)
    }
}
