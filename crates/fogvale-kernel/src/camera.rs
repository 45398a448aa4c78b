//! First-person perspective camera.
//!
//! The camera is yaw-only: the player turns on the horizontal plane and
//! never pitches. Field of view changes (the vertigo effect) mark the
//! projection dirty so the host only rebuilds the projection matrix on
//! frames where it actually changed.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Default vertical field of view in degrees.
pub const BASE_FOV: f32 = 75.0;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 1000.0;

/// First-person camera state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Yaw in radians. Zero faces negative z; positive turns left.
    pub yaw: f32,
    /// Vertical field of view in degrees.
    fov: f32,
    /// Viewport aspect ratio (width / height).
    aspect: f32,
    /// Set when fov or aspect changed since the last projection rebuild.
    projection_dirty: bool,
}

impl Camera {
    /// Creates a camera at the given position with the base field of view.
    #[must_use]
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            fov: BASE_FOV,
            aspect,
            projection_dirty: true,
        }
    }

    /// Current vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Sets the field of view, marking the projection dirty if it changed.
    pub fn set_fov(&mut self, fov: f32) {
        if (self.fov - fov).abs() > f32::EPSILON {
            self.fov = fov;
            self.projection_dirty = true;
        }
    }

    /// Current aspect ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Sets the aspect ratio, marking the projection dirty if it changed.
    pub fn set_aspect(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > f32::EPSILON {
            self.aspect = aspect;
            self.projection_dirty = true;
        }
    }

    /// Returns and clears the projection-dirty flag.
    ///
    /// The host calls this once per frame; a `true` result means the
    /// projection matrix must be rebuilt.
    pub fn take_projection_dirty(&mut self) -> bool {
        std::mem::take(&mut self.projection_dirty)
    }

    /// Horizontal forward direction derived from yaw, unit length.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Builds the projection matrix for the current fov and aspect.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Builds the view matrix for the current position and yaw.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }

    /// Produces the uniform the host renderer uploads.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let view_proj = self.projection() * self.view();
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            position: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}

/// GPU-facing camera uniform data.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix, column major.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world position (w = 1).
    pub position: [f32; 4],
}
