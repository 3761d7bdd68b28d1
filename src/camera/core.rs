//! Renderer-facing camera: view and projection matrices plus the GPU
//! uniform they are uploaded through.

use glam::{Mat4, Vec3};

use super::pose::Pose;
use crate::options::CameraOptions;

/// Perspective camera driven by a navigation [`Pose`].
///
/// This is the hand-off point to the renderer: it accepts a pose each
/// frame and exposes the matrices and GPU uniform derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Current eye position and heading.
    pub pose: Pose,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Heading in radians.
    pub yaw: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl Camera {
    /// Camera at `pose` with projection parameters from `options`.
    #[must_use]
    pub fn new(pose: Pose, options: &CameraOptions) -> Self {
        Self {
            pose,
            aspect: 16.0 / 9.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Replace the pose; called once per frame with the smoothed value.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Update the aspect ratio after a viewport resize. Zero-sized
    /// viewports (minimized windows) keep the previous ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_rh(self.pose.position, self.pose.forward(), Vec3::Y)
    }

    /// Projection matrix. `perspective_rh` uses a [0,1] depth range.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 16.0 / 9.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 75.0,
            yaw: 0.0,
            _pad: [0.0; 3],
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.pose.position.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.pose.forward().to_array();
        self.fovy = camera.fovy;
        self.yaw = camera.pose.yaw;
    }
}
