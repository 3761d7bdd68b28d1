//! Static boxes, framed pictures, and lights.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::material::{SurfaceKind, TextureHandle};

/// A static box drawn by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// What the box is made of.
    pub kind: SurfaceKind,
    /// Box centre in world space.
    pub position: Vec3,
    /// Rotation about +Y, radians.
    pub yaw: f32,
    /// Extents before rotation (width, height, depth).
    pub size: Vec3,
    /// UV multiplier so textures tile in proportion to the box.
    pub uv_scale: [f32; 2],
    /// Front-face image for [`SurfaceKind::ArtFrame`].
    pub artwork: Option<TextureHandle>,
}

impl Primitive {
    /// Plain box of `kind`.
    #[must_use]
    pub fn new(kind: SurfaceKind, position: Vec3, yaw: f32, size: Vec3) -> Self {
        let uv_scale = match kind {
            // Tile walls per two world units, independent of panel size.
            SurfaceKind::Wall => [size.x * 0.5, size.y * 0.5],
            _ => [1.0, 1.0],
        };
        Self {
            kind,
            position,
            yaw,
            size,
            uv_scale,
            artwork: None,
        }
    }

    /// Shift into a parent group's frame (rotation-free groups only).
    #[must_use]
    pub fn offset(mut self, origin: Vec3) -> Self {
        self.position += origin;
        self
    }

    /// Orientation quaternion.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Ground-plane footprint `(x_min, x_max, z_min, z_max)` after rotation.
    #[must_use]
    pub fn footprint(&self) -> (f32, f32, f32, f32) {
        let half = self.size * 0.5;
        let rot = self.rotation();
        let extent = (rot * Vec3::new(half.x, 0.0, half.z)).abs()
            .max((rot * Vec3::new(half.x, 0.0, -half.z)).abs());
        (
            self.position.x - extent.x,
            self.position.x + extent.x,
            self.position.z - extent.z,
            self.position.z + extent.z,
        )
    }
}

/// A framed picture hung on a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtFrame {
    /// Frame centre, relative to its room.
    pub position: Vec3,
    /// Rotation about +Y so the artwork faces into the room.
    pub yaw: f32,
    /// Frame extents.
    pub size: Vec3,
    /// Image path; `None` hangs a blank canvas.
    pub image: Option<String>,
}

impl ArtFrame {
    /// Default frame size.
    pub const DEFAULT_SIZE: Vec3 = Vec3::new(1.5, 1.0, 0.1);

    /// Blank frame of default size.
    #[must_use]
    pub fn blank(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            size: Self::DEFAULT_SIZE,
            image: None,
        }
    }

    /// Frame of the given size showing `image`.
    #[must_use]
    pub fn with_image(
        position: Vec3,
        yaw: f32,
        size: Vec3,
        image: impl Into<String>,
    ) -> Self {
        Self {
            position,
            yaw,
            size,
            image: Some(image.into()),
        }
    }
}

/// Scene lighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Light {
    /// Uniform fill light.
    Ambient {
        /// Light intensity.
        intensity: f32,
    },
    /// Omnidirectional light at a point.
    Point {
        /// World-space position.
        position: Vec3,
        /// Light intensity.
        intensity: f32,
    },
}
