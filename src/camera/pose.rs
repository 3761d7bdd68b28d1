//! Camera position and heading, with the walking basis derived from yaw.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Camera position plus heading about the world up axis.
///
/// Yaw follows the right-handed convention: `yaw = 0` looks down `-Z`,
/// positive yaw turns the view towards `-X`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Heading in radians around +Y.
    pub yaw: f32,
}

impl Pose {
    /// Create a pose from a position and heading.
    #[must_use]
    pub const fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Orientation quaternion (rotation about +Y only).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Unit direction the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        forward_from_yaw(self.yaw)
    }

    /// `up × forward`, normalized. Points to the camera's left.
    #[must_use]
    pub fn sideways(&self) -> Vec3 {
        sideways_from_yaw(self.yaw)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 2.0, 70.0), 0.0)
    }
}

/// Forward direction for a heading.
#[must_use]
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * Vec3::NEG_Z
}

/// Cross product of world up with the forward direction for a heading.
#[must_use]
pub fn sideways_from_yaw(yaw: f32) -> Vec3 {
    Vec3::Y.cross(forward_from_yaw(yaw)).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn zero_yaw_faces_negative_z() {
        assert!(approx(forward_from_yaw(0.0), Vec3::NEG_Z));
    }

    #[test]
    fn quarter_turn_faces_negative_x() {
        assert!(approx(forward_from_yaw(FRAC_PI_2), Vec3::NEG_X));
    }

    #[test]
    fn sideways_is_perpendicular_unit() {
        for yaw in [0.0, 0.3, 1.7, -2.4] {
            let side = sideways_from_yaw(yaw);
            assert!((side.length() - 1.0).abs() < 1e-5);
            assert!(side.dot(forward_from_yaw(yaw)).abs() < 1e-5);
            assert!(side.y.abs() < 1e-6);
        }
    }

    #[test]
    fn sideways_points_left_at_rest() {
        assert!(approx(Pose::default().sideways(), Vec3::NEG_X));
    }
}
