use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Pose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and starting pose.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye position when the scene opens.
    #[schemars(title = "Start Position")]
    pub start_position: [f32; 3],
    /// Heading when the scene opens, radians.
    #[schemars(title = "Start Heading", range(min = -3.15, max = 3.15), extend("step" = 0.05))]
    pub start_yaw: f32,
}

impl CameraOptions {
    /// Starting pose built from `start_position` and `start_yaw`.
    #[must_use]
    pub fn start_pose(&self) -> Pose {
        Pose::new(Vec3::from_array(self.start_position), self.start_yaw)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            start_position: [0.0, 2.0, 70.0],
            start_yaw: 0.0,
        }
    }
}
