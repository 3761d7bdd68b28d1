use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Spring parameters for camera easing.
pub struct MotionOptions {
    /// Mass of the animated camera.
    #[schemars(title = "Mass", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub mass: f32,
    /// Spring stiffness; higher follows more tightly.
    #[schemars(title = "Tension", range(min = 10.0, max = 1000.0), extend("step" = 10.0))]
    pub tension: f32,
    /// Damping; higher glides less.
    #[schemars(title = "Friction", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub friction: f32,
    /// Longest integration sub-step, seconds.
    #[schemars(skip)]
    pub max_step: f32,
    /// Speed below which a channel may come to rest.
    #[schemars(skip)]
    pub rest_velocity: f32,
    /// Distance below which a channel may come to rest.
    #[schemars(skip)]
    pub rest_displacement: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            mass: 1.0,
            tension: 280.0,
            friction: 60.0,
            max_step: 0.001,
            rest_velocity: 1e-3,
            rest_displacement: 1e-4,
        }
    }
}
