use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Boundary, BoundaryTable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Gesture tuning and walkable regions.
pub struct NavigationOptions {
    /// World units moved per pan step.
    #[schemars(title = "Move Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub move_speed: f32,
    /// Minimum one-finger drag, in pixels, before a step is taken.
    #[schemars(title = "Pan Threshold", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub pan_threshold: f32,
    /// Radians of turn per pixel of two-finger drag.
    #[schemars(title = "Rotate Sensitivity", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_sensitivity: f32,
    /// Walkable floor rectangles, in priority order.
    #[schemars(skip)]
    pub boundaries: Vec<Boundary>,
}

impl NavigationOptions {
    /// Boundary table built from `boundaries`.
    #[must_use]
    pub fn boundary_table(&self) -> BoundaryTable {
        BoundaryTable::new(self.boundaries.clone())
    }
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            move_speed: 0.5,
            pan_threshold: 20.0,
            rotate_sensitivity: 0.005,
            boundaries: BoundaryTable::reference().boundaries().to_vec(),
        }
    }
}
