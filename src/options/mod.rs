//! Centralized runtime options with TOML preset support.
//!
//! Camera projection, gesture tuning, walkable regions, and spring
//! parameters live here. Options serialize to/from TOML so a gallery
//! can ship its own floor plan and feel without recompiling.

mod camera;
mod motion;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use motion::MotionOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::SpringConfig;
use crate::error::AtriumError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and starting pose.
    pub camera: CameraOptions,
    /// Gesture tuning and walkable regions.
    pub navigation: NavigationOptions,
    /// Spring parameters for camera easing.
    pub motion: MotionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, AtriumError> {
        let content = std::fs::read_to_string(path).map_err(AtriumError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| AtriumError::OptionsParse(e.to_string()))?;
        log::info!(
            "loaded options from {} ({} walkable regions)",
            path.display(),
            options.navigation.boundaries.len()
        );
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), AtriumError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AtriumError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AtriumError::Io)?;
        }
        std::fs::write(path, content).map_err(AtriumError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject configurations the navigation system cannot honor.
    ///
    /// The starting position must already be walkable, otherwise the
    /// camera could never settle inside the floor plan.
    pub fn validate(&self) -> Result<(), AtriumError> {
        let nav = &self.navigation;
        if nav.boundaries.is_empty() {
            return Err(AtriumError::InvalidConfig(
                "navigation.boundaries is empty".into(),
            ));
        }
        if let Some((i, _)) = nav
            .boundaries
            .iter()
            .enumerate()
            .find(|(_, b)| !b.is_well_formed())
        {
            return Err(AtriumError::InvalidConfig(format!(
                "navigation.boundaries[{i}] is inverted or not finite"
            )));
        }
        for (name, value) in [
            ("navigation.move_speed", nav.move_speed),
            ("navigation.pan_threshold", nav.pan_threshold),
            ("navigation.rotate_sensitivity", nav.rotate_sensitivity),
            ("motion.mass", self.motion.mass),
            ("motion.tension", self.motion.tension),
            ("motion.max_step", self.motion.max_step),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(AtriumError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.motion.friction.is_finite() && self.motion.friction >= 0.0) {
            return Err(AtriumError::InvalidConfig(format!(
                "motion.friction must be non-negative, got {}",
                self.motion.friction
            )));
        }
        let stable = SpringConfig::from(&self.motion).stable_step();
        if self.motion.max_step > stable {
            return Err(AtriumError::InvalidConfig(format!(
                "motion.max_step {} exceeds the stable step {stable} for this mass, tension and friction",
                self.motion.max_step
            )));
        }
        let start = self.camera.start_pose();
        if !nav.boundary_table().is_within_any_boundary(start.position) {
            return Err(AtriumError::InvalidConfig(format!(
                "camera.start_position {:?} is outside every walkable region",
                self.camera.start_position
            )));
        }
        Ok(())
    }
}
