//! Scripted touch sessions.
//!
//! A replay script is a JSON array of steps, each either a touch event or
//! a run of frames:
//!
//! ```json
//! [
//!   { "touch": { "phase": "start", "contacts": [{ "x": 200, "y": 400 }] } },
//!   { "touch": { "phase": "move",  "contacts": [{ "x": 200, "y": 370 }] } },
//!   { "touch": { "phase": "end" } },
//!   { "frames": 300, "dt": 0.016 }
//! ]
//! ```
//!
//! Scripts drive a [`GalleryEngine`] headlessly, which makes recorded
//! sessions reproducible on any machine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{NavigationOutcome, NavigationState, Pose};
use crate::engine::GalleryEngine;
use crate::error::AtriumError;
use crate::input::TouchEvent;

fn default_dt() -> f32 {
    1.0 / 60.0
}

/// One step of a replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplayStep {
    /// Deliver a touch event.
    Touch {
        /// The event.
        touch: TouchEvent,
    },
    /// Advance `frames` frames of `dt` seconds each.
    Frames {
        /// Frame count.
        frames: u32,
        /// Seconds per frame.
        #[serde(default = "default_dt")]
        dt: f32,
    },
}

/// An ordered list of replay steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplayScript {
    steps: Vec<ReplayStep>,
}

/// Tally of what a replay did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Pose after the last step.
    pub final_pose: Pose,
    /// Controller mode after the last step.
    pub final_state: NavigationState,
    /// Pan steps that moved the target.
    pub moved: usize,
    /// Pan steps stopped at a boundary.
    pub rejected: usize,
    /// Rotation steps.
    pub rotated: usize,
    /// Events that changed nothing.
    pub ignored: usize,
    /// Frames advanced.
    pub frames: u64,
}

impl ReplayScript {
    /// Script from explicit steps.
    #[must_use]
    pub fn new(steps: Vec<ReplayStep>) -> Self {
        Self { steps }
    }

    /// Parse and check a JSON script.
    pub fn from_json(json: &str) -> Result<Self, AtriumError> {
        let script: Self = serde_json::from_str(json)
            .map_err(|e| AtriumError::Replay(e.to_string()))?;
        script.check()?;
        Ok(script)
    }

    /// Read a JSON script from disk.
    pub fn load(path: &Path) -> Result<Self, AtriumError> {
        let content = std::fs::read_to_string(path)?;
        let script = Self::from_json(&content)?;
        log::info!(
            "loaded replay {} ({} steps)",
            path.display(),
            script.steps.len()
        );
        Ok(script)
    }

    /// Serialize back to JSON.
    pub fn to_json(&self) -> Result<String, AtriumError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AtriumError::Replay(e.to_string()))
    }

    /// Steps in order.
    #[must_use]
    pub fn steps(&self) -> &[ReplayStep] {
        &self.steps
    }

    fn check(&self) -> Result<(), AtriumError> {
        for (i, step) in self.steps.iter().enumerate() {
            if let ReplayStep::Frames { dt, .. } = step {
                if !(dt.is_finite() && *dt > 0.0) {
                    return Err(AtriumError::Replay(format!(
                        "step {i}: dt must be positive, got {dt}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Play every step against `engine`.
    pub fn run(&self, engine: &mut GalleryEngine) -> ReplayReport {
        let mut report = ReplayReport {
            final_pose: engine.controller().pose(),
            final_state: engine.controller().state(),
            moved: 0,
            rejected: 0,
            rotated: 0,
            ignored: 0,
            frames: 0,
        };
        for step in &self.steps {
            match step {
                ReplayStep::Touch { touch } => {
                    match engine.handle_touch(touch) {
                        NavigationOutcome::Moved { .. } => report.moved += 1,
                        NavigationOutcome::Rejected { .. } => {
                            report.rejected += 1;
                        }
                        NavigationOutcome::Rotated { .. } => {
                            report.rotated += 1;
                        }
                        NavigationOutcome::Ignored => report.ignored += 1,
                    }
                }
                ReplayStep::Frames { frames, dt } => {
                    for _ in 0..*frames {
                        report.final_pose = engine.update(*dt);
                    }
                    report.frames += u64::from(*frames);
                    log::debug!(
                        "after {} frames: {} yaw {:.4}",
                        report.frames,
                        report.final_pose.position,
                        report.final_pose.yaw
                    );
                }
            }
        }
        report.final_pose = engine.controller().pose();
        report.final_state = engine.controller().state();
        report
    }
}
