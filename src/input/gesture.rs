//! Touch gesture interpretation.
//!
//! Turns a stream of touch samples into incremental navigation deltas:
//! one finger pans (walks), two fingers rotate (turn on the spot).
//! Motion is always measured against the last *consumed* sample, so a
//! long drag yields a series of small steps rather than one large one.

use serde::{Deserialize, Serialize};

use super::event::TouchPoint;
use crate::options::NavigationOptions;

/// Tunables for gesture classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    /// Minimum pan displacement (pixels) before a step is emitted.
    pub pan_threshold: f32,
    /// Radians of yaw per pixel of averaged two-finger travel.
    pub rotate_sensitivity: f32,
    /// World units moved per emitted pan step.
    pub move_speed: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self::from(&NavigationOptions::default())
    }
}

impl From<&NavigationOptions> for GestureSettings {
    fn from(options: &NavigationOptions) -> Self {
        Self {
            pan_threshold: options.pan_threshold,
            rotate_sensitivity: options.rotate_sensitivity,
            move_speed: options.move_speed,
        }
    }
}

/// Which kind of gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureMode {
    /// Single finger: walk forward/back or strafe.
    Pan,
    /// Two fingers: turn.
    Rotate,
}

/// Transient record of the active interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    /// Contacts seen on the last consumed sample (1 or 2).
    pub finger_count: usize,
    /// Last consumed primary contact.
    pub primary: TouchPoint,
    /// Last consumed secondary contact (two-finger only).
    pub secondary: Option<TouchPoint>,
    /// Whether the gesture is in rotation mode.
    pub two_finger: bool,
}

impl GestureState {
    fn from_contacts(contacts: &[TouchPoint]) -> Option<Self> {
        let primary = *contacts.first()?;
        let secondary = contacts.get(1).copied();
        Some(Self {
            finger_count: contacts.len().min(2),
            primary,
            secondary,
            two_finger: secondary.is_some(),
        })
    }

    /// Current classification.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        if self.two_finger {
            GestureMode::Rotate
        } else {
            GestureMode::Pan
        }
    }
}

/// Result of interpreting one move sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureDelta {
    /// Turn by `delta_yaw` radians.
    Rotate {
        /// Signed yaw change.
        delta_yaw: f32,
    },
    /// Step in the camera's local frame. Exactly one component is
    /// non-zero and its magnitude is the configured move speed.
    Pan {
        /// Along the facing direction (positive = forward).
        delta_forward: f32,
        /// Along `up × forward` (positive = that direction).
        delta_sideways: f32,
    },
    /// Jitter, reclassification, or malformed input; nothing to apply.
    Ignored,
}

/// Classifies touch samples and computes incremental deltas.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    settings: GestureSettings,
    state: Option<GestureState>,
}

impl GestureInterpreter {
    /// Create an interpreter with the given tunables.
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            state: None,
        }
    }

    /// Tunables in use.
    #[must_use]
    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// The in-progress gesture, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Mode of the in-progress gesture, if any.
    #[must_use]
    pub fn mode(&self) -> Option<GestureMode> {
        self.state.map(|s| s.mode())
    }

    /// Record the initial contacts of a gesture.
    ///
    /// Two or more contacts start a rotation, one starts a pan. An event
    /// without contacts leaves no gesture in progress.
    pub fn on_gesture_start(&mut self, contacts: &[TouchPoint]) {
        self.state = GestureState::from_contacts(contacts);
    }

    /// Interpret a move sample against the last consumed one.
    pub fn on_gesture_move(&mut self, contacts: &[TouchPoint]) -> GestureDelta {
        let Some(&current) = contacts.first() else {
            return GestureDelta::Ignored;
        };
        let Some(state) = self.state.as_mut() else {
            // Move without a start (or after an end): treat as a fresh
            // gesture and measure from here.
            self.state = GestureState::from_contacts(contacts);
            return GestureDelta::Ignored;
        };

        match (contacts.get(1).copied(), state.secondary) {
            (Some(second), Some(last_second)) => {
                let avg_now = (current.x + second.x) * 0.5;
                let avg_last = (state.primary.x + last_second.x) * 0.5;
                let delta_yaw =
                    -(avg_now - avg_last) * self.settings.rotate_sensitivity;
                state.primary = current;
                state.secondary = Some(second);
                GestureDelta::Rotate { delta_yaw }
            }
            (Some(_), None) | (None, Some(_)) => {
                // Finger count changed mid-gesture: reseed in the new mode.
                self.state = GestureState::from_contacts(contacts);
                GestureDelta::Ignored
            }
            (None, None) => Self::pan_step(&self.settings, state, current),
        }
    }

    /// End the gesture; the next move starts a fresh pan.
    pub fn on_gesture_end(&mut self) {
        self.state = None;
    }

    fn pan_step(
        settings: &GestureSettings,
        state: &mut GestureState,
        current: TouchPoint,
    ) -> GestureDelta {
        let delta = current.to_vec2() - state.primary.to_vec2();
        if delta.length() < settings.pan_threshold {
            return GestureDelta::Ignored;
        }
        state.primary = current;

        let speed = settings.move_speed;
        if delta.y.abs() > delta.x.abs() {
            // Dragging up walks forward.
            let delta_forward = if delta.y < 0.0 { speed } else { -speed };
            GestureDelta::Pan {
                delta_forward,
                delta_sideways: 0.0,
            }
        } else {
            let delta_sideways = if delta.x < 0.0 { -speed } else { speed };
            GestureDelta::Pan {
                delta_forward: 0.0,
                delta_sideways,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(points: &[(f32, f32)]) -> Vec<TouchPoint> {
        points.iter().copied().map(TouchPoint::from).collect()
    }

    fn interpreter() -> GestureInterpreter {
        GestureInterpreter::new(GestureSettings {
            pan_threshold: 20.0,
            rotate_sensitivity: 0.005,
            move_speed: 0.5,
        })
    }

    #[test]
    fn start_classifies_by_finger_count() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(10.0, 10.0)]));
        assert_eq!(g.mode(), Some(GestureMode::Pan));
        g.on_gesture_start(&pts(&[(10.0, 10.0), (50.0, 10.0)]));
        assert_eq!(g.mode(), Some(GestureMode::Rotate));
        g.on_gesture_start(&[]);
        assert_eq!(g.mode(), None);
    }

    #[test]
    fn drag_up_past_threshold_walks_forward() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0)]));
        let delta = g.on_gesture_move(&pts(&[(100.0, 270.0)]));
        assert_eq!(
            delta,
            GestureDelta::Pan {
                delta_forward: 0.5,
                delta_sideways: 0.0
            }
        );
    }

    #[test]
    fn drag_down_walks_backward() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0)]));
        let delta = g.on_gesture_move(&pts(&[(105.0, 340.0)]));
        assert_eq!(
            delta,
            GestureDelta::Pan {
                delta_forward: -0.5,
                delta_sideways: 0.0
            }
        );
    }

    #[test]
    fn horizontal_drag_strafes_with_sign() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0)]));
        let left = g.on_gesture_move(&pts(&[(70.0, 300.0)]));
        assert_eq!(
            left,
            GestureDelta::Pan {
                delta_forward: 0.0,
                delta_sideways: -0.5
            }
        );
        let right = g.on_gesture_move(&pts(&[(100.0, 300.0)]));
        assert_eq!(
            right,
            GestureDelta::Pan {
                delta_forward: 0.0,
                delta_sideways: 0.5
            }
        );
    }

    #[test]
    fn equal_axes_count_as_sideways() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(0.0, 0.0)]));
        let delta = g.on_gesture_move(&pts(&[(-20.0, -20.0)]));
        assert!(matches!(delta, GestureDelta::Pan { delta_forward, .. } if delta_forward == 0.0));
    }

    #[test]
    fn jitter_below_threshold_is_ignored_without_state_change() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0)]));
        let before = *g.state().unwrap();
        assert_eq!(g.on_gesture_move(&pts(&[(110.0, 290.0)])), GestureDelta::Ignored);
        assert_eq!(*g.state().unwrap(), before);
    }

    #[test]
    fn sub_threshold_motion_accumulates() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0)]));
        assert_eq!(g.on_gesture_move(&pts(&[(100.0, 290.0)])), GestureDelta::Ignored);
        // 25px from the last consumed sample, though only 15px from the previous.
        assert!(matches!(
            g.on_gesture_move(&pts(&[(100.0, 275.0)])),
            GestureDelta::Pan { .. }
        ));
        assert_eq!(g.state().unwrap().primary, TouchPoint::new(100.0, 275.0));
    }

    #[test]
    fn pan_speed_is_independent_of_drag_distance() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 900.0)]));
        let far = g.on_gesture_move(&pts(&[(100.0, 100.0)]));
        assert_eq!(
            far,
            GestureDelta::Pan {
                delta_forward: 0.5,
                delta_sideways: 0.0
            }
        );
    }

    #[test]
    fn two_finger_drag_right_yaws_negative() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0), (200.0, 300.0)]));
        let delta = g.on_gesture_move(&pts(&[(110.0, 300.0), (230.0, 300.0)]));
        let GestureDelta::Rotate { delta_yaw } = delta else {
            panic!("expected rotation, got {delta:?}");
        };
        assert!((delta_yaw + 20.0 * 0.005).abs() < 1e-6);
    }

    #[test]
    fn rotation_is_incremental_and_unthresholded() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0), (200.0, 300.0)]));
        let mut total = 0.0;
        for step in 1..=5 {
            let x = step as f32;
            if let GestureDelta::Rotate { delta_yaw } =
                g.on_gesture_move(&pts(&[(100.0 - x, 300.0), (200.0 - x, 300.0)]))
            {
                total += delta_yaw;
            } else {
                panic!("two fingers must rotate");
            }
        }
        assert!((total - 5.0 * 0.005).abs() < 1e-6);
    }

    #[test]
    fn two_fingers_never_pan() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0), (200.0, 300.0)]));
        let delta = g.on_gesture_move(&pts(&[(100.0, 100.0), (200.0, 100.0)]));
        assert_eq!(delta, GestureDelta::Rotate { delta_yaw: 0.0 });
    }

    #[test]
    fn finger_count_change_reclassifies() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0)]));
        assert_eq!(
            g.on_gesture_move(&pts(&[(100.0, 300.0), (200.0, 300.0)])),
            GestureDelta::Ignored
        );
        assert_eq!(g.mode(), Some(GestureMode::Rotate));
        assert!(matches!(
            g.on_gesture_move(&pts(&[(90.0, 300.0), (190.0, 300.0)])),
            GestureDelta::Rotate { .. }
        ));

        assert_eq!(g.on_gesture_move(&pts(&[(90.0, 300.0)])), GestureDelta::Ignored);
        assert_eq!(g.mode(), Some(GestureMode::Pan));
    }

    #[test]
    fn third_finger_is_ignored() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(0.0, 0.0), (100.0, 0.0), (500.0, 500.0)]));
        assert_eq!(g.state().unwrap().finger_count, 2);
        let delta = g.on_gesture_move(&pts(&[(0.0, 0.0), (100.0, 0.0), (900.0, 0.0)]));
        assert_eq!(delta, GestureDelta::Rotate { delta_yaw: 0.0 });
    }

    #[test]
    fn end_then_move_starts_fresh_pan() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0), (200.0, 300.0)]));
        g.on_gesture_end();
        assert!(g.state().is_none());
        assert_eq!(g.on_gesture_move(&pts(&[(400.0, 400.0)])), GestureDelta::Ignored);
        assert_eq!(g.mode(), Some(GestureMode::Pan));
        assert!(matches!(
            g.on_gesture_move(&pts(&[(400.0, 350.0)])),
            GestureDelta::Pan { .. }
        ));
    }

    #[test]
    fn empty_move_is_ignored() {
        let mut g = interpreter();
        g.on_gesture_start(&pts(&[(100.0, 300.0)]));
        assert_eq!(g.on_gesture_move(&[]), GestureDelta::Ignored);
        assert_eq!(g.state().unwrap().primary, TouchPoint::new(100.0, 300.0));
    }
}
