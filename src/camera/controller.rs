//! Touch navigation state machine.
//!
//! ```text
//! Idle ──start(1)──▶ Panning ◀──(finger count change)──▶ Rotating
//!  ▲                    │                                   │
//!  └──────────end───────┴───────────────end─────────────────┘
//! Idle ──start(2)──▶ Rotating
//! ```
//!
//! Pan steps are gated by the boundary table before they become smoother
//! targets; rotation is never gated. Only the discrete target is tested,
//! so the eased path between two accepted targets may briefly cut a
//! corner outside every region.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::boundary::BoundaryTable;
use super::pose::{forward_from_yaw, sideways_from_yaw, Pose};
use crate::animation::{MotionSmoother, SpringConfig};
use crate::input::{
    GestureDelta, GestureInterpreter, GestureMode, GestureSettings,
    GestureState, TouchEvent, TouchPhase,
};
use crate::options::Options;

/// Interaction mode of the controller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NavigationState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// One-finger walk.
    Panning,
    /// Two-finger turn.
    Rotating,
}

impl From<Option<GestureMode>> for NavigationState {
    fn from(mode: Option<GestureMode>) -> Self {
        match mode {
            None => Self::Idle,
            Some(GestureMode::Pan) => Self::Panning,
            Some(GestureMode::Rotate) => Self::Rotating,
        }
    }
}

/// What a touch event did to the navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// A pan step was accepted; the position target is now `target`.
    Moved {
        /// New position target.
        target: Vec3,
    },
    /// A pan step would have left the walkable area and was dropped.
    Rejected {
        /// The position that failed the boundary test.
        candidate: Vec3,
    },
    /// A rotation step was applied; the yaw target is now `yaw_target`.
    Rotated {
        /// New yaw target.
        yaw_target: f32,
    },
    /// Nothing changed (gesture start/end, jitter, malformed input).
    Ignored,
}

/// Serializable view of the controller for inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    /// Current interaction mode.
    pub state: NavigationState,
    /// In-progress gesture record, if any.
    pub gesture: Option<GestureState>,
    /// Where the camera is drawn this frame.
    pub pose: Pose,
    /// Where the camera will settle.
    pub target: Pose,
}

/// Orchestrates gesture interpretation, boundary gating, and smoothing.
#[derive(Debug, Clone)]
pub struct NavigationController {
    interpreter: GestureInterpreter,
    smoother: MotionSmoother,
    boundaries: BoundaryTable,
    state: NavigationState,
}

impl NavigationController {
    /// Controller resting at `initial`.
    #[must_use]
    pub fn new(
        initial: Pose,
        boundaries: BoundaryTable,
        gestures: GestureSettings,
        spring: SpringConfig,
    ) -> Self {
        if !boundaries.is_within_any_boundary(initial.position) {
            log::warn!(
                "initial camera position {} is outside every walkable region",
                initial.position
            );
        }
        Self {
            interpreter: GestureInterpreter::new(gestures),
            smoother: MotionSmoother::new(initial, spring),
            boundaries,
            state: NavigationState::Idle,
        }
    }

    /// Controller configured from runtime options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(
            options.camera.start_pose(),
            options.navigation.boundary_table(),
            GestureSettings::from(&options.navigation),
            SpringConfig::from(&options.motion),
        )
    }

    /// Current interaction mode.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Walkable regions in use.
    #[must_use]
    pub fn boundaries(&self) -> &BoundaryTable {
        &self.boundaries
    }

    /// Gesture interpreter (read-only).
    #[must_use]
    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    /// Motion smoother (read-only).
    #[must_use]
    pub fn smoother(&self) -> &MotionSmoother {
        &self.smoother
    }

    /// Interpolated pose for the current frame.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.smoother.sample()
    }

    /// Pose the camera is settling towards.
    #[must_use]
    pub fn target_pose(&self) -> Pose {
        self.smoother.target()
    }

    /// Serializable view of the whole controller.
    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            state: self.state,
            gesture: self.interpreter.state().copied(),
            pose: self.pose(),
            target: self.target_pose(),
        }
    }

    /// Feed one touch event through the state machine.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> NavigationOutcome {
        let outcome = match event.phase {
            TouchPhase::Start => {
                self.interpreter.on_gesture_start(&event.contacts);
                NavigationOutcome::Ignored
            }
            TouchPhase::Move => {
                let delta = self.interpreter.on_gesture_move(&event.contacts);
                self.apply_delta(delta)
            }
            TouchPhase::End | TouchPhase::Cancel => {
                self.interpreter.on_gesture_end();
                NavigationOutcome::Ignored
            }
        };

        let next = NavigationState::from(self.interpreter.mode());
        if next != self.state {
            log::debug!("navigation {:?} -> {:?}", self.state, next);
            self.state = next;
        }
        outcome
    }

    /// Apply an interpreted gesture delta to the smoother targets.
    pub fn apply_delta(&mut self, delta: GestureDelta) -> NavigationOutcome {
        match delta {
            GestureDelta::Rotate { delta_yaw } => {
                let yaw_target = self.smoother.yaw_target() + delta_yaw;
                self.smoother.set_yaw_target(yaw_target);
                NavigationOutcome::Rotated { yaw_target }
            }
            GestureDelta::Pan {
                delta_forward,
                delta_sideways,
            } => {
                let candidate = self.pan_candidate(delta_forward, delta_sideways);
                if self.boundaries.is_within_any_boundary(candidate) {
                    log::trace!("pan accepted: {candidate}");
                    self.smoother.set_position_target(candidate);
                    NavigationOutcome::Moved { target: candidate }
                } else {
                    log::debug!("pan rejected at boundary: {candidate}");
                    NavigationOutcome::Rejected { candidate }
                }
            }
            GestureDelta::Ignored => NavigationOutcome::Ignored,
        }
    }

    /// Position a pan step would lead to, before boundary gating.
    ///
    /// Starts from the current position target and steps along the
    /// direction the camera is currently facing.
    #[must_use]
    pub fn pan_candidate(&self, delta_forward: f32, delta_sideways: f32) -> Vec3 {
        let yaw = self.smoother.yaw();
        self.smoother.position_target()
            + forward_from_yaw(yaw) * delta_forward
            + sideways_from_yaw(yaw) * delta_sideways
    }

    /// Advance smoothing by one frame and return the pose to draw.
    pub fn tick(&mut self, dt: f32) -> Pose {
        let _ = self.smoother.advance(dt);
        self.smoother.sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::boundary::Boundary;

    fn controller() -> NavigationController {
        NavigationController::from_options(&Options::default())
    }

    fn settle(nav: &mut NavigationController) -> Pose {
        for _ in 0..299 {
            let _ = nav.tick(1.0 / 60.0);
        }
        nav.tick(1.0 / 60.0)
    }

    #[test]
    fn transitions_follow_finger_count() {
        let mut nav = controller();
        assert_eq!(nav.state(), NavigationState::Idle);

        let _ = nav.handle_touch(&TouchEvent::start(&[(100.0, 100.0)]));
        assert_eq!(nav.state(), NavigationState::Panning);

        let _ = nav.handle_touch(&TouchEvent::end());
        assert_eq!(nav.state(), NavigationState::Idle);

        let _ = nav.handle_touch(&TouchEvent::start(&[(100.0, 100.0), (200.0, 100.0)]));
        assert_eq!(nav.state(), NavigationState::Rotating);

        let _ = nav.handle_touch(&TouchEvent::moved(&[(100.0, 100.0)]));
        assert_eq!(nav.state(), NavigationState::Panning);

        let _ = nav.handle_touch(&TouchEvent::new(TouchPhase::Cancel, Vec::new()));
        assert_eq!(nav.state(), NavigationState::Idle);
    }

    #[test]
    fn abandoned_gesture_keeps_mode_until_next_start() {
        let mut nav = controller();
        let _ = nav.handle_touch(&TouchEvent::start(&[(0.0, 0.0), (50.0, 0.0)]));
        for _ in 0..10 {
            let _ = nav.tick(1.0 / 60.0);
        }
        assert_eq!(nav.state(), NavigationState::Rotating);
        let _ = nav.handle_touch(&TouchEvent::start(&[(0.0, 0.0)]));
        assert_eq!(nav.state(), NavigationState::Panning);
    }

    #[test]
    fn forward_drag_scenario_converges() {
        let mut nav = controller();
        let _ = nav.handle_touch(&TouchEvent::start(&[(200.0, 400.0)]));
        let outcome = nav.handle_touch(&TouchEvent::moved(&[(200.0, 370.0)]));

        let expected = Vec3::new(0.0, 2.0, 69.5);
        let NavigationOutcome::Moved { target } = outcome else {
            panic!("expected an accepted move, got {outcome:?}");
        };
        assert!((target - expected).length() < 1e-5);
        assert!((nav.target_pose().position - expected).length() < 1e-5);

        let pose = settle(&mut nav);
        assert!(nav.smoother().is_settled());
        assert_eq!(pose, nav.target_pose());
        assert!((pose.position - expected).length() < 1e-5);
    }

    #[test]
    fn below_threshold_pan_leaves_target_untouched() {
        let mut nav = controller();
        let _ = nav.handle_touch(&TouchEvent::start(&[(200.0, 400.0)]));
        let before = nav.snapshot();
        let outcome = nav.handle_touch(&TouchEvent::moved(&[(210.0, 390.0)]));
        assert_eq!(outcome, NavigationOutcome::Ignored);
        assert_eq!(nav.snapshot(), before);
    }

    #[test]
    fn rejected_pan_leaves_target_unchanged() {
        let mut nav = NavigationController::new(
            Pose::new(Vec3::new(4.8, 2.0, 25.0), std::f32::consts::FRAC_PI_2),
            BoundaryTable::reference(),
            GestureSettings::default(),
            SpringConfig::default(),
        );
        let before = nav.target_pose();
        // Facing -X; a backward step heads through the solid wall at z = 25.
        let outcome = nav.apply_delta(GestureDelta::Pan {
            delta_forward: -0.5,
            delta_sideways: 0.0,
        });
        let NavigationOutcome::Rejected { candidate } = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert!((candidate - Vec3::new(5.3, 2.0, 25.0)).length() < 1e-5);
        assert_eq!(nav.target_pose(), before);
    }

    #[test]
    fn point_between_side_rooms_is_rejected() {
        let nav = controller();
        let table = nav.boundaries();
        assert!(!table.is_within_any_boundary(Vec3::new(12.0, 2.0, 25.0)));
        assert!(table.is_within_any_boundary(Vec3::new(12.0, 2.0, 37.5)));
    }

    #[test]
    fn rotation_is_never_bounded() {
        let mut nav = NavigationController::new(
            Pose::default(),
            BoundaryTable::new(vec![Boundary::new(-1.0, 1.0, 69.0, 71.0)]),
            GestureSettings::default(),
            SpringConfig::default(),
        );
        for _ in 0..1000 {
            let outcome = nav.apply_delta(GestureDelta::Rotate { delta_yaw: 0.01 });
            assert!(matches!(outcome, NavigationOutcome::Rotated { .. }));
        }
        assert!((nav.target_pose().yaw - 10.0).abs() < 1e-3);
    }

    #[test]
    fn two_finger_drag_rotates_without_moving() {
        let mut nav = controller();
        let _ = nav.handle_touch(&TouchEvent::start(&[(100.0, 300.0), (200.0, 300.0)]));
        let outcome =
            nav.handle_touch(&TouchEvent::moved(&[(140.0, 100.0), (240.0, 100.0)]));
        let NavigationOutcome::Rotated { yaw_target } = outcome else {
            panic!("expected rotation, got {outcome:?}");
        };
        assert!((yaw_target + 0.2).abs() < 1e-6);
        assert_eq!(nav.target_pose().position, Pose::default().position);
    }

    #[test]
    fn pan_follows_sampled_heading() {
        let mut nav = controller();
        let _ = nav.apply_delta(GestureDelta::Rotate {
            delta_yaw: std::f32::consts::FRAC_PI_2,
        });
        // Before any frame, the camera still faces -Z.
        let candidate = nav.pan_candidate(0.5, 0.0);
        assert!((candidate - Vec3::new(0.0, 2.0, 69.5)).length() < 1e-5);

        let _ = settle(&mut nav);
        let candidate = nav.pan_candidate(0.5, 0.0);
        assert!((candidate - Vec3::new(-0.5, 2.0, 70.0)).length() < 1e-4);
    }

    #[test]
    fn strafe_right_moves_positive_x_at_rest() {
        let mut nav = controller();
        let outcome = nav.apply_delta(GestureDelta::Pan {
            delta_forward: 0.0,
            delta_sideways: -0.5,
        });
        let NavigationOutcome::Moved { target } = outcome else {
            panic!("expected an accepted move, got {outcome:?}");
        };
        assert!((target - Vec3::new(0.5, 2.0, 70.0)).length() < 1e-5);
    }

    #[test]
    fn consecutive_steps_accumulate_on_target() {
        let mut nav = controller();
        let _ = nav.handle_touch(&TouchEvent::start(&[(200.0, 400.0)]));
        let mut y = 400.0;
        for _ in 0..4 {
            y -= 25.0;
            let _ = nav.handle_touch(&TouchEvent::moved(&[(200.0, y)]));
        }
        assert!((nav.target_pose().position.z - 68.0).abs() < 1e-4);
    }

    #[test]
    fn settled_position_stays_walkable_at_wall() {
        let mut nav = controller();
        let _ = nav.handle_touch(&TouchEvent::start(&[(200.0, 400.0)]));
        let mut x = 200.0;
        // Strafe left towards the left wall far more than the hall allows.
        for _ in 0..40 {
            x += 30.0;
            let _ = nav.handle_touch(&TouchEvent::moved(&[(x, 400.0)]));
        }
        let pose = settle(&mut nav);
        assert!(nav.boundaries().is_within_any_boundary(pose.position));
        assert!((pose.position.x + 5.0).abs() < 1e-3);
    }

    #[test]
    fn missing_contacts_do_nothing() {
        let mut nav = controller();
        let before = nav.snapshot();
        assert_eq!(
            nav.handle_touch(&TouchEvent::new(TouchPhase::Move, Vec::new())),
            NavigationOutcome::Ignored
        );
        assert_eq!(
            nav.handle_touch(&TouchEvent::new(TouchPhase::Start, Vec::new())),
            NavigationOutcome::Ignored
        );
        assert_eq!(nav.snapshot(), before);
    }

    #[test]
    fn snapshot_serializes() {
        let nav = controller();
        let json = serde_json::to_value(nav.snapshot()).unwrap();
        assert_eq!(json["state"], "idle");
    }
}
