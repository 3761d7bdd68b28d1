//! Position and yaw smoothing for the navigation camera.

use glam::Vec3;

use super::spring::{Spring, SpringConfig};
use crate::camera::Pose;

/// Eases the camera pose towards navigation targets across frames.
///
/// Holds one vector channel (position) and one scalar channel (yaw).
/// Targets change only on accepted navigation; the interpolated values
/// change only in [`advance`](Self::advance), which the frame loop calls
/// once per tick. There is no internal clock.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSmoother {
    position: Spring<Vec3>,
    yaw: Spring<f32>,
}

impl MotionSmoother {
    /// Smoother resting at `initial`.
    #[must_use]
    pub fn new(initial: Pose, config: SpringConfig) -> Self {
        Self {
            position: Spring::new(initial.position, config),
            yaw: Spring::new(initial.yaw, config),
        }
    }

    /// Retarget the position channel.
    pub fn set_position_target(&mut self, target: Vec3) {
        self.position.set_target(target);
    }

    /// Retarget the yaw channel.
    pub fn set_yaw_target(&mut self, target: f32) {
        self.yaw.set_target(target);
    }

    /// Interpolated position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position.sample()
    }

    /// Interpolated yaw.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw.sample()
    }

    /// Position the smoother is heading to.
    #[must_use]
    pub fn position_target(&self) -> Vec3 {
        self.position.target()
    }

    /// Yaw the smoother is heading to.
    #[must_use]
    pub fn yaw_target(&self) -> f32 {
        self.yaw.target()
    }

    /// Both interpolated channels as a pose.
    #[must_use]
    pub fn sample(&self) -> Pose {
        Pose::new(self.position(), self.yaw())
    }

    /// Both targets as a pose (where the camera will settle).
    #[must_use]
    pub fn target(&self) -> Pose {
        Pose::new(self.position_target(), self.yaw_target())
    }

    /// Advance both channels by one frame. Returns `true` while either
    /// channel is still moving.
    pub fn advance(&mut self, dt: f32) -> bool {
        let moving_position = self.position.advance(dt);
        let moving_yaw = self.yaw.advance(dt);
        moving_position || moving_yaw
    }

    /// Whether both channels have settled on their targets.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.position.is_at_rest() && self.yaw.is_at_rest()
    }

    /// Snap both channels to `pose` with no easing.
    pub fn jump_to(&mut self, pose: Pose) {
        self.position.jump_to(pose.position);
        self.yaw.jump_to(pose.yaw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smoother() -> MotionSmoother {
        MotionSmoother::new(Pose::default(), SpringConfig::default())
    }

    #[test]
    fn sample_is_defined_before_any_frame() {
        let s = smoother();
        assert_eq!(s.sample(), Pose::default());
        assert!(s.is_settled());
    }

    #[test]
    fn channels_advance_independently() {
        let mut s = smoother();
        s.set_yaw_target(1.0);
        assert!(s.advance(1.0 / 60.0));
        assert_eq!(s.position(), Pose::default().position);
        assert!(s.yaw() > 0.0);
    }

    #[test]
    fn keeps_settling_without_new_targets() {
        let mut s = smoother();
        s.set_position_target(Vec3::new(0.0, 2.0, 69.5));
        let mut frames = 0;
        while s.advance(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 600, "smoother never settled");
        }
        assert_eq!(s.position(), Vec3::new(0.0, 2.0, 69.5));
        assert_eq!(s.sample(), s.target());
    }

    #[test]
    fn jump_to_skips_easing() {
        let mut s = smoother();
        let pose = Pose::new(Vec3::new(10.0, 2.0, 10.0), 1.5);
        s.set_position_target(Vec3::ZERO);
        s.jump_to(pose);
        assert_eq!(s.sample(), pose);
        assert!(s.is_settled());
    }
}
