//! Damped spring integrator.
//!
//! Each channel is a mass on a spring attached to its target, with
//! viscous friction. Retargeting mid-flight keeps the current velocity,
//! so a burst of pan steps produces one continuous glide instead of a
//! series of restarts.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use glam::Vec3;

use crate::options::MotionOptions;

/// Values a [`Spring`] can animate.
pub trait SpringValue:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Euclidean magnitude, used for rest detection.
    fn magnitude(self) -> f32;
}

impl SpringValue for f32 {
    const ZERO: Self = 0.0;

    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl SpringValue for Vec3 {
    const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    fn magnitude(self) -> f32 {
        self.length()
    }
}

/// Physical parameters shared by all channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Mass of the animated value.
    pub mass: f32,
    /// Spring stiffness.
    pub tension: f32,
    /// Viscous damping.
    pub friction: f32,
    /// Longest integration sub-step, seconds.
    pub max_step: f32,
    /// Speed below which the value may come to rest.
    pub rest_velocity: f32,
    /// Distance from target below which the value may come to rest.
    pub rest_displacement: f32,
}

impl SpringConfig {
    /// Longest sub-step semi-implicit Euler can take without diverging.
    ///
    /// Keeps both `friction * h / mass` and `tension * h² / mass` at or
    /// below 1, inside the integrator's stability region.
    #[must_use]
    pub fn stable_step(&self) -> f32 {
        let damping_bound = if self.friction > 0.0 {
            self.mass / self.friction
        } else {
            f32::INFINITY
        };
        damping_bound.min((self.mass / self.tension).sqrt())
    }

    /// Sub-step actually used: `max_step`, tightened to the stable bound.
    #[must_use]
    pub fn effective_step(&self) -> f32 {
        self.max_step.min(self.stable_step())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from(&MotionOptions::default())
    }
}

impl From<&MotionOptions> for SpringConfig {
    fn from(options: &MotionOptions) -> Self {
        Self {
            mass: options.mass,
            tension: options.tension,
            friction: options.friction,
            max_step: options.max_step,
            rest_velocity: options.rest_velocity,
            rest_displacement: options.rest_displacement,
        }
    }
}

/// Upper bound on sub-steps per `advance` call.
const MAX_SUBSTEPS: u32 = 1000;

/// A single animated channel.
///
/// State is kept as the offset from the target rather than an absolute
/// value, so the last fractions of a glide are not lost to f32 rounding
/// at large world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring<T: SpringValue> {
    target: T,
    offset: T,
    velocity: T,
    config: SpringConfig,
    at_rest: bool,
}

impl<T: SpringValue> Spring<T> {
    /// Spring resting at `value`.
    #[must_use]
    pub fn new(value: T, config: SpringConfig) -> Self {
        Self {
            target: value,
            offset: T::ZERO,
            velocity: T::ZERO,
            config,
            at_rest: true,
        }
    }

    /// Current interpolated value.
    #[must_use]
    pub fn sample(&self) -> T {
        self.target + self.offset
    }

    /// Destination the value is easing towards.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Current rate of change.
    #[must_use]
    pub fn velocity(&self) -> T {
        self.velocity
    }

    /// Whether the value has reached its target and stopped.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retarget. Velocity carries over; nothing moves until `advance`.
    pub fn set_target(&mut self, target: T) {
        self.offset = self.sample() - target;
        self.target = target;
        if self.offset != T::ZERO {
            self.at_rest = false;
        }
    }

    /// Place the value at `value` immediately, at rest.
    pub fn jump_to(&mut self, value: T) {
        self.target = value;
        self.offset = T::ZERO;
        self.velocity = T::ZERO;
        self.at_rest = true;
    }

    /// Integrate forward by `dt` seconds. Returns `true` while moving.
    ///
    /// Uses semi-implicit Euler in fixed sub-steps no longer than
    /// [`SpringConfig::effective_step`]. A frame longer than
    /// `MAX_SUBSTEPS` such steps is shortened rather than integrated with
    /// an unstable step.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.at_rest || !dt.is_finite() || dt <= 0.0 {
            return !self.at_rest;
        }
        let h_max = self.config.effective_step();
        if !(h_max.is_finite() && h_max > 0.0) {
            return !self.at_rest;
        }

        let steps = ((dt / h_max).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let h = (dt / steps as f32).min(h_max);
        let SpringConfig {
            mass,
            tension,
            friction,
            ..
        } = self.config;

        for _ in 0..steps {
            let accel = (self.offset * -tension - self.velocity * friction)
                * (1.0 / mass);
            self.velocity = self.velocity + accel * h;
            self.offset = self.offset + self.velocity * h;
        }

        let resting = self.velocity.magnitude() < self.config.rest_velocity
            && self.offset.magnitude() < self.config.rest_displacement;
        if resting {
            self.jump_to(self.target);
        }
        !self.at_rest
    }
}
