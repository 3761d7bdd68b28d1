//! Spring-based smoothing of camera motion.

pub mod smoother;
pub mod spring;

pub use smoother::MotionSmoother;
pub use spring::{Spring, SpringConfig, SpringValue};
