//! Camera system for walking through the gallery.
//!
//! Provides the walkable-region table, the camera pose, the touch
//! navigation controller, and the renderer-facing camera.

pub mod boundary;
pub mod controller;
pub mod core;
pub mod pose;

pub use boundary::{Boundary, BoundaryTable};
pub use controller::{
    NavigationController, NavigationOutcome, NavigationSnapshot,
    NavigationState,
};
pub use self::core::{Camera, CameraUniform};
pub use pose::Pose;
