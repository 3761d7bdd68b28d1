// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Touch-driven walkthrough engine for 3D art-gallery scenes.
//!
//! Atrium turns one- and two-finger touch gestures into a smoothed camera
//! walk through a static gallery, keeping the camera inside a whitelist of
//! walkable floor rectangles.
//!
//! # Key entry points
//!
//! - [`engine::GalleryEngine`] - the façade a host drives each frame
//! - [`camera::NavigationController`] - gesture → boundary test → smoother
//! - [`scene::Gallery`] - static rooms, materials, and lights for the
//!   renderer
//! - [`options::Options`] - runtime configuration (camera, navigation,
//!   motion)
//! - [`replay::ReplayScript`] - headless playback of recorded sessions
//!
//! # Data flow
//!
//! Touch events feed the [`input::GestureInterpreter`], which emits pan or
//! rotate deltas. The controller tests each pan candidate against the
//! [`camera::BoundaryTable`] and hands accepted targets to the
//! [`animation::MotionSmoother`]. Every frame the host advances the
//! smoother and copies the sampled [`camera::Pose`] into its renderer.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod replay;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::GalleryEngine;
pub use error::AtriumError;
