//! Shared utilities.

pub mod frame_timing;

pub use frame_timing::{FrameTiming, MAX_FRAME_DT};
