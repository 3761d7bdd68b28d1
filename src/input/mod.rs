//! Input handling: platform-agnostic touch events and the gesture
//! interpreter that turns them into navigation deltas.

pub mod event;
pub mod gesture;

pub use event::{TouchEvent, TouchPhase, TouchPoint};
pub use gesture::{
    GestureDelta, GestureInterpreter, GestureMode, GestureSettings,
    GestureState,
};
