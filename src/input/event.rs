//! Platform-agnostic touch events.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Phase of a touch event as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    /// One or more contacts went down.
    Start,
    /// Contacts moved.
    Move,
    /// Contacts lifted.
    End,
    /// The platform aborted the interaction (treated like `End`).
    Cancel,
}

impl TouchPhase {
    /// Phase for a DOM event type (`touchstart`, `touchmove`, ...).
    #[must_use]
    pub fn from_dom_type(event_type: &str) -> Option<Self> {
        match event_type {
            "touchstart" => Some(Self::Start),
            "touchmove" => Some(Self::Move),
            "touchend" => Some(Self::End),
            "touchcancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// A single contact point in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Horizontal client coordinate.
    pub x: f32,
    /// Vertical client coordinate (grows downward).
    pub y: f32,
}

impl TouchPoint {
    /// Create a contact point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// As a `glam` vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<(f32, f32)> for TouchPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Platform-agnostic touch event.
///
/// `contacts` lists the fingers currently on the surface, in platform
/// order. Only the first two are ever read; a third finger is treated
/// as part of a two-finger gesture.
///
/// # Example
///
/// ```
/// use atrium::input::{TouchEvent, TouchPhase, TouchPoint};
///
/// let event =
///     TouchEvent::new(TouchPhase::Move, vec![TouchPoint::new(120.0, 300.0)]);
/// assert_eq!(event.finger_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    /// Start, move, end or cancel.
    pub phase: TouchPhase,
    /// Active contacts.
    #[serde(default)]
    pub contacts: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Create an event.
    #[must_use]
    pub fn new(phase: TouchPhase, contacts: Vec<TouchPoint>) -> Self {
        Self { phase, contacts }
    }

    /// Start event with the given contacts.
    #[must_use]
    pub fn start(contacts: &[(f32, f32)]) -> Self {
        Self::from_pairs(TouchPhase::Start, contacts)
    }

    /// Move event with the given contacts.
    #[must_use]
    pub fn moved(contacts: &[(f32, f32)]) -> Self {
        Self::from_pairs(TouchPhase::Move, contacts)
    }

    /// End event with no remaining contacts.
    #[must_use]
    pub fn end() -> Self {
        Self::new(TouchPhase::End, Vec::new())
    }

    fn from_pairs(phase: TouchPhase, contacts: &[(f32, f32)]) -> Self {
        Self::new(phase, contacts.iter().copied().map(TouchPoint::from).collect())
    }

    /// Number of contacts that matter for classification (0, 1 or 2).
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.contacts.len().min(2)
    }

    /// First contact, if any.
    #[must_use]
    pub fn primary(&self) -> Option<TouchPoint> {
        self.contacts.first().copied()
    }

    /// Second contact, if any.
    #[must_use]
    pub fn secondary(&self) -> Option<TouchPoint> {
        self.contacts.get(1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_contacts_count_as_two() {
        let event =
            TouchEvent::moved(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        assert_eq!(event.finger_count(), 2);
        assert_eq!(event.secondary(), Some(TouchPoint::new(10.0, 0.0)));
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{"phase":"start","contacts":[{"x":1.0,"y":2.0}]}"#;
        let event: TouchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, TouchEvent::start(&[(1.0, 2.0)]));
    }

    #[test]
    fn dom_event_types_map_to_phases() {
        assert_eq!(TouchPhase::from_dom_type("touchstart"), Some(TouchPhase::Start));
        assert_eq!(TouchPhase::from_dom_type("touchcancel"), Some(TouchPhase::Cancel));
        assert_eq!(TouchPhase::from_dom_type("mousedown"), None);
    }

    #[test]
    fn missing_contacts_default_to_empty() {
        let event: TouchEvent =
            serde_json::from_str(r#"{"phase":"end"}"#).unwrap();
        assert_eq!(event.finger_count(), 0);
        assert!(event.primary().is_none());
    }
}
