//! Walkable floor regions.
//!
//! The camera is only allowed to settle on the ground plane inside the
//! union of a fixed set of axis-aligned rectangles. Containment is a
//! plain inclusive point-in-rectangle test on the `(x, z)` projection;
//! height is ignored.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the ground plane (`x`/`z`), bounds inclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
pub struct Boundary {
    /// Minimum x coordinate.
    pub x_min: f32,
    /// Maximum x coordinate.
    pub x_max: f32,
    /// Minimum z coordinate.
    pub z_min: f32,
    /// Maximum z coordinate.
    pub z_max: f32,
}

impl Boundary {
    /// Create a rectangle from its ground-plane extents.
    #[must_use]
    pub const fn new(x_min: f32, x_max: f32, z_min: f32, z_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
        }
    }

    /// Whether the `(x, z)` projection of `point` lies inside, edges
    /// included.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.z >= self.z_min
            && point.z <= self.z_max
    }

    /// Whether the extents are finite and not inverted.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        [self.x_min, self.x_max, self.z_min, self.z_max]
            .iter()
            .all(|v| v.is_finite())
            && self.x_min <= self.x_max
            && self.z_min <= self.z_max
    }

    /// Ground-plane centre of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x_min + self.x_max) * 0.5,
            (self.z_min + self.z_max) * 0.5,
        )
    }
}

/// Main hall of the reference gallery.
pub const MAIN_HALL: Boundary = Boundary::new(-5.0, 5.0, 0.0, 75.0);
/// Side room off the right wall, far from the entrance.
pub const FAR_SIDE_ROOM: Boundary = Boundary::new(5.0, 15.0, 30.0, 45.0);
/// Side room off the right wall, near the entrance.
pub const NEAR_SIDE_ROOM: Boundary = Boundary::new(5.0, 15.0, 5.0, 20.0);

/// Ordered list of walkable regions. Constant once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryTable {
    boundaries: Vec<Boundary>,
}

impl BoundaryTable {
    /// Build a table from an ordered list of regions.
    #[must_use]
    pub fn new(boundaries: Vec<Boundary>) -> Self {
        Self { boundaries }
    }

    /// Main hall plus the two side rooms of the reference layout.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(vec![MAIN_HALL, FAR_SIDE_ROOM, NEAR_SIDE_ROOM])
    }

    /// First region (in table order) containing `point`, if any.
    #[must_use]
    pub fn find(&self, point: Vec3) -> Option<&Boundary> {
        self.boundaries.iter().find(|b| b.contains(point))
    }

    /// Whether `point` lies inside at least one region.
    #[must_use]
    pub fn is_within_any_boundary(&self, point: Vec3) -> bool {
        self.find(point).is_some()
    }

    /// All regions in priority order.
    #[must_use]
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Whether the table has no regions (nothing is walkable).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}

impl Default for BoundaryTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl From<Vec<Boundary>> for BoundaryTable {
    fn from(boundaries: Vec<Boundary>) -> Self {
        Self::new(boundaries)
    }
}
