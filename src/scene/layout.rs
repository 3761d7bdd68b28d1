//! Room layout of the reference gallery.
//!
//! Rooms are authored in coordinates local to the centre of their floor
//! slab and emitted in world space. The main hall runs along +Z from the
//! back wall at `z = 0`; two side rooms open off its right wall.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::material::{resolve_or_placeholder, AssetResolver, SurfaceKind};
use super::primitive::{ArtFrame, Light, Primitive};
use crate::camera::Boundary;

/// Ceiling height shared by every room.
pub const ROOM_HEIGHT: f32 = 5.0;
/// Thickness of wall panels.
const WALL_THICKNESS: f32 = 0.1;
/// Thickness of floor and ceiling slabs.
const SLAB_THICKNESS: f32 = 0.1;
/// Eye-level height of blank frames.
const FRAME_HEIGHT: f32 = 2.0;

/// A rectangular room: floor, ceiling, fixtures, and hung frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Display name, used in logs.
    pub name: String,
    /// World-space centre of the floor slab.
    pub center: Vec3,
    /// Extent along X.
    pub width: f32,
    /// Extent along Z.
    pub depth: f32,
    /// Floor-to-ceiling height.
    pub height: f32,
    /// Walls, trim, and pillars in room-local coordinates.
    pub fixtures: Vec<Primitive>,
    /// Frames in room-local coordinates.
    pub frames: Vec<ArtFrame>,
}

impl Room {
    /// Empty room (floor and ceiling only).
    pub fn new(
        name: impl Into<String>,
        center: Vec3,
        width: f32,
        depth: f32,
    ) -> Self {
        Self {
            name: name.into(),
            center,
            width,
            depth,
            height: ROOM_HEIGHT,
            fixtures: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Add a wall panel of length `length` centred at local `(x, z)`.
    #[must_use]
    pub fn with_wall(mut self, x: f32, z: f32, yaw: f32, length: f32) -> Self {
        self.fixtures.push(Primitive::new(
            SurfaceKind::Wall,
            Vec3::new(x, self.height * 0.5, z),
            yaw,
            Vec3::new(length, self.height, WALL_THICKNESS),
        ));
        self
    }

    /// Add a crown molding and baseboard running along Z at local `x`.
    #[must_use]
    pub fn with_trim_along_z(mut self, x: f32, z: f32, length: f32) -> Self {
        self.fixtures.push(Primitive::new(
            SurfaceKind::Molding,
            Vec3::new(x, self.height - 0.1, z),
            0.0,
            Vec3::new(0.1, 0.2, length),
        ));
        self.fixtures.push(Primitive::new(
            SurfaceKind::Molding,
            Vec3::new(x, 0.2, z),
            0.0,
            Vec3::new(0.1, 0.3, length),
        ));
        self
    }

    /// Add a doorway pillar with capital and plinth at local `(x, z)`.
    #[must_use]
    pub fn with_pillar(mut self, x: f32, z: f32) -> Self {
        let cap = Vec3::new(0.75, 0.2, 0.65);
        self.fixtures.extend([
            Primitive::new(
                SurfaceKind::Molding,
                Vec3::new(x, self.height * 0.5, z),
                0.0,
                Vec3::new(0.5, self.height, 0.5),
            ),
            Primitive::new(
                SurfaceKind::Molding,
                Vec3::new(x - 0.05, self.height - 0.1, z),
                0.0,
                cap,
            ),
            Primitive::new(
                SurfaceKind::Molding,
                Vec3::new(x - 0.05, 0.1, z),
                0.0,
                cap,
            ),
        ]);
        self
    }

    /// Hang a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: ArtFrame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Floor footprint as a walkable region.
    #[must_use]
    pub fn walkable_region(&self) -> Boundary {
        let hw = self.width * 0.5;
        let hd = self.depth * 0.5;
        Boundary::new(
            self.center.x - hw,
            self.center.x + hw,
            self.center.z - hd,
            self.center.z + hd,
        )
    }

    /// Emit every drawable in world space, resolving artwork images.
    pub fn primitives(&self, resolver: &dyn AssetResolver) -> Vec<Primitive> {
        let slab = Vec3::new(self.width, SLAB_THICKNESS, self.depth);
        let mut out = Vec::with_capacity(2 + self.fixtures.len() + self.frames.len());
        out.push(Primitive::new(SurfaceKind::Floor, Vec3::ZERO, 0.0, slab));
        out.push(Primitive::new(
            SurfaceKind::Ceiling,
            Vec3::new(0.0, self.height, 0.0),
            0.0,
            slab,
        ));
        out.extend(self.fixtures.iter().cloned());
        out.extend(self.frames.iter().map(|frame| {
            let mut p = Primitive::new(
                SurfaceKind::ArtFrame,
                frame.position,
                frame.yaw,
                frame.size,
            );
            p.artwork = Some(resolve_or_placeholder(resolver, frame.image.as_deref()));
            p
        }));
        out.into_iter().map(|p| p.offset(self.center)).collect()
    }
}

/// Main hall: 10 × 75, open on the right into both side rooms.
#[must_use]
pub fn main_hall() -> Room {
    let left = -5.0;
    let right = 5.0;
    // Local z runs from -37.5 (back wall) to 37.5 (entrance wall).
    let z = |world_z: f32| world_z - 37.5;

    let mut hall = Room::new("main hall", Vec3::new(0.0, 0.0, 37.5), 10.0, 75.0)
        .with_wall(0.0, z(0.0), 0.0, 10.0)
        .with_wall(0.0, z(75.0), PI, 10.0)
        .with_wall(left, 0.0, FRAC_PI_2, 75.0)
        .with_trim_along_z(left + 0.05, 0.0, 75.0);

    // Right wall segments leave openings at z ∈ [5, 20] and [30, 45].
    for (start, end) in [(0.0, 5.0), (20.0, 30.0), (45.0, 75.0)] {
        let mid = z((start + end) * 0.5);
        hall = hall
            .with_wall(right, mid, -FRAC_PI_2, end - start)
            .with_trim_along_z(right - 0.05, mid, end - start);
    }
    for doorway_edge in [5.0, 20.0, 30.0, 45.0] {
        hall = hall.with_pillar(right, z(doorway_edge));
    }

    for world_z in [10.0, 25.0, 40.0] {
        hall = hall.with_frame(ArtFrame::blank(
            Vec3::new(left + 0.1, FRAME_HEIGHT, z(world_z)),
            FRAC_PI_2,
        ));
    }
    for world_z in [25.0, 65.0] {
        hall = hall.with_frame(ArtFrame::blank(
            Vec3::new(right - 0.1, FRAME_HEIGHT, z(world_z)),
            -FRAC_PI_2,
        ));
    }

    let featured = [
        (65.0, Vec3::new(2.0, 3.0, 0.1), "art/two_birds_(ptilonopus_auranthfrons)_1973.26.15.jpg"),
        (61.0, Vec3::new(3.0, 3.0, 0.1), "art/washington_bridge_and_speedway,_new_york_2018.177.193.jpg"),
        (56.0, Vec3::new(4.0, 4.0, 0.1), "art/architectural_fantasy_with_obelisks,_ruins,_and_a_piazza_1982.24.2.jpg"),
    ];
    for (world_z, size, image) in featured {
        hall = hall.with_frame(ArtFrame::with_image(
            Vec3::new(left + 0.2, 2.3, z(world_z)),
            FRAC_PI_2,
            size,
            image,
        ));
    }
    hall
}

/// 10 × 15 side room, open on its left (hall) side.
#[must_use]
pub fn side_room(name: &str, center: Vec3) -> Room {
    let mut room = Room::new(name, center, 10.0, 15.0)
        .with_wall(0.0, -7.5, 0.0, 10.0)
        .with_wall(0.0, 7.5, PI, 10.0)
        .with_wall(5.0, 0.0, -FRAC_PI_2, 15.0)
        .with_frame(ArtFrame::blank(Vec3::new(0.0, FRAME_HEIGHT, -7.4), 0.0))
        .with_frame(ArtFrame::blank(Vec3::new(0.0, FRAME_HEIGHT, 7.4), PI));
    for z in [-5.0, 0.0, 5.0] {
        room = room.with_frame(ArtFrame::blank(
            Vec3::new(4.9, FRAME_HEIGHT, z),
            -FRAC_PI_2,
        ));
    }
    room
}

/// Main hall plus the far and near side rooms, in boundary-table order.
#[must_use]
pub fn reference_rooms() -> Vec<Room> {
    vec![
        main_hall(),
        side_room("far side room", Vec3::new(10.0, 0.0, 37.5)),
        side_room("near side room", Vec3::new(10.0, 0.0, 12.5)),
    ]
}

/// Ambient fill plus three ceiling point lights.
#[must_use]
pub fn reference_lights() -> Vec<Light> {
    vec![
        Light::Ambient { intensity: 0.5 },
        Light::Point {
            position: Vec3::new(0.0, 5.0, 37.5),
            intensity: 0.75,
        },
        Light::Point {
            position: Vec3::new(5.0, 5.0, 5.0),
            intensity: 0.75,
        },
        Light::Point {
            position: Vec3::new(-5.0, 5.0, 5.0),
            intensity: 0.75,
        },
    ]
}
