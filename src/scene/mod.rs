//! Static gallery content handed to the renderer.
//!
//! The scene is declarative: rooms are laid out once, their artwork is
//! resolved once, and the result never changes while the camera walks
//! through it. Materials belong to the [`Gallery`] that built them, so
//! independent galleries (and tests) never share state.

mod layout;
mod material;
mod primitive;

use glam::Vec3;
pub use layout::{
    main_hall, reference_lights, reference_rooms, side_room, Room, ROOM_HEIGHT,
};
pub use material::{
    resolve_or_placeholder, rgb, AssetResolver, DeferredAssetResolver,
    DirAssetResolver, FaceMaterial, MaterialSpec, Materials, SurfaceKind,
    TextureHandle, TextureSpec, TextureWrap,
};
pub use primitive::{ArtFrame, Light, Primitive};

use crate::camera::BoundaryTable;

/// A fully resolved, immutable gallery scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    materials: Materials,
    rooms: Vec<Room>,
    lights: Vec<Light>,
    primitives: Vec<Primitive>,
}

impl Gallery {
    /// Build a gallery from rooms, resolving artwork with `resolver`.
    pub fn new(
        rooms: Vec<Room>,
        lights: Vec<Light>,
        materials: Materials,
        resolver: &dyn AssetResolver,
    ) -> Self {
        let primitives: Vec<Primitive> =
            rooms.iter().flat_map(|r| r.primitives(resolver)).collect();
        let placeholders = primitives
            .iter()
            .filter_map(|p| p.artwork.as_ref())
            .filter(|a| a.is_placeholder())
            .count();
        log::info!(
            "gallery built: {} rooms, {} primitives, {} blank canvases",
            rooms.len(),
            primitives.len(),
            placeholders
        );
        Self {
            materials,
            rooms,
            lights,
            primitives,
        }
    }

    /// The reference three-room gallery.
    pub fn reference(resolver: &dyn AssetResolver) -> Self {
        Self::new(
            reference_rooms(),
            reference_lights(),
            Materials::reference(),
            resolver,
        )
    }

    /// Material set owned by this gallery.
    #[must_use]
    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    /// Room definitions.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Scene lights.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Every static drawable, in world space.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Drawables of one kind.
    pub fn primitives_of(
        &self,
        kind: SurfaceKind,
    ) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(move |p| p.kind == kind)
    }

    /// Floor footprints of every room, in room order.
    #[must_use]
    pub fn walkable_regions(&self) -> BoundaryTable {
        BoundaryTable::new(self.rooms.iter().map(Room::walkable_region).collect())
    }

    /// Name of the room whose floor contains `point`, if any.
    #[must_use]
    pub fn room_at(&self, point: Vec3) -> Option<&str> {
        self.rooms
            .iter()
            .find(|r| r.walkable_region().contains(point))
            .map(|r| r.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_floor_plan_matches_boundary_table() {
        let gallery = Gallery::reference(&DeferredAssetResolver);
        assert_eq!(gallery.walkable_regions(), BoundaryTable::reference());
    }

    #[test]
    fn reference_gallery_has_three_floors_and_ceilings() {
        let gallery = Gallery::reference(&DeferredAssetResolver);
        assert_eq!(gallery.primitives_of(SurfaceKind::Floor).count(), 3);
        assert_eq!(gallery.primitives_of(SurfaceKind::Ceiling).count(), 3);
        assert_eq!(gallery.lights().len(), 4);
    }

    #[test]
    fn missing_art_does_not_fail_the_scene() {
        let gallery =
            Gallery::reference(&DirAssetResolver::new("/no/such/assets"));
        let frames: Vec<_> = gallery.primitives_of(SurfaceKind::ArtFrame).collect();
        assert_eq!(frames.len(), 8 + 5 + 5);
        assert!(frames
            .iter()
            .all(|f| f.artwork.as_ref().is_some_and(TextureHandle::is_placeholder)));
    }

    #[test]
    fn room_lookup_by_position() {
        let gallery = Gallery::reference(&DeferredAssetResolver);
        assert_eq!(gallery.room_at(Vec3::new(0.0, 2.0, 70.0)), Some("main hall"));
        assert_eq!(
            gallery.room_at(Vec3::new(12.0, 2.0, 37.5)),
            Some("far side room")
        );
        assert_eq!(gallery.room_at(Vec3::new(12.0, 2.0, 25.0)), None);
    }
}
