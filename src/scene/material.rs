//! Materials and texture resolution.
//!
//! Materials are plain data owned by the [`Gallery`](super::Gallery) that
//! built them; nothing here is global. Textures are referenced by path
//! and resolved through an [`AssetResolver`], and an image that fails to
//! resolve becomes a neutral placeholder instead of failing the scene.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AtriumError;

/// Texture addressing outside the [0, 1] UV range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureWrap {
    /// Tile.
    Repeat,
    /// Clamp to the edge texel.
    Clamp,
}

/// A texture reference with tiling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureSpec {
    /// Asset path, relative to the asset root.
    pub path: String,
    /// Tiling factor along U and V.
    pub repeat: [u32; 2],
    /// Addressing mode on both axes.
    pub wrap: TextureWrap,
}

impl TextureSpec {
    /// Repeating texture at `path` tiled `u × v` times.
    #[must_use]
    pub fn tiled(path: impl Into<String>, u: u32, v: u32) -> Self {
        Self {
            path: path.into(),
            repeat: [u, v],
            wrap: TextureWrap::Repeat,
        }
    }
}

/// Physically based surface description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Base color (linear RGB), multiplied with the texture if any.
    pub color: [f32; 3],
    /// Optional albedo texture.
    pub texture: Option<TextureSpec>,
    /// Microfacet roughness.
    pub roughness: f32,
    /// Metalness.
    pub metalness: f32,
    /// Render both faces.
    pub double_sided: bool,
}

impl MaterialSpec {
    /// Untextured material of the given color.
    #[must_use]
    pub fn solid(color: [f32; 3]) -> Self {
        Self {
            color,
            texture: None,
            roughness: 0.5,
            metalness: 0.1,
            double_sided: false,
        }
    }

    /// Double-sided textured material in the gallery's standard finish.
    #[must_use]
    pub fn textured(texture: TextureSpec) -> Self {
        Self {
            color: WHITE,
            texture: Some(texture),
            roughness: 0.5,
            metalness: 0.1,
            double_sided: true,
        }
    }
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Convert an `0xRRGGBB` literal to normalized RGB.
#[must_use]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// What a static box is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// Walkable floor slab.
    Floor,
    /// Ceiling slab.
    Ceiling,
    /// Wall panel.
    Wall,
    /// Trim, baseboards, and pillars.
    Molding,
    /// Framed artwork.
    ArtFrame,
}

/// The full material set for one gallery instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Materials {
    /// Floor slabs.
    pub floor: MaterialSpec,
    /// Ceiling slabs.
    pub ceiling: MaterialSpec,
    /// Wall panels.
    pub wall: MaterialSpec,
    /// Trim and pillars.
    pub molding: MaterialSpec,
    /// Left/right edges of a frame.
    pub frame_side: MaterialSpec,
    /// Top/bottom edges of a frame.
    pub frame_edge: MaterialSpec,
    /// Back of a frame.
    pub frame_back: MaterialSpec,
}

impl Materials {
    /// Material set of the reference gallery.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            floor: MaterialSpec::textured(TextureSpec::tiled(
                "textures/laminate_floor_02_diff_4k.jpg",
                3,
                21,
            )),
            ceiling: MaterialSpec::textured(TextureSpec::tiled(
                "textures/beige_wall_001_diff_4k.jpg",
                5,
                5,
            )),
            wall: MaterialSpec::textured(TextureSpec::tiled(
                "textures/brick_wall_10_diff_4k.jpg",
                1,
                1,
            )),
            molding: MaterialSpec::textured(TextureSpec::tiled(
                "textures/painted_plaster_wall_disp_4k.png",
                1,
                1,
            )),
            frame_side: MaterialSpec::solid(rgb(0x88_88_88)),
            frame_edge: MaterialSpec::solid(rgb(0xaa_aa_aa)),
            frame_back: MaterialSpec::solid(rgb(0x55_55_55)),
        }
    }

    /// Material for a non-artwork surface. Frames use their side color
    /// here; see [`frame_faces`](Self::frame_faces) for per-face detail.
    #[must_use]
    pub fn for_kind(&self, kind: SurfaceKind) -> &MaterialSpec {
        match kind {
            SurfaceKind::Floor => &self.floor,
            SurfaceKind::Ceiling => &self.ceiling,
            SurfaceKind::Wall => &self.wall,
            SurfaceKind::Molding => &self.molding,
            SurfaceKind::ArtFrame => &self.frame_side,
        }
    }

    /// Per-face materials of a frame, in box face order
    /// `+X, -X, +Y, -Y, +Z (artwork), -Z`.
    #[must_use]
    pub fn frame_faces(&self, artwork: &TextureHandle) -> [FaceMaterial; 6] {
        [
            FaceMaterial::Solid(self.frame_side.color),
            FaceMaterial::Solid(self.frame_side.color),
            FaceMaterial::Solid(self.frame_edge.color),
            FaceMaterial::Solid(self.frame_edge.color),
            FaceMaterial::Texture(artwork.clone()),
            FaceMaterial::Solid(self.frame_back.color),
        ]
    }

    /// Every texture the set references, for preloading.
    #[must_use]
    pub fn textures(&self) -> Vec<&TextureSpec> {
        [
            &self.floor,
            &self.ceiling,
            &self.wall,
            &self.molding,
            &self.frame_side,
            &self.frame_edge,
            &self.frame_back,
        ]
        .into_iter()
        .filter_map(|m| m.texture.as_ref())
        .collect()
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::reference()
    }
}

/// A resolved texture, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureHandle {
    /// Image found at `path`.
    Image {
        /// Resolved path.
        path: PathBuf,
    },
    /// Neutral stand-in for a missing image.
    Placeholder {
        /// Flat fill color.
        color: [f32; 3],
    },
}

impl TextureHandle {
    /// Blank white stand-in.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::Placeholder { color: WHITE }
    }

    /// Whether this is a stand-in.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// One face of a multi-material box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceMaterial {
    /// Flat color.
    Solid([f32; 3]),
    /// Textured face.
    Texture(TextureHandle),
}

/// Looks up image assets by path.
pub trait AssetResolver {
    /// Resolve `path` to a texture, or explain why it is unavailable.
    fn resolve(&self, path: &str) -> Result<TextureHandle, AtriumError>;
}

/// Resolve `path`, substituting the placeholder on any failure.
pub fn resolve_or_placeholder(
    resolver: &dyn AssetResolver,
    path: Option<&str>,
) -> TextureHandle {
    let Some(path) = path else {
        return TextureHandle::placeholder();
    };
    match resolver.resolve(path) {
        Ok(handle) => handle,
        Err(e) => {
            log::warn!("using placeholder for {path}: {e}");
            TextureHandle::placeholder()
        }
    }
}

/// Resolves assets against a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssetResolver {
    root: PathBuf,
}

impl DirAssetResolver {
    /// Resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Asset root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetResolver for DirAssetResolver {
    fn resolve(&self, path: &str) -> Result<TextureHandle, AtriumError> {
        let full = self.root.join(path.trim_start_matches('/'));
        if full.is_file() {
            Ok(TextureHandle::Image { path: full })
        } else {
            Err(AtriumError::AssetLoad(format!(
                "{} not found",
                full.display()
            )))
        }
    }
}

/// Resolver that trusts every path; the renderer loads lazily.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredAssetResolver;

impl AssetResolver for DeferredAssetResolver {
    fn resolve(&self, path: &str) -> Result<TextureHandle, AtriumError> {
        if path.trim().is_empty() {
            return Err(AtriumError::AssetLoad("empty asset path".into()));
        }
        Ok(TextureHandle::Image {
            path: PathBuf::from(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_normalize() {
        assert_eq!(rgb(0xff_ff_ff), [1.0, 1.0, 1.0]);
        assert_eq!(rgb(0x00_00_00), [0.0, 0.0, 0.0]);
        let grey = rgb(0x88_88_88);
        assert!((grey[0] - 136.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn reference_textures_tile_as_authored() {
        let materials = Materials::reference();
        assert_eq!(materials.floor.texture.as_ref().unwrap().repeat, [3, 21]);
        assert_eq!(materials.ceiling.texture.as_ref().unwrap().repeat, [5, 5]);
        assert_eq!(materials.textures().len(), 4);
        assert!(materials.wall.double_sided);
    }

    #[test]
    fn two_galleries_do_not_share_material_state() {
        let mut a = Materials::reference();
        let b = Materials::reference();
        a.wall.roughness = 0.9;
        assert_eq!(b.wall.roughness, 0.5);
    }

    #[test]
    fn missing_image_degrades_to_placeholder() {
        let resolver = DirAssetResolver::new("/definitely/not/a/real/dir");
        let handle = resolve_or_placeholder(&resolver, Some("art/missing.jpg"));
        assert!(handle.is_placeholder());
    }

    #[test]
    fn absent_image_is_placeholder() {
        let handle = resolve_or_placeholder(&DeferredAssetResolver, None);
        assert_eq!(handle, TextureHandle::placeholder());
    }

    #[test]
    fn existing_file_resolves() {
        let dir = std::env::temp_dir()
            .join(format!("atrium-assets-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("art")).unwrap();
        std::fs::write(dir.join("art/bird.jpg"), b"jpeg").unwrap();

        let resolver = DirAssetResolver::new(&dir);
        let handle = resolve_or_placeholder(&resolver, Some("/art/bird.jpg"));
        assert_eq!(
            handle,
            TextureHandle::Image {
                path: dir.join("art/bird.jpg")
            }
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn frame_front_face_carries_artwork() {
        let faces = Materials::reference().frame_faces(&TextureHandle::placeholder());
        assert_eq!(faces[4], FaceMaterial::Texture(TextureHandle::placeholder()));
        assert_eq!(faces[5], FaceMaterial::Solid(rgb(0x55_55_55)));
    }
}
