//! Top-level façade wiring options, scene, navigation, and camera.
//!
//! A host (the CLI replay driver, the browser adapter, or a native
//! renderer) owns one [`GalleryEngine`], forwards touch events to
//! [`GalleryEngine::handle_touch`], and calls [`GalleryEngine::update`]
//! once per frame before drawing [`GalleryEngine::gallery`] from
//! [`GalleryEngine::camera`].

use crate::animation::SpringConfig;
use crate::camera::{
    Camera, CameraUniform, NavigationController, NavigationOutcome, Pose,
};
use crate::error::AtriumError;
use crate::input::{GestureSettings, TouchEvent};
use crate::options::Options;
use crate::scene::Gallery;
use crate::util::{FrameTiming, MAX_FRAME_DT};

/// The gallery runtime: one scene, one walker.
#[derive(Debug, Clone)]
pub struct GalleryEngine {
    options: Options,
    gallery: Gallery,
    controller: NavigationController,
    camera: Camera,
    uniform: CameraUniform,
    frame_timing: FrameTiming,
}

impl GalleryEngine {
    /// Build an engine after validating `options`.
    pub fn new(options: Options, gallery: Gallery) -> Result<Self, AtriumError> {
        options.validate()?;
        let controller = NavigationController::from_options(&options);
        let camera = Camera::new(controller.pose(), &options.camera);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let regions = gallery.walkable_regions();
        if regions != *controller.boundaries() {
            log::warn!(
                "navigation boundaries ({}) differ from the gallery floor plan ({})",
                controller.boundaries().len(),
                regions.len()
            );
        }
        log::info!(
            "gallery engine ready at {} facing {:.3} rad",
            camera.pose.position,
            camera.pose.yaw
        );

        Ok(Self {
            options,
            gallery,
            controller,
            camera,
            uniform,
            frame_timing: FrameTiming::new(),
        })
    }

    /// Forward one touch event to the navigation controller.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> NavigationOutcome {
        self.controller.handle_touch(event)
    }

    /// Advance smoothing by `dt` seconds and push the result to the camera.
    ///
    /// Steps longer than [`MAX_FRAME_DT`] are clamped, as the frame clock
    /// does for a backgrounded tab.
    pub fn update(&mut self, dt: f32) -> Pose {
        // NaN must reach the smoother unchanged, where it is a no-op.
        let dt = if dt > MAX_FRAME_DT { MAX_FRAME_DT } else { dt };
        let pose = self.controller.tick(dt);
        self.camera.set_pose(pose);
        self.uniform.update_view_proj(&self.camera);
        pose
    }

    /// [`update`](Self::update) driven by the engine's own frame clock.
    pub fn frame(&mut self) -> Pose {
        let dt = self.frame_timing.tick();
        self.update(dt)
    }

    /// Viewport changed size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.uniform.update_view_proj(&self.camera);
    }

    /// Replace options and rebuild the navigation stack.
    ///
    /// The walker stays where it is heading if that spot is walkable under
    /// the new floor plan, otherwise it returns to the configured start.
    pub fn set_options(&mut self, new: Options) -> Result<(), AtriumError> {
        new.validate()?;
        let boundaries = new.navigation.boundary_table();
        let target = self.controller.target_pose();
        let initial = if boundaries.is_within_any_boundary(target.position) {
            target
        } else {
            log::info!(
                "{} is outside the new floor plan, returning to start",
                target.position
            );
            new.camera.start_pose()
        };
        self.controller = NavigationController::new(
            initial,
            boundaries,
            GestureSettings::from(&new.navigation),
            SpringConfig::from(&new.motion),
        );
        let aspect = self.camera.aspect;
        self.camera = Camera::new(initial, &new.camera);
        self.camera.aspect = aspect;
        self.uniform.update_view_proj(&self.camera);
        self.options = new;
        Ok(())
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Static scene content.
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Navigation controller (read-only).
    #[must_use]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Renderer-facing camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// GPU uniform for the current frame.
    #[must_use]
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Frame clock.
    #[must_use]
    pub fn frame_timing(&self) -> &FrameTiming {
        &self.frame_timing
    }
}
