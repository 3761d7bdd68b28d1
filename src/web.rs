//! Browser adapter.
//!
//! Converts DOM `TouchEvent`s into [`TouchEvent`] values and exposes the
//! per-frame camera pose to JavaScript. The page owns the renderer; it
//! calls [`WebGallery::frame`] from `requestAnimationFrame` and copies the
//! returned pose onto its camera.

use std::sync::Once;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::camera::NavigationOutcome;
use crate::engine::GalleryEngine;
use crate::input::{TouchEvent, TouchPhase, TouchPoint};
use crate::options::Options;
use crate::scene::{DeferredAssetResolver, Gallery};

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("console logger already installed");
        }
    });
}

fn js_error(e: &impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Read the phase and the first two contacts of a DOM touch event.
fn convert(event: &web_sys::TouchEvent) -> Option<TouchEvent> {
    let phase = TouchPhase::from_dom_type(&event.type_())?;
    let touches = event.touches();
    let contacts = (0..touches.length().min(2))
        .filter_map(|i| touches.get(i))
        .map(|t| TouchPoint::new(t.client_x() as f32, t.client_y() as f32))
        .collect();
    Some(TouchEvent::new(phase, contacts))
}

/// The gallery runtime as seen from JavaScript.
#[wasm_bindgen]
pub struct WebGallery {
    engine: GalleryEngine,
}

#[wasm_bindgen]
impl WebGallery {
    /// Reference gallery with default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGallery, JsValue> {
        init_logging();
        let gallery = Gallery::reference(&DeferredAssetResolver);
        let engine = GalleryEngine::new(Options::default(), gallery)
            .map_err(|e| js_error(&e))?;
        Ok(Self { engine })
    }

    /// Reference gallery configured from TOML option text.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(toml_text: &str) -> Result<WebGallery, JsValue> {
        init_logging();
        let options: Options = toml::from_str(toml_text)
            .map_err(|e| js_error(&e))?;
        let gallery = Gallery::reference(&DeferredAssetResolver);
        let engine = GalleryEngine::new(options, gallery)
            .map_err(|e| js_error(&e))?;
        Ok(Self { engine })
    }

    /// Forward a DOM touch event. Returns `true` when a navigation target
    /// changed.
    #[wasm_bindgen(js_name = handleTouch)]
    pub fn handle_touch(&mut self, event: &web_sys::TouchEvent) -> bool {
        let Some(event) = convert(event) else {
            return false;
        };
        matches!(
            self.engine.handle_touch(&event),
            NavigationOutcome::Moved { .. } | NavigationOutcome::Rotated { .. }
        )
    }

    /// Advance one frame and return `[x, y, z, yaw]`.
    pub fn frame(&mut self) -> Box<[f32]> {
        let pose = self.engine.frame();
        Box::new([pose.position.x, pose.position.y, pose.position.z, pose.yaw])
    }

    /// Column-major view-projection matrix of the current frame.
    #[wasm_bindgen(js_name = viewProj)]
    pub fn view_proj(&self) -> Box<[f32]> {
        self.engine.camera().build_matrix().to_cols_array().into()
    }

    /// Canvas changed size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine.resize(width, height);
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.engine.frame_timing().fps()
    }
}
