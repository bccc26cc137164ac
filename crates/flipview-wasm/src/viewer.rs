//! WASM bindings for the transform engine.
//!
//! This module exposes one stateful session object, [`ImageViewer`], that a
//! JavaScript presentation layer drives: load bytes from a file picker,
//! flip/negate/restore from toolbar buttons, query the color under the
//! mouse cursor, and pull RGBA bytes for canvas rendering.

use flipview_core::{EngineError, FlipAxis, TransformEngine};
use wasm_bindgen::prelude::*;

use crate::types::ColorSample;

/// User-visible report when an operation runs before any image is loaded.
const NO_IMAGE_MESSAGE: &str = "There is no image loaded! Please load an image first.";

/// A stateful viewer session wrapping the core transform engine.
///
/// The engine owns the pixel buffer; JavaScript only ever sees copies of
/// rendered output and query results.
#[wasm_bindgen]
pub struct ImageViewer {
    engine: TransformEngine,
}

#[wasm_bindgen]
impl ImageViewer {
    /// Create an empty viewer with no image loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> ImageViewer {
        ImageViewer {
            engine: TransformEngine::new(),
        }
    }

    /// Decode image bytes (PNG, JPEG, or BMP) and install the result as the
    /// current image, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a decodable image; the previous
    /// image (if any) is kept.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.engine.load_bytes(bytes).map_err(to_js_error)
    }

    /// Flip the image left-to-right.
    pub fn flip_horizontal(&mut self) -> Result<(), JsValue> {
        self.flip(FlipAxis::Horizontal)
    }

    /// Flip the image top-to-bottom.
    pub fn flip_vertical(&mut self) -> Result<(), JsValue> {
        self.flip(FlipAxis::Vertical)
    }

    /// Flip the image across both axes.
    pub fn flip_both(&mut self) -> Result<(), JsValue> {
        self.flip(FlipAxis::Both)
    }

    /// Negate the image colors; alpha is untouched.
    pub fn negate(&mut self) -> Result<(), JsValue> {
        self.engine.negate().map_err(to_js_error)
    }

    /// Undo every flip applied since the image was loaded.
    pub fn restore_original(&mut self) -> Result<(), JsValue> {
        self.engine.restore_original().map_err(to_js_error)
    }

    /// The color under the cursor as a `{ x, y, r, g, b, a }` object, or
    /// `undefined` once the cursor leaves the image.
    ///
    /// Mouse coordinates arrive as signed integers; anything negative is
    /// already off the image.
    pub fn color_at(&self, x: i32, y: i32) -> JsValue {
        if x < 0 || y < 0 {
            return JsValue::UNDEFINED;
        }
        match self.engine.color_at(x as u32, y as u32) {
            Some(color) => {
                let sample = ColorSample::new(x as u32, y as u32, color);
                serde_wasm_bindgen::to_value(&sample).unwrap_or(JsValue::UNDEFINED)
            }
            None => JsValue::UNDEFINED,
        }
    }

    /// Image width in pixels (0 while no image is loaded).
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.engine.dimensions().map_or(0, |(w, _)| w)
    }

    /// Image height in pixels (0 while no image is loaded).
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.engine.dimensions().map_or(0, |(_, h)| h)
    }

    /// Whether an image is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.engine.is_loaded()
    }

    /// Returns the current image as interleaved RGBA bytes (4 bytes per
    /// pixel, row-major), the layout `ImageData` expects. Empty while no
    /// image is loaded.
    ///
    /// Note: This creates a copy of the pixel data into JavaScript memory.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.engine
            .buffer()
            .map(|b| b.to_rgba_bytes())
            .unwrap_or_default()
    }

    /// Same pixels as [`Self::rgba_pixels`], as the `Uint8ClampedArray` the
    /// `ImageData` constructor takes directly.
    pub fn rgba_clamped(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(&self.rgba_pixels()[..])
    }
}

impl Default for ImageViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageViewer {
    fn flip(&mut self, axis: FlipAxis) -> Result<(), JsValue> {
        self.engine.flip(axis).map_err(to_js_error)
    }
}

/// Map an engine error to a JS error value. The "no image" case also gets
/// a console warning so the report is visible even if the caller swallows
/// the rejection.
fn to_js_error(err: EngineError) -> JsValue {
    if matches!(err, EngineError::NoImageLoaded) {
        web_sys::console::warn_1(&JsValue::from_str(NO_IMAGE_MESSAGE));
    }
    JsValue::from_str(&err.to_string())
}
