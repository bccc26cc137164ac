//! Flipview WASM - WebAssembly bindings for the Flipview engine
//!
//! This crate exposes the flipview-core transform engine to
//! JavaScript/TypeScript presentation layers as a stateful viewer session.
//! The GUI owns one [`ImageViewer`] per window and routes its events
//! (file chosen, toolbar button pressed, mouse moved) into plain method
//! calls; pixel output comes back as RGBA bytes ready for a canvas.
//!
//! # Module Structure
//!
//! - `viewer` - The stateful `ImageViewer` session object
//! - `types` - JS-friendly value types for query results
//!
//! # Usage
//!
//! ```typescript
//! import init, { ImageViewer } from '@flipview/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const viewer = new ImageViewer();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! viewer.load(bytes);
//!
//! viewer.flip_horizontal();
//! ctx.putImageData(
//!   new ImageData(new Uint8ClampedArray(viewer.rgba_pixels()), viewer.width, viewer.height),
//!   0, 0,
//! );
//! ```

use wasm_bindgen::prelude::*;

mod types;
mod viewer;

// Re-export public types
pub use types::ColorSample;
pub use viewer::ImageViewer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
