//! Image loading pipeline for Flipview.
//!
//! This module provides functionality for:
//! - Decoding PNG, JPEG, and BMP files into an ARGB pixel buffer
//! - Normalizing EXIF orientation so photos load upright
//! - Loading from raw bytes or from a file path
//!
//! # Architecture
//!
//! Decoding is synchronous and runs to completion before the caller regains
//! control; the engine and the presentation layer both depend on that.
//!
//! # Examples
//!
//! ```ignore
//! use flipview_core::decode::load_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let buffer = load_image(&bytes).unwrap();
//! println!("Loaded {}x{} image", buffer.width, buffer.height);
//! ```

mod loader;
mod types;

pub use loader::{load_image, load_image_from_path};
pub use types::{DecodeError, Orientation, PixelBuffer};
