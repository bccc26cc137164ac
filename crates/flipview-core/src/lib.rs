//! Flipview Core - Image transform engine
//!
//! This crate provides the image-side functionality for Flipview: decoding
//! raster files into an ARGB pixel buffer, flipping the buffer across its
//! axes while tracking the cumulative transform, negating colors, restoring
//! the original orientation, and querying the color under a coordinate.
//!
//! The presentation layer (window, toolbar, file chooser) lives elsewhere
//! and drives the [`engine::TransformEngine`] through plain method calls.

pub mod decode;
pub mod engine;
pub mod negate;
pub mod transform;

pub use decode::{load_image, load_image_from_path, DecodeError, PixelBuffer};
pub use engine::{EngineError, TransformEngine};
pub use negate::negate_in_place;
pub use transform::{apply_to_buffer, AffineTransform, FlipAxis};

/// A single pixel split into its four channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a new Rgba from individual channel values
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a 32-bit ARGB value into channels.
    pub fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack the channels into a 32-bit ARGB value.
    pub fn to_argb(self) -> u32 {
        (u32::from(self.a) << 24)
            | (u32::from(self.r) << 16)
            | (u32::from(self.g) << 8)
            | u32::from(self.b)
    }
}
