//! The transform engine: owned image state and the operations on it.
//!
//! [`TransformEngine`] owns the current pixel buffer and the cumulative
//! affine transform. The presentation layer holds one engine instance and
//! calls plain methods on it; the engine never calls back out.
//!
//! # State Machine
//!
//! The engine starts empty. `load_*` installs a buffer and resets the
//! cumulative transform to identity. Flips replace the buffer and extend the
//! cumulative transform; negate mutates the buffer in place and does not
//! touch the transform; restore applies the inverse of the cumulative
//! transform once and resets it. Operations that need an image fail with
//! [`EngineError::NoImageLoaded`] while the engine is empty, leaving state
//! unchanged.

use std::path::Path;

use thiserror::Error;

use crate::decode::{self, DecodeError, PixelBuffer};
use crate::negate::negate_in_place;
use crate::transform::{apply_to_buffer, AffineTransform, FlipAxis};
use crate::Rgba;

/// Error types for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An operation that requires an image ran before any load.
    #[error("no image loaded")]
    NoImageLoaded,

    /// Image loading failed; the previous image (if any) is kept.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Owns the current pixel buffer and the composed transform matrix.
#[derive(Debug, Default)]
pub struct TransformEngine {
    buffer: Option<PixelBuffer>,
    transforms: AffineTransform,
}

impl TransformEngine {
    /// Create an empty engine with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode image bytes and install the result as the current image.
    ///
    /// Resets the cumulative transform to identity. On decode failure the
    /// engine keeps its previous state.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        let buffer = decode::load_image(bytes)?;
        self.buffer = Some(buffer);
        self.transforms = AffineTransform::identity();
        Ok(())
    }

    /// Read an image file from disk and install it as the current image.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EngineError> {
        let buffer = decode::load_image_from_path(path)?;
        self.buffer = Some(buffer);
        self.transforms = AffineTransform::identity();
        Ok(())
    }

    /// Adopt an already-decoded buffer as the current image.
    ///
    /// Resets the cumulative transform to identity, same as a load.
    pub fn load_buffer(&mut self, buffer: PixelBuffer) {
        self.buffer = Some(buffer);
        self.transforms = AffineTransform::identity();
    }

    /// Flip the image across the given axis.
    ///
    /// Composes the reflection into the cumulative transform, then remaps
    /// the buffer through that single reflection. Dimensions are unchanged.
    pub fn flip(&mut self, axis: FlipAxis) -> Result<(), EngineError> {
        let image = self.buffer.as_ref().ok_or(EngineError::NoImageLoaded)?;
        let reflection = AffineTransform::reflection(axis, image.width, image.height);

        let flipped = apply_to_buffer(image, &reflection);
        self.buffer = Some(flipped);
        self.transforms = self.transforms.then(&reflection);
        Ok(())
    }

    /// Negate the image colors in place; alpha is untouched.
    ///
    /// Negation is not a geometric transform and does not enter the
    /// cumulative matrix, so restore does not undo it.
    pub fn negate(&mut self) -> Result<(), EngineError> {
        let image = self.buffer.as_mut().ok_or(EngineError::NoImageLoaded)?;
        negate_in_place(image);
        Ok(())
    }

    /// Undo every flip applied since the last load in one step.
    ///
    /// Applies the inverse of the cumulative transform to the buffer and
    /// resets the transform to identity.
    pub fn restore_original(&mut self) -> Result<(), EngineError> {
        let image = self.buffer.as_ref().ok_or(EngineError::NoImageLoaded)?;
        let inverse = self.transforms.inverse();

        let restored = apply_to_buffer(image, &inverse);
        self.buffer = Some(restored);
        self.transforms = AffineTransform::identity();
        Ok(())
    }

    /// The color at the given coordinate.
    ///
    /// Returns `None` when the coordinate lies outside
    /// `[0, width) x [0, height)` or no image is loaded. Callers treat this
    /// as "cursor left the image" and clear their display; it is not an
    /// error.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgba> {
        let image = self.buffer.as_ref()?;
        image.get(x, y).map(Rgba::from_argb)
    }

    /// The current pixel buffer, for the rendering collaborator.
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Current image dimensions, if an image is loaded.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.buffer.as_ref().map(|b| (b.width, b.height))
    }

    /// Whether an image is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.buffer.is_some()
    }

    /// The cumulative transform since the last load or restore.
    pub fn cumulative_transform(&self) -> &AffineTransform {
        &self.transforms
    }
}
