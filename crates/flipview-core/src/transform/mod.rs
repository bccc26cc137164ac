//! Geometric transforms: axis reflections over a tracked affine matrix.
//!
//! Every flip composes a reflection into the engine's cumulative
//! [`AffineTransform`] and remaps the pixel buffer through that single
//! reflection. Restoring the original layout applies the inverse of the
//! cumulative matrix once.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Coordinates address pixel centers, so a horizontal reflection of a
//!   `w`-wide image maps column `x` to column `w - 1 - x`
//! - Reflections keep the image anchored at the origin; dimensions never
//!   change

mod flip;
mod matrix;

pub use flip::{apply_to_buffer, FlipAxis};
pub use matrix::AffineTransform;
