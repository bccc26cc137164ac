//! Buffer remapping through an affine transform.
//!
//! # Algorithm
//!
//! The remapper uses inverse mapping: for each pixel in the output image,
//! the inverse transform gives the source coordinate whose value it takes.
//! Axis reflections map pixel centers exactly onto pixel centers, so
//! nearest-neighbor sampling reproduces the source values bit-for-bit.

use serde::{Deserialize, Serialize};

use crate::decode::PixelBuffer;

use super::AffineTransform;

/// Axis selection for flip operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipAxis {
    /// Mirror left-to-right (reflect across the vertical center line).
    Horizontal,
    /// Mirror top-to-bottom (reflect across the horizontal center line).
    Vertical,
    /// Mirror across both axes (equivalent to a 180 degree rotation).
    Both,
}

/// Apply an affine transform to a pixel buffer.
///
/// Each destination pixel is inverse-mapped into source space and sampled
/// nearest-neighbor. Destinations that map outside the source are left as
/// transparent black; the reflections the engine produces never do.
///
/// # Returns
///
/// A new `PixelBuffer` with the same dimensions as the source.
pub fn apply_to_buffer(image: &PixelBuffer, transform: &AffineTransform) -> PixelBuffer {
    // Fast path: nothing to remap
    if transform.is_identity() {
        return image.clone();
    }

    let inverse = transform.inverse();
    let (w, h) = (image.width, image.height);
    let mut output = vec![0u32; image.pixels.len()];

    for dst_y in 0..h {
        for dst_x in 0..w {
            let (src_x, src_y) = inverse.apply(f64::from(dst_x), f64::from(dst_y));
            let src_x = src_x.round() as i64;
            let src_y = src_y.round() as i64;

            if src_x >= 0 && src_x < i64::from(w) && src_y >= 0 && src_y < i64::from(h) {
                let src_idx = (src_y as u32 * w + src_x as u32) as usize;
                output[(dst_y * w + dst_x) as usize] = image.pixels[src_idx];
            }
        }
    }

    PixelBuffer::new(w, h, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test buffer where each pixel carries its own index.
    fn test_buffer(width: u32, height: u32) -> PixelBuffer {
        let pixels = (0..width * height).map(|i| 0xFF00_0000 | i).collect();
        PixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_identity_is_a_copy() {
        let buf = test_buffer(5, 4);
        let result = apply_to_buffer(&buf, &AffineTransform::identity());
        assert_eq!(result, buf);
    }

    #[test]
    fn test_horizontal_flip_2x2() {
        // Row-major: red, green / blue, yellow
        let buf = PixelBuffer::new(
            2,
            2,
            vec![0xFFFF_0000, 0xFF00_FF00, 0xFF00_00FF, 0xFFFF_FF00],
        );
        let t = AffineTransform::reflection(FlipAxis::Horizontal, 2, 2);

        let flipped = apply_to_buffer(&buf, &t);
        assert_eq!(
            flipped.pixels,
            vec![0xFF00_FF00, 0xFFFF_0000, 0xFFFF_FF00, 0xFF00_00FF]
        );
    }

    #[test]
    fn test_vertical_flip_swaps_rows() {
        let buf = test_buffer(3, 2);
        let t = AffineTransform::reflection(FlipAxis::Vertical, 3, 2);

        let flipped = apply_to_buffer(&buf, &t);
        assert_eq!(flipped.get(0, 0), buf.get(0, 1));
        assert_eq!(flipped.get(2, 1), buf.get(2, 0));
    }

    #[test]
    fn test_both_flip_reverses_buffer() {
        let buf = test_buffer(3, 3);
        let t = AffineTransform::reflection(FlipAxis::Both, 3, 3);

        let flipped = apply_to_buffer(&buf, &t);
        let mut reversed = buf.pixels.clone();
        reversed.reverse();
        assert_eq!(flipped.pixels, reversed);
    }

    #[test]
    fn test_flip_preserves_dimensions() {
        let buf = test_buffer(7, 3);
        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical, FlipAxis::Both] {
            let t = AffineTransform::reflection(axis, 7, 3);
            let flipped = apply_to_buffer(&buf, &t);
            assert_eq!(flipped.width, 7);
            assert_eq!(flipped.height, 3);
        }
    }

    #[test]
    fn test_flip_twice_restores_buffer() {
        let buf = test_buffer(6, 4);
        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical, FlipAxis::Both] {
            let t = AffineTransform::reflection(axis, 6, 4);
            let once = apply_to_buffer(&buf, &t);
            let twice = apply_to_buffer(&once, &t);
            assert_eq!(twice, buf, "double {:?} should restore the buffer", axis);
        }
    }

    #[test]
    fn test_1x1_buffer_is_fixed_point() {
        let buf = PixelBuffer::new(1, 1, vec![0xAABB_CCDD]);
        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical, FlipAxis::Both] {
            let t = AffineTransform::reflection(axis, 1, 1);
            assert_eq!(apply_to_buffer(&buf, &t), buf);
        }
    }

    #[test]
    fn test_single_row_horizontal_flip() {
        let buf = test_buffer(4, 1);
        let t = AffineTransform::reflection(FlipAxis::Horizontal, 4, 1);

        let flipped = apply_to_buffer(&buf, &t);
        let mut reversed = buf.pixels.clone();
        reversed.reverse();
        assert_eq!(flipped.pixels, reversed);
    }

    #[test]
    fn test_single_row_vertical_flip_is_noop() {
        let buf = test_buffer(4, 1);
        let t = AffineTransform::reflection(FlipAxis::Vertical, 4, 1);
        assert_eq!(apply_to_buffer(&buf, &t), buf);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=32, 1u32..=32)
    }

    /// Strategy for generating a flip axis.
    fn axis_strategy() -> impl Strategy<Value = FlipAxis> {
        prop_oneof![
            Just(FlipAxis::Horizontal),
            Just(FlipAxis::Vertical),
            Just(FlipAxis::Both),
        ]
    }

    /// Create a buffer with unique pixel values based on position.
    fn create_test_buffer(width: u32, height: u32) -> PixelBuffer {
        let pixels = (0..width * height).map(|i| 0xFF00_0000 | i).collect();
        PixelBuffer::new(width, height, pixels)
    }

    proptest! {
        /// Property: Every flip is an involution.
        #[test]
        fn prop_flip_twice_is_identity(
            (width, height) in dimensions_strategy(),
            axis in axis_strategy(),
        ) {
            let buf = create_test_buffer(width, height);
            let t = AffineTransform::reflection(axis, width, height);

            let twice = apply_to_buffer(&apply_to_buffer(&buf, &t), &t);
            prop_assert_eq!(twice, buf);
        }

        /// Property: A flip permutes the pixels, never loses or invents one.
        #[test]
        fn prop_flip_is_a_permutation(
            (width, height) in dimensions_strategy(),
            axis in axis_strategy(),
        ) {
            let buf = create_test_buffer(width, height);
            let t = AffineTransform::reflection(axis, width, height);
            let flipped = apply_to_buffer(&buf, &t);

            let mut before = buf.pixels.clone();
            let mut after = flipped.pixels.clone();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        /// Property: Flipping both axes equals horizontal then vertical.
        #[test]
        fn prop_both_equals_horizontal_then_vertical(
            (width, height) in dimensions_strategy(),
        ) {
            let buf = create_test_buffer(width, height);
            let h = AffineTransform::reflection(FlipAxis::Horizontal, width, height);
            let v = AffineTransform::reflection(FlipAxis::Vertical, width, height);
            let b = AffineTransform::reflection(FlipAxis::Both, width, height);

            let sequential = apply_to_buffer(&apply_to_buffer(&buf, &h), &v);
            let combined = apply_to_buffer(&buf, &b);
            prop_assert_eq!(sequential, combined);
        }
    }
}
