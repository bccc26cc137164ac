//! In-place color negation.

use crate::decode::PixelBuffer;
use crate::Rgba;

/// Negate every pixel in place: each red/green/blue channel becomes
/// `255 - channel`, alpha is untouched.
///
/// Subtracting from 255 is involutive on the 0-255 range, so negating twice
/// restores the original channel values exactly.
pub fn negate_in_place(image: &mut PixelBuffer) {
    for argb in &mut image.pixels {
        let px = Rgba::from_argb(*argb);
        *argb = Rgba::new(255 - px.r, 255 - px.g, 255 - px.b, px.a).to_argb();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_single_pixel() {
        let mut buf = PixelBuffer::new(1, 1, vec![Rgba::new(10, 20, 30, 255).to_argb()]);
        negate_in_place(&mut buf);

        assert_eq!(
            Rgba::from_argb(buf.pixels[0]),
            Rgba::new(245, 235, 225, 255)
        );
    }

    #[test]
    fn test_negate_leaves_alpha_untouched() {
        let mut buf = PixelBuffer::new(2, 1, vec![
            Rgba::new(0, 128, 255, 0).to_argb(),
            Rgba::new(1, 2, 3, 77).to_argb(),
        ]);
        negate_in_place(&mut buf);

        assert_eq!(Rgba::from_argb(buf.pixels[0]).a, 0);
        assert_eq!(Rgba::from_argb(buf.pixels[1]).a, 77);
    }

    #[test]
    fn test_negate_extremes() {
        let mut buf = PixelBuffer::new(2, 1, vec![
            Rgba::new(0, 0, 0, 255).to_argb(),
            Rgba::new(255, 255, 255, 255).to_argb(),
        ]);
        negate_in_place(&mut buf);

        assert_eq!(Rgba::from_argb(buf.pixels[0]), Rgba::new(255, 255, 255, 255));
        assert_eq!(Rgba::from_argb(buf.pixels[1]), Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn test_negate_twice_restores_buffer() {
        let pixels: Vec<u32> = (0..16u32)
            .map(|i| Rgba::new((i * 17) as u8, (i * 5) as u8, (255 - i) as u8, (i * 11) as u8).to_argb())
            .collect();
        let original = PixelBuffer::new(4, 4, pixels);

        let mut buf = original.clone();
        negate_in_place(&mut buf);
        assert_ne!(buf, original);
        negate_in_place(&mut buf);
        assert_eq!(buf, original);
    }
}
