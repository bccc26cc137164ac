//! JS-friendly value types for query results.

use flipview_core::Rgba;
use serde::{Deserialize, Serialize};

/// The color under the cursor, marshalled to JavaScript as a plain
/// `{ x, y, r, g, b, a }` object.
///
/// The presentation layer copies these values into its coordinate and
/// channel text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSample {
    /// X coordinate of the sampled pixel
    pub x: u32,
    /// Y coordinate of the sampled pixel
    pub y: u32,
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255)
    pub a: u8,
}

impl ColorSample {
    /// Combine a coordinate and its channel values into one sample.
    pub fn new(x: u32, y: u32, color: Rgba) -> Self {
        Self {
            x,
            y,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_sample_carries_channels() {
        let sample = ColorSample::new(3, 7, Rgba::new(10, 20, 30, 255));

        assert_eq!(sample.x, 3);
        assert_eq!(sample.y, 7);
        assert_eq!(sample.r, 10);
        assert_eq!(sample.g, 20);
        assert_eq!(sample.b, 30);
        assert_eq!(sample.a, 255);
    }
}
