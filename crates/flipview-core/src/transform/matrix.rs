//! 2D affine transforms over pixel coordinates.

use serde::{Deserialize, Serialize};

use super::FlipAxis;

/// A 2D affine transform: a 2x2 linear part plus a translation.
///
/// Maps `(x, y)` to `(m00*x + m01*y + tx, m10*x + m11*y + ty)`.
///
/// The engine only ever composes axis reflections, whose linear parts have
/// determinant +-1, so every transform built through this type stays exactly
/// invertible: the entries are -1/0/+1 and the translations are integers,
/// which f64 represents without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub m00: f64,
    pub m01: f64,
    pub m10: f64,
    pub m11: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            m00: 1.0,
            m01: 0.0,
            m10: 0.0,
            m11: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Reflection across the given axis of a `width` x `height` image.
    ///
    /// The scale by -1 is combined with a translation so the image stays
    /// anchored at the origin: `x -> width - 1 - x` and/or
    /// `y -> height - 1 - y` in pixel-center coordinates.
    pub fn reflection(axis: FlipAxis, width: u32, height: u32) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        match axis {
            FlipAxis::Horizontal => Self {
                m00: -1.0,
                m01: 0.0,
                m10: 0.0,
                m11: 1.0,
                tx: w - 1.0,
                ty: 0.0,
            },
            FlipAxis::Vertical => Self {
                m00: 1.0,
                m01: 0.0,
                m10: 0.0,
                m11: -1.0,
                tx: 0.0,
                ty: h - 1.0,
            },
            FlipAxis::Both => Self {
                m00: -1.0,
                m01: 0.0,
                m10: 0.0,
                m11: -1.0,
                tx: w - 1.0,
                ty: h - 1.0,
            },
        }
    }

    /// Whether this is the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Compose with another transform: the result applies `self` first,
    /// then `next`.
    pub fn then(&self, next: &AffineTransform) -> Self {
        Self {
            m00: next.m00 * self.m00 + next.m01 * self.m10,
            m01: next.m00 * self.m01 + next.m01 * self.m11,
            m10: next.m10 * self.m00 + next.m11 * self.m10,
            m11: next.m10 * self.m01 + next.m11 * self.m11,
            tx: next.m00 * self.tx + next.m01 * self.ty + next.tx,
            ty: next.m10 * self.tx + next.m11 * self.ty + next.ty,
        }
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// The inverse transform.
    ///
    /// Invariant: the linear part must be non-singular. Reflections and
    /// their compositions all have determinant +-1.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        debug_assert!(det != 0.0, "affine transform is not invertible");

        let inv00 = self.m11 / det;
        let inv01 = -self.m01 / det;
        let inv10 = -self.m10 / det;
        let inv11 = self.m00 / det;

        Self {
            m00: inv00,
            m01: inv01,
            m10: inv10,
            m11: inv11,
            tx: -(inv00 * self.tx + inv01 * self.ty),
            ty: -(inv10 * self.tx + inv11 * self.ty),
        }
    }

    /// Map a point through the transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.m00 * x + self.m01 * y + self.tx,
            self.m10 * x + self.m11 * y + self.ty,
        )
    }
}
