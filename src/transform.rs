//! 2D affine transforms for collision shapes.
//!
//! A shape's placement in the world is a rotation + non-uniform scale +
//! translation. [`Affine2`] stores it column-wise: the images of the local x and
//! y unit axes, followed by the translation.

use crate::float::Float;
use crate::vec::Vec2;

/// A 2D affine transform (2x2 linear part plus translation).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Affine2<F: Float> {
    /// Image of the local x axis.
    pub x_axis: Vec2<F>,
    /// Image of the local y axis.
    pub y_axis: Vec2<F>,
    pub translation: Vec2<F>,
}

impl<F: Float> Affine2<F> {
    pub fn identity() -> Self {
        Affine2 {
            x_axis: Vec2::new(F::one(), F::zero()),
            y_axis: Vec2::new(F::zero(), F::one()),
            translation: Vec2::zero(),
        }
    }

    pub fn from_translation(translation: Vec2<F>) -> Self {
        Affine2 { translation, ..Self::identity() }
    }

    /// Scale first, then rotate by `angle` radians (counter-clockwise), then translate.
    pub fn from_scale_angle_translation(scale: Vec2<F>, angle: F, translation: Vec2<F>) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Affine2 {
            x_axis: Vec2::new(cos, sin).scale(scale.x),
            y_axis: Vec2::new(-sin, cos).scale(scale.y),
            translation,
        }
    }

    /// Apply the full transform to a point.
    pub fn transform_point(&self, p: Vec2<F>) -> Vec2<F> {
        self.transform_vector(p) + self.translation
    }

    /// Apply only the linear part (no translation).
    pub fn transform_vector(&self, v: Vec2<F>) -> Vec2<F> {
        self.x_axis.scale(v.x) + self.y_axis.scale(v.y)
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> F {
        self.x_axis.x * self.y_axis.y - self.y_axis.x * self.x_axis.y
    }

    /// Inverse transform, or `None` when the linear part is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == F::zero() || !det.is_finite() {
            return None;
        }
        let inv_det = F::one() / det;
        let x_axis = Vec2::new(self.y_axis.y, -self.x_axis.y).scale(inv_det);
        let y_axis = Vec2::new(-self.y_axis.x, self.x_axis.x).scale(inv_det);
        let linear = Affine2 { x_axis, y_axis, translation: Vec2::zero() };
        let translation = -linear.transform_vector(self.translation);
        Some(Affine2 { x_axis, y_axis, translation })
    }

    /// Per-axis scale: the magnitudes of the two columns.
    pub fn column_scale(&self) -> Vec2<F> {
        Vec2::new(self.x_axis.length(), self.y_axis.length())
    }

    /// `self * other`: applies `other` first, then `self`.
    pub fn then_apply(&self, other: &Self) -> Self {
        Affine2 {
            x_axis: self.transform_vector(other.x_axis),
            y_axis: self.transform_vector(other.y_axis),
            translation: self.transform_point(other.translation),
        }
    }
}

impl<F: Float> Default for Affine2<F> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2<f64>, b: Vec2<f64>) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn translation_only() {
        let t = Affine2::from_translation(Vec2::new(2.0f32, -1.0));
        assert_eq!(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 0.0));
        assert_eq!(t.transform_vector(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn inverse_round_trips() {
        let t = Affine2::from_scale_angle_translation(
            Vec2::new(2.0f64, 0.5),
            0.7,
            Vec2::new(3.0, 4.0),
        );
        let inv = t.inverse().unwrap();
        let p = Vec2::new(-1.25, 6.0);
        assert!(close(inv.transform_point(t.transform_point(p)), p));
        assert!(close(t.then_apply(&inv).transform_point(p), p));
    }

    #[test]
    fn singular_has_no_inverse() {
        let t = Affine2::from_scale_angle_translation(
            Vec2::new(0.0f32, 1.0),
            0.0,
            Vec2::zero(),
        );
        assert!(t.inverse().is_none());
    }

    #[test]
    fn column_scale_ignores_rotation() {
        let t = Affine2::from_scale_angle_translation(
            Vec2::new(3.0f64, 2.0),
            1.1,
            Vec2::new(5.0, 5.0),
        );
        let s = t.column_scale();
        assert!((s.x - 3.0).abs() < 1e-9);
        assert!((s.y - 2.0).abs() < 1e-9);
    }
}
