//! Small geometry helpers shared by the view transform, calibration lines and
//! measurement lines.

use nalgebra::{Point2, Vector2};

/// Width and height in whatever space the caller is working in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero, negative or non-finite extent on either axis.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.width, self.height)
    }
}

impl From<(usize, usize)> for Size {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

pub fn distance(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    nalgebra::distance(a, b)
}

pub fn midpoint(a: &Point2<f64>, b: &Point2<f64>) -> Point2<f64> {
    nalgebra::center(a, b)
}

/// Clamps `value` into `[min, max]`. NaN maps to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Clamps a point into the image rectangle `[0, width] × [0, height]`.
pub fn clamp_to_image(point: &Point2<f64>, image: Size) -> Point2<f64> {
    Point2::new(
        clamp(point.x, 0.0, image.width.max(0.0)),
        clamp(point.y, 0.0, image.height.max(0.0)),
    )
}
