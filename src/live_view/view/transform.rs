use nalgebra::{Matrix3, Point2, Vector2, Vector3};
use tracing::debug;

use crate::live_view::geometry::{self, Size};
use crate::live_view::view::types::Rotation;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 20.0;

/// User-controlled view state: zoom, pan, rotation and flips.
///
/// The forward mapping (image → view) is, outermost first:
///
/// 1. translate to the view center
/// 2. translate by the pan offset
/// 3. scale by the zoom factor
/// 4. rotate
/// 5. flip
/// 6. scale by the letterbox fit scale
/// 7. translate by minus half the image size
///
/// so rotation and flips pivot around the image center while zoom and pan
/// pivot around the view center. The fit scale is recomputed from the sizes
/// passed to every call.
///
/// A value type: the renderer copies a snapshot and never sees a half-updated transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    zoom_factor: f64,
    pan_offset: Vector2<f64>,
    rotation: Rotation,
    flip_horizontal: bool,
    flip_vertical: bool,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            pan_offset: Vector2::zeros(),
            rotation: Rotation::Deg0,
            flip_horizontal: false,
            flip_vertical: false,
        }
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn pan_offset(&self) -> Vector2<f64> {
        self.pan_offset
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn flip_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    pub fn flip_vertical(&self) -> bool {
        self.flip_vertical
    }

    /// Largest scale at which the whole image fits inside the view. 1.0 for degenerate sizes.
    pub fn fit_scale(image: Size, view: Size) -> f64 {
        if image.is_degenerate() || view.is_degenerate() {
            return 1.0;
        }
        (view.width / image.width).min(view.height / image.height)
    }

    /// Full image → view matrix, or `None` if either size is degenerate.
    pub fn matrix(&self, image: Size, view: Size) -> Option<Matrix3<f64>> {
        if image.is_degenerate() || view.is_degenerate() {
            return None;
        }

        let fit = Self::fit_scale(image, view);
        let (cos, sin) = self.rotation.cos_sin();
        let rotate = Matrix3::new(
            cos, -sin, 0.0,
            sin, cos, 0.0,
            0.0, 0.0, 1.0,
        );
        let flip = Matrix3::new_nonuniform_scaling(&Vector2::new(
            if self.flip_horizontal { -1.0 } else { 1.0 },
            if self.flip_vertical { -1.0 } else { 1.0 },
        ));

        Some(
            Matrix3::new_translation(&view.center().coords)
                * Matrix3::new_translation(&self.pan_offset)
                * Matrix3::new_nonuniform_scaling(&Vector2::repeat(self.zoom_factor))
                * rotate
                * flip
                * Matrix3::new_nonuniform_scaling(&Vector2::repeat(fit))
                * Matrix3::new_translation(&(-image.center().coords)),
        )
    }

    /// Maps an image-space point to view space. Identity for degenerate sizes.
    pub fn map_image_to_view(&self, point: Point2<f64>, image: Size, view: Size) -> Point2<f64> {
        match self.matrix(image, view) {
            Some(m) => apply(&m, point),
            None => point,
        }
    }

    /// Exact inverse of [`map_image_to_view`](Self::map_image_to_view).
    pub fn map_view_to_image(&self, point: Point2<f64>, image: Size, view: Size) -> Point2<f64> {
        match self.matrix(image, view).and_then(|m| m.try_inverse()) {
            Some(inv) => apply(&inv, point),
            None => point,
        }
    }

    /// Multiplies the zoom by `factor`, keeping the image point under
    /// `around` (view space) fixed on screen. The result is clamped to
    /// [`MIN_ZOOM`, `MAX_ZOOM`]. Returns whether anything changed.
    pub fn zoom(&mut self, factor: f64, around: Point2<f64>, image: Size, view: Size) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }

        let anchor = self.map_view_to_image(around, image, view);
        let zoom = geometry::clamp(self.zoom_factor * factor, MIN_ZOOM, MAX_ZOOM);
        if zoom == self.zoom_factor {
            return false;
        }

        self.zoom_factor = zoom;
        let moved = self.map_image_to_view(anchor, image, view);
        self.pan_offset += around - moved;
        debug!(zoom, x = around.x, y = around.y, "Zoomed around point");
        true
    }

    pub fn zoom_in(&mut self, step: f64, around: Point2<f64>, image: Size, view: Size) -> bool {
        self.zoom(step, around, image, view)
    }

    pub fn zoom_out(&mut self, step: f64, around: Point2<f64>, image: Size, view: Size) -> bool {
        if step <= 0.0 {
            return false;
        }
        self.zoom(1.0 / step, around, image, view)
    }

    /// Unconstrained; the image may be panned entirely out of view.
    pub fn pan(&mut self, delta: Vector2<f64>) {
        self.pan_offset += delta;
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.clockwise();
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.rotation = self.rotation.counterclockwise();
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn set_flip_vertical(&mut self, flip: bool) {
        self.flip_vertical = flip;
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.flip_horizontal = !self.flip_horizontal;
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.flip_vertical = !self.flip_vertical;
    }

    /// Back to 1× zoom and no pan. Orientation is kept.
    pub fn reset(&mut self) {
        self.zoom_factor = 1.0;
        self.pan_offset = Vector2::zeros();
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Image size as it appears after rotation.
    pub fn displayed_image_size(&self, image: Size) -> Size {
        if self.rotation.is_sideways() {
            Size::new(image.height, image.width)
        } else {
            image
        }
    }

    /// Axis-aligned view-space bounds (min, max) of the transformed image.
    pub fn image_rect_in_view(&self, image: Size, view: Size) -> (Point2<f64>, Point2<f64>) {
        let corners = [
            Point2::new(0.0, 0.0),
            Point2::new(image.width, 0.0),
            Point2::new(0.0, image.height),
            Point2::new(image.width, image.height),
        ]
        .map(|c| self.map_image_to_view(c, image, view));

        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min = Point2::new(min.x.min(c.x), min.y.min(c.y));
            max = Point2::new(max.x.max(c.x), max.y.max(c.y));
        }
        (min, max)
    }
}

fn apply(m: &Matrix3<f64>, point: Point2<f64>) -> Point2<f64> {
    let p = m * Vector3::new(point.x, point.y, 1.0);
    Point2::new(p[0], p[1])
}
