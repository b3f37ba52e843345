#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{Point2, Vector2};

    use crate::live_view::geometry::Size;
    use crate::live_view::view::{Rotation, ViewTransform, MAX_ZOOM, MIN_ZOOM};

    const IMAGE: Size = Size::new(200.0, 100.0);
    const VIEW: Size = Size::new(400.0, 400.0);

    fn assert_point_eq(actual: Point2<f64>, expected: Point2<f64>) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn test_letterbox_fit_centers_image() {
        let t = ViewTransform::new();

        assert_relative_eq!(ViewTransform::fit_scale(IMAGE, VIEW), 2.0);
        assert_point_eq(t.map_image_to_view(Point2::new(100.0, 50.0), IMAGE, VIEW), Point2::new(200.0, 200.0));
        assert_point_eq(t.map_image_to_view(Point2::new(0.0, 0.0), IMAGE, VIEW), Point2::new(0.0, 100.0));
        assert_point_eq(t.map_image_to_view(Point2::new(200.0, 100.0), IMAGE, VIEW), Point2::new(400.0, 300.0));
    }

    #[test]
    fn test_rotation_pivots_on_image_center() {
        let mut t = ViewTransform::new();
        t.rotate_clockwise();

        assert_point_eq(t.map_image_to_view(Point2::new(100.0, 50.0), IMAGE, VIEW), Point2::new(200.0, 200.0));
        // top-left corner ends up top-right after a clockwise quarter turn
        assert_point_eq(t.map_image_to_view(Point2::new(0.0, 0.0), IMAGE, VIEW), Point2::new(300.0, 0.0));
    }

    #[test]
    fn test_flips_mirror_around_image_center() {
        let mut t = ViewTransform::new();
        t.toggle_flip_horizontal();
        assert_point_eq(t.map_image_to_view(Point2::new(0.0, 0.0), IMAGE, VIEW), Point2::new(400.0, 100.0));

        t.toggle_flip_vertical();
        assert_point_eq(t.map_image_to_view(Point2::new(0.0, 0.0), IMAGE, VIEW), Point2::new(400.0, 300.0));
    }

    #[test]
    fn test_pan_and_zoom_pivot_on_view_center() {
        let mut t = ViewTransform::new();
        t.pan(Vector2::new(10.0, -20.0));
        assert_point_eq(t.map_image_to_view(Point2::new(100.0, 50.0), IMAGE, VIEW), Point2::new(210.0, 180.0));

        t.reset();
        let center = Point2::new(200.0, 200.0);
        assert!(t.zoom(2.0, center, IMAGE, VIEW));
        assert_point_eq(t.map_image_to_view(Point2::new(0.0, 0.0), IMAGE, VIEW), Point2::new(-200.0, 0.0));
        assert_point_eq(t.pan_offset().into(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_view_to_image_inverts_every_combination() {
        let points = [Point2::new(0.0, 0.0), Point2::new(13.5, 87.25), Point2::new(200.0, 100.0)];
        let mut t = ViewTransform::new();
        t.pan(Vector2::new(-31.0, 12.5));
        t.zoom(3.7, Point2::new(120.0, 90.0), IMAGE, VIEW);

        for step in 0..16 {
            if step % 4 == 0 {
                t.toggle_flip_horizontal();
            }
            if step % 8 == 0 {
                t.toggle_flip_vertical();
            }
            t.rotate_clockwise();

            for p in points {
                let view = t.map_image_to_view(p, IMAGE, VIEW);
                assert_point_eq(t.map_view_to_image(view, IMAGE, VIEW), p);
            }
        }
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let views = [VIEW, Size::new(1280.0, 720.0), Size::new(333.0, 901.0)];
        let anchors = [Point2::new(0.0, 0.0), Point2::new(57.0, 301.0), Point2::new(390.0, 12.0)];

        for view in views {
            for start in [0.1, 0.5, 1.0, 7.3, 19.0] {
                for factor in [0.5, 0.9, 1.1, 2.0, 3.0] {
                    for anchor in anchors {
                        let mut t = ViewTransform::new();
                        t.rotate_counterclockwise();
                        t.toggle_flip_vertical();
                        t.pan(Vector2::new(25.0, -40.0));
                        t.zoom(start, view.center(), IMAGE, view);

                        let image_point = t.map_view_to_image(anchor, IMAGE, view);
                        t.zoom(factor, anchor, IMAGE, view);
                        let back = t.map_image_to_view(image_point, IMAGE, view);

                        assert_relative_eq!(back.x, anchor.x, epsilon = 1e-6, max_relative = 1e-6);
                        assert_relative_eq!(back.y, anchor.y, epsilon = 1e-6, max_relative = 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut t = ViewTransform::new();
        let p = Point2::new(150.0, 75.0);

        for _ in 0..100 {
            t.zoom_out(1.25, p, IMAGE, VIEW);
            assert!(t.zoom_factor() >= MIN_ZOOM);
        }
        assert_relative_eq!(t.zoom_factor(), MIN_ZOOM);

        let pan = t.pan_offset();
        assert!(!t.zoom(0.5, p, IMAGE, VIEW));
        assert_eq!(t.pan_offset(), pan);

        for _ in 0..100 {
            t.zoom_in(1.25, p, IMAGE, VIEW);
            assert!(t.zoom_factor() <= MAX_ZOOM);
        }
        assert_relative_eq!(t.zoom_factor(), MAX_ZOOM);
    }

    #[test]
    fn test_invalid_zoom_factor_is_ignored() {
        let mut t = ViewTransform::new();
        assert!(!t.zoom(0.0, Point2::origin(), IMAGE, VIEW));
        assert!(!t.zoom(f64::NAN, Point2::origin(), IMAGE, VIEW));
        assert!(!t.zoom_out(0.0, Point2::origin(), IMAGE, VIEW));
        assert_eq!(t, ViewTransform::default());
    }

    #[test]
    fn test_degenerate_sizes_map_to_identity() {
        let mut t = ViewTransform::new();
        t.pan(Vector2::new(5.0, 5.0));
        let p = Point2::new(12.0, 34.0);
        let empty = Size::new(0.0, 100.0);

        assert_eq!(t.map_image_to_view(p, empty, VIEW), p);
        assert_eq!(t.map_view_to_image(p, IMAGE, Size::new(400.0, 0.0)), p);
        assert!(t.matrix(empty, VIEW).is_none());
        assert_relative_eq!(ViewTransform::fit_scale(empty, VIEW), 1.0);

        assert!(t.zoom(2.0, p, empty, VIEW));
        assert_eq!(t.pan_offset(), Vector2::new(5.0, 5.0));
    }

    #[test]
    fn test_reset_keeps_orientation_and_reset_all_clears_it() {
        let mut t = ViewTransform::new();
        t.zoom(4.0, Point2::new(10.0, 10.0), IMAGE, VIEW);
        t.pan(Vector2::new(3.0, 4.0));
        t.rotate_clockwise();
        t.set_flip_horizontal(true);

        t.reset();
        let once = t;
        t.reset();

        assert_eq!(t, once);
        assert_relative_eq!(t.zoom_factor(), 1.0);
        assert_eq!(t.pan_offset(), Vector2::zeros());
        assert_eq!(t.rotation(), Rotation::Deg90);
        assert!(t.flip_horizontal());

        t.reset_all();
        assert_eq!(t, ViewTransform::default());
    }

    #[test]
    fn test_rotation_cycles_through_quarter_turns() {
        let mut t = ViewTransform::new();
        let mut seen = Vec::new();
        for _ in 0..4 {
            t.rotate_clockwise();
            seen.push(t.rotation().degrees());
        }
        assert_eq!(seen, vec![90, 180, 270, 0]);

        t.rotate_counterclockwise();
        assert_eq!(t.rotation(), Rotation::Deg270);
    }

    #[test]
    fn test_displayed_size_and_bounds() {
        let mut t = ViewTransform::new();
        assert_eq!(t.displayed_image_size(IMAGE), IMAGE);

        t.rotate_clockwise();
        assert_eq!(t.displayed_image_size(IMAGE), Size::new(100.0, 200.0));

        let (min, max) = t.image_rect_in_view(IMAGE, VIEW);
        assert_point_eq(min, Point2::new(100.0, 0.0));
        assert_point_eq(max, Point2::new(300.0, 400.0));
    }
}
