use crate::Rect;
use lyon::math::{point, Point};

pub fn normalize_rgba_color(color: &[u8; 4]) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        color[3] as f32 / 255.0,
    ]
}

#[inline(always)]
pub fn rect_center(rect: &Rect) -> Point {
    point(
        (rect.min.x + rect.max.x) / 2.0,
        (rect.min.y + rect.max.y) / 2.0,
    )
}

/// Factors that shrink content about the center so it stays clear of a stroke of `stroke_width`
/// drawn inside `rect`.
#[inline(always)]
pub fn content_scale(rect: &Rect, stroke_width: f32) -> (f32, f32) {
    let width = rect.width();
    let height = rect.height();
    (
        (width - 2.0 * stroke_width) / width,
        (height - 2.0 * stroke_width) / height,
    )
}

#[cfg(test)]
mod tests {
    use super::{content_scale, normalize_rgba_color, rect_center};
    use lyon::math::{point, Box2D};

    #[test]
    fn content_scale_leaves_room_for_stroke_on_both_sides() {
        let rect = Box2D::new(point(0.0, 0.0), point(100.0, 50.0));
        assert_eq!(content_scale(&rect, 10.0), (0.8, 0.6));
        assert_eq!(content_scale(&rect, 0.0), (1.0, 1.0));
    }

    #[test]
    fn rect_center_is_midpoint() {
        let rect = Box2D::new(point(10.0, 20.0), point(30.0, 60.0));
        assert_eq!(rect_center(&rect), point(20.0, 40.0));
    }

    #[test]
    fn normalize_maps_full_channel_to_one() {
        assert_eq!(normalize_rgba_color(&[255, 0, 0, 255]), [1.0, 0.0, 0.0, 1.0]);
    }
}
