use crate::{Circle, Point2, Rectangle, SketchNum, Triangle};

/// Creates a triangle enclosing `rectangle`.
///
/// The result is the equilateral triangle whose inscribed circle is the rectangle's
/// [bounding circle](Circle::bounding), optionally enlarged by `scale`:
///
/// ```text
///               (cx, cy + 2r)
///                    /\
///                   /  \
///                  / .. \
///                 |      |
///                  \ .. /
///          _______/______\_______
///  (cx - √3·r, cy - r)   (cx + √3·r, cy - r)
/// ```
///
/// where `r = scale * diagonal / 2`. The vertices are ordered counterclockwise for a
/// y-up coordinate system. Any point strictly inside the rectangle lies strictly inside
/// the triangle as long as `scale >= 1`.
pub fn super_triangle<S: SketchNum>(rectangle: &Rectangle<S>, scale: S) -> Triangle<S> {
    let circle = Circle::bounding(rectangle);
    let center = circle.center;
    let radius = circle.radius * scale;

    let two: S = 2.0f32.into();
    let three: S = 3.0f32.into();
    let half_width = three.sqrt() * radius;

    Triangle::new(
        Point2::new(center.x - half_width, center.y - radius),
        Point2::new(center.x + half_width, center.y - radius),
        Point2::new(center.x, center.y + two * radius),
    )
}
