use std::cmp::Ordering;

use crate::math::orientation;
use crate::{Point2, SketchNum};

fn sorted_distinct<S: SketchNum>(points: &[Point2<S>]) -> Vec<Point2<S>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted.dedup();
    sorted
}

/// Returns the corners of the convex hull of `points` in counterclockwise order.
///
/// Points lying in the middle of a hull edge are not corners and are left out. Duplicates
/// are ignored. If all points are collinear, only the two extreme points are returned.
///
/// Uses an exact orientation predicate, the result is not affected by rounding errors.
///
/// # Example
/// ```
/// use delaunay_sketch::{convex_hull, Point2};
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 0.5),
/// ];
/// let hull = convex_hull(&points);
/// assert_eq!(
///     hull,
///     vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(1.0, 1.0)]
/// );
/// ```
pub fn convex_hull<S: SketchNum>(points: &[Point2<S>]) -> Vec<Point2<S>> {
    let sorted = sorted_distinct(points);
    if sorted.len() < 3 {
        return sorted;
    }

    // Monotone chain: lower hull from left to right, then upper hull back
    let mut hull: Vec<Point2<S>> = Vec::with_capacity(sorted.len() + 1);
    for chain in [
        sorted.iter().copied().collect::<Vec<_>>(),
        sorted.iter().rev().copied().collect(),
    ] {
        let start = hull.len();
        for point in chain {
            while hull.len() >= start + 2
                && orientation(hull[hull.len() - 2], hull[hull.len() - 1], point) <= 0.0
            {
                hull.pop();
            }
            hull.push(point);
        }
        hull.pop();
    }
    hull
}

fn lies_on_segment<S: SketchNum>(from: Point2<S>, to: Point2<S>, point: Point2<S>) -> bool {
    orientation(from, to, point) == 0.0
        && from.x.min(to.x) <= point.x
        && point.x <= from.x.max(to.x)
        && from.y.min(to.y) <= point.y
        && point.y <= from.y.max(to.y)
}

/// Number of triangles in any triangulation of `points` that covers their convex hull.
///
/// For `n` distinct points of which `k` lie on the hull's boundary (corners and points in
/// the middle of hull edges), this is `2n - 2 - k`. Returns zero for fewer than three
/// distinct points or if all points are collinear.
///
/// [crate::triangulate] always returns this many triangles on success.
///
/// # Example
/// ```
/// use delaunay_sketch::{complete_triangle_count, Point2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert_eq!(complete_triangle_count(&square), 2);
/// ```
pub fn complete_triangle_count<S: SketchNum>(points: &[Point2<S>]) -> usize {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return 0;
    }
    let distinct = sorted_distinct(points);
    let on_boundary = distinct
        .iter()
        .filter(|point| {
            hull.iter()
                .zip(hull.iter().cycle().skip(1))
                .any(|(from, to)| lies_on_segment(*from, *to, **point))
        })
        .count();
    2 * distinct.len() - 2 - on_boundary
}
