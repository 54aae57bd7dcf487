#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{math, Circle, Edge, Point2, SketchNum, TriangulationError};

/// A triangle given by three points.
///
/// The triangle's edges are derived from its points in the order given at construction:
/// `(p0, p1)`, `(p1, p2)` and `(p2, p0)`. This winding order is significant for
/// [hit_test](Self::hit_test), which expects counterclockwise triangles.
///
/// Two triangles are equal if they consist of the same three points, regardless of their
/// order.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Triangle<S> {
    points: [Point2<S>; 3],
    edges: [Edge<S>; 3],
}

impl<S: SketchNum> Triangle<S> {
    /// Creates a new triangle. The points should not be collinear.
    pub fn new(p0: Point2<S>, p1: Point2<S>, p2: Point2<S>) -> Self {
        Triangle {
            points: [p0, p1, p2],
            edges: [Edge::new(p0, p1), Edge::new(p1, p2), Edge::new(p2, p0)],
        }
    }

    /// The triangle's points in construction order.
    pub fn vertices(&self) -> [Point2<S>; 3] {
        self.points
    }

    /// The triangle's edges in winding order.
    pub fn edges(&self) -> [Edge<S>; 3] {
        self.edges
    }

    /// Returns `true` if `point` is one of the triangle's vertices.
    pub fn has_point(&self, point: Point2<S>) -> bool {
        self.points.contains(&point)
    }

    /// Returns `true` if `edge` (in either direction) is one of the triangle's edges.
    pub fn has_edge(&self, edge: &Edge<S>) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the stored edge equal to `edge`, directed as this triangle winds.
    pub fn directed_edge(&self, edge: &Edge<S>) -> Option<Edge<S>> {
        self.edges.iter().find(|e| *e == edge).copied()
    }

    /// Returns the vertex that is not an end point of `edge`.
    ///
    /// `edge` is expected to be one of this triangle's edges. If it is not, the first
    /// vertex not touched by `edge` is returned.
    pub fn no_common_point_by_edge(&self, edge: &Edge<S>) -> Option<Point2<S>> {
        self.points.iter().copied().find(|p| !edge.has_point(*p))
    }

    /// Returns the two edges that differ from `edge`, in winding order.
    ///
    /// Returns `None` if `edge` is not one of this triangle's edges.
    pub fn other_edges_by_edge(&self, edge: &Edge<S>) -> Option<[Edge<S>; 2]> {
        let index = self.edges.iter().position(|e| e == edge)?;
        Some([self.edges[(index + 1) % 3], self.edges[(index + 2) % 3]])
    }

    /// Calculates this triangle's circumscribed circle.
    ///
    /// *See [crate::circumcircle]*
    pub fn circumcircle(&self) -> Result<Circle<S>, TriangulationError<S>> {
        math::circumcircle(self.points)
    }

    /// Returns `true` if `point` lies strictly inside this triangle's circumcircle.
    ///
    /// Points exactly on the circle are considered to be outside.
    pub fn has_point_in_circumcircle(&self, point: Point2<S>) -> Result<bool, TriangulationError<S>> {
        Ok(self.circumcircle()?.hit_test(point))
    }

    /// Returns `true` if `point` lies strictly inside this triangle.
    ///
    /// The point must lie strictly left of every edge. This only works for counterclockwise
    /// triangles (y axis pointing upwards), no clockwise triangle contains any point.
    pub fn hit_test(&self, point: Point2<S>) -> bool {
        self.edges
            .iter()
            .all(|edge| edge.side_query(point).is_on_left_side())
    }

    /// Returns `true` if `point` lies inside this triangle or on one of its edges.
    ///
    /// Like [hit_test](Self::hit_test), this requires a counterclockwise triangle.
    pub fn hit_test_including_edges(&self, point: Point2<S>) -> bool {
        self.edges
            .iter()
            .all(|edge| edge.side_query(point).is_on_left_side_or_on_line())
    }

    /// Returns `true` if both triangles have at least one vertex in common.
    pub fn shares_vertex_with(&self, other: &Triangle<S>) -> bool {
        other.points.iter().any(|p| self.has_point(*p))
    }

    /// The triangle's area.
    pub fn area(&self) -> S {
        let half: S = 0.5f32.into();
        math::signed_double_area(self.points).abs() * half
    }
}

impl<S: SketchNum> PartialEq for Triangle<S> {
    fn eq(&self, other: &Self) -> bool {
        other.points.iter().all(|p| self.has_point(*p))
    }
}

#[cfg(test)]
mod test {
    use super::Triangle;
    use crate::{Edge, Point2, TriangulationError};
    use approx::assert_relative_eq;

    fn ccw_triangle() -> Triangle<f64> {
        Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        )
    }

    #[test]
    fn test_edges_follow_winding() {
        let t = ccw_triangle();
        let [p0, p1, p2] = t.vertices();
        let edges = t.edges();
        assert_eq!((edges[0].start, edges[0].end), (p0, p1));
        assert_eq!((edges[1].start, edges[1].end), (p1, p2));
        assert_eq!((edges[2].start, edges[2].end), (p2, p0));
    }

    #[test]
    fn test_equality_ignores_order() {
        let t = ccw_triangle();
        let [p0, p1, p2] = t.vertices();
        assert_eq!(t, Triangle::new(p2, p1, p0));
        assert_eq!(t, Triangle::new(p1, p2, p0));
        assert_ne!(t, Triangle::new(p0, p1, Point2::new(1.0, 4.0)));
    }

    #[test]
    fn test_membership() {
        let t = ccw_triangle();
        let [p0, p1, p2] = t.vertices();
        assert!(t.has_point(p1));
        assert!(!t.has_point(Point2::new(1.0, 1.0)));
        assert!(t.has_edge(&Edge::new(p2, p1)));
        assert!(!t.has_edge(&Edge::new(p0, Point2::new(1.0, 1.0))));
    }

    #[test]
    fn test_no_common_point_by_edge() {
        let t = ccw_triangle();
        let [p0, p1, p2] = t.vertices();
        assert_eq!(t.no_common_point_by_edge(&Edge::new(p0, p1)), Some(p2));
        assert_eq!(t.no_common_point_by_edge(&Edge::new(p2, p1)), Some(p0));
        assert_eq!(t.no_common_point_by_edge(&Edge::new(p2, p0)), Some(p1));
    }

    #[test]
    fn test_other_edges_by_edge() {
        let t = ccw_triangle();
        let [p0, p1, p2] = t.vertices();
        let others = t.other_edges_by_edge(&Edge::new(p1, p0)).unwrap();
        assert_eq!(others, [Edge::new(p1, p2), Edge::new(p2, p0)]);
        assert_eq!(
            t.other_edges_by_edge(&Edge::new(p0, Point2::new(7.0, 7.0))),
            None
        );
    }

    #[test]
    fn test_directed_edge_keeps_winding() {
        let t = ccw_triangle();
        let [p0, p1, _] = t.vertices();
        let directed = t.directed_edge(&Edge::new(p1, p0)).unwrap();
        assert_eq!((directed.start, directed.end), (p0, p1));
    }

    #[test]
    fn test_hit_test_requires_ccw() {
        let t = ccw_triangle();
        assert!(t.hit_test(Point2::new(1.0, 1.0)));
        assert!(!t.hit_test(Point2::new(3.0, 3.0)));
        // Points on an edge or a vertex are not inside
        assert!(!t.hit_test(Point2::new(2.0, 0.0)));
        assert!(!t.hit_test(Point2::new(0.0, 0.0)));

        let [p0, p1, p2] = t.vertices();
        let clockwise = Triangle::new(p0, p2, p1);
        assert!(!clockwise.hit_test(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_has_point_in_circumcircle() {
        let t = ccw_triangle();
        // Circumcircle: center (2, 2), radius sqrt(8)
        assert!(t.has_point_in_circumcircle(Point2::new(3.0, 3.0)).unwrap());
        assert!(!t.has_point_in_circumcircle(Point2::new(4.0, 4.0)).unwrap());
        assert!(!t.has_point_in_circumcircle(Point2::new(5.0, 5.0)).unwrap());
    }

    #[test]
    fn test_degenerate_circumcircle() {
        let t = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert!(matches!(
            t.has_point_in_circumcircle(Point2::new(1.0, 1.0)),
            Err(TriangulationError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn test_shares_vertex_and_area() {
        let t = ccw_triangle();
        let other = Triangle::new(
            Point2::new(4.0, 0.0),
            Point2::new(9.0, 0.0),
            Point2::new(9.0, 9.0),
        );
        let disjoint = Triangle::new(
            Point2::new(10.0, 0.0),
            Point2::new(11.0, 0.0),
            Point2::new(10.0, 1.0),
        );
        assert!(t.shares_vertex_with(&other));
        assert!(!t.shares_vertex_with(&disjoint));
        assert_relative_eq!(t.area(), 8.0);
    }
}
