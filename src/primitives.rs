//! Geometric value types used by the triangulation: edges, sizes, rectangles and circles.
//!
//! All types are plain values. Nothing in here is ever mutated after construction; the
//! triangulation rebuilds primitives instead of changing them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{math, LineSideInfo, Point2, SketchNum, Vector2};

/// An undirected edge defined by its two end points.
///
/// Two edges are equal if they connect the same two points, regardless of direction:
/// `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Edge<S> {
    /// The edge's origin.
    pub start: Point2<S>,
    /// The edge's destination.
    pub end: Point2<S>,
}

impl<S: SketchNum> Edge<S> {
    /// Creates a new edge from `start` to `end`.
    pub fn new(start: Point2<S>, end: Point2<S>) -> Self {
        Edge { start, end }
    }

    /// Returns `true` if `point` is one of the edge's end points.
    pub fn has_point(&self, point: Point2<S>) -> bool {
        self.start == point || self.end == point
    }

    /// The vector from `start` to `end`.
    pub fn to_vector(&self) -> Vector2<S> {
        self.end.sub(self.start)
    }

    /// Determines on which side of this edge a given point lies.
    ///
    /// The sign is taken from the exact orientation of `start`, `end` and `query_point`.
    pub fn side_query(&self, query_point: Point2<S>) -> LineSideInfo {
        LineSideInfo::from_determinant(math::orientation(self.start, self.end, query_point))
    }

    /// The same edge with start and end swapped.
    pub fn reversed(&self) -> Self {
        Edge::new(self.end, self.start)
    }

    /// The edge's length.
    pub fn length(&self) -> S {
        self.to_vector().length()
    }
}

impl<S: SketchNum> PartialEq for Edge<S> {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

/// A width and a height.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Size2<S> {
    /// The horizontal extent
    pub width: S,
    /// The vertical extent
    pub height: S,
}

impl<S> Size2<S> {
    /// Creates a new size.
    pub const fn new(width: S, height: S) -> Self {
        Size2 { width, height }
    }
}

/// An axis aligned rectangle given by its position (the corner with the smallest
/// coordinates) and its size.
///
/// The center and the length of the diagonal are derived once at construction.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Rectangle<S> {
    position: Point2<S>,
    size: Size2<S>,
    center: Point2<S>,
    diagonal: S,
}

impl<S: SketchNum> Rectangle<S> {
    /// Creates a new rectangle.
    pub fn new(position: Point2<S>, size: Size2<S>) -> Self {
        let half: S = 0.5f32.into();
        let center = Point2::new(
            position.x + size.width * half,
            position.y + size.height * half,
        );
        let diagonal = Vector2::new(size.width, size.height).length();
        Rectangle {
            position,
            size,
            center,
            diagonal,
        }
    }

    /// Creates a rectangle from its position and its width and height.
    pub fn from_xywh(x: S, y: S, width: S, height: S) -> Self {
        Self::new(Point2::new(x, y), Size2::new(width, height))
    }

    /// The smallest rectangle containing all `points`, grown by `padding` on every side.
    ///
    /// Returns `None` if `points` is empty. A positive padding is required to make the
    /// points lie *strictly* inside, as needed by [crate::triangulate].
    pub fn enclosing<I>(points: I, padding: S) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<S>>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for point in points {
            min = Point2::new(min.x.min(point.x), min.y.min(point.y));
            max = Point2::new(max.x.max(point.x), max.y.max(point.y));
        }
        let two: S = 2.0f32.into();
        Some(Self::from_xywh(
            min.x - padding,
            min.y - padding,
            max.x - min.x + padding * two,
            max.y - min.y + padding * two,
        ))
    }

    /// The corner with the smallest coordinates.
    pub fn position(&self) -> Point2<S> {
        self.position
    }

    /// The rectangle's width and height.
    pub fn size(&self) -> Size2<S> {
        self.size
    }

    /// The rectangle's center, `position + size / 2`.
    pub fn center(&self) -> Point2<S> {
        self.center
    }

    /// The length of the rectangle's diagonal.
    pub fn diagonal(&self) -> S {
        self.diagonal
    }

    /// Returns `true` if `point` lies strictly inside this rectangle.
    pub fn contains(&self, point: Point2<S>) -> bool {
        let upper = Point2::new(
            self.position.x + self.size.width,
            self.position.y + self.size.height,
        );
        point.x > self.position.x && point.y > self.position.y && point.x < upper.x && point.y < upper.y
    }
}

/// A circle given by its center and radius.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Circle<S> {
    /// The circle's center
    pub center: Point2<S>,
    /// The circle's radius. Never negative.
    pub radius: S,
}

impl<S: SketchNum> Circle<S> {
    /// Creates a new circle.
    pub fn new(center: Point2<S>, radius: S) -> Self {
        Circle { center, radius }
    }

    /// The circle through all four corners of `rectangle`.
    pub fn bounding(rectangle: &Rectangle<S>) -> Self {
        let half: S = 0.5f32.into();
        Circle::new(rectangle.center(), rectangle.diagonal() * half)
    }

    /// Returns `true` if `point` lies strictly inside this circle.
    ///
    /// Points on the boundary are *not* contained.
    pub fn hit_test(&self, point: Point2<S>) -> bool {
        point.distance(self.center) < self.radius
    }
}
