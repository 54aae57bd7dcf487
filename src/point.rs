use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Vector2;

/// A coordinate type that can be used with a triangulation.
///
/// Circumcircle construction needs square roots and divisions, hence only floating
/// point types qualify. Exact predicates are evaluated after converting into `f64`.
///
/// This type should usually be either `f32` or `f64`.
pub trait SketchNum: Float + Into<f64> + From<f32> + Default + std::fmt::Debug {}

impl<T> SketchNum for T where T: Float + Into<f64> + From<f32> + Default + std::fmt::Debug {}

/// A two dimensional point.
///
/// Two points are equal if and only if both of their coordinates are exactly equal.
/// No epsilon is involved.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: SketchNum> Point2<S> {
    /// Returns the vector pointing from `other` to `self`.
    #[inline]
    pub fn sub(&self, other: Self) -> Vector2<S> {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    /// Returns this point moved by `offset`.
    #[inline]
    pub fn add(&self, offset: Vector2<S>) -> Self {
        Point2::new(self.x + offset.x, self.y + offset.y)
    }

    /// Returns the squared distance of this point and another point.
    #[inline]
    pub fn distance_2(&self, other: Self) -> S {
        self.sub(other).length2()
    }

    /// Returns the euclidean distance of this point and another point.
    #[inline]
    pub fn distance(&self, other: Self) -> S {
        self.distance_2(other).sqrt()
    }

    pub(crate) fn to_f64(self) -> Point2<f64> {
        Point2::new(self.x.into(), self.y.into())
    }

    /// Bit pattern identifying this position. `-0.0` and `0.0` share one key.
    pub(crate) fn position_key(&self) -> (u64, u64) {
        let x: f64 = self.x.into();
        let y: f64 = self.y.into();
        ((x + 0.0).to_bits(), (y + 0.0).to_bits())
    }
}

impl<S: SketchNum> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S: SketchNum> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> (S, S) {
        (point.x, point.y)
    }
}

impl<S: SketchNum> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from(source: [S; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl<S: SketchNum> From<(S, S)> for Point2<S> {
    #[inline]
    fn from(source: (S, S)) -> Self {
        Self::new(source.0, source.1)
    }
}

/// An object with position.
///
/// Anything implementing this trait can be passed to [crate::triangulate]. Only the
/// position takes part in the triangulation; two objects with equal positions are
/// considered duplicates.
pub trait HasPosition {
    /// The number type used by this coordinate type.
    type Scalar: SketchNum;

    /// Returns the position of this object.
    fn position(&self) -> Point2<Self::Scalar>;
}

impl<S: SketchNum> HasPosition for Point2<S> {
    type Scalar = S;

    fn position(&self) -> Point2<S> {
        *self
    }
}

#[cfg(test)]
mod test {
    use super::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_equality() {
        assert_eq!(Point2::new(1.0, 2.0), Point2::new(1.0, 2.0));
        assert_ne!(Point2::new(1.0, 2.0), Point2::new(1.0, 2.0 + 1e-12));
    }

    #[test]
    fn test_distance() {
        let p0 = Point2::new(1.0f64, 1.0);
        let p1 = Point2::new(4.0, 5.0);
        assert_eq!(p0.distance_2(p1), 25.0);
        assert_relative_eq!(p0.distance(p1), 5.0);
    }

    #[test]
    fn test_position_key_ignores_zero_sign() {
        let p0 = Point2::new(0.0f64, -0.0);
        let p1 = Point2::new(-0.0f64, 0.0);
        assert_eq!(p0, p1);
        assert_eq!(p0.position_key(), p1.position_key());
    }

    #[test]
    fn test_conversions() {
        let p: Point2<f32> = [1.0, 2.0].into();
        assert_eq!(p, Point2::new(1.0, 2.0));
        let (x, y): (f32, f32) = p.into();
        assert_eq!((x, y), (1.0, 2.0));
    }
}
