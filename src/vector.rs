#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SketchNum;

/// A two dimensional displacement.
///
/// Vectors are usually created by subtracting two points, see [Point2::sub](crate::Point2::sub)
/// and [Edge::to_vector](crate::Edge::to_vector).
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Vector2<S> {
    /// The vector's x component
    pub x: S,
    /// The vector's y component
    pub y: S,
}

impl<S> Vector2<S> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Vector2 { x, y }
    }
}

impl<S: SketchNum> Vector2<S> {
    /// Component wise difference `self - other`.
    #[inline]
    pub fn sub(&self, other: Self) -> Self {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    /// Scales this vector by `factor`.
    #[inline]
    pub fn mul(&self, factor: S) -> Self {
        Vector2::new(self.x * factor, self.y * factor)
    }

    /// The z component of the three dimensional cross product of `self` and `other`.
    ///
    /// Positive if `other` points to the left of `self` (counterclockwise), negative if it
    /// points to the right and zero if both are parallel.
    #[inline]
    pub fn cross(&self, other: Self) -> S {
        self.x * other.y - self.y * other.x
    }

    /// The dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: Self) -> S {
        self.x * other.x + self.y * other.y
    }

    /// The squared length of this vector.
    #[inline]
    pub fn length2(&self) -> S {
        self.dot(*self)
    }

    /// The length of this vector.
    #[inline]
    pub fn length(&self) -> S {
        self.length2().sqrt()
    }

    /// Returns a vector of length one pointing into the same direction.
    ///
    /// Returns `None` for the zero vector.
    pub fn normalize(&self) -> Option<Self> {
        let length = self.length();
        if length == S::zero() {
            None
        } else {
            Some(Vector2::new(self.x / length, self.y / length))
        }
    }
}
