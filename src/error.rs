use std::{error::Error, fmt::Display};

use crate::Point2;

/// The reason why a coordinate was rejected by [crate::validate_coordinate].
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum CoordinateError {
    /// A coordinate value was too large or infinite.
    ///
    /// The absolute value of any inserted coordinate must be less than or equal to
    /// [crate::MAX_ALLOWED_VALUE].
    TooLarge,

    /// A coordinate value was NaN.
    NAN,
}

impl Display for CoordinateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Debug>::fmt(self, f)
    }
}

impl Error for CoordinateError {}

/// The error type returned when triangulating.
///
/// All errors are deterministic functions of the input geometry. Retrying will not help;
/// the input (bounds, duplicate or collinear points) needs to be corrected instead.
/// A triangulation never returns a partial result: either all triangles are returned
/// or one of these errors.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TriangulationError<S> {
    /// Three points are exactly collinear, their circumcircle is undefined.
    ///
    /// Also returned if all input points lie on a single line.
    DegenerateTriangle {
        /// The offending points
        vertices: [Point2<S>; 3],
    },

    /// No triangle could be found that is affected by inserting this point.
    ///
    /// This usually means that the point lies outside of the bounds passed to the
    /// triangulation.
    MissingLocatingTriangle {
        /// The point that was inserted
        point: Point2<S>,
    },

    /// The same position was given twice.
    DuplicatePoint {
        /// The duplicated position
        point: Point2<S>,
    },

    /// A coordinate of this point cannot be processed.
    InvalidCoordinate {
        /// The rejected point
        point: Point2<S>,
        /// What was wrong with it
        cause: CoordinateError,
    },

    /// The result does not cover the convex hull of the input, even after enlarging the
    /// super-triangle.
    ///
    /// Happens for nearly collinear hull points whose circumcircles are too large for the
    /// scalar type. Enlarging the bounds or using `f64` may help.
    IncompleteHull {
        /// Number of triangles a complete triangulation has
        expected: usize,
        /// Number of triangles that were found
        found: usize,
    },
}

impl<S: std::fmt::Debug> Display for TriangulationError<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriangulationError::DegenerateTriangle { vertices: [a, b, c] } => write!(
                f,
                "degenerate triangle: ({:?}, {:?}), ({:?}, {:?}) and ({:?}, {:?}) are collinear",
                a.x, a.y, b.x, b.y, c.x, c.y
            ),
            TriangulationError::MissingLocatingTriangle { point } => write!(
                f,
                "no triangle found for point ({:?}, {:?}), is it inside the bounds?",
                point.x, point.y
            ),
            TriangulationError::DuplicatePoint { point } => {
                write!(f, "duplicate point ({:?}, {:?})", point.x, point.y)
            }
            TriangulationError::InvalidCoordinate { point, cause } => write!(
                f,
                "invalid coordinate in point ({:?}, {:?}): {}",
                point.x, point.y, cause
            ),
            TriangulationError::IncompleteHull { expected, found } => write!(
                f,
                "incomplete triangulation: found {} of {} triangles covering the convex hull",
                found, expected
            ),
        }
    }
}

impl<S: std::fmt::Debug> Error for TriangulationError<S> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TriangulationError::InvalidCoordinate { cause, .. } => Some(cause),
            _ => None,
        }
    }
}
