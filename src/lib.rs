//! # delaunay-sketch
//! Incremental Delaunay triangulation of points inside a rectangle, with svg rendering of
//! the result and of its construction geometry.
//!
//! # Features
//! * Bowyer-Watson style point insertion, see [triangulate] and [Triangulation]
//!   * A super-triangle enclosing the input bounds serves as scaffold and is removed at the end
//!   * Affected triangles are found by circumcircle containment or by point containment,
//!     see [LocateStrategy]
//!   * The Delaunay property is restored by edge flips
//!   * The result always covers the convex hull of the input, see [complete_triangle_count]
//! * Fails fast on collinear triangles, duplicate points, invalid coordinates and points
//!   that cannot be located, see [TriangulationError]
//! * Geometric helpers: [circumcircle], [super_triangle], [convex_hull], [Circle::bounding]
//! * Rendering of points, triangles, circles and rectangles into svg, see [render]
//! * Reproducible random point sets, see [RandomPointSource]
//!
//! # Example
//! ```
//! use delaunay_sketch::{triangulate, Point2, Rectangle};
//!
//! # fn main() -> Result<(), delaunay_sketch::TriangulationError<f64>> {
//! let points = vec![
//!     Point2::new(120.0, 80.0),
//!     Point2::new(220.0, 120.0),
//!     Point2::new(125.0, 150.0),
//!     Point2::new(180.0, 200.0),
//! ];
//! let bounds = Rectangle::enclosing(points.iter().copied(), 10.0).unwrap();
//! let triangles = triangulate(&points, &bounds)?;
//! assert!(!triangles.is_empty());
//! # Ok(()) }
//! ```
//!
//! # Coordinate system
//! All orientation dependent operations ([Triangle::hit_test], the super-triangle's winding
//! and the triangles created during insertion) assume a y-up coordinate system, in which
//! counterclockwise means "left turn". Rendering into svg, which uses a y-down system,
//! mirrors the image vertically but does not change any result.

#![warn(missing_docs)]

mod bounding;
mod error;
mod hull;
mod line_side_info;
mod math;
mod parameters;
mod point;
mod point_source;
mod primitives;
mod triangle;
mod triangulation;
mod vector;

pub mod render;

#[cfg(test)]
mod test_utilities;

pub use crate::bounding::super_triangle;
pub use crate::error::{CoordinateError, TriangulationError};
pub use crate::hull::{complete_triangle_count, convex_hull};
pub use crate::line_side_info::LineSideInfo;
pub use crate::math::{
    circumcircle, is_collinear, max_allowed_value, signed_double_area, validate_coordinate,
    validate_point, MAX_ALLOWED_VALUE,
};
pub use crate::parameters::{LocateStrategy, TriangulationParameters};
pub use crate::point::{HasPosition, Point2, SketchNum};
pub use crate::point_source::{random_points_in, RandomPointSource};
pub use crate::primitives::{Circle, Edge, Rectangle, Size2};
pub use crate::render::{Renderer, SvgRenderer};
pub use crate::triangle::Triangle;
pub use crate::triangulation::{
    triangulate, triangulate_with_parameters, Triangulation, TriangulationStatistics,
};
pub use crate::vector::Vector2;
