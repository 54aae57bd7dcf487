use crate::{Circle, CoordinateError, HasPosition, Point2, SketchNum, TriangulationError};

/// The largest allowed coordinate value that can be triangulated.
/// This value is equal to 2<sup>201</sup>.
///
/// The *absolute value* of any inserted coordinate must be smaller than or equal to this
/// value. Larger values may overflow when evaluating the exact collinearity predicate.
/// Scalar types with a smaller range use a lower limit, see [max_allowed_value].
///
/// *See also [validate_coordinate], [validate_point]*
pub const MAX_ALLOWED_VALUE: f64 = 3.2138760885179806e60; // 1.0 * 2^201

/// The largest absolute coordinate value accepted for the scalar type `S`.
///
/// Circumcircle centers are computed from cubic terms of the coordinates, which must not
/// overflow `S`. This is [MAX_ALLOWED_VALUE] for `f64` and roughly `1.1e11` for `f32`.
///
/// # Example
/// ```
/// use delaunay_sketch::{max_allowed_value, MAX_ALLOWED_VALUE};
///
/// assert_eq!(max_allowed_value::<f64>(), MAX_ALLOWED_VALUE);
/// assert!(max_allowed_value::<f32>() < 1.0e12);
/// ```
pub fn max_allowed_value<S: SketchNum>() -> f64 {
    let cube_root: f64 = S::max_value().cbrt().into();
    (cube_root / 64.0).min(MAX_ALLOWED_VALUE)
}

/// Checks if a coordinate value is suitable for triangulation.
///
/// Will return an error if and only if
///  - The absolute value of the coordinate is too large (See [max_allowed_value])
///  - The coordinate is NaN (not a number)
///
/// Passing in any non-finite floating point number (e.g. `f32::NEG_INFINITY`) will
/// result in `Err(CoordinateError::TooLarge)`.
pub fn validate_coordinate<S: SketchNum>(value: S) -> Result<(), CoordinateError> {
    let as_f64: f64 = value.into();
    if as_f64.is_nan() {
        Err(CoordinateError::NAN)
    } else if as_f64.abs() > max_allowed_value::<S>() {
        Err(CoordinateError::TooLarge)
    } else {
        Ok(())
    }
}

/// Checks if both coordinates of a vertex are suitable for triangulation.
pub fn validate_point<V: HasPosition>(vertex: &V) -> Result<(), TriangulationError<V::Scalar>> {
    let point = vertex.position();
    validate_coordinate(point.x)
        .and_then(|_| validate_coordinate(point.y))
        .map_err(|cause| TriangulationError::InvalidCoordinate { point, cause })
}

fn to_robust_coord<S: SketchNum>(point: Point2<S>) -> robust::Coord<f64> {
    let point = point.to_f64();
    robust::Coord {
        x: point.x,
        y: point.y,
    }
}

/// Exact orientation of three points: positive for a left turn, negative for a right turn
/// and zero if they are collinear.
pub(crate) fn orientation<S: SketchNum>(p0: Point2<S>, p1: Point2<S>, p2: Point2<S>) -> f64 {
    robust::orient2d(to_robust_coord(p0), to_robust_coord(p1), to_robust_coord(p2))
}

/// Returns `true` if the three points lie exactly on one line.
///
/// Uses an exact orientation predicate, no rounding is involved.
pub fn is_collinear<S: SketchNum>(p0: Point2<S>, p1: Point2<S>, p2: Point2<S>) -> bool {
    orientation(p0, p1, p2) == 0.0
}

/// Calculates the circle passing through all three given points.
///
/// Returns [TriangulationError::DegenerateTriangle] if the points are collinear, in which
/// case no such circle exists.
///
/// # Example
/// ```
/// use delaunay_sketch::{circumcircle, Point2};
///
/// let circle = circumcircle([
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// ])?;
/// assert_eq!(circle.center, Point2::new(1.0, 1.0));
/// # Ok::<(), delaunay_sketch::TriangulationError<f64>>(())
/// ```
pub fn circumcircle<S: SketchNum>(
    vertices: [Point2<S>; 3],
) -> Result<Circle<S>, TriangulationError<S>> {
    let degenerate = TriangulationError::DegenerateTriangle { vertices };
    let [v1, v2, v3] = vertices;
    if is_collinear(v1, v2, v3) {
        return Err(degenerate);
    }

    let (x1, y1) = (v1.x, v1.y);
    let (x2, y2) = (v2.x, v2.y);
    let (x3, y3) = (v3.x, v3.y);

    let x1_2 = x1 * x1;
    let x2_2 = x2 * x2;
    let x3_2 = x3 * x3;
    let y1_2 = y1 * y1;
    let y2_2 = y2 * y2;
    let y3_2 = y3 * y3;

    let two: S = 2.0f32.into();
    // Twice the signed area of the triangle
    let c = two * ((x2 - x1) * (y3 - y1) - (y2 - y1) * (x3 - x1));
    if c == S::zero() {
        return Err(degenerate);
    }

    let a2 = x2_2 - x1_2 + y2_2 - y1_2;
    let a3 = x3_2 - x1_2 + y3_2 - y1_2;
    let x = ((y3 - y1) * a2 + (y1 - y2) * a3) / c;
    let y = ((x1 - x3) * a2 + (x2 - x1) * a3) / c;
    if !x.is_finite() || !y.is_finite() {
        return Err(degenerate);
    }

    let center = Point2::new(x, y);
    Ok(Circle::new(center, v1.distance(center)))
}

/// Twice the signed area of a triangle.
///
/// Positive for counterclockwise ordered vertices (in a y-up coordinate system).
pub fn signed_double_area<S: SketchNum>(vertices: [Point2<S>; 3]) -> S {
    let [v0, v1, v2] = vertices;
    v1.sub(v0).cross(v2.sub(v0))
}

#[cfg(test)]
mod test {
    use super::{
        circumcircle, is_collinear, max_allowed_value, validate_coordinate, validate_point,
    };
    use crate::{CoordinateError, Point2, TriangulationError};
    use approx::assert_relative_eq;

    #[test]
    fn test_validate_coordinate() {
        use CoordinateError::*;
        assert_eq!(validate_coordinate(f64::NAN), Err(NAN));
        let max_value = super::MAX_ALLOWED_VALUE;

        assert_eq!(validate_coordinate(f64::INFINITY), Err(TooLarge));
        assert_eq!(validate_coordinate(f64::NEG_INFINITY), Err(TooLarge));
        assert_eq!(validate_coordinate(max_value * 2.0), Err(TooLarge));

        assert_eq!(validate_coordinate(f32::MIN_POSITIVE), Ok(()));
        assert_eq!(validate_coordinate(f32::MAX as f64), Ok(()));
        assert_eq!(validate_coordinate(max_value), Ok(()));
        assert_eq!(validate_coordinate(0.0), Ok(()));
    }

    #[test]
    fn test_f32_limit() {
        use CoordinateError::*;
        let limit = max_allowed_value::<f32>();
        assert!(limit > 1.0e10 && limit < 1.0e12);
        assert_eq!(validate_coordinate(1.0e10f32), Ok(()));
        assert_eq!(validate_coordinate(-1.0e10f32), Ok(()));
        assert_eq!(validate_coordinate(1.0e19f32), Err(TooLarge));
        assert_eq!(validate_coordinate(f32::MAX), Err(TooLarge));
        assert_eq!(validate_coordinate(f32::NAN), Err(NAN));
        // Large f64 values stay valid
        assert_eq!(validate_coordinate(1.0e19f64), Ok(()));
    }

    #[test]
    fn check_max_value() {
        let mut expected = 1.0f64;
        for _ in 0..201 {
            expected *= 2.0;
        }

        assert_eq!(super::MAX_ALLOWED_VALUE, expected);
    }

    #[test]
    fn test_validate_point() {
        assert_eq!(validate_point(&Point2::new(1.0, 2.0)), Ok(()));
        let invalid = Point2::new(1.0, f64::NAN);
        assert!(matches!(
            validate_point(&invalid),
            Err(TriangulationError::InvalidCoordinate {
                cause: CoordinateError::NAN,
                ..
            })
        ));
    }

    #[test]
    fn test_circumcircle_passes_through_vertices() {
        let vertices = [
            Point2::new(120.0f64, 80.0),
            Point2::new(220.0, 120.0),
            Point2::new(125.0, 150.0),
        ];
        let circle = circumcircle(vertices).unwrap();
        for vertex in vertices {
            assert_relative_eq!(vertex.distance(circle.center), circle.radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_circumcircle_of_right_triangle() {
        // The hypotenuse of a right triangle is a diameter of its circumcircle
        let circle = circumcircle([
            Point2::new(0.0f64, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(0.0, 8.0),
        ])
        .unwrap();
        assert_relative_eq!(circle.center.x, 3.0);
        assert_relative_eq!(circle.center.y, 4.0);
        assert_relative_eq!(circle.radius, 5.0);
    }

    #[test]
    fn test_circumcircle_is_independent_of_winding() {
        let a = Point2::new(1.0f64, 1.0);
        let b = Point2::new(4.0, 2.0);
        let c = Point2::new(2.0, 5.0);
        let ccw = circumcircle([a, b, c]).unwrap();
        let cw = circumcircle([a, c, b]).unwrap();
        assert_relative_eq!(ccw.center.x, cw.center.x, epsilon = 1e-12);
        assert_relative_eq!(ccw.center.y, cw.center.y, epsilon = 1e-12);
        assert_relative_eq!(ccw.radius, cw.radius, epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_circumcircle_fails() {
        let vertices = [
            Point2::new(0.0f64, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        ];
        assert_eq!(
            circumcircle(vertices),
            Err(TriangulationError::DegenerateTriangle { vertices })
        );

        let diagonal = [
            Point2::new(0.1f64, 0.1),
            Point2::new(0.2, 0.2),
            Point2::new(0.3, 0.3),
        ];
        assert!(is_collinear(diagonal[0], diagonal[1], diagonal[2]));
        assert!(circumcircle(diagonal).is_err());
    }

    #[test]
    fn test_f32_circumcircle() {
        let circle = circumcircle([
            Point2::new(-1.0f32, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap();
        assert_relative_eq!(circle.center.x, 0.0);
        assert_relative_eq!(circle.center.y, 0.0);
        assert_relative_eq!(circle.radius, 1.0);
    }
}
