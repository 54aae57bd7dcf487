use delaunay_sketch::{
    circumcircle, complete_triangle_count, convex_hull, is_collinear, HasPosition, Point2,
    Rectangle, Triangle, TriangulationError,
};

#[derive(Clone, Copy, arbitrary::Arbitrary)]
pub struct FuzzPoint {
    pub x: f64,
    pub y: f64,
}

impl HasPosition for FuzzPoint {
    type Scalar = f64;
    fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl core::fmt::Debug for FuzzPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("Point2::new({:?}, {:?})", self.x, self.y))
    }
}

pub const RANGE: f64 = 20.0;

pub fn fuzz_bounds() -> Rectangle<f64> {
    Rectangle::from_xywh(-RANGE - 1.0, -RANGE - 1.0, 2.0 * RANGE + 2.0, 2.0 * RANGE + 2.0)
}

/// Returns `false` for inputs outside of the fuzzed value range.
pub fn is_in_range(data: &[FuzzPoint]) -> bool {
    data.iter().all(|p| {
        delaunay_sketch::validate_point(p).is_ok() && p.x.abs() <= RANGE && p.y.abs() <= RANGE
    })
}

/// Radius above which a circumcircle may reach the largest super-triangle.
const HUGE_RADIUS: f64 = 1.0e8;

fn has_duplicate(positions: &[Point2<f64>], point: Point2<f64>) -> bool {
    positions.iter().filter(|p| **p == point).count() > 1
}

fn all_collinear(positions: &[Point2<f64>]) -> bool {
    convex_hull(positions).len() < 3
}

/// Some hull edge forms a nearly flat triangle with another input point.
fn has_nearly_flat_hull_triangle(positions: &[Point2<f64>]) -> bool {
    let hull = convex_hull(positions);
    hull.iter()
        .zip(hull.iter().cycle().skip(1))
        .any(|(from, to)| {
            positions.iter().any(|p| {
                !is_collinear(*from, *to, *p)
                    && circumcircle([*from, *to, *p])
                        .map_or(true, |circle| circle.radius > HUGE_RADIUS)
            })
        })
}

pub fn check_result(
    data: &[FuzzPoint],
    result: Result<Vec<Triangle<f64>>, TriangulationError<f64>>,
) {
    let positions: Vec<_> = data.iter().map(HasPosition::position).collect();
    let triangles = match result {
        Ok(triangles) => triangles,
        Err(TriangulationError::DuplicatePoint { point }) => {
            assert!(has_duplicate(&positions, point), "{:?}", data);
            return;
        }
        Err(TriangulationError::DegenerateTriangle { .. }) => {
            assert!(all_collinear(&positions), "{:?}", data);
            return;
        }
        Err(TriangulationError::IncompleteHull { .. }) => {
            assert!(has_nearly_flat_hull_triangle(&positions), "{:?}", data);
            return;
        }
        Err(err) => panic!("unexpected error {}: {:?}", err, data),
    };

    if positions.len() < 3 {
        assert!(triangles.is_empty());
        return;
    }
    assert_eq!(triangles.len(), complete_triangle_count(&positions), "{:?}", data);

    for triangle in &triangles {
        assert!(triangle.vertices().iter().all(|v| positions.contains(v)));
        let shared = triangles
            .iter()
            .filter(|other| other.edges().iter().any(|e| triangle.has_edge(e)))
            .count();
        // Includes the triangle itself
        assert!(shared <= 4, "{:?}", data);

        let circle = triangle.circumcircle().unwrap();
        let tolerance = 1e-6 * circle.radius.max(1.0);
        for position in &positions {
            if !triangle.has_point(*position) {
                assert!(
                    position.distance(circle.center) >= circle.radius - tolerance,
                    "{:?}",
                    data
                );
            }
        }
    }
}
