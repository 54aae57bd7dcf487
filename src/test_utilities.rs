#![allow(missing_docs)]
use std::sync::Once;

use hashbrown::HashMap;

use crate::{Point2, Triangle};

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

static INIT_TRACING: Once = Once::new();

/// Enables log output for tests, controlled by `RUST_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

type EdgeKey = ((u64, u64), (u64, u64));

fn edge_key(from: Point2<f64>, to: Point2<f64>) -> EdgeKey {
    let (from, to) = (from.position_key(), to.position_key());
    if from < to {
        (from, to)
    } else {
        (to, from)
    }
}

/// Sorted vertex keys of every triangle, for comparing triangle sets.
pub fn normalized(triangles: &[Triangle<f64>]) -> Vec<[(u64, u64); 3]> {
    let mut result: Vec<_> = triangles
        .iter()
        .map(|triangle| {
            let mut keys = triangle.vertices().map(|v| v.position_key());
            keys.sort_unstable();
            keys
        })
        .collect();
    result.sort_unstable();
    result
}

/// Asserts that no point lies strictly inside any triangle's circumcircle.
pub fn check_delaunay_property(points: &[Point2<f64>], triangles: &[Triangle<f64>]) {
    for triangle in triangles {
        let circle = triangle.circumcircle().unwrap();
        let tolerance = 1e-9 * circle.radius.max(1.0);
        for point in points {
            if triangle.has_point(*point) {
                continue;
            }
            assert!(
                point.distance(circle.center) >= circle.radius - tolerance,
                "{:?} lies inside the circumcircle of {:?}",
                point,
                triangle
            );
        }
    }
}

/// Asserts that every edge is used by at most two triangles.
///
/// Returns the number of inner edges (used twice) and boundary edges (used once).
pub fn check_edge_sharing(triangles: &[Triangle<f64>]) -> (usize, usize) {
    let mut usage: HashMap<EdgeKey, usize> = HashMap::new();
    for triangle in triangles {
        for edge in triangle.edges() {
            *usage.entry(edge_key(edge.start, edge.end)).or_default() += 1;
        }
    }
    assert!(usage.values().all(|count| *count <= 2));
    let inner = usage.values().filter(|count| **count == 2).count();
    (inner, usage.len() - inner)
}

/// Number of points on the convex hull, excluding points in the middle of hull edges.
pub fn convex_hull_size(points: &[Point2<f64>]) -> usize {
    hull_corners(points).len()
}

/// Area of the convex hull, by the shoelace formula.
pub fn convex_hull_area(points: &[Point2<f64>]) -> f64 {
    let hull = hull_corners(points);
    let doubled: f64 = hull
        .iter()
        .zip(hull.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    doubled / 2.0
}

fn hull_corners(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let cross = |o: Point2<f64>, a: Point2<f64>, b: Point2<f64>| a.sub(o).cross(b.sub(o));
    let mut hull: Vec<Point2<f64>> = Vec::new();
    for pass in [sorted.clone(), sorted.into_iter().rev().collect()] {
        let start = hull.len();
        for point in pass {
            while hull.len() >= start + 2
                && cross(hull[hull.len() - 2], hull[hull.len() - 1], point) <= 0.0
            {
                hull.pop();
            }
            hull.push(point);
        }
        // The last point of each chain starts the other one
        hull.pop();
    }
    hull
}
