use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::{
    bounding, hull, math, validate_point, Edge, HasPosition, LocateStrategy, Point2, Rectangle,
    SketchNum, Triangle, TriangulationError, TriangulationParameters,
};

/// Factor by which the super-triangle grows with every hull completion attempt.
const HULL_COMPLETION_GROWTH: f32 = 16.0;
const MAX_HULL_COMPLETIONS: usize = 8;

/// Counters collected while inserting points into a [Triangulation].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TriangulationStatistics {
    /// Number of successfully inserted points.
    pub inserted_points: usize,
    /// Number of triangles that were split into fans, summed over all insertions.
    pub located_triangles: usize,
    /// Number of edge flips performed during legalization.
    pub flips: usize,
    /// Number of identical triangle pairs that cancelled each other out.
    ///
    /// Neighboring fans create the same triangle twice across their common edge. With
    /// [LocateStrategy::ContainingTriangle], this only happens for points lying exactly on
    /// an edge.
    pub cancelled_duplicates: usize,
}

/// An incremental Delaunay triangulation under construction.
///
/// A triangulation starts out with a single super-triangle enclosing its bounds. Points are
/// added one after another with [insert](Self::insert); each insertion replaces the affected
/// triangles by a fan around the new point and then restores the Delaunay property by
/// flipping edges. [finish](Self::finish) removes every triangle connected to the
/// super-triangle and returns the result.
///
/// Triangles along the convex hull whose circumcircles reach a super-triangle vertex are
/// connected to it and get removed as well. Unless disabled with
/// [TriangulationParameters::with_hull_completion], `finish` detects this by comparing
/// against [crate::complete_triangle_count] and inserts all points again into a larger
/// super-triangle.
///
/// Use [crate::triangulate] to triangulate a whole point set at once. This type is meant for
/// callers that want to observe intermediate states, e.g. to draw the triangulation after
/// every insertion.
///
/// # Example
/// ```
/// use delaunay_sketch::{Point2, Rectangle, Triangulation};
///
/// # fn main() -> Result<(), delaunay_sketch::TriangulationError<f64>> {
/// let mut triangulation = Triangulation::new(Rectangle::from_xywh(0.0, 0.0, 10.0, 10.0));
/// // The working set initially consists of the super-triangle
/// assert_eq!(triangulation.triangles().len(), 1);
///
/// triangulation.insert(Point2::new(2.0, 2.0))?;
/// triangulation.insert(Point2::new(8.0, 3.0))?;
/// triangulation.insert(Point2::new(4.0, 7.0))?;
///
/// let triangles = triangulation.finish()?;
/// assert_eq!(triangles.len(), 1);
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct Triangulation<S: SketchNum> {
    parameters: TriangulationParameters<S>,
    bounds: Rectangle<S>,
    super_triangle: Triangle<S>,
    triangles: Vec<Triangle<S>>,
    vertices: Vec<Point2<S>>,
    positions: HashSet<(u64, u64)>,
    statistics: TriangulationStatistics,
}

impl<S: SketchNum> Triangulation<S> {
    /// Creates a new triangulation for points lying strictly inside `bounds`.
    pub fn new(bounds: Rectangle<S>) -> Self {
        Self::with_parameters(bounds, TriangulationParameters::default())
    }

    /// Creates a new triangulation using custom parameters.
    pub fn with_parameters(bounds: Rectangle<S>, parameters: TriangulationParameters<S>) -> Self {
        let super_triangle =
            bounding::super_triangle(&bounds, parameters.super_triangle_scale());
        Triangulation {
            parameters,
            bounds,
            super_triangle,
            triangles: vec![super_triangle],
            vertices: Vec::new(),
            positions: HashSet::new(),
            statistics: TriangulationStatistics::default(),
        }
    }

    /// The bounds this triangulation was created with.
    pub fn bounds(&self) -> Rectangle<S> {
        self.bounds
    }

    /// The parameters this triangulation was created with.
    pub fn parameters(&self) -> TriangulationParameters<S> {
        self.parameters
    }

    /// The scaffold triangle enclosing the bounds.
    pub fn super_triangle(&self) -> Triangle<S> {
        self.super_triangle
    }

    /// The current working set, including all triangles connected to the super-triangle.
    pub fn triangles(&self) -> &[Triangle<S>] {
        &self.triangles
    }

    /// All inserted points in insertion order.
    pub fn vertices(&self) -> &[Point2<S>] {
        &self.vertices
    }

    /// Counters describing the work done so far.
    pub fn statistics(&self) -> TriangulationStatistics {
        self.statistics
    }

    /// Returns the triangles that would be replaced when inserting `point`.
    pub fn affected_triangles(
        &self,
        point: Point2<S>,
    ) -> Result<Vec<Triangle<S>>, TriangulationError<S>> {
        Ok(self
            .locate(point)?
            .into_iter()
            .map(|index| self.triangles[index])
            .collect())
    }

    /// Inserts a new point.
    ///
    /// Fails if the point has an invalid coordinate, has already been inserted or if no
    /// triangle is affected by it (the point lies outside of the super-triangle). A
    /// [TriangulationError::DegenerateTriangle] can occur when the point lies exactly on an
    /// edge of the super-triangle.
    ///
    /// The triangulation is left in an unspecified state if the error occurs after the
    /// working set has been modified; it should be discarded in this case.
    pub fn insert(&mut self, point: Point2<S>) -> Result<(), TriangulationError<S>> {
        validate_point(&point)?;
        let key = point.position_key();
        if self.positions.contains(&key) {
            return Err(TriangulationError::DuplicatePoint { point });
        }
        if !self.bounds.contains(point) {
            tracing::warn!(
                x = ?point.x,
                y = ?point.y,
                "point does not lie strictly inside the triangulation bounds"
            );
        }

        let located = self.locate(point)?;
        if located.is_empty() {
            return Err(TriangulationError::MissingLocatingTriangle { point });
        }

        let removed = self.remove_triangles(located);
        let mut edges: SmallVec<[Edge<S>; 16]> = SmallVec::new();
        for triangle in &removed {
            for edge in triangle.edges() {
                edges.push(edge);
                self.triangles.push(Triangle::new(edge.start, edge.end, point));
            }
        }
        // Edges shared by two removed triangles are popped first. Their fan triangles are
        // identical, possibly collinear, and must cancel out before any flip.
        edges.sort_by_key(|edge| removed.iter().filter(|t| t.has_edge(edge)).count());

        let (flips, cancelled) = self.legalize_edges(edges)?;

        self.positions.insert(key);
        self.vertices.push(point);
        self.statistics.inserted_points += 1;
        self.statistics.located_triangles += removed.len();
        tracing::debug!(
            x = ?point.x,
            y = ?point.y,
            located = removed.len(),
            flips,
            cancelled,
            triangles = self.triangles.len(),
            "inserted point"
        );
        Ok(())
    }

    /// All triangles of the working set that are not connected to the super-triangle.
    ///
    /// Unlike [finish](Self::finish), this leaves the triangulation intact and can be
    /// called between insertions. It does not complete the convex hull, some triangles
    /// along it may be missing.
    pub fn result_triangles(&self) -> Vec<Triangle<S>> {
        self.triangles
            .iter()
            .filter(|triangle| !triangle.shares_vertex_with(&self.super_triangle))
            .copied()
            .collect()
    }

    /// Removes the scaffold and returns the final triangles.
    ///
    /// With hull completion enabled (the default), the result covers the convex hull of all
    /// inserted points and contains [crate::complete_triangle_count] triangles.
    ///
    /// Returns [TriangulationError::DegenerateTriangle] if three or more points were
    /// inserted and all of them lie on a single line, and
    /// [TriangulationError::IncompleteHull] if the convex hull could not be completed.
    pub fn finish(self) -> Result<Vec<Triangle<S>>, TriangulationError<S>> {
        check_not_all_collinear(&self.vertices)?;
        let triangulation = if self.parameters.hull_completion() {
            self.complete_hull(MAX_HULL_COMPLETIONS)?
        } else {
            self
        };
        let result = triangulation.result_triangles();
        tracing::debug!(
            vertices = triangulation.vertices.len(),
            triangles = result.len(),
            flips = triangulation.statistics.flips,
            cancelled = triangulation.statistics.cancelled_duplicates,
            "finished triangulation"
        );
        Ok(result)
    }

    /// Inserts all vertices into larger super-triangles until the result covers the convex
    /// hull, at most `max_attempts` times.
    fn complete_hull(self, max_attempts: usize) -> Result<Self, TriangulationError<S>> {
        let expected = hull::complete_triangle_count(&self.vertices);
        let growth: S = HULL_COMPLETION_GROWTH.into();
        let mut triangulation = self;
        let mut attempts = 0;
        loop {
            let found = triangulation.result_triangles().len();
            if found >= expected {
                return Ok(triangulation);
            }

            let scale = triangulation.parameters.super_triangle_scale() * growth;
            // The enlarged super-triangle must still be representable
            let enlarged = bounding::super_triangle(&triangulation.bounds, scale);
            if attempts == max_attempts
                || enlarged
                    .vertices()
                    .iter()
                    .any(|vertex| validate_point(vertex).is_err())
            {
                tracing::warn!(expected, found, "failed to complete the convex hull");
                return Err(TriangulationError::IncompleteHull { expected, found });
            }

            tracing::debug!(
                ?scale,
                expected,
                found,
                "triangles along the convex hull are missing, enlarging the super-triangle"
            );
            triangulation = triangulation.reinserted(scale)?;
            attempts += 1;
        }
    }

    /// A new triangulation of the same vertices, in the same order, with a differently
    /// scaled super-triangle.
    fn reinserted(&self, super_triangle_scale: S) -> Result<Self, TriangulationError<S>> {
        let parameters = self
            .parameters
            .with_super_triangle_scale(super_triangle_scale);
        let mut result = Triangulation::with_parameters(self.bounds, parameters);
        for vertex in &self.vertices {
            result.insert(*vertex)?;
        }
        Ok(result)
    }

    /// Indices of the triangles that need to be replaced when inserting `point`.
    fn locate(&self, point: Point2<S>) -> Result<SmallVec<[usize; 8]>, TriangulationError<S>> {
        match self.parameters.locate_strategy() {
            LocateStrategy::Circumcircle => {
                let mut result = SmallVec::new();
                for (index, triangle) in self.triangles.iter().enumerate() {
                    if triangle.has_point_in_circumcircle(point)? {
                        result.push(index);
                    }
                }
                Ok(result)
            }
            LocateStrategy::ContainingTriangle => {
                if let Some(index) = self.triangles.iter().position(|t| t.hit_test(point)) {
                    return Ok(SmallVec::from_slice(&[index]));
                }
                // A point on an edge splits both triangles sharing it
                let touching: SmallVec<[usize; 8]> = self
                    .triangles
                    .iter()
                    .enumerate()
                    .filter(|(_, triangle)| triangle.hit_test_including_edges(point))
                    .map(|(index, _)| index)
                    .collect();
                if touching.len() == 2 {
                    Ok(touching)
                } else {
                    Ok(SmallVec::new())
                }
            }
        }
    }

    /// Takes the triangles at `indices` out of the working set.
    fn remove_triangles(&mut self, mut indices: SmallVec<[usize; 8]>) -> SmallVec<[Triangle<S>; 8]> {
        let removed = indices.iter().map(|index| self.triangles[*index]).collect();
        // Descending order keeps the remaining indices valid while swap removing
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for index in indices {
            self.triangles.swap_remove(index);
        }
        removed
    }

    /// Restores the Delaunay property by processing the given edge stack.
    ///
    /// Returns the number of flips and the number of cancelled duplicates.
    fn legalize_edges(
        &mut self,
        mut edges: SmallVec<[Edge<S>; 16]>,
    ) -> Result<(usize, usize), TriangulationError<S>> {
        let mut flips = 0;
        let mut cancelled = 0;

        while let Some(edge) = edges.pop() {
            let sharing: SmallVec<[usize; 2]> = self
                .triangles
                .iter()
                .enumerate()
                .filter(|(_, triangle)| triangle.has_edge(&edge))
                .map(|(index, _)| index)
                .collect();

            if sharing.len() < 2 {
                // The edge lies on the boundary of the working set
                continue;
            }
            if sharing.len() > 2 {
                tracing::warn!(
                    count = sharing.len(),
                    ?edge,
                    "edge is shared by more than two triangles, using the first two"
                );
            }

            let (first, second) = (sharing[0], sharing[1]);
            let abc = self.triangles[first];
            let abd = self.triangles[second];

            if abc == abd {
                self.remove_triangles(SmallVec::from_slice(&[first, second]));
                cancelled += 1;
                continue;
            }

            let d = opposite_vertex(&abd, &edge)?;
            if !abc.has_point_in_circumcircle(d)? {
                continue;
            }
            let c = opposite_vertex(&abc, &edge)?;

            //        c                  c
            //       / \                /|\
            //      /   \              / | \
            //     a --> b    ==>     a  |  b
            //      \   /              \ | /
            //       \ /                \|/
            //        d                  d
            //
            // a -> b follows the winding of abc, which keeps counterclockwise input
            // counterclockwise.
            let shared = abc.directed_edge(&edge).unwrap_or(edge);
            let (a, b) = (shared.start, shared.end);

            self.remove_triangles(SmallVec::from_slice(&[first, second]));
            self.triangles.push(Triangle::new(a, d, c));
            self.triangles.push(Triangle::new(b, c, d));

            edges.extend(abc.other_edges_by_edge(&edge).into_iter().flatten());
            edges.extend(abd.other_edges_by_edge(&edge).into_iter().flatten());
            flips += 1;
        }

        self.statistics.flips += flips;
        self.statistics.cancelled_duplicates += cancelled;
        Ok((flips, cancelled))
    }
}

fn opposite_vertex<S: SketchNum>(
    triangle: &Triangle<S>,
    edge: &Edge<S>,
) -> Result<Point2<S>, TriangulationError<S>> {
    triangle
        .no_common_point_by_edge(edge)
        .ok_or(TriangulationError::DegenerateTriangle {
            vertices: triangle.vertices(),
        })
}

fn check_not_all_collinear<S: SketchNum>(points: &[Point2<S>]) -> Result<(), TriangulationError<S>> {
    if let [first, second, rest @ ..] = points {
        if let Some(last) = rest.last() {
            if rest
                .iter()
                .all(|point| math::is_collinear(*first, *second, *point))
            {
                return Err(TriangulationError::DegenerateTriangle {
                    vertices: [*first, *second, *last],
                });
            }
        }
    }
    Ok(())
}

/// Calculates the Delaunay triangulation of a point set.
///
/// All points must lie strictly inside `bounds`. The points are inserted starting with the
/// *last* element of `vertices`; the insertion order does not change the result except for
/// cocircular point sets, which have more than one valid triangulation.
///
/// The input is validated before any triangle is created:
///  - Every coordinate must be valid (see [crate::validate_coordinate])
///  - No position may occur twice ([TriangulationError::DuplicatePoint])
///  - At least three points must not lie on a common line
///    ([TriangulationError::DegenerateTriangle])
///
/// Fewer than three points result in an empty triangulation. Otherwise the returned
/// triangles cover the convex hull of `vertices`, see [crate::complete_triangle_count].
///
/// # Example
/// ```
/// use delaunay_sketch::{triangulate, Point2, Rectangle};
///
/// # fn main() -> Result<(), delaunay_sketch::TriangulationError<f64>> {
/// let points = [
///     Point2::new(1.0, 1.0),
///     Point2::new(9.0, 1.5),
///     Point2::new(8.0, 9.0),
///     Point2::new(2.0, 8.0),
///     Point2::new(5.0, 4.0),
/// ];
/// let triangles = triangulate(&points, &Rectangle::from_xywh(0.0, 0.0, 10.0, 10.0))?;
/// // Four hull points and a single inner point
/// assert_eq!(triangles.len(), 4);
/// # Ok(()) }
/// ```
pub fn triangulate<V: HasPosition>(
    vertices: &[V],
    bounds: &Rectangle<V::Scalar>,
) -> Result<Vec<Triangle<V::Scalar>>, TriangulationError<V::Scalar>> {
    triangulate_with_parameters(vertices, bounds, TriangulationParameters::default())
}

/// Calculates the Delaunay triangulation of a point set using custom parameters.
///
/// *See [triangulate]*
pub fn triangulate_with_parameters<V: HasPosition>(
    vertices: &[V],
    bounds: &Rectangle<V::Scalar>,
    parameters: TriangulationParameters<V::Scalar>,
) -> Result<Vec<Triangle<V::Scalar>>, TriangulationError<V::Scalar>> {
    let points: Vec<_> = vertices.iter().map(HasPosition::position).collect();

    let mut positions = HashSet::with_capacity(points.len());
    for point in &points {
        validate_point(point)?;
        if !positions.insert(point.position_key()) {
            return Err(TriangulationError::DuplicatePoint { point: *point });
        }
    }
    check_not_all_collinear(&points)?;

    if points.len() < 3 {
        tracing::debug!(vertices = points.len(), "too few points for a triangle");
        return Ok(Vec::new());
    }

    let mut triangulation = Triangulation::with_parameters(*bounds, parameters);
    for point in points.iter().rev() {
        triangulation.insert(*point)?;
    }
    triangulation.finish()
}
