#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SketchNum;

/// Determines which triangles are replaced when a new point is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub enum LocateStrategy {
    /// Every triangle whose circumcircle strictly contains the new point is split into a
    /// fan around it.
    ///
    /// Neighboring fans produce the same triangle twice across their shared edge. These
    /// pairs cancel out during legalization, leaving the classic Bowyer–Watson cavity
    /// triangulation.
    #[default]
    Circumcircle,

    /// Only the first triangle whose interior strictly contains the new point is split. The
    /// Delaunay property is then restored by edge flips alone.
    ///
    /// Requires counterclockwise triangles. Points lying exactly on an existing edge cannot
    /// be located and are reported as
    /// [MissingLocatingTriangle](crate::TriangulationError::MissingLocatingTriangle).
    ContainingTriangle,
}

/// Controls how a triangulation is performed.
///
/// The following parameters will be used by `Self::default` and [Self::new]:
/// * `locate_strategy`: [LocateStrategy::Circumcircle]
/// * `super_triangle_scale`: 1.0
/// * `hull_completion`: enabled
///
/// # Example
///
/// ```
/// use delaunay_sketch::{LocateStrategy, TriangulationParameters};
///
/// let params = TriangulationParameters::<f64>::new()
///     .with_locate_strategy(LocateStrategy::ContainingTriangle)
///     .with_super_triangle_scale(20.0);
/// assert_eq!(params.super_triangle_scale(), 20.0);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct TriangulationParameters<S> {
    locate_strategy: LocateStrategy,
    super_triangle_scale: S,
    hull_completion: bool,
}

impl<S: SketchNum> Default for TriangulationParameters<S> {
    fn default() -> Self {
        Self {
            locate_strategy: LocateStrategy::default(),
            super_triangle_scale: S::one(),
            hull_completion: true,
        }
    }
}

impl<S: SketchNum> TriangulationParameters<S> {
    /// Creates a new set of `TriangulationParameters`.
    ///
    /// Refer to the [struct definition](Self) for more information.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies how the triangles affected by an insertion are found.
    pub fn with_locate_strategy(mut self, locate_strategy: LocateStrategy) -> Self {
        self.locate_strategy = locate_strategy;
        self
    }

    /// Enlarges the super-triangle by the given factor.
    ///
    /// With the default of `1.0`, the super-triangle's vertices can lie close enough to the
    /// input for some triangles along the convex hull to be connected to them. Those get
    /// removed with the scaffold. [Hull completion](Self::with_hull_completion) repairs this
    /// afterwards; a larger initial factor avoids the repair at the cost of larger
    /// intermediate circumcircles.
    ///
    /// Values below one and non-finite values are replaced by one.
    pub fn with_super_triangle_scale(mut self, scale: S) -> Self {
        self.super_triangle_scale = if scale.is_finite() && scale >= S::one() {
            scale
        } else {
            S::one()
        };
        self
    }

    /// Enables or disables hull completion.
    ///
    /// When enabled, finishing a triangulation verifies that the result covers the convex
    /// hull of all points. If triangles are missing, the points are inserted again into a
    /// super-triangle enlarged by a factor of 16, up to 8 times. If the result is still
    /// incomplete, [IncompleteHull](crate::TriangulationError::IncompleteHull) is returned.
    ///
    /// When disabled, the result only contains the triangles not connected to the
    /// super-triangle, which may leave parts of the convex hull uncovered.
    pub fn with_hull_completion(mut self, hull_completion: bool) -> Self {
        self.hull_completion = hull_completion;
        self
    }

    /// The configured [LocateStrategy].
    pub fn locate_strategy(&self) -> LocateStrategy {
        self.locate_strategy
    }

    /// The configured super-triangle enlargement.
    pub fn super_triangle_scale(&self) -> S {
        self.super_triangle_scale
    }

    /// Whether incomplete results are repaired, see [Self::with_hull_completion].
    pub fn hull_completion(&self) -> bool {
        self.hull_completion
    }
}
