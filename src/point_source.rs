use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Point2, Rectangle, SketchNum};

/// Generates uniformly distributed random points.
///
/// A source created with [from_seed](Self::from_seed) always yields the same sequence of
/// points, which is useful for tests and reproducible sketches.
///
/// # Example
/// ```
/// use delaunay_sketch::{RandomPointSource, Rectangle};
///
/// let area = Rectangle::from_xywh(0.0, 0.0, 800.0, 600.0);
/// let points = RandomPointSource::from_seed([7; 32]).points_in(&area, 10);
/// assert_eq!(points.len(), 10);
/// assert_eq!(points, RandomPointSource::from_seed([7; 32]).points_in(&area, 10));
/// ```
#[derive(Debug, Clone)]
pub struct RandomPointSource {
    rng: StdRng,
}

impl RandomPointSource {
    /// Creates a deterministic point source.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: StdRng::from_seed(seed),
        }
    }

    /// Creates a point source seeded from the operating system's entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Returns `count` points lying within `rectangle`.
    pub fn points_in<S>(&mut self, rectangle: &Rectangle<S>, count: usize) -> Vec<Point2<S>>
    where
        S: SketchNum + SampleUniform,
    {
        random_points_in(&mut self.rng, rectangle, count)
    }
}

/// Returns `count` random points lying within `rectangle`, drawn from `rng`.
///
/// Both coordinates are sampled independently and uniformly. The rectangle's border is
/// included, points may lie exactly on it.
pub fn random_points_in<S, R>(rng: &mut R, rectangle: &Rectangle<S>, count: usize) -> Vec<Point2<S>>
where
    S: SketchNum + SampleUniform,
    R: Rng + ?Sized,
{
    let min = rectangle.position();
    let size = rectangle.size();
    let max = Point2::new(min.x + size.width, min.y + size.height);

    let range_x = Uniform::new_inclusive(min.x.min(max.x), min.x.max(max.x));
    let range_y = Uniform::new_inclusive(min.y.min(max.y), min.y.max(max.y));

    (0..count)
        .map(|_| Point2::new(range_x.sample(rng), range_y.sample(rng)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::{random_points_in, RandomPointSource};
    use crate::test_utilities::{SEED, SEED2};
    use crate::Rectangle;
    use rand::SeedableRng;

    #[test]
    fn test_points_lie_in_rectangle() {
        let rect = Rectangle::from_xywh(80.0f64, 100.0, 150.0, 50.0);
        let points = RandomPointSource::from_seed(*SEED).points_in(&rect, 500);
        assert_eq!(points.len(), 500);
        for point in points {
            assert!(point.x >= 80.0 && point.x <= 230.0);
            assert!(point.y >= 100.0 && point.y <= 150.0);
        }
    }

    #[test]
    fn test_seeds() {
        let rect = Rectangle::from_xywh(0.0f32, 0.0, 1.0, 1.0);
        let first = RandomPointSource::from_seed(*SEED).points_in(&rect, 20);
        let second = RandomPointSource::from_seed(*SEED).points_in(&rect, 20);
        let other = RandomPointSource::from_seed(*SEED2).points_in(&rect, 20);
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_empty_rectangle() {
        let rect = Rectangle::from_xywh(3.0f64, 4.0, 0.0, 0.0);
        let mut rng = rand::rngs::StdRng::from_seed(*SEED);
        let points = random_points_in(&mut rng, &rect, 3);
        assert!(points.iter().all(|p| p.x == 3.0 && p.y == 4.0));
    }
}
