//! Random scenario generation for demos and experiments

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::common::{Obstacles, Point2D};

/// Sample `count` obstacles uniformly over `[0, area_width]` per axis.
/// `area_width` must be positive.
pub fn random_obstacles<R: Rng>(rng: &mut R, count: usize, area_width: f64) -> Obstacles {
    let side = Uniform::new(0.0, area_width);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(Point2D::new(side.sample(rng), side.sample(rng)));
    }
    Obstacles::from_points(points)
}

/// Sample a goal position uniformly over the same square
pub fn random_goal<R: Rng>(rng: &mut R, area_width: f64) -> Point2D {
    let side = Uniform::new(0.0, area_width);
    Point2D::new(side.sample(rng), side.sample(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_obstacles_stay_in_area() {
        let mut rng = StdRng::seed_from_u64(3);
        let obs = random_obstacles(&mut rng, 20, 30.0);
        assert_eq!(obs.len(), 20);
        for p in &obs.points {
            assert!(p.x >= 0.0 && p.x < 30.0);
            assert!(p.y >= 0.0 && p.y < 30.0);
        }
    }

    #[test]
    fn test_same_seed_same_scenario() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let goal_a = random_goal(&mut a, 30.0);
        let goal_b = random_goal(&mut b, 30.0);
        assert_eq!(goal_a, goal_b);
    }
}
