//! Nearest-obstacle search strategies
//!
//! The repulsive term only ever needs the single closest obstacle, so the
//! search is exposed as a strategy: the exhaustive scan is the default and
//! an x-sorted index is available for larger obstacle counts.

use crate::common::{Obstacles, PlannerError, PlannerResult, Point2D};

/// Strategy for finding the obstacle closest to a probe position
pub trait NearestNeighbor {
    /// The indexed obstacle set, in caller order
    fn points(&self) -> &[Point2D];

    /// Index and distance of the nearest obstacle to `(x, y)`
    fn nearest(&self, x: f64, y: f64) -> (usize, f64);
}

impl<'a, N: NearestNeighbor + ?Sized> NearestNeighbor for &'a N {
    fn points(&self) -> &[Point2D] {
        (**self).points()
    }

    fn nearest(&self, x: f64, y: f64) -> (usize, f64) {
        (**self).nearest(x, y)
    }
}

fn reject_empty(obstacles: &Obstacles) -> PlannerResult<()> {
    if obstacles.is_empty() {
        return Err(PlannerError::InvalidInput(
            "obstacle set must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Exhaustive O(n) scan over the obstacle set.
///
/// The comparison is deliberately non-strict: an obstacle at exactly the
/// current minimum distance replaces the earlier match, so the last
/// equal-distance obstacle wins the tie.
#[derive(Debug, Clone)]
pub struct LinearScan {
    points: Vec<Point2D>,
}

impl LinearScan {
    pub fn new(obstacles: &Obstacles) -> PlannerResult<Self> {
        reject_empty(obstacles)?;
        Ok(LinearScan {
            points: obstacles.points.clone(),
        })
    }
}

impl NearestNeighbor for LinearScan {
    fn points(&self) -> &[Point2D] {
        &self.points
    }

    fn nearest(&self, x: f64, y: f64) -> (usize, f64) {
        let mut dmin = f64::INFINITY;
        let mut minid = 0;

        for (i, p) in self.points.iter().enumerate() {
            let d = (x - p.x).hypot(y - p.y);
            if dmin >= d {
                dmin = d;
                minid = i;
            }
        }

        (minid, dmin)
    }
}

/// Obstacles sorted by x coordinate; candidates are visited outward from
/// the probe's x position and pruned once their x distance alone exceeds
/// the best match. Equal-distance ties follow visit order and are not
/// guaranteed to match [`LinearScan`].
#[derive(Debug, Clone)]
pub struct AxisSortedIndex {
    points: Vec<Point2D>,
    order: Vec<usize>,
}

impl AxisSortedIndex {
    pub fn new(obstacles: &Obstacles) -> PlannerResult<Self> {
        reject_empty(obstacles)?;
        let points = obstacles.points.clone();
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.sort_by(|&a, &b| {
            points[a]
                .x
                .partial_cmp(&points[b].x)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(AxisSortedIndex { points, order })
    }
}

impl NearestNeighbor for AxisSortedIndex {
    fn points(&self) -> &[Point2D] {
        &self.points
    }

    fn nearest(&self, x: f64, y: f64) -> (usize, f64) {
        let n = self.order.len();
        let pos = self.order.partition_point(|&i| self.points[i].x < x);

        let mut best_d = f64::INFINITY;
        let mut best_i = self.order[if pos < n { pos } else { n - 1 }];
        // lo walks left from the probe, hi walks right
        let mut lo = pos;
        let mut hi = pos;

        loop {
            let left_dx = if lo > 0 {
                x - self.points[self.order[lo - 1]].x
            } else {
                f64::INFINITY
            };
            let right_dx = if hi < n {
                self.points[self.order[hi]].x - x
            } else {
                f64::INFINITY
            };
            // no remaining candidate can beat best_d on x distance alone
            if left_dx.min(right_dx) >= best_d {
                break;
            }

            let idx = if left_dx <= right_dx {
                lo -= 1;
                self.order[lo]
            } else {
                let idx = self.order[hi];
                hi += 1;
                idx
            };
            let p = self.points[idx];
            let d = (x - p.x).hypot(y - p.y);
            if d < best_d {
                best_d = d;
                best_i = idx;
            }
        }

        (best_i, best_d)
    }
}
