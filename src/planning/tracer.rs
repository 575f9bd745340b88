//! Greedy descent over a materialized potential grid
//!
//! The tracer walks the steepest locally-descending neighbor until it
//! gets within one resolution of the goal. It passes through three
//! phases: searching (plain descent), stuck (oscillation observed,
//! recovery escalating), and goal reached. There is no backtracking; a
//! bad field is caught only by the step budget.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{GridCell, Path2D, PlannerError, PlannerObserver, PlannerResult, Point2D};
use crate::field::PotentialGrid;
use crate::planning::oscillation::OscillationDetector;

/// Fixed motion set: axis moves, diagonals, and the eight knight-like
/// offsets at distance sqrt(5), giving finer directional resolution than
/// a plain 8-neighborhood. Candidates are always evaluated in this order.
pub fn motion_model() -> Vec<(i32, i32)> {
    vec![
        (1, 0),
        (0, 1),
        (-1, 0),
        (0, -1),
        (-1, -1),
        (-1, 1),
        (1, -1),
        (1, 1),
        (2, 1),
        (1, 2),
        (-2, -1),
        (-1, -2),
        (2, -1),
        (1, -2),
        (-2, 1),
        (-1, 2),
    ]
}

/// Tracer parameters
#[derive(Debug, Clone)]
pub struct TracerConfig {
    /// Hard step budget; exceeding it aborts with `PlanningTimeout`
    pub max_steps: usize,
    /// Length of the recent-cell history
    pub oscillation_window: usize,
    /// Detections tolerated before the random perturbation kicks in
    pub oscillation_limit: usize,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            oscillation_window: 3,
            oscillation_limit: 3,
        }
    }
}

/// Walks the potential grid from start toward the goal
pub struct PathTracer {
    config: TracerConfig,
    rng: StdRng,
}

impl PathTracer {
    pub fn new(config: TracerConfig) -> Self {
        PathTracer {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Tracer with a reproducible perturbation source
    pub fn with_seed(config: TracerConfig, seed: u64) -> Self {
        PathTracer {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Descend `grid` from `start` until within one grid resolution of
    /// `goal`. The returned path begins at `start`; when start and goal
    /// already coincide it contains exactly that one point.
    pub fn trace(
        &mut self,
        grid: &PotentialGrid,
        start: Point2D,
        goal: Point2D,
        observer: &mut dyn PlannerObserver,
    ) -> PlannerResult<Path2D> {
        let resolution = grid.index().resolution();
        let motion = motion_model();
        let mut detector = OscillationDetector::new(self.config.oscillation_window);

        let mut cell = grid.index().to_cell(start);
        let mut d = start.distance(&goal);
        let mut path = Path2D::from_points(vec![start]);
        let mut oscillations = 0usize;
        let mut steps = 0usize;

        while d >= resolution {
            steps += 1;
            if steps > self.config.max_steps {
                return Err(PlannerError::PlanningTimeout {
                    steps: self.config.max_steps,
                });
            }

            let mut min_p = f64::INFINITY;
            let mut next = GridCell::new(-1, -1);
            for &(dx, dy) in &motion {
                let candidate = cell.offset(dx, dy);
                let p = match grid.value(candidate) {
                    Some(p) => p,
                    None => {
                        observer.on_boundary_hit(candidate);
                        f64::INFINITY
                    }
                };
                // strict comparison: ties keep the earlier motion entry,
                // and an all-infinite neighborhood leaves the sentinel
                if p < min_p {
                    min_p = p;
                    next = candidate;
                }
            }

            cell = next;
            let position = grid.index().to_world(cell);
            d = position.distance(&goal);
            path.push(position);

            if detector.check(cell) {
                observer.on_oscillation(cell);
                oscillations += 1;
                if oscillations > self.config.oscillation_limit {
                    // escalated recovery: one unconditional random offset,
                    // not re-validated and not recorded on the path
                    let (dx, dy) = motion[self.rng.gen_range(0..motion.len())];
                    cell = cell.offset(dx, dy);
                }
                continue;
            }

            observer.on_step(cell, position);
        }

        let reached = path.last().unwrap_or(start);
        observer.on_goal_reached(reached, steps);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GridIndex;
    use nalgebra::DMatrix;

    struct CountingObserver {
        steps: usize,
        boundary_hits: usize,
        oscillations: usize,
        goal_reached: bool,
    }

    impl CountingObserver {
        fn new() -> Self {
            CountingObserver {
                steps: 0,
                boundary_hits: 0,
                oscillations: 0,
                goal_reached: false,
            }
        }
    }

    impl PlannerObserver for CountingObserver {
        fn on_step(&mut self, _cell: GridCell, _position: Point2D) {
            self.steps += 1;
        }

        fn on_boundary_hit(&mut self, _cell: GridCell) {
            self.boundary_hits += 1;
        }

        fn on_oscillation(&mut self, _cell: GridCell) {
            self.oscillations += 1;
        }

        fn on_goal_reached(&mut self, _position: Point2D, _steps: usize) {
            self.goal_reached = true;
        }
    }

    fn uniform_grid(width: usize, fill: f64) -> PotentialGrid {
        let index = GridIndex::new(0.0, 0.0, width as f64, width as f64, 1.0);
        PotentialGrid::from_parts(DMatrix::from_element(width, width, fill), index)
    }

    #[test]
    fn test_motion_model_has_sixteen_entries() {
        let motion = motion_model();
        assert_eq!(motion.len(), 16);
        assert_eq!(motion[0], (1, 0));
        assert_eq!(motion[8], (2, 1));
    }

    #[test]
    fn test_start_at_goal_returns_single_point() {
        let grid = uniform_grid(6, 0.0);
        let start = Point2D::new(3.0, 3.0);
        let mut observer = CountingObserver::new();
        let mut tracer = PathTracer::with_seed(TracerConfig::default(), 0);

        let path = tracer.trace(&grid, start, start, &mut observer).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.points[0], start);
        assert!(observer.goal_reached);
        assert_eq!(observer.steps, 0);
    }

    #[test]
    fn test_equal_potential_ties_pick_first_motion_entry() {
        let index = GridIndex::new(0.0, 0.0, 6.0, 6.0, 1.0);
        let mut cells = DMatrix::from_element(6, 6, 10.0);
        // (1,0) and (0,1) offsets of the start cell share the minimum
        cells[(3, 2)] = 1.0;
        cells[(2, 3)] = 1.0;
        let grid = PotentialGrid::from_parts(cells, index);

        let start = Point2D::new(2.0, 2.0);
        let goal = Point2D::new(3.0, 2.0);
        let mut observer = CountingObserver::new();
        let mut tracer = PathTracer::with_seed(TracerConfig::default(), 0);

        let path = tracer.trace(&grid, start, goal, &mut observer).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.points[1], Point2D::new(3.0, 2.0));
    }

    #[test]
    fn test_step_budget_exhaustion_times_out() {
        let grid = uniform_grid(10, 0.0);
        let start = Point2D::new(5.0, 5.0);
        let goal = Point2D::new(100.0, 100.0);
        let mut observer = CountingObserver::new();
        let config = TracerConfig {
            max_steps: 5,
            ..TracerConfig::default()
        };
        let mut tracer = PathTracer::with_seed(config, 0);

        let result = tracer.trace(&grid, start, goal, &mut observer);
        assert!(matches!(
            result,
            Err(PlannerError::PlanningTimeout { steps: 5 })
        ));
        assert!(!observer.goal_reached);
    }

    #[test]
    fn test_boundary_candidates_are_reported_not_chosen() {
        // bowl centered on the goal cell; starting on the left edge makes
        // several candidates probe past the boundary
        let index = GridIndex::new(0.0, 0.0, 5.0, 5.0, 1.0);
        let cells = DMatrix::from_fn(5, 5, |ix, iy| {
            (ix as f64 - 4.0).hypot(iy as f64 - 2.0)
        });
        let grid = PotentialGrid::from_parts(cells, index);

        let start = Point2D::new(0.0, 2.0);
        let goal = Point2D::new(4.0, 2.0);
        let mut observer = CountingObserver::new();
        let mut tracer = PathTracer::with_seed(TracerConfig::default(), 0);

        let path = tracer.trace(&grid, start, goal, &mut observer).unwrap();
        assert!(observer.boundary_hits > 0);
        assert_eq!(observer.oscillations, 0);
        assert_eq!(path.last().unwrap(), Point2D::new(4.0, 2.0));
        for p in &path.points {
            assert!(p.x >= grid.index().min_x() && p.x <= grid.index().max_x());
        }
    }
}
