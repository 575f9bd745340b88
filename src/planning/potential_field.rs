//! Potential-field planner facade
//!
//! Wires the field model, grid, and tracer together behind the
//! `PathPlanner` interface. Each planning invocation builds its own
//! grid, history, and path; nothing is shared across runs.

use crate::common::{
    NullObserver, Obstacles, Path2D, PathPlanner, PlannerError, PlannerObserver, PlannerResult,
    Point2D,
};
use crate::field::{FieldConfig, FieldModel, LinearScan, NearestNeighbor, PotentialGrid};
use crate::planning::tracer::{PathTracer, TracerConfig};

/// Artificial potential field planner over point obstacles.
///
/// Greedy local descent: the result is not globally optimal and a local
/// minimum surrounded by a potential wall is only caught by the tracer's
/// step budget.
pub struct PotentialFieldPlanner<N: NearestNeighbor = LinearScan> {
    resolution: f64,
    robot_radius: f64,
    field_config: FieldConfig,
    tracer_config: TracerConfig,
    obstacles: N,
    seed: Option<u64>,
}

impl PotentialFieldPlanner<LinearScan> {
    /// Planner with the default exhaustive obstacle search
    pub fn new(obstacles: &Obstacles, resolution: f64, robot_radius: f64) -> PlannerResult<Self> {
        let strategy = LinearScan::new(obstacles)?;
        Self::with_strategy(strategy, resolution, robot_radius)
    }
}

impl<N: NearestNeighbor> PotentialFieldPlanner<N> {
    /// Planner with a caller-supplied nearest-obstacle strategy
    pub fn with_strategy(obstacles: N, resolution: f64, robot_radius: f64) -> PlannerResult<Self> {
        if !(resolution > 0.0) {
            return Err(PlannerError::InvalidInput(
                "resolution must be positive".to_string(),
            ));
        }
        if robot_radius < 0.0 {
            return Err(PlannerError::InvalidInput(
                "robot radius must be non-negative".to_string(),
            ));
        }
        Ok(PotentialFieldPlanner {
            resolution,
            robot_radius,
            field_config: FieldConfig::default(),
            tracer_config: TracerConfig::default(),
            obstacles,
            seed: None,
        })
    }

    pub fn with_field_config(mut self, config: FieldConfig) -> Self {
        self.field_config = config;
        self
    }

    pub fn with_tracer_config(mut self, config: TracerConfig) -> Self {
        self.tracer_config = config;
        self
    }

    /// Seed the perturbation source for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Materialize the potential grid for a start/goal pair
    pub fn build_grid(&self, start: Point2D, goal: Point2D) -> PotentialGrid {
        let field = FieldModel::new(
            goal,
            &self.obstacles,
            self.robot_radius,
            self.field_config.clone(),
        );
        field.build_grid(start, self.resolution)
    }

    /// Plan while delivering per-step diagnostics to `observer`
    pub fn plan_with_observer(
        &self,
        start: Point2D,
        goal: Point2D,
        observer: &mut dyn PlannerObserver,
    ) -> PlannerResult<Path2D> {
        let grid = self.build_grid(start, goal);
        let mut tracer = match self.seed {
            Some(seed) => PathTracer::with_seed(self.tracer_config.clone(), seed),
            None => PathTracer::new(self.tracer_config.clone()),
        };
        tracer.trace(&grid, start, goal, observer)
    }
}

impl<N: NearestNeighbor> PathPlanner for PotentialFieldPlanner<N> {
    fn plan(&self, start: Point2D, goal: Point2D) -> Result<Path2D, PlannerError> {
        self.plan_with_observer(start, goal, &mut NullObserver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::AxisSortedIndex;

    fn reference_obstacles() -> Obstacles {
        Obstacles::from_xy(
            &[15.0, 5.0, 20.0, 25.0, 21.0],
            &[25.0, 15.0, 26.0, 25.0, 23.0],
        )
    }

    fn reference_planner() -> PotentialFieldPlanner {
        PotentialFieldPlanner::new(&reference_obstacles(), 0.5, 5.0)
            .unwrap()
            .with_seed(42)
    }

    #[test]
    fn test_empty_obstacles_rejected() {
        let result = PotentialFieldPlanner::new(&Obstacles::default(), 0.5, 5.0);
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_non_positive_resolution_rejected() {
        assert!(PotentialFieldPlanner::new(&reference_obstacles(), 0.0, 5.0).is_err());
        assert!(PotentialFieldPlanner::new(&reference_obstacles(), -0.5, 5.0).is_err());
    }

    #[test]
    fn test_negative_robot_radius_rejected() {
        assert!(PotentialFieldPlanner::new(&reference_obstacles(), 0.5, -1.0).is_err());
    }

    #[test]
    fn test_start_equal_goal_yields_single_point_path() {
        let planner = reference_planner();
        let point = Point2D::new(30.0, 30.0);
        let path = planner.plan(point, point).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.points[0], point);
    }

    #[test]
    fn test_reference_scenario_reaches_goal() {
        let planner = reference_planner();
        let start = Point2D::new(0.0, 10.0);
        let goal = Point2D::new(30.0, 30.0);

        let path = planner.plan(start, goal).unwrap();
        assert!(path.len() >= 2);
        assert_eq!(path.points[0], start);
        assert!(path.last().unwrap().distance(&goal) < 0.5);

        // every point stays inside the materialized grid
        let index_owner = planner.build_grid(start, goal);
        let index = index_owner.index();
        for p in &path.points {
            assert!(p.x >= index.min_x() && p.x <= index.max_x());
            assert!(p.y >= index.min_y() && p.y <= index.max_y());
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let start = Point2D::new(0.0, 10.0);
        let goal = Point2D::new(30.0, 30.0);
        let first = reference_planner().plan(start, goal).unwrap();
        let second = reference_planner().plan(start, goal).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.points.iter().zip(second.points.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_tiny_step_budget_times_out() {
        let planner = PotentialFieldPlanner::new(&reference_obstacles(), 0.5, 5.0)
            .unwrap()
            .with_seed(42)
            .with_tracer_config(TracerConfig {
                max_steps: 3,
                ..TracerConfig::default()
            });
        let result = planner.plan(Point2D::new(0.0, 10.0), Point2D::new(30.0, 30.0));
        assert!(matches!(
            result,
            Err(PlannerError::PlanningTimeout { steps: 3 })
        ));
    }

    #[test]
    fn test_axis_sorted_strategy_plans_too() {
        let strategy = AxisSortedIndex::new(&reference_obstacles()).unwrap();
        let planner = PotentialFieldPlanner::with_strategy(strategy, 0.5, 5.0)
            .unwrap()
            .with_seed(42);
        let goal = Point2D::new(30.0, 30.0);
        let path = planner.plan(Point2D::new(0.0, 10.0), goal).unwrap();
        assert!(path.last().unwrap().distance(&goal) < 0.5);
    }
}
