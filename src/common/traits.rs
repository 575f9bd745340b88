//! Interfaces between the planner core and its collaborators

use crate::common::error::PlannerError;
use crate::common::types::{GridCell, Path2D, Point2D};

/// Trait for path planning algorithms
pub trait PathPlanner {
    /// Plan a path from start to goal
    fn plan(&self, start: Point2D, goal: Point2D) -> Result<Path2D, PlannerError>;
}

/// Diagnostics emitted by the path tracer while it descends the field.
///
/// Every method defaults to a no-op, so the core runs without any
/// subscriber and carries no dependency on a rendering facility.
pub trait PlannerObserver {
    /// A potential-driven move landed on `cell`
    fn on_step(&mut self, _cell: GridCell, _position: Point2D) {}

    /// A candidate neighbor fell outside the grid
    fn on_boundary_hit(&mut self, _cell: GridCell) {}

    /// The recent-cell history contained a revisit
    fn on_oscillation(&mut self, _cell: GridCell) {}

    /// Normal termination within one resolution of the goal
    fn on_goal_reached(&mut self, _position: Point2D, _steps: usize) {}
}

/// Observer that ignores every event
#[derive(Debug, Default)]
pub struct NullObserver;

impl PlannerObserver for NullObserver {}
