//! field_planner - artificial potential field path planning
//!
//! Builds a discretized scalar potential from point obstacles (a conic
//! attractive well toward the goal plus a repulsive barrier around each
//! obstacle) and greedily descends it from start to goal, with
//! short-horizon oscillation detection and randomized recovery.

// Core modules
pub mod common;
pub mod utils;

// Planner modules
pub mod field;
pub mod planning;
pub mod scenario;

// Re-export common types for convenience
pub use common::{GridCell, Obstacles, Path2D, Point2D};
pub use common::{NullObserver, PathPlanner, PlannerObserver};
pub use common::{PlannerError, PlannerResult};
pub use field::{AxisSortedIndex, FieldConfig, FieldModel, GridIndex, LinearScan, NearestNeighbor, PotentialGrid};
pub use planning::{motion_model, OscillationDetector, PathTracer, PotentialFieldPlanner, TracerConfig};
