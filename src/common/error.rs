//! Error types for field_planner

use std::fmt;

/// Main error type for planning operations
#[derive(Debug)]
pub enum PlannerError {
    /// A precondition on the planner inputs was violated
    InvalidInput(String),
    /// The tracer exhausted its step budget before reaching the goal
    PlanningTimeout {
        /// Number of steps consumed before giving up
        steps: usize,
    },
    /// Rendering backend failure
    Visualization(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PlannerError::PlanningTimeout { steps } => {
                write!(f, "Planning timed out after {} steps", steps)
            }
            PlannerError::Visualization(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {}

/// Result type alias for planning operations
pub type PlannerResult<T> = Result<T, PlannerError>;
