// Planning: oscillation detection, greedy descent, planner facade

pub mod oscillation;
pub mod tracer;
pub mod potential_field;

pub use oscillation::*;
pub use tracer::*;
pub use potential_field::*;
