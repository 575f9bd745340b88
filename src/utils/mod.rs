//! Utility modules for field_planner

pub mod visualization;

pub use visualization::FieldView;
