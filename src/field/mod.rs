// Potential field model: grid transforms, obstacle search, field evaluation

pub mod grid;
pub mod nearest;
pub mod potential;

pub use grid::*;
pub use nearest::*;
pub use potential::*;
