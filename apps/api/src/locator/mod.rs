// Source location from three distance readings.
// Pure and stateless: no I/O, no locks. Callers own any fallback policy.

pub mod geometry;
pub mod solver;

pub use geometry::{Point, Reading};
pub use solver::{solve, LocateError};
