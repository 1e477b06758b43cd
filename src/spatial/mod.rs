//! Spatial data structures for the symbol grid

/// Symbol grid and cell coordinates
pub mod grid;

pub use grid::{Coordinate, Grid};
