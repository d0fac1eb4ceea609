//! Data types for the grid viewer.

mod cell;
mod geometry;

pub use cell::*;
pub use geometry::*;
