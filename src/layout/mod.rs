//! Grid geometry and viewport management.
//!
//! This module handles:
//! - Cell positions and hit testing for a uniform grid
//! - Viewport state (pan offset, zoom scale, surface size)
//! - Grid/screen coordinate conversion

mod grid_layout;
mod viewport;

pub use grid_layout::GridLayout;
pub use viewport::{ViewChange, ViewState, Viewport};
