//! Rendering engine with pluggable backends.
//!
//! This module provides:
//! - Backend-agnostic painting primitives and render parameters
//! - The full-frame painter (background, gridlines, hover, selection)
//! - Canvas 2D backend (wasm32 only)
//! - A recording backend for headless use
//! - Color resolution utilities

pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod colors;
pub mod frame;
pub mod recorder;

pub use backend::{Painter, RenderBackend, RenderParams, Segment, Transform};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use colors::{parse_color_rgba, CssColor, ResolvedTheme, Rgb};
pub use frame::{gridline_segments, paint_frame, FrameStats};
pub use recorder::{PaintOp, RecordingPainter};
