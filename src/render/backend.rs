//! Render backend traits.
//!
//! `Painter` is the small set of drawing primitives the frame routine needs;
//! `RenderBackend` is the surface-level lifecycle (init, resize, render).
//! Canvas 2D implements both for the browser, the recorder implements both
//! for tests and benchmarks.

use crate::error::{GridViewError, Result};
use crate::layout::{GridLayout, Viewport};
use crate::render::colors::ResolvedTheme;
use crate::types::{Cell, Point, Rect, SurfaceSize};

/// Uniform scale plus translation, in backing-buffer pixels.
///
/// Maps a point `p` to `(a * p.x + e, a * p.y + f)`; matches the Canvas
/// `setTransform(a, 0, 0, a, e, f)` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// `scale(dpr)` then `translate(offset)` then `scale(scale)`.
    pub fn grid_space(dpr: f64, offset: Point, scale: f64) -> Self {
        Self {
            a: dpr * scale,
            e: dpr * offset.x,
            f: dpr * offset.y,
        }
    }
}

/// Unwrap a `getContext(kind)` lookup. A throwing call and a `null` result
/// are both render errors.
pub fn require_context<T, E>(kind: &str, lookup: std::result::Result<Option<T>, E>) -> Result<T> {
    match lookup {
        Ok(Some(ctx)) => Ok(ctx),
        Ok(None) => Err(GridViewError::Render(format!("No {kind} context available"))),
        Err(_) => Err(GridViewError::Render(format!("Failed to get {kind} context"))),
    }
}

/// A straight line between two grid-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Drawing primitives used by the frame painter.
pub trait Painter {
    /// Reset to the identity transform and clear the whole backing buffer.
    fn clear(&mut self);

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Transform);

    /// Fill `rect` with a gradient running from its top-left to bottom-right corner.
    fn fill_diagonal_gradient(&mut self, rect: Rect, from: &str, to: &str);

    /// Stroke all segments as one path.
    fn stroke_segments(&mut self, segments: &[Segment], width: f64, color: &str);

    fn fill_rect(&mut self, rect: Rect, color: &str);

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: &str);
}

/// Everything one frame depends on.
pub struct RenderParams<'a> {
    pub layout: &'a GridLayout,
    pub viewport: &'a Viewport,
    pub dpr: f64,
    pub hovered: Option<Cell>,
    pub selected: Option<Cell>,
    pub theme: &'a ResolvedTheme,
    /// Skip gridlines outside the visible surface.
    pub cull_gridlines: bool,
}

/// Trait for render backends
pub trait RenderBackend {
    /// Initialize the backend
    fn init(&mut self) -> Result<()>;

    /// Resize the render surface (logical size plus device pixel ratio)
    fn resize(&mut self, surface: SurfaceSize, dpr: f64);

    /// Render a frame with the given parameters
    fn render(&mut self, params: &RenderParams) -> Result<()>;

    /// Backing buffer width in physical pixels
    fn width(&self) -> u32;

    /// Backing buffer height in physical pixels
    fn height(&self) -> u32;
}
