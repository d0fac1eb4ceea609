//! Viewport state management for panning and zoom.

use serde::Serialize;

use super::GridLayout;
use crate::config::ViewOptions;
use crate::types::{Cell, Point, Rect, SurfaceSize};

/// Pan offset and zoom scale.
///
/// Screen point = `offset + grid point * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    /// Translation in surface pixels
    pub offset: Point,
    /// Zoom scale factor (1.0 = 100%)
    pub scale: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            offset: Point::ORIGIN,
            scale: 1.0,
        }
    }
}

impl ViewState {
    /// Convert a surface-local point to grid space.
    pub fn to_grid(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// Convert a grid-space point to surface-local coordinates.
    pub fn to_screen(&self, grid: Point) -> Point {
        Point::new(
            grid.x * self.scale + self.offset.x,
            grid.y * self.scale + self.offset.y,
        )
    }
}

/// A requested mutation of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewChange {
    /// Move the pan offset to an absolute position.
    PanTo(Point),
    /// Wheel zoom anchored at a surface-local cursor position.
    ZoomAt { cursor: Point, delta_y: f64 },
    /// New logical surface size.
    Resize(SurfaceSize),
    /// Back to the initial offset and scale.
    Reset,
}

/// View state plus the surface it is shown on and the bounds that govern it.
#[derive(Debug, Clone)]
pub struct Viewport {
    state: ViewState,
    surface: SurfaceSize,
    min_scale: f64,
    max_scale: f64,
    zoom_sensitivity: f64,
}

impl Viewport {
    pub fn new(options: &ViewOptions, surface: SurfaceSize) -> Self {
        Self {
            state: ViewState::default(),
            surface,
            min_scale: options.min_scale,
            max_scale: options.max_scale,
            zoom_sensitivity: options.zoom_sensitivity,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Apply a change; returns true if anything observable moved.
    pub fn apply(&mut self, change: ViewChange) -> bool {
        match change {
            ViewChange::PanTo(offset) => self.pan_to(offset),
            ViewChange::ZoomAt { cursor, delta_y } => self.zoom_at(cursor, delta_y),
            ViewChange::Resize(size) => self.resize(size),
            ViewChange::Reset => self.reset(),
        }
    }

    /// Set the pan offset. Scale is untouched.
    pub fn pan_to(&mut self, offset: Point) -> bool {
        if !(offset.x.is_finite() && offset.y.is_finite()) || offset == self.state.offset {
            return false;
        }
        self.state.offset = offset;
        true
    }

    /// Zoom by a wheel delta, keeping the grid point under `cursor` fixed.
    pub fn zoom_at(&mut self, cursor: Point, delta_y: f64) -> bool {
        if !delta_y.is_finite() {
            return false;
        }
        let prev = self.state.scale;
        let next = (prev - delta_y * self.zoom_sensitivity).clamp(self.min_scale, self.max_scale);
        if (next - prev).abs() <= f64::EPSILON {
            return false;
        }
        let ratio = next / prev;
        let offset = self.state.offset;
        self.state.offset = Point::new(
            cursor.x - (cursor.x - offset.x) * ratio,
            cursor.y - (cursor.y - offset.y) * ratio,
        );
        self.state.scale = next;
        true
    }

    /// Resize the surface (logical pixels).
    pub fn resize(&mut self, size: SurfaceSize) -> bool {
        if size == self.surface {
            return false;
        }
        self.surface = size;
        true
    }

    pub fn reset(&mut self) -> bool {
        let initial = ViewState::default();
        if self.state == initial {
            return false;
        }
        self.state = initial;
        true
    }

    /// Cell under a surface-local point.
    pub fn hit_test(&self, layout: &GridLayout, point: Point) -> Option<Cell> {
        layout.cell_at(self.state.to_grid(point))
    }

    /// Grid-space rectangle currently covered by the surface.
    pub fn visible_grid_rect(&self) -> Rect {
        let top_left = self.state.to_grid(Point::ORIGIN);
        Rect::new(
            top_left.x,
            top_left.y,
            self.surface.width / self.state.scale,
            self.surface.height / self.state.scale,
        )
    }
}
