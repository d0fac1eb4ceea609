//! Plain geometry values shared by layout, rendering, and input handling.

use serde::Serialize;

/// A point in either surface space or grid space, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Vector from `other` to `self`.
    pub fn delta_from(self, other: Self) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle in grid space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink each edge by `amount`.
    pub fn inset(self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            w: (self.w - amount * 2.0).max(0.0),
            h: (self.h - amount * 2.0).max(0.0),
        }
    }
}

/// Drawing surface size in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of a container's content box, raised to `min_side` on each axis.
    pub fn from_container(width: f64, height: f64, min_side: f64) -> Self {
        // NaN from a detached element falls back to the minimum.
        let clamp = |v: f64| if v.is_finite() { v.max(min_side) } else { min_side };
        Self::new(clamp(width), clamp(height))
    }

    /// Content box of an element from its client size, which includes
    /// padding but not borders or scrollbars.
    pub fn content_box(
        client_width: f64,
        client_height: f64,
        padding_x: f64,
        padding_y: f64,
    ) -> Self {
        Self::new(
            (client_width - padding_x).max(0.0),
            (client_height - padding_y).max(0.0),
        )
    }

    /// Backing buffer size in physical pixels for the given device pixel ratio.
    /// The casts are safe: values are rounded and clamped to `u32` range first.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing(self, dpr: f64) -> (u32, u32) {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let px = |v: f64| (v * dpr).round().clamp(1.0, f64::from(u32::MAX)) as u32;
        (px(self.width), px(self.height))
    }
}
