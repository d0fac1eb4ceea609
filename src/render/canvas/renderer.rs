//! Canvas 2D rendering backend.
//!
//! Implements `Painter` and `RenderBackend` using the HTML Canvas 2D API via
//! web-sys.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{GridViewError, Result};
use crate::render::backend::{
    require_context, Painter, RenderBackend, RenderParams, Segment, Transform,
};
use crate::render::frame::paint_frame;
use crate::types::{Rect, SurfaceSize};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    /// Create a new Canvas renderer from an HtmlCanvasElement
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = require_context("2d", canvas.get_context("2d"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                GridViewError::Render("Failed to cast to CanvasRenderingContext2d".into())
            })?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
        })
    }

    /// Set the CSS dimensions of the canvas element (logical pixels).
    pub fn set_canvas_css_size(&self, css_w: f64, css_h: f64) {
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", css_w));
        let _ = style.set_property("height", &format!("{}px", css_h));
    }
}

impl Painter for CanvasRenderer {
    fn clear(&mut self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
    }

    fn set_transform(&mut self, t: Transform) {
        let _ = self.ctx.set_transform(t.a, 0.0, 0.0, t.a, t.e, t.f);
    }

    fn fill_diagonal_gradient(&mut self, rect: Rect, from: &str, to: &str) {
        let gradient = self
            .ctx
            .create_linear_gradient(rect.x, rect.y, rect.x + rect.w, rect.y + rect.h);
        // An unparseable stop leaves the gradient transparent; fall back to a flat fill.
        if gradient.add_color_stop(0.0, from).is_err() || gradient.add_color_stop(1.0, to).is_err()
        {
            self.ctx.set_fill_style_str(from);
        } else {
            self.ctx.set_fill_style_canvas_gradient(&gradient);
        }
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn stroke_segments(&mut self, segments: &[Segment], width: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        for s in segments {
            self.ctx.move_to(s.from.x, s.from.y);
            self.ctx.line_to(s.to.x, s.to.y);
        }
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
    }
}

impl RenderBackend for CanvasRenderer {
    fn init(&mut self) -> Result<()> {
        // Canvas 2D doesn't need explicit initialization
        Ok(())
    }

    fn resize(&mut self, surface: SurfaceSize, dpr: f64) {
        let (width, height) = surface.backing(dpr);
        self.width = width;
        self.height = height;

        // Buffer in physical pixels, element in logical pixels.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.set_canvas_css_size(surface.width, surface.height);

        tracing::debug!(
            width = surface.width,
            height = surface.height,
            dpr,
            backing_width = width,
            backing_height = height,
            "canvas resized"
        );
    }

    fn render(&mut self, params: &RenderParams) -> Result<()> {
        let stats = paint_frame(self, params);
        tracing::trace!(gridlines = stats.gridlines, "frame painted");
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
