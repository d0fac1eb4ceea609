//! In-memory backend that records paint calls instead of drawing.
//!
//! Used by headless viewers, tests, and benchmarks.

use crate::error::Result;
use crate::render::backend::{Painter, RenderBackend, RenderParams, Segment, Transform};
use crate::render::frame::{paint_frame, FrameStats};
use crate::types::{Rect, SurfaceSize};

/// One recorded paint call. Line batches keep only their size.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear,
    SetTransform(Transform),
    Gradient {
        rect: Rect,
        from: String,
        to: String,
    },
    Lines {
        count: usize,
        width: f64,
        color: String,
    },
    FillRect {
        rect: Rect,
        color: String,
    },
    StrokeRect {
        rect: Rect,
        width: f64,
        color: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
    width: u32,
    height: u32,
    frames: usize,
    last_stats: FrameStats,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since the last `clear`.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Number of frames rendered through `RenderBackend::render`.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(PaintOp::Clear);
    }

    fn set_transform(&mut self, transform: Transform) {
        self.ops.push(PaintOp::SetTransform(transform));
    }

    fn fill_diagonal_gradient(&mut self, rect: Rect, from: &str, to: &str) {
        self.ops.push(PaintOp::Gradient {
            rect,
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    fn stroke_segments(&mut self, segments: &[Segment], width: f64, color: &str) {
        self.ops.push(PaintOp::Lines {
            count: segments.len(),
            width,
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(PaintOp::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: &str) {
        self.ops.push(PaintOp::StrokeRect {
            rect,
            width,
            color: color.to_string(),
        });
    }
}

impl RenderBackend for RecordingPainter {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn resize(&mut self, surface: SurfaceSize, dpr: f64) {
        let (width, height) = surface.backing(dpr);
        self.width = width;
        self.height = height;
    }

    fn render(&mut self, params: &RenderParams) -> Result<()> {
        self.last_stats = paint_frame(self, params);
        self.frames += 1;
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
