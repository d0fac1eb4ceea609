//! Backend-independent frame painting.
//!
//! Each frame repaints everything: background, gridlines, hover highlight,
//! selection outline. The math lives here so it stays testable without a
//! canvas.

use crate::layout::{GridLayout, Viewport};
use crate::render::backend::{Painter, RenderParams, Segment, Transform};
use crate::types::{Cell, Point, Rect};

/// Gridline width in surface pixels, independent of zoom.
const GRID_LINE_WIDTH: f64 = 1.0;
/// Selection outline width in surface pixels, independent of zoom.
const SELECTION_LINE_WIDTH: f64 = 2.0;

/// Counters describing what a frame drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub gridlines: usize,
    pub hover: bool,
    pub selection: bool,
}

/// Paint one full frame.
pub fn paint_frame<P: Painter + ?Sized>(painter: &mut P, params: &RenderParams) -> FrameStats {
    let layout = params.layout;
    let view = params.viewport.state();
    let scale = view.scale;

    painter.clear();
    painter.set_transform(Transform::grid_space(params.dpr, view.offset, scale));

    painter.fill_diagonal_gradient(
        layout.extent(),
        &params.theme.background_start,
        &params.theme.background_end,
    );

    let segments = gridline_segments(layout, params.viewport, params.cull_gridlines);
    if !segments.is_empty() {
        painter.stroke_segments(&segments, GRID_LINE_WIDTH / scale, &params.theme.grid_line);
    }

    let mut stats = FrameStats {
        gridlines: segments.len(),
        ..FrameStats::default()
    };

    if let Some(cell) = params.hovered.filter(|c| layout.contains(*c)) {
        painter.fill_rect(layout.cell_rect(cell), &params.theme.hover_fill);
        stats.hover = true;
    }

    if let Some(cell) = params.selected.filter(|c| layout.contains(*c)) {
        let width = SELECTION_LINE_WIDTH / scale;
        painter.stroke_rect(
            selection_outline(layout, cell, scale),
            width,
            &params.theme.selection,
        );
        stats.selection = true;
    }

    stats
}

/// Rectangle stroked around a selected cell: inset by half the line width so
/// the stroke stays inside the cell.
pub fn selection_outline(layout: &GridLayout, cell: Cell, scale: f64) -> Rect {
    layout
        .cell_rect(cell)
        .inset(SELECTION_LINE_WIDTH / scale / 2.0)
}

/// Horizontal lines at every row boundary and vertical lines at every column
/// boundary. With `cull` set, only boundaries inside the visible surface are
/// emitted, clipped to it.
pub fn gridline_segments(layout: &GridLayout, viewport: &Viewport, cull: bool) -> Vec<Segment> {
    let width = layout.total_width();
    let height = layout.total_height();
    let cs = layout.cell_size;

    let (rows, cols, x_span, y_span) = if cull {
        let visible = viewport.visible_grid_rect();
        let rows = layout.row_boundaries_within(visible.y, visible.y + visible.h);
        let cols = layout.col_boundaries_within(visible.x, visible.x + visible.w);
        let x_span = (visible.x.max(0.0), (visible.x + visible.w).min(width));
        let y_span = (visible.y.max(0.0), (visible.y + visible.h).min(height));
        (rows, cols, x_span, y_span)
    } else {
        (
            Some((0, layout.rows)),
            Some((0, layout.cols)),
            (0.0, width),
            (0.0, height),
        )
    };

    let mut segments = Vec::new();
    if x_span.0 < x_span.1 {
        if let Some((first, last)) = rows {
            segments.extend((first..=last).map(|r| {
                let y = f64::from(r) * cs;
                Segment::new(Point::new(x_span.0, y), Point::new(x_span.1, y))
            }));
        }
    }
    if y_span.0 < y_span.1 {
        if let Some((first, last)) = cols {
            segments.extend((first..=last).map(|c| {
                let x = f64::from(c) * cs;
                Segment::new(Point::new(x, y_span.0), Point::new(x, y_span.1))
            }));
        }
    }
    segments
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::ViewOptions;
    use crate::render::colors::ResolvedTheme;
    use crate::render::recorder::{PaintOp, RecordingPainter};
    use crate::types::SurfaceSize;

    fn viewport(w: f64, h: f64) -> Viewport {
        Viewport::new(&ViewOptions::default(), SurfaceSize::new(w, h))
    }

    #[test]
    fn full_extent_gridlines_without_culling() {
        let layout = GridLayout::new(200, 150, 32.0);
        let segments = gridline_segments(&layout, &viewport(800.0, 600.0), false);
        assert_eq!(segments.len(), 201 + 151);
        let last_h = segments[200];
        assert_eq!(last_h.from, Point::new(0.0, 6400.0));
        assert_eq!(last_h.to, Point::new(4800.0, 6400.0));
    }

    #[test]
    fn culling_limits_to_visible_boundaries() {
        let layout = GridLayout::new(200, 200, 32.0);
        let segments = gridline_segments(&layout, &viewport(320.0, 320.0), true);
        // Boundaries 0..=10 on each axis.
        assert_eq!(segments.len(), 22);
        assert!(segments.iter().all(|s| s.to.x <= 320.0 && s.to.y <= 320.0));
    }

    #[test]
    fn culling_off_grid_draws_nothing() {
        let layout = GridLayout::new(4, 4, 10.0);
        let mut vp = viewport(200.0, 200.0);
        vp.pan_to(Point::new(-1000.0, -1000.0));
        assert!(gridline_segments(&layout, &vp, true).is_empty());
    }

    #[test]
    fn selection_outline_stays_inside_cell() {
        let layout = GridLayout::new(10, 10, 32.0);
        let r = selection_outline(&layout, Cell::new(3, 2), 2.0);
        assert_eq!(r, Rect::new(64.5, 96.5, 31.0, 31.0));
    }

    #[test]
    fn frame_paints_in_order() {
        let layout = GridLayout::new(3, 4, 10.0);
        let mut vp = viewport(400.0, 300.0);
        vp.pan_to(Point::new(5.0, 7.0));
        let theme = ResolvedTheme::default();
        let mut painter = RecordingPainter::new();
        let stats = paint_frame(
            &mut painter,
            &RenderParams {
                layout: &layout,
                viewport: &vp,
                dpr: 2.0,
                hovered: Some(Cell::new(1, 1)),
                selected: Some(Cell::new(2, 3)),
                theme: &theme,
                cull_gridlines: false,
            },
        );
        assert_eq!(
            stats,
            FrameStats {
                gridlines: 4 + 5,
                hover: true,
                selection: true
            }
        );
        let ops = painter.ops();
        assert_eq!(ops[0], PaintOp::Clear);
        assert_eq!(
            ops[1],
            PaintOp::SetTransform(Transform {
                a: 2.0,
                e: 10.0,
                f: 14.0
            })
        );
        assert!(matches!(ops[2], PaintOp::Gradient { rect, .. } if rect == Rect::new(0.0, 0.0, 40.0, 30.0)));
        assert!(matches!(ops[3], PaintOp::Lines { count: 9, width, .. } if width == 1.0));
        assert!(matches!(ops[4], PaintOp::FillRect { rect, .. } if rect == Rect::new(10.0, 10.0, 10.0, 10.0)));
        assert!(matches!(ops[5], PaintOp::StrokeRect { width, .. } if width == 2.0));
        assert_eq!(ops.len(), 6);
    }

    #[test]
    fn line_widths_shrink_with_zoom() {
        let layout = GridLayout::new(2, 2, 10.0);
        let mut vp = viewport(400.0, 300.0);
        vp.zoom_at(Point::ORIGIN, -3000.0);
        let theme = ResolvedTheme::default();
        let mut painter = RecordingPainter::new();
        paint_frame(
            &mut painter,
            &RenderParams {
                layout: &layout,
                viewport: &vp,
                dpr: 1.0,
                hovered: None,
                selected: Some(Cell::new(0, 0)),
                theme: &theme,
                cull_gridlines: false,
            },
        );
        let widths: Vec<f64> = painter
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Lines { width, .. } | PaintOp::StrokeRect { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![0.25, 0.5]);
    }

    #[test]
    fn out_of_range_cells_are_not_drawn() {
        let layout = GridLayout::new(2, 2, 10.0);
        let vp = viewport(400.0, 300.0);
        let theme = ResolvedTheme::default();
        let mut painter = RecordingPainter::new();
        let stats = paint_frame(
            &mut painter,
            &RenderParams {
                layout: &layout,
                viewport: &vp,
                dpr: 1.0,
                hovered: Some(Cell::new(5, 0)),
                selected: Some(Cell::new(0, 9)),
                theme: &theme,
                cull_gridlines: false,
            },
        );
        assert!(!stats.hover && !stats.selection);
    }
}
