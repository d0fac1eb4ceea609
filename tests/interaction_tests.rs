//! End-to-end interaction tests against a headless `GridView`.
//!
//! Each test drives the viewer the way the DOM listeners do (surface-local
//! pointer positions, raw wheel deltas) and checks view state, host
//! callbacks, and repaints.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{standard_view, view_with};
use gridview::layout::ViewState;
use gridview::render::RenderBackend;
use gridview::types::{Cell, Point, SurfaceSize};
use gridview::viewer::{DOM_DELTA_LINE, DOM_DELTA_PIXEL};
use gridview::GridConfig;

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn test_click_selects_cell_and_reports_once() {
    let (mut view, log) = standard_view();
    view.on_click(64.0, 96.0);

    assert_eq!(view.controller().selected(), Some(Cell::new(3, 2)));
    assert_eq!(log.borrow().selects, vec![(3.0, 2.0)]);
}

#[test]
fn test_click_outside_grid_does_not_report() {
    let (mut view, log) = view_with(GridConfig::new(4, 4, 10.0), 400.0, 400.0, 1.0);
    view.on_click(5.0, 5.0);
    view.on_click(100.0, 100.0);
    view.on_click(-1.0, 5.0);

    assert_eq!(log.borrow().selects, vec![(0.0, 0.0)]);
    assert_eq!(view.controller().selected(), Some(Cell::new(0, 0)));
}

#[test]
fn test_reselecting_same_cell_still_reports() {
    let (mut view, log) = standard_view();
    view.on_click(10.0, 10.0);
    let frames = view.renderer().frames();
    view.on_click(12.0, 12.0);

    assert_eq!(log.borrow().selects.len(), 2);
    // Same cell: nothing to repaint.
    assert_eq!(view.renderer().frames(), frames);
}

#[test]
fn test_click_after_zoom_uses_zoomed_cells() {
    let (mut view, log) = standard_view();
    view.on_wheel(0.0, 0.0, -1000.0, DOM_DELTA_PIXEL);
    // Cells are now 64px on screen.
    view.on_click(130.0, 70.0);
    assert_eq!(log.borrow().selects, vec![(1.0, 2.0)]);
}

// =============================================================================
// HOVER
// =============================================================================

#[test]
fn test_hover_reports_every_move() {
    let (mut view, log) = standard_view();
    view.on_pointer_move(1, 5.0, 5.0);
    view.on_pointer_move(1, 6.0, 6.0);
    view.on_pointer_move(1, 40.0, 5.0);

    assert_eq!(
        log.borrow().hovers,
        vec![(0.0, 0.0), (0.0, 0.0), (0.0, 1.0)]
    );
}

#[test]
fn test_hover_outside_and_leave_report_sentinel() {
    let (mut view, log) = standard_view();
    view.on_pointer_move(1, -5.0, 10.0);
    view.on_pointer_move(1, 10.0, 10.0);
    view.on_pointer_leave();

    assert_eq!(
        log.borrow().hovers,
        vec![(-1.0, -1.0), (0.0, 0.0), (-1.0, -1.0)]
    );
    assert!(view.controller().hovered().is_none());
}

#[test]
fn test_hover_repaints_only_on_cell_change() {
    let (mut view, _log) = standard_view();
    assert_eq!(view.renderer().frames(), 1);

    view.on_pointer_move(1, 1.0, 1.0);
    assert_eq!(view.renderer().frames(), 2);

    view.on_pointer_move(1, 20.0, 20.0);
    assert_eq!(view.renderer().frames(), 2);

    view.on_pointer_move(1, 20.0, 40.0);
    assert_eq!(view.renderer().frames(), 3);
}

// =============================================================================
// PAN
// =============================================================================

#[test]
fn test_drag_pans_by_pointer_delta() {
    let (mut view, _log) = standard_view();
    view.on_pointer_down(7, 10.0, 10.0);
    view.on_pointer_move(7, 50.0, 30.0);
    view.on_pointer_up(7);

    assert_eq!(view.controller().view_state().offset, Point::new(40.0, 20.0));
    assert!(!view.controller().is_dragging());

    // Moves after release only hover.
    view.on_pointer_move(7, 500.0, 500.0);
    assert_eq!(view.controller().view_state().offset, Point::new(40.0, 20.0));
}

#[test]
fn test_drag_moves_hover_with_the_grid() {
    let (mut view, log) = standard_view();
    view.on_pointer_down(1, 10.0, 10.0);
    view.on_pointer_move(1, 50.0, 30.0);

    // Grid point under (50, 30) is (10, 10).
    assert_eq!(log.borrow().hovers.last(), Some(&(0.0, 0.0)));
}

#[test]
fn test_leave_during_drag_ends_pan() {
    let (mut view, _log) = standard_view();
    view.on_pointer_down(1, 0.0, 0.0);
    view.on_pointer_move(1, 25.0, 0.0);
    view.on_pointer_leave();
    view.on_pointer_move(1, 300.0, 0.0);

    assert_eq!(view.controller().view_state().offset, Point::new(25.0, 0.0));
}

#[test]
fn test_second_pointer_does_not_steal_pan() {
    let (mut view, _log) = standard_view();
    view.on_pointer_down(1, 0.0, 0.0);
    view.on_pointer_down(2, 100.0, 100.0);
    view.on_pointer_move(2, 200.0, 200.0);
    view.on_pointer_move(1, 5.0, 5.0);

    assert_eq!(view.controller().view_state().offset, Point::new(5.0, 5.0));
}

// =============================================================================
// ZOOM
// =============================================================================

#[test]
fn test_wheel_zooms_about_cursor() {
    let (mut view, log) = standard_view();
    view.on_wheel(100.0, 100.0, -1000.0, DOM_DELTA_PIXEL);

    let state = view.controller().view_state();
    assert_eq!(state.scale, 2.0);
    assert_eq!(state.offset, Point::new(-100.0, -100.0));

    // The grid point under the cursor did not move.
    view.on_pointer_move(1, 100.0, 100.0);
    assert_eq!(log.borrow().hovers, vec![(3.0, 3.0)]);
}

#[test]
fn test_wheel_clamps_scale() {
    let (mut view, _log) = standard_view();
    view.on_wheel(0.0, 0.0, -100_000.0, DOM_DELTA_PIXEL);
    assert_eq!(view.controller().view_state().scale, 4.0);

    let frames = view.renderer().frames();
    view.on_wheel(0.0, 0.0, -10.0, DOM_DELTA_PIXEL);
    assert_eq!(view.controller().view_state().scale, 4.0);
    assert_eq!(view.renderer().frames(), frames);

    view.on_wheel(0.0, 0.0, 100_000.0, DOM_DELTA_PIXEL);
    assert_eq!(view.controller().view_state().scale, 0.25);
}

#[test]
fn test_line_mode_wheel_is_normalized() {
    let (mut view, _log) = standard_view();
    view.on_wheel(0.0, 0.0, 3.0, DOM_DELTA_LINE);
    let scale = view.controller().view_state().scale;
    assert!((scale - 0.952).abs() < 1e-12);
}

#[test]
fn test_reset_view_restores_identity() {
    let (mut view, _log) = standard_view();
    view.on_wheel(300.0, 200.0, -500.0, DOM_DELTA_PIXEL);
    view.on_pointer_down(1, 0.0, 0.0);
    view.on_pointer_move(1, 40.0, 40.0);

    assert!(view.reset_view());
    assert_eq!(view.controller().view_state(), ViewState::default());
    assert!(!view.controller().is_dragging());
}

// =============================================================================
// RESIZE
// =============================================================================

#[test]
fn test_resize_tracks_container_with_dpr() {
    let (mut view, _log) = standard_view();
    view.resize_container(1200.0, 800.0, 2.0);
    assert_eq!(view.renderer().width(), 2400);
    assert_eq!(view.renderer().height(), 1600);

    view.resize_container(600.0, 400.0, 2.0);
    assert_eq!(view.controller().surface(), SurfaceSize::new(600.0, 400.0));
    assert_eq!(view.renderer().width(), 1200);
    assert_eq!(view.renderer().height(), 800);
}

#[test]
fn test_resize_enforces_minimum_surface() {
    let (mut view, _log) = standard_view();
    view.resize_container(50.0, 0.0, 1.0);
    assert_eq!(view.controller().surface(), SurfaceSize::new(200.0, 200.0));
    assert_eq!(view.renderer().width(), 200);
}

#[test]
fn test_resize_repaints_and_keeps_view() {
    let (mut view, _log) = standard_view();
    view.on_wheel(0.0, 0.0, -500.0, DOM_DELTA_PIXEL);
    let before = view.controller().view_state();
    let frames = view.renderer().frames();

    view.resize_container(1024.0, 768.0, 1.0);
    assert_eq!(view.renderer().frames(), frames + 1);
    assert_eq!(view.controller().view_state(), before);

    // Same size and ratio: no repaint.
    view.resize_container(1024.0, 768.0, 1.0);
    assert_eq!(view.renderer().frames(), frames + 1);
}

#[test]
fn test_dpr_change_alone_resizes_backing() {
    let (mut view, _log) = standard_view();
    view.resize_container(800.0, 600.0, 1.5);
    assert_eq!(view.renderer().width(), 1200);
    assert_eq!(view.renderer().height(), 900);
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_headless_rejects_empty_grid() {
    let result = gridview::GridView::new_headless(
        &GridConfig::new(0, 10, 32.0),
        SurfaceSize::new(800.0, 600.0),
        1.0,
        Box::new(common::RecordingHost::default()),
    );
    assert!(result.is_err());
}

#[test]
fn test_initial_surface_is_floored() {
    let (view, _log) = view_with(GridConfig::new(10, 10, 32.0), 120.0, 90.0, 1.0);
    assert_eq!(view.controller().surface(), SurfaceSize::new(200.0, 200.0));
    assert_eq!(view.renderer().frames(), 1);
}
