//! Platform-independent interaction state for a grid view.
//!
//! `GridController` turns pointer, wheel, click, and resize input into view
//! changes and hover/selection updates. Every observable change is announced
//! to a single redraw subscriber; host callbacks are returned to the caller
//! so the DOM layer can invoke them after releasing its borrows.

use crate::config::GridConfig;
use crate::layout::{GridLayout, ViewChange, ViewState, Viewport};
use crate::render::{RenderParams, ResolvedTheme};
use crate::types::{Cell, Point, SurfaceSize};

use super::gesture::PanGesture;

/// Why a redraw was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Offset or scale changed
    View,
    /// Hovered cell changed
    Hover,
    /// Selected cell changed
    Selection,
    /// Surface size changed
    Surface,
}

/// Receives hover and selection reports in host terms.
pub trait GridHost {
    /// `(-1, -1)` when the pointer is over no cell.
    fn hover(&mut self, row: f64, col: f64);

    fn select(&mut self, row: f64, col: f64);
}

/// Forward a hover result to the host, mapping "no cell" to the sentinel.
pub fn report_hover<H: GridHost + ?Sized>(host: &mut H, cell: Option<Cell>) {
    let (row, col) = Cell::host_pair(cell);
    host.hover(row, col);
}

/// Forward a click result to the host; clicks outside the grid are dropped.
pub fn report_select<H: GridHost + ?Sized>(host: &mut H, cell: Option<Cell>) {
    if let Some(cell) = cell {
        let (row, col) = Cell::host_pair(Some(cell));
        host.select(row, col);
    }
}

type RedrawHook = Box<dyn FnMut(Redraw)>;

pub struct GridController {
    layout: GridLayout,
    viewport: Viewport,
    gesture: Option<PanGesture>,
    hovered: Option<Cell>,
    selected: Option<Cell>,
    theme: ResolvedTheme,
    min_surface: f64,
    cull_gridlines: bool,
    on_redraw: Option<RedrawHook>,
}

impl GridController {
    /// Controller for a validated config on a surface of the given size.
    pub fn new(config: &GridConfig, surface: SurfaceSize) -> Self {
        let min_surface = config.view.min_surface;
        let surface = SurfaceSize::from_container(surface.width, surface.height, min_surface);
        Self {
            layout: GridLayout::from_config(config),
            viewport: Viewport::new(&config.view, surface),
            gesture: None,
            hovered: None,
            selected: None,
            theme: ResolvedTheme::resolve(&config.theme),
            min_surface,
            cull_gridlines: config.view.cull_gridlines,
            on_redraw: None,
        }
    }

    /// Install the redraw subscriber, replacing any previous one.
    pub fn subscribe(&mut self, hook: impl FnMut(Redraw) + 'static) {
        self.on_redraw = Some(Box::new(hook));
    }

    pub fn view_state(&self) -> ViewState {
        self.viewport.state()
    }

    pub fn surface(&self) -> SurfaceSize {
        self.viewport.surface()
    }

    pub fn hovered(&self) -> Option<Cell> {
        self.hovered
    }

    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Parameters for painting the current state.
    pub fn render_params(&self, dpr: f64) -> RenderParams<'_> {
        RenderParams {
            layout: &self.layout,
            viewport: &self.viewport,
            dpr,
            hovered: self.hovered,
            selected: self.selected,
            theme: &self.theme,
            cull_gridlines: self.cull_gridlines,
        }
    }

    /// Begin a pan. Returns true when the pointer should be captured.
    ///
    /// While a gesture is active, other pointers are ignored.
    pub fn pointer_down(&mut self, pointer_id: i32, point: Point) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        self.gesture = Some(PanGesture::begin(
            pointer_id,
            point,
            self.viewport.state().offset,
        ));
        true
    }

    /// Continue a pan (if this pointer owns one) and resolve the hovered cell.
    /// The result is always reported to the host.
    pub fn pointer_move(&mut self, pointer_id: i32, point: Point) -> Option<Cell> {
        if let Some(gesture) = self.gesture.filter(|g| g.owns(pointer_id)) {
            self.change_view(ViewChange::PanTo(gesture.offset_for(point)));
        }
        let cell = self.viewport.hit_test(&self.layout, point);
        self.set_hovered(cell);
        cell
    }

    /// End the pan owned by this pointer. Returns true when capture should be
    /// released.
    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        if self.gesture.is_some_and(|g| g.owns(pointer_id)) {
            self.gesture = None;
            return true;
        }
        false
    }

    /// Pointer left the surface: end any pan and clear hover. Returns the id
    /// whose capture should be released.
    pub fn pointer_leave(&mut self) -> Option<i32> {
        self.set_hovered(None);
        self.gesture.take().map(|g| g.pointer_id)
    }

    /// Zoom about `point`. Returns true if the scale changed.
    pub fn wheel(&mut self, point: Point, delta_y: f64) -> bool {
        let changed = self.change_view(ViewChange::ZoomAt {
            cursor: point,
            delta_y,
        });
        if changed {
            let view = self.viewport.state();
            tracing::trace!(scale = view.scale, x = view.offset.x, y = view.offset.y, "zoomed");
        }
        changed
    }

    /// Select the cell under `point`. `None` (outside the grid) leaves the
    /// current selection alone.
    pub fn click(&mut self, point: Point) -> Option<Cell> {
        let cell = self.viewport.hit_test(&self.layout, point)?;
        if self.selected != Some(cell) {
            self.selected = Some(cell);
            self.notify(Redraw::Selection);
        }
        Some(cell)
    }

    /// Container content box changed. Returns the new surface size when it
    /// differs from the current one.
    pub fn resize_container(&mut self, width: f64, height: f64) -> Option<SurfaceSize> {
        let size = SurfaceSize::from_container(width, height, self.min_surface);
        if !self.viewport.apply(ViewChange::Resize(size)) {
            return None;
        }
        tracing::debug!(width = size.width, height = size.height, "surface resized");
        self.notify(Redraw::Surface);
        Some(size)
    }

    /// Back to offset (0, 0), scale 1. Cancels an in-progress pan.
    pub fn reset_view(&mut self) -> bool {
        self.gesture = None;
        self.change_view(ViewChange::Reset)
    }

    pub fn clear_selection(&mut self) -> bool {
        if self.selected.take().is_some() {
            self.notify(Redraw::Selection);
            return true;
        }
        false
    }

    fn change_view(&mut self, change: ViewChange) -> bool {
        let changed = self.viewport.apply(change);
        if changed {
            self.notify(Redraw::View);
        }
        changed
    }

    fn set_hovered(&mut self, cell: Option<Cell>) {
        if self.hovered != cell {
            self.hovered = cell;
            self.notify(Redraw::Hover);
        }
    }

    fn notify(&mut self, reason: Redraw) {
        if let Some(hook) = self.on_redraw.as_mut() {
            hook(reason);
        }
    }
}
