//! Main GridView struct - the primary entry point for the canvas grid viewer.
//!
//! This module provides the WASM-exported `GridView` struct that handles:
//! - Mounting on a canvas (and optionally observing its container's size)
//! - Pan (pointer drag with pointer capture) and zoom (wheel about cursor)
//! - Hover and selection reporting through host callbacks
//! - Repainting after every state change
//!
//! Event handlers are registered when the viewer is created; hosts only
//! supply the callbacks.

mod controller;
mod gesture;
mod input;

#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod resize;

pub use controller::{report_hover, report_select, GridController, GridHost, Redraw};
pub use gesture::PanGesture;
pub use input::{css_px, wheel_delta_pixels, DOM_DELTA_LINE, DOM_DELTA_PAGE, DOM_DELTA_PIXEL};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::config::GridConfig;
#[cfg(target_arch = "wasm32")]
use crate::error::GridViewError;
#[cfg(not(target_arch = "wasm32"))]
use crate::render::RecordingPainter;
#[cfg(target_arch = "wasm32")]
use crate::render::{CanvasRenderer, RenderBackend};
#[cfg(not(target_arch = "wasm32"))]
use crate::types::Point;
use crate::types::SurfaceSize;

#[cfg(target_arch = "wasm32")]
use events::Listeners;

/// Host callbacks backed by JS functions.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub(crate) struct JsHost {
    pub(crate) on_hover: Option<Function>,
    pub(crate) on_select: Option<Function>,
}

#[cfg(target_arch = "wasm32")]
impl GridHost for JsHost {
    fn hover(&mut self, row: f64, col: f64) {
        if let Some(f) = self.on_hover.as_ref() {
            let _ = f.call2(&JsValue::NULL, &JsValue::from_f64(row), &JsValue::from_f64(col));
        }
    }

    fn select(&mut self, row: f64, col: f64) {
        if let Some(f) = self.on_select.as_ref() {
            let _ = f.call2(&JsValue::NULL, &JsValue::from_f64(row), &JsValue::from_f64(col));
        }
    }
}

/// Shared state that can be accessed by event handlers (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) controller: GridController,
    pub(crate) renderer: CanvasRenderer,
    pub(crate) dpr: f64,
    pub(crate) needs_render: Rc<std::cell::Cell<bool>>,
    pub(crate) host: JsHost,
}

#[cfg(target_arch = "wasm32")]
impl SharedState {
    /// Repaint if anything changed since the last frame.
    pub(crate) fn flush(&mut self) {
        if self.needs_render.replace(false) {
            self.paint();
        }
    }

    pub(crate) fn paint(&mut self) {
        let params = self.controller.render_params(self.dpr);
        if let Err(e) = self.renderer.render(&params) {
            tracing::warn!(error = %e, "render failed");
        }
    }
}

/// Current device pixel ratio, 1.0 when unavailable.
#[cfg(target_arch = "wasm32")]
pub(crate) fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(1.0)
}

/// Content box of `element` in logical pixels. Matches what a
/// `ResizeObserver` reports as `contentRect`.
#[cfg(target_arch = "wasm32")]
fn content_box(element: &HtmlElement) -> SurfaceSize {
    let (padding_x, padding_y) = web_sys::window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .map(|style| {
            let px = |name: &str| {
                style
                    .get_property_value(name)
                    .map(|v| css_px(&v))
                    .unwrap_or(0.0)
            };
            (
                px("padding-left") + px("padding-right"),
                px("padding-top") + px("padding-bottom"),
            )
        })
        .unwrap_or((0.0, 0.0));
    SurfaceSize::content_box(
        f64::from(element.client_width()),
        f64::from(element.client_height()),
        padding_x,
        padding_y,
    )
}

/// The main viewer struct exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    listeners: Option<Listeners>,
    #[cfg(target_arch = "wasm32")]
    resize_observer: Option<resize::ContainerObserver>,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    controller: GridController,
    #[cfg(not(target_arch = "wasm32"))]
    renderer: RecordingPainter,
    #[cfg(not(target_arch = "wasm32"))]
    dpr: f64,
    #[cfg(not(target_arch = "wasm32"))]
    needs_render: std::rc::Rc<std::cell::Cell<bool>>,
    #[cfg(not(target_arch = "wasm32"))]
    host: Box<dyn GridHost>,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a viewer for a `rows` x `cols` grid of `cell_size` pixel cells.
    ///
    /// When `container` is given its content box drives the surface size;
    /// otherwise the canvas keeps its current CSS size until `resize` is
    /// called.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        container: Option<HtmlElement>,
        rows: u32,
        cols: u32,
        cell_size: f64,
        on_hover: Option<Function>,
        on_select: Option<Function>,
    ) -> Result<GridView, JsValue> {
        let config = GridConfig::new(rows, cols, cell_size);
        Self::mount(canvas, container, &config, JsHost { on_hover, on_select })
    }

    /// Create a viewer from a config object (`{ rows, cols, cellSize, view?, theme? }`)
    /// or the same object as a JSON string.
    #[wasm_bindgen(js_name = "withConfig")]
    pub fn with_config(
        canvas: HtmlCanvasElement,
        container: Option<HtmlElement>,
        config: JsValue,
        on_hover: Option<Function>,
        on_select: Option<Function>,
    ) -> Result<GridView, JsValue> {
        let json = match config.as_string() {
            Some(json) => json,
            None if config.is_object() => js_sys::JSON::stringify(&config)
                .map(String::from)
                .map_err(|_| GridViewError::InvalidConfig("config is not serializable".into()))?,
            None => {
                return Err(GridViewError::InvalidConfig(
                    "expected a config object or JSON string".into(),
                )
                .into())
            }
        };
        let config = GridConfig::from_json(&json)?;
        Self::mount(canvas, container, &config, JsHost { on_hover, on_select })
    }

    /// Repaint the full surface.
    #[wasm_bindgen]
    pub fn render(&self) {
        let mut s = self.state.borrow_mut();
        s.needs_render.set(false);
        s.paint();
    }

    /// Resize the surface (logical pixels) for hosts that size the canvas
    /// themselves. The minimum surface side still applies; `dpr` defaults to
    /// the window's device pixel ratio.
    #[wasm_bindgen]
    pub fn resize(&self, width: f64, height: f64, dpr: Option<f64>) {
        let dpr = dpr
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or_else(device_pixel_ratio);
        Self::internal_container_resized(&self.state, width, height, dpr);
    }

    /// Return to offset (0, 0) and scale 1.
    #[wasm_bindgen(js_name = "resetView")]
    pub fn reset_view(&self) {
        let mut s = self.state.borrow_mut();
        s.controller.reset_view();
        s.flush();
    }

    #[wasm_bindgen(js_name = "clearSelection")]
    pub fn clear_selection(&self) {
        let mut s = self.state.borrow_mut();
        s.controller.clear_selection();
        s.flush();
    }

    /// Current `{ offset: { x, y }, scale }`.
    #[wasm_bindgen(js_name = "viewState")]
    pub fn view_state(&self) -> Result<JsValue, JsValue> {
        let view = self.state.borrow().controller.view_state();
        serde_wasm_bindgen::to_value(&view)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Hovered cell as `[row, col]`, if any.
    #[wasm_bindgen(js_name = "hoveredCell")]
    pub fn hovered_cell(&self) -> Option<Vec<u32>> {
        self.state
            .borrow()
            .controller
            .hovered()
            .map(|c| vec![c.row, c.col])
    }

    /// Selected cell as `[row, col]`, if any.
    #[wasm_bindgen(js_name = "selectedCell")]
    pub fn selected_cell(&self) -> Option<Vec<u32>> {
        self.state
            .borrow()
            .controller
            .selected()
            .map(|c| vec![c.row, c.col])
    }

    /// Detach event listeners and stop observing the container. Safe to call
    /// more than once.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        if let Some(mut listeners) = self.listeners.take() {
            listeners.detach();
        }
        if let Some(observer) = self.resize_observer.take() {
            observer.disconnect();
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    fn mount(
        canvas: HtmlCanvasElement,
        container: Option<HtmlElement>,
        config: &GridConfig,
        host: JsHost,
    ) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        config.validate()?;

        let dpr = device_pixel_ratio();
        let initial = match container.as_ref() {
            Some(c) => content_box(c),
            None => content_box(&canvas),
        };

        let mut renderer = CanvasRenderer::new(canvas.clone())?;
        renderer.init()?;

        let mut controller = GridController::new(config, initial);
        let needs_render = Rc::new(std::cell::Cell::new(false));
        {
            let needs_render = Rc::clone(&needs_render);
            controller.subscribe(move |reason| {
                tracing::trace!(?reason, "redraw requested");
                needs_render.set(true);
            });
        }
        renderer.resize(controller.surface(), dpr);

        let state = Rc::new(RefCell::new(SharedState {
            controller,
            renderer,
            dpr,
            needs_render,
            host,
        }));

        let listeners = Listeners::attach(&state, &canvas)?;
        let resize_observer = container
            .as_ref()
            .map(|c| resize::ContainerObserver::observe(&state, c))
            .transpose()?;

        tracing::debug!(
            rows = config.rows,
            cols = config.cols,
            cell_size = config.cell_size,
            dpr,
            observed = resize_observer.is_some(),
            "grid view mounted"
        );

        state.borrow_mut().paint();

        Ok(GridView {
            state,
            listeners: Some(listeners),
            resize_observer,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for GridView {
    fn drop(&mut self) {
        self.destroy();
    }
}

// ============================================================================
// Non-WASM32 Implementation (headless, for tests and benchmarks)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Headless viewer painting into a `RecordingPainter`.
    pub fn new_headless(
        config: &GridConfig,
        surface: SurfaceSize,
        dpr: f64,
        host: Box<dyn GridHost>,
    ) -> crate::error::Result<Self> {
        use crate::render::RenderBackend;

        config.validate()?;
        let mut controller = GridController::new(config, surface);
        let needs_render = std::rc::Rc::new(std::cell::Cell::new(false));
        {
            let needs_render = std::rc::Rc::clone(&needs_render);
            controller.subscribe(move |_| needs_render.set(true));
        }
        let mut renderer = RecordingPainter::new();
        renderer.resize(controller.surface(), dpr);
        let mut view = GridView {
            controller,
            renderer,
            dpr,
            needs_render,
            host,
        };
        view.render()?;
        Ok(view)
    }

    pub fn controller(&self) -> &GridController {
        &self.controller
    }

    pub fn renderer(&self) -> &RecordingPainter {
        &self.renderer
    }

    pub fn render(&mut self) -> crate::error::Result<()> {
        use crate::render::RenderBackend;

        self.needs_render.set(false);
        let params = self.controller.render_params(self.dpr);
        self.renderer.render(&params)
    }

    pub fn on_pointer_down(&mut self, pointer_id: i32, x: f64, y: f64) {
        self.controller.pointer_down(pointer_id, Point::new(x, y));
        self.flush();
    }

    pub fn on_pointer_move(&mut self, pointer_id: i32, x: f64, y: f64) {
        let cell = self.controller.pointer_move(pointer_id, Point::new(x, y));
        self.flush();
        report_hover(self.host.as_mut(), cell);
    }

    pub fn on_pointer_up(&mut self, pointer_id: i32) {
        self.controller.pointer_up(pointer_id);
        self.flush();
    }

    pub fn on_pointer_leave(&mut self) {
        self.controller.pointer_leave();
        self.flush();
        report_hover(self.host.as_mut(), None);
    }

    pub fn on_wheel(&mut self, x: f64, y: f64, delta_y: f64, delta_mode: u32) {
        let delta = wheel_delta_pixels(delta_y, delta_mode, self.controller.surface().height);
        self.controller.wheel(Point::new(x, y), delta);
        self.flush();
    }

    pub fn on_click(&mut self, x: f64, y: f64) {
        let cell = self.controller.click(Point::new(x, y));
        self.flush();
        report_select(self.host.as_mut(), cell);
    }

    pub fn reset_view(&mut self) -> bool {
        let changed = self.controller.reset_view();
        self.flush();
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        let changed = self.controller.clear_selection();
        self.flush();
        changed
    }

    /// Container resized to `width` x `height` at the given pixel ratio.
    pub fn resize_container(&mut self, width: f64, height: f64, dpr: f64) {
        use crate::render::RenderBackend;

        let resized = self.controller.resize_container(width, height);
        if resized.is_some() || (dpr - self.dpr).abs() > f64::EPSILON {
            self.dpr = dpr;
            self.renderer.resize(self.controller.surface(), dpr);
            self.needs_render.set(true);
        }
        self.flush();
    }

    fn flush(&mut self) {
        if self.needs_render.get() {
            // The recorder never fails.
            let _ = self.render();
        }
    }
}
