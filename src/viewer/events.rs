//! Pointer, wheel, click, and resize handlers for `GridView`.
//!
//! All methods here are `pub(crate)` helpers called from the listeners
//! registered in `Listeners::attach`. Host callbacks run only after the
//! shared state borrow is released, so they may call back into the viewer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Event, HtmlCanvasElement, MouseEvent, PointerEvent, WheelEvent,
};

use super::controller::{report_hover, report_select};
use super::input::wheel_delta_pixels;
use super::{GridView, SharedState};
use crate::error::{GridViewError, Result};
use crate::render::RenderBackend;
use crate::types::Point;

type Listener = Closure<dyn FnMut(Event)>;

/// Event listeners registered on the canvas. Removed by `detach`.
pub(crate) struct Listeners {
    target: HtmlCanvasElement,
    registered: Vec<(&'static str, Listener)>,
}

impl Listeners {
    pub(crate) fn attach(
        state: &Rc<RefCell<SharedState>>,
        canvas: &HtmlCanvasElement,
    ) -> Result<Self> {
        let mut listeners = Listeners {
            target: canvas.clone(),
            registered: Vec::new(),
        };

        // Touch panning is ours, not the browser's.
        let _ = canvas.style().set_property("touch-action", "none");

        listeners.add_pointer(state, "pointerdown", GridView::internal_pointer_down)?;
        listeners.add_pointer(state, "pointermove", GridView::internal_pointer_move)?;
        listeners.add_pointer(state, "pointerup", GridView::internal_pointer_up)?;
        listeners.add_pointer(state, "pointercancel", GridView::internal_pointer_up)?;
        listeners.add_pointer(state, "pointerleave", |state, canvas, _| {
            GridView::internal_pointer_leave(state, canvas);
        })?;

        // Wheel
        {
            let state = Rc::clone(state);
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                if let Some(event) = event.dyn_ref::<WheelEvent>() {
                    GridView::internal_wheel(&state, &canvas_ref, event);
                }
            }) as Box<dyn FnMut(Event)>);
            // Non-passive so the page does not scroll while zooming.
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| GridViewError::dom("add wheel listener", e.as_string()))?;
            listeners.registered.push(("wheel", closure));
        }

        // Click
        {
            let state = Rc::clone(state);
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    GridView::internal_click(&state, &canvas_ref, event);
                }
            }) as Box<dyn FnMut(Event)>);
            canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(|e| GridViewError::dom("add click listener", e.as_string()))?;
            listeners.registered.push(("click", closure));
        }

        Ok(listeners)
    }

    fn add_pointer(
        &mut self,
        state: &Rc<RefCell<SharedState>>,
        name: &'static str,
        handler: fn(&Rc<RefCell<SharedState>>, &HtmlCanvasElement, &PointerEvent),
    ) -> Result<()> {
        let state = Rc::clone(state);
        let canvas_ref = self.target.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Some(event) = event.dyn_ref::<PointerEvent>() {
                handler(&state, &canvas_ref, event);
            }
        }) as Box<dyn FnMut(Event)>);
        self.target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(|e| GridViewError::dom(&format!("add {name} listener"), e.as_string()))?;
        self.registered.push((name, closure));
        Ok(())
    }

    pub(crate) fn detach(&mut self) {
        for (name, closure) in self.registered.drain(..) {
            let _ = self
                .target
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

/// Event position relative to the canvas's top-left corner.
fn surface_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    )
}

impl GridView {
    pub(crate) fn internal_pointer_down(
        state: &Rc<RefCell<SharedState>>,
        canvas: &HtmlCanvasElement,
        event: &PointerEvent,
    ) {
        let point = surface_point(canvas, event);
        let pointer_id = event.pointer_id();
        let capture = {
            let mut s = state.borrow_mut();
            let capture = s.controller.pointer_down(pointer_id, point);
            s.flush();
            capture
        };
        if capture {
            let _ = canvas.set_pointer_capture(pointer_id);
        }
    }

    pub(crate) fn internal_pointer_move(
        state: &Rc<RefCell<SharedState>>,
        canvas: &HtmlCanvasElement,
        event: &PointerEvent,
    ) {
        let point = surface_point(canvas, event);
        let (cell, mut host) = {
            let mut s = state.borrow_mut();
            let cell = s.controller.pointer_move(event.pointer_id(), point);
            s.flush();
            (cell, s.host.clone())
        };
        report_hover(&mut host, cell);
    }

    pub(crate) fn internal_pointer_up(
        state: &Rc<RefCell<SharedState>>,
        canvas: &HtmlCanvasElement,
        event: &PointerEvent,
    ) {
        let pointer_id = event.pointer_id();
        let release = {
            let mut s = state.borrow_mut();
            let release = s.controller.pointer_up(pointer_id);
            s.flush();
            release
        };
        if release {
            let _ = canvas.release_pointer_capture(pointer_id);
        }
    }

    pub(crate) fn internal_pointer_leave(
        state: &Rc<RefCell<SharedState>>,
        canvas: &HtmlCanvasElement,
    ) {
        let (released, mut host) = {
            let mut s = state.borrow_mut();
            let released = s.controller.pointer_leave();
            s.flush();
            (released, s.host.clone())
        };
        if let Some(pointer_id) = released {
            let _ = canvas.release_pointer_capture(pointer_id);
        }
        report_hover(&mut host, None);
    }

    pub(crate) fn internal_wheel(
        state: &Rc<RefCell<SharedState>>,
        canvas: &HtmlCanvasElement,
        event: &WheelEvent,
    ) {
        event.prevent_default();
        let point = surface_point(canvas, event);
        let mut s = state.borrow_mut();
        let page_height = s.controller.surface().height;
        let delta = wheel_delta_pixels(event.delta_y(), event.delta_mode(), page_height);
        s.controller.wheel(point, delta);
        s.flush();
    }

    pub(crate) fn internal_click(
        state: &Rc<RefCell<SharedState>>,
        canvas: &HtmlCanvasElement,
        event: &MouseEvent,
    ) {
        let point = surface_point(canvas, event);
        let (cell, mut host) = {
            let mut s = state.borrow_mut();
            let cell = s.controller.click(point);
            s.flush();
            (cell, s.host.clone())
        };
        report_select(&mut host, cell);
    }

    /// New container content box, in logical pixels, at the given device
    /// pixel ratio.
    pub(crate) fn internal_container_resized(
        state: &Rc<RefCell<SharedState>>,
        width: f64,
        height: f64,
        dpr: f64,
    ) {
        let mut s = state.borrow_mut();
        let resized = s.controller.resize_container(width, height).is_some();
        if resized || (dpr - s.dpr).abs() > f64::EPSILON {
            s.dpr = dpr;
            let surface = s.controller.surface();
            s.renderer.resize(surface, dpr);
            s.needs_render.set(true);
        }
        s.flush();
    }
}
