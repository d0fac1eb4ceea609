//! Container size tracking via `ResizeObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ResizeObserver, ResizeObserverEntry};

use super::{device_pixel_ratio, GridView, SharedState};
use crate::error::{GridViewError, Result};

/// Observes one container and resizes the surface to its content box.
pub(crate) struct ContainerObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ContainerObserver {
    pub(crate) fn observe(
        state: &Rc<RefCell<SharedState>>,
        container: &HtmlElement,
    ) -> Result<Self> {
        let state = Rc::clone(state);
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            // Only the last entry matters when several are batched.
            let last = entries
                .iter()
                .filter_map(|e| e.dyn_into::<ResizeObserverEntry>().ok())
                .last();
            if let Some(entry) = last {
                let rect = entry.content_rect();
                GridView::internal_container_resized(
                    &state,
                    rect.width(),
                    rect.height(),
                    device_pixel_ratio(),
                );
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| GridViewError::dom("create ResizeObserver", e.as_string()))?;
        observer.observe(container);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn disconnect(self) {
        self.observer.disconnect();
    }
}
