//! Common test utilities for driving a headless `GridView`.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::RefCell;
use std::rc::Rc;

use gridview::types::SurfaceSize;
use gridview::viewer::GridHost;
use gridview::{GridConfig, GridView};

/// Everything the host was told, in order.
#[derive(Debug, Default)]
pub struct HostLog {
    pub hovers: Vec<(f64, f64)>,
    pub selects: Vec<(f64, f64)>,
}

/// Host whose log stays readable after the viewer takes ownership of it.
#[derive(Clone, Default)]
pub struct RecordingHost {
    pub log: Rc<RefCell<HostLog>>,
}

impl GridHost for RecordingHost {
    fn hover(&mut self, row: f64, col: f64) {
        self.log.borrow_mut().hovers.push((row, col));
    }

    fn select(&mut self, row: f64, col: f64) {
        self.log.borrow_mut().selects.push((row, col));
    }
}

/// 200 x 200 grid of 32px cells on an 800 x 600 surface at dpr 1.
pub fn standard_view() -> (GridView, Rc<RefCell<HostLog>>) {
    view_with(GridConfig::new(200, 200, 32.0), 800.0, 600.0, 1.0)
}

pub fn view_with(
    config: GridConfig,
    width: f64,
    height: f64,
    dpr: f64,
) -> (GridView, Rc<RefCell<HostLog>>) {
    let host = RecordingHost::default();
    let log = Rc::clone(&host.log);
    let view = GridView::new_headless(
        &config,
        SurfaceSize::new(width, height),
        dpr,
        Box::new(host),
    )
    .expect("valid config");
    (view, log)
}
