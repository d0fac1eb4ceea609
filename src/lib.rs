//! gridview - pan/zoom grid viewer for the web
//!
//! Renders a large uniform cell grid in the browser via WebAssembly and Canvas 2D:
//! - Drag to pan (pointer capture keeps the drag alive off-canvas)
//! - Wheel to zoom about the cursor, clamped to a scale range
//! - Hover and selection reported to host callbacks as `(row, col)`
//! - Crisp output on high-DPI displays, resized with the container
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const view = new GridView(canvas, container, 200, 200, 32,
//!   (row, col) => status.textContent = row < 0 ? '' : `${row},${col}`,
//!   (row, col) => console.log('selected', row, col));
//! // later
//! view.destroy();
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::GridView;

pub use config::{GridConfig, Theme, ViewOptions};
pub use error::{GridViewError, Result};
pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
