//! Canvas 2D rendering backend.
//!
//! Paints the grid through the HTML Canvas 2D API via web-sys. The frame
//! routine itself lives in `render::frame`; this backend only maps its
//! primitives onto a `CanvasRenderingContext2d`.

mod renderer;

pub use renderer::CanvasRenderer;
