use serde::Serialize;

/// Row/column pair reported to the host when the pointer is over no cell.
pub const NO_CELL: (f64, f64) = (-1.0, -1.0);

/// A grid cell address, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Coordinates as handed to host callbacks. JS numbers, so `f64`.
    pub fn host_pair(cell: Option<Self>) -> (f64, f64) {
        cell.map_or(NO_CELL, |c| (f64::from(c.row), f64::from(c.col)))
    }
}
