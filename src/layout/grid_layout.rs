//! Uniform grid geometry and hit testing.
//!
//! Every cell is a `cell_size` square, so lookups are plain division rather
//! than searches over cumulative positions.

use crate::config::GridConfig;
use crate::types::{Cell, Point, Rect};

/// Geometry of the logical grid in grid space (scale 1, no pan).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub cell_size: f64,
}

impl GridLayout {
    pub const fn new(rows: u32, cols: u32, cell_size: f64) -> Self {
        Self {
            rows,
            cols,
            cell_size,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.rows, config.cols, config.cell_size)
    }

    /// Full grid width (`cols * cell_size`)
    pub fn total_width(&self) -> f64 {
        f64::from(self.cols) * self.cell_size
    }

    /// Full grid height (`rows * cell_size`)
    pub fn total_height(&self) -> f64 {
        f64::from(self.rows) * self.cell_size
    }

    /// Rectangle covering the whole grid.
    pub fn extent(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width(), self.total_height())
    }

    /// Grid-space bounds of a cell.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            f64::from(cell.col) * self.cell_size,
            f64::from(cell.row) * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Cell containing a grid-space point, or `None` outside the grid.
    pub fn cell_at(&self, grid: Point) -> Option<Cell> {
        let col = Self::index_at(grid.x, self.cell_size, self.cols)?;
        let row = Self::index_at(grid.y, self.cell_size, self.rows)?;
        Some(Cell::new(row, col))
    }

    /// Row boundaries (0..=rows) whose y lies within `[y0, y1]`.
    pub fn row_boundaries_within(&self, y0: f64, y1: f64) -> Option<(u32, u32)> {
        Self::boundaries_within(y0, y1, self.cell_size, self.rows)
    }

    /// Column boundaries (0..=cols) whose x lies within `[x0, x1]`.
    pub fn col_boundaries_within(&self, x0: f64, x1: f64) -> Option<(u32, u32)> {
        Self::boundaries_within(x0, x1, self.cell_size, self.cols)
    }

    /// The cast is safe: the value is floored and checked against `0..count` first.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index_at(pos: f64, cell_size: f64, count: u32) -> Option<u32> {
        let idx = (pos / cell_size).floor();
        if idx.is_finite() && idx >= 0.0 && idx < f64::from(count) {
            Some(idx as u32)
        } else {
            None
        }
    }

    /// The casts are safe: both ends are clamped to `0..=count` first.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn boundaries_within(lo: f64, hi: f64, cell_size: f64, count: u32) -> Option<(u32, u32)> {
        if !(lo.is_finite() && hi.is_finite()) || hi < lo {
            return None;
        }
        let max = f64::from(count);
        let first = (lo / cell_size).ceil();
        let last = (hi / cell_size).floor();
        if last < 0.0 || first > max {
            return None;
        }
        let first = first.clamp(0.0, max) as u32;
        let last = last.clamp(0.0, max) as u32;
        (first <= last).then_some((first, last))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn layout() -> GridLayout {
        GridLayout::new(200, 150, 32.0)
    }

    #[test]
    fn extent_is_cells_times_size() {
        let l = layout();
        assert_eq!(l.total_width(), 150.0 * 32.0);
        assert_eq!(l.total_height(), 200.0 * 32.0);
    }

    #[test_case(0.0, 0.0 => Some(Cell::new(0, 0)) ; "origin")]
    #[test_case(64.0, 96.0 => Some(Cell::new(3, 2)) ; "exact boundary belongs to next cell")]
    #[test_case(31.999, 31.999 => Some(Cell::new(0, 0)) ; "just inside first cell")]
    #[test_case(-0.001, 10.0 => None ; "left of grid")]
    #[test_case(10.0, -5.0 => None ; "above grid")]
    #[test_case(150.0 * 32.0, 10.0 => None ; "right edge is outside")]
    #[test_case(10.0, 200.0 * 32.0 => None ; "bottom edge is outside")]
    #[test_case(f64::NAN, 0.0 => None ; "nan")]
    fn cell_at(x: f64, y: f64) -> Option<Cell> {
        layout().cell_at(Point::new(x, y))
    }

    #[test]
    fn cell_rect_round_trips_through_cell_at() {
        let l = layout();
        let cell = Cell::new(17, 42);
        let r = l.cell_rect(cell);
        assert_eq!(r, Rect::new(42.0 * 32.0, 17.0 * 32.0, 32.0, 32.0));
        let center = Point::new(r.x + r.w / 2.0, r.y + r.h / 2.0);
        assert_eq!(l.cell_at(center), Some(cell));
    }

    #[test]
    fn boundaries_cover_visible_span() {
        let l = GridLayout::new(10, 10, 10.0);
        assert_eq!(l.row_boundaries_within(0.0, 100.0), Some((0, 10)));
        assert_eq!(l.row_boundaries_within(15.0, 35.0), Some((2, 3)));
        assert_eq!(l.col_boundaries_within(-50.0, 5.0), Some((0, 0)));
        assert_eq!(l.col_boundaries_within(95.0, 500.0), Some((10, 10)));
        assert_eq!(l.col_boundaries_within(101.0, 500.0), None);
        assert_eq!(l.row_boundaries_within(-30.0, -1.0), None);
        assert_eq!(l.row_boundaries_within(11.0, 19.0), None);
    }
}
