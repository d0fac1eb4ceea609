//! Drag-to-pan gesture state.

use crate::types::Point;

/// An in-progress pan drag. Exists only between pointer-down and
/// pointer-up/leave for one pointer id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    pub pointer_id: i32,
    /// Pointer position at pointer-down
    pub start: Point,
    /// View offset at pointer-down
    pub origin: Point,
}

impl PanGesture {
    pub fn begin(pointer_id: i32, start: Point, origin: Point) -> Self {
        Self {
            pointer_id,
            start,
            origin,
        }
    }

    pub fn owns(&self, pointer_id: i32) -> bool {
        self.pointer_id == pointer_id
    }

    /// Offset for the current pointer position: a 1:1 translation of the
    /// origin, independent of zoom.
    pub fn offset_for(&self, current: Point) -> Point {
        let (dx, dy) = current.delta_from(self.start);
        self.origin.offset_by(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_pointer_delta() {
        let g = PanGesture::begin(7, Point::new(100.0, 100.0), Point::new(-20.0, 5.0));
        assert!(g.owns(7));
        assert!(!g.owns(8));
        assert_eq!(g.offset_for(Point::new(100.0, 100.0)), Point::new(-20.0, 5.0));
        assert_eq!(g.offset_for(Point::new(130.0, 90.0)), Point::new(10.0, -5.0));
    }
}
