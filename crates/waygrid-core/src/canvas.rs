//! The [`Canvas`] type — a square grid of [`CellState`]s.
//!
//! The canvas is plain owned storage: the presentation layer paints walls and
//! endpoints into it between events, and the pathfinder exclusively mutates
//! it while a search runs. Out-of-bounds writes are silently ignored rather
//! than reported — painting off the edge is a no-op, not an error.

use crate::cell::CellState;
use crate::geom::{Point, Rect};

/// A square grid of cells, `dim` × `dim`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    dim: i32,
    cells: Vec<CellState>,
}

impl Canvas {
    /// Create a new canvas with all cells [`CellState::Empty`].
    pub fn new(dim: i32) -> Self {
        let d = dim.max(0) as usize;
        Self {
            dim: dim.max(0),
            cells: vec![CellState::Empty; d * d],
        }
    }

    /// Side length of the canvas.
    #[inline]
    pub fn dim(&self) -> i32 {
        self.dim
    }

    /// The bounding rectangle, `[0, dim) × [0, dim)`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.dim, self.dim)
    }

    /// Whether `p` is inside the canvas bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.dim && p.y >= 0 && p.y < self.dim
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.dim as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Read the cell at `p`. Returns [`CellState::Empty`] out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> CellState {
        self.index(p).map_or(CellState::Empty, |i| self.cells[i])
    }

    /// Write `state` at `p`. No-op when `p` is out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, state: CellState) {
        if let Some(i) = self.index(p) {
            self.cells[i] = state;
        }
    }

    /// Clear the cell at `p` back to [`CellState::Empty`].
    #[inline]
    pub fn clear(&mut self, p: Point) {
        self.set(p, CellState::Empty);
    }

    /// Reinitialize all cells to [`CellState::Empty`]. May change the
    /// dimension.
    pub fn reset(&mut self, dim: i32) {
        let d = dim.max(0);
        self.dim = d;
        self.cells.clear();
        self.cells.resize((d as usize) * (d as usize), CellState::Empty);
    }

    /// Coordinates of every cell holding `state`, in row-major scan order.
    pub fn find_all(&self, state: CellState) -> Vec<Point> {
        self.bounds()
            .iter()
            .filter(|&p| self.at(p) == state)
            .collect()
    }

    /// Sweep the transient search annotations (`Frontier` / `Visited`) back
    /// to `Empty`, leaving walls and path markers untouched.
    pub fn clear_markers(&mut self) {
        for cell in &mut self.cells {
            if cell.is_marker() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Row-major iterator over `(Point, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.bounds().iter().map(|p| (p, self.at(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_empty() {
        let c = Canvas::new(4);
        assert_eq!(c.dim(), 4);
        for (_, state) in c.iter() {
            assert_eq!(state, CellState::Empty);
        }
    }

    #[test]
    fn set_and_at() {
        let mut c = Canvas::new(4);
        c.set(Point::new(2, 1), CellState::Wall);
        assert_eq!(c.at(Point::new(2, 1)), CellState::Wall);
        assert_eq!(c.at(Point::new(1, 2)), CellState::Empty);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut c = Canvas::new(4);
        let before = c.clone();
        c.set(Point::new(-1, 0), CellState::Wall);
        c.set(Point::new(0, -1), CellState::Wall);
        c.set(Point::new(4, 0), CellState::Wall);
        c.set(Point::new(0, 4), CellState::Wall);
        assert_eq!(c, before);
    }

    #[test]
    fn out_of_bounds_reads_are_empty() {
        let c = Canvas::new(4);
        assert_eq!(c.at(Point::new(-1, -1)), CellState::Empty);
        assert_eq!(c.at(Point::new(100, 0)), CellState::Empty);
    }

    #[test]
    fn clear_resets_single_cell() {
        let mut c = Canvas::new(4);
        c.set(Point::new(1, 1), CellState::Path);
        c.clear(Point::new(1, 1));
        assert_eq!(c.at(Point::new(1, 1)), CellState::Empty);
    }

    #[test]
    fn reset_leaves_all_empty_and_may_resize() {
        let mut c = Canvas::new(4);
        c.set(Point::new(3, 3), CellState::Wall);
        c.reset(6);
        assert_eq!(c.dim(), 6);
        for (_, state) in c.iter() {
            assert_eq!(state, CellState::Empty);
        }
    }

    #[test]
    fn reset_then_set_leaves_exactly_those_cells() {
        let mut c = Canvas::new(5);
        c.set(Point::new(0, 0), CellState::Wall);
        c.reset(5);
        c.set(Point::new(1, 2), CellState::Path);
        c.set(Point::new(4, 4), CellState::Wall);
        let non_empty: Vec<_> = c.iter().filter(|&(_, s)| s != CellState::Empty).collect();
        assert_eq!(
            non_empty,
            vec![
                (Point::new(1, 2), CellState::Path),
                (Point::new(4, 4), CellState::Wall),
            ]
        );
    }

    #[test]
    fn find_all_is_row_major() {
        let mut c = Canvas::new(4);
        c.set(Point::new(3, 2), CellState::Path);
        c.set(Point::new(1, 0), CellState::Path);
        c.set(Point::new(0, 2), CellState::Path);
        assert_eq!(
            c.find_all(CellState::Path),
            vec![Point::new(1, 0), Point::new(0, 2), Point::new(3, 2)]
        );
    }

    #[test]
    fn clear_markers_preserves_walls_and_path() {
        let mut c = Canvas::new(3);
        c.set(Point::new(0, 0), CellState::Path);
        c.set(Point::new(1, 0), CellState::Wall);
        c.set(Point::new(2, 0), CellState::Frontier);
        c.set(Point::new(0, 1), CellState::Visited);
        c.clear_markers();
        assert_eq!(c.at(Point::new(0, 0)), CellState::Path);
        assert_eq!(c.at(Point::new(1, 0)), CellState::Wall);
        assert_eq!(c.at(Point::new(2, 0)), CellState::Empty);
        assert_eq!(c.at(Point::new(0, 1)), CellState::Empty);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn canvas_round_trip() {
        let mut c = Canvas::new(3);
        c.set(Point::new(1, 1), CellState::Wall);
        let json = serde_json::to_string(&c).unwrap();
        let back: Canvas = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
