//! Distance functions.

use waygrid_core::Point;

/// Squared Euclidean distance between two points.
///
/// This is the search heuristic. With unit step cost it overestimates the
/// remaining distance (it is not admissible), which is a deliberate contract
/// of this visualizer rather than a textbook A* guarantee.
#[inline]
pub fn euclidean_sq(a: Point, b: Point) -> i32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Chebyshev (L∞) distance between two points — the true shortest path
/// length on an open 8-connected grid with unit step cost.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_sq_values() {
        assert_eq!(euclidean_sq(Point::new(0, 0), Point::new(3, 4)), 25);
        assert_eq!(euclidean_sq(Point::new(2, 2), Point::new(2, 2)), 0);
        assert_eq!(euclidean_sq(Point::new(5, 1), Point::new(1, 1)), 16);
    }

    #[test]
    fn chebyshev_values() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(4, 4)), 4);
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(2, 4)), 4);
        assert_eq!(chebyshev(Point::new(3, 3), Point::new(3, 3)), 0);
    }
}
