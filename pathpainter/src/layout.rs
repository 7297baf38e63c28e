//! Pixel layout: grid area, control band, buttons, and pointer mapping.

use waygrid_core::{Point, Rect, VisualizerConfig};

/// Height of the control band under the grid, in pixels.
pub const CONTROL_BAND_PX: i32 = 100;
/// Vertical gap between the grid bottom and the button row.
const BUTTON_TOP_OFFSET: i32 = 25;
/// Button height in pixels.
const BUTTON_HEIGHT: i32 = 50;

/// Window layout derived from the visualizer configuration.
///
/// The grid occupies a `grid_px` × `grid_px` square at the top of the
/// window; below it sits the control band with the DONE button on the left,
/// the RESET button on the right (each one third of the grid width), and
/// the status banner between grid and buttons.
#[derive(Copy, Clone, Debug)]
pub struct Layout {
    dimension: i32,
    cell_px: i32,
}

impl Layout {
    /// Derive the layout from `viz`. The cell pixel size is clamped to at
    /// least 1 so pointer mapping never divides by zero.
    pub fn new(viz: &VisualizerConfig) -> Self {
        Self {
            dimension: viz.dimension,
            cell_px: viz.cell_px.max(1),
        }
    }

    /// Side length of the grid area, in pixels.
    #[inline]
    pub fn grid_px(&self) -> i32 {
        self.dimension * self.cell_px
    }

    /// Window width in pixels.
    #[inline]
    pub fn window_width(&self) -> i32 {
        self.grid_px()
    }

    /// Window height in pixels.
    #[inline]
    pub fn window_height(&self) -> i32 {
        self.grid_px() + CONTROL_BAND_PX
    }

    /// Hit/draw rectangle of the DONE button.
    pub fn done_rect(&self) -> Rect {
        let g = self.grid_px();
        let top = g + BUTTON_TOP_OFFSET;
        Rect::new(0, top, g / 3, top + BUTTON_HEIGHT)
    }

    /// Hit/draw rectangle of the RESET button.
    pub fn reset_rect(&self) -> Rect {
        let g = self.grid_px();
        let top = g + BUTTON_TOP_OFFSET;
        Rect::new(g - g / 3, top, g, top + BUTTON_HEIGHT)
    }

    /// Map a pixel position to the grid cell under it, if any.
    ///
    /// Integer division by the cell pixel size; positions below or outside
    /// the grid area return `None`.
    pub fn cell_at(&self, pixel: Point) -> Option<Point> {
        if pixel.x < 0 || pixel.y < 0 {
            return None;
        }
        let cell = pixel / self.cell_px;
        if cell.x < self.dimension && cell.y < self.dimension {
            Some(cell)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(&VisualizerConfig {
            dimension: 25,
            cell_px: 20,
            ..Default::default()
        })
    }

    #[test]
    fn cell_mapping_is_integer_division() {
        let l = layout();
        assert_eq!(l.cell_at(Point::new(0, 0)), Some(Point::new(0, 0)));
        assert_eq!(l.cell_at(Point::new(19, 19)), Some(Point::new(0, 0)));
        assert_eq!(l.cell_at(Point::new(20, 0)), Some(Point::new(1, 0)));
        assert_eq!(l.cell_at(Point::new(499, 499)), Some(Point::new(24, 24)));
    }

    #[test]
    fn positions_outside_grid_map_to_none() {
        let l = layout();
        assert_eq!(l.cell_at(Point::new(-1, 5)), None);
        assert_eq!(l.cell_at(Point::new(5, -1)), None);
        assert_eq!(l.cell_at(Point::new(500, 10)), None);
        // Control band is below the grid.
        assert_eq!(l.cell_at(Point::new(10, 500)), None);
        assert_eq!(l.cell_at(Point::new(10, 560)), None);
    }

    #[test]
    fn zero_cell_size_is_clamped() {
        let l = Layout::new(&VisualizerConfig {
            dimension: 5,
            cell_px: 0,
            ..Default::default()
        });
        // Maps as a 1 px cell grid instead of dividing by zero.
        assert_eq!(l.cell_at(Point::new(0, 0)), Some(Point::new(0, 0)));
        assert_eq!(l.cell_at(Point::new(4, 0)), Some(Point::new(4, 0)));
        assert_eq!(l.cell_at(Point::new(5, 0)), None);
    }

    #[test]
    fn buttons_sit_in_the_control_band() {
        let l = layout();
        let done = l.done_rect();
        let reset = l.reset_rect();
        assert_eq!(done, Rect::new(0, 525, 166, 575));
        assert_eq!(reset, Rect::new(334, 525, 500, 575));
        assert!(done.contains(Point::new(80, 550)));
        assert!(reset.contains(Point::new(400, 550)));
        // No overlap, and neither reaches into the grid.
        assert!(!done.contains(Point::new(400, 550)));
        assert!(!reset.contains(Point::new(80, 550)));
        assert!(done.min.y >= l.grid_px());
    }
}
