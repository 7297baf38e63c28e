//! Visualizer configuration.
//!
//! The grid dimension, pixel sizes, and colours are an explicit structure
//! handed to the presentation layer at construction rather than module-level
//! constants.

use crate::style::Palette;

/// Options recognized by the visualizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualizerConfig {
    /// Grid side length, in cells.
    pub dimension: i32,
    /// Render scale: side length of one cell, in pixels.
    pub cell_px: i32,
    /// State-to-colour mapping.
    pub palette: Palette,
}

impl Default for VisualizerConfig {
    /// A 25×25 grid at 20 px per cell (a 500 px square grid area).
    fn default() -> Self {
        Self {
            dimension: 25,
            cell_px: 20,
            palette: Palette::default(),
        }
    }
}

impl VisualizerConfig {
    /// Side length of the whole grid area, in pixels.
    #[inline]
    pub const fn grid_px(&self) -> i32 {
        self.dimension * self.cell_px
    }
}
