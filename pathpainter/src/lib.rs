//! pathpainter — interactive A* pathfinding visualizer.
//!
//! Paint a start and an end point on a grid, draw wall obstacles, then
//! watch the search explore the grid cell by cell before the found path
//! is committed in red.

pub mod layout;
pub mod model;

pub use layout::Layout;
pub use model::PainterModel;
