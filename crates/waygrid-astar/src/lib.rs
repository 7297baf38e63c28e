//! **waygrid-astar** — A* pathfinding for the waygrid visualizer.
//!
//! The centrepiece is [`search`]: classical A* over an 8-connected
//! [`Canvas`](waygrid_core::Canvas), annotating the canvas with
//! frontier/visited markers as it goes and invoking a caller hook per
//! expansion step so a frontend can render the search incrementally.
//!
//! The default algorithm carries a few deliberate quirks (duplicate node
//! allocation, unpenalized diagonals, non-admissible squared-Euclidean
//! heuristic) that shape which of several equal paths the visualizer shows;
//! [`SearchOptions`] exposes a corrected variant for callers that prefer
//! optimality.

mod error;
mod heuristic;
mod node;
mod search;

pub use error::SearchError;
pub use heuristic::{chebyshev, euclidean_sq};
pub use node::SearchNode;
pub use search::{SearchOptions, search, search_with};
