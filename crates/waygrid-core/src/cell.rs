//! The [`CellState`] type — what a single canvas cell currently holds.

/// State of a single canvas cell. Exactly one state per cell at any time.
///
/// `Frontier` and `Visited` are transient search annotations written by the
/// pathfinder for visualization; they are swept back to `Empty` before a
/// found path is committed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Nothing painted here.
    #[default]
    Empty,
    /// An obstacle painted by the user.
    Wall,
    /// A start/end endpoint or a committed path cell.
    Path,
    /// Discovered but not yet expanded by the search (open list).
    Frontier,
    /// Already expanded by the search (closed list).
    Visited,
}

impl CellState {
    /// Whether this state is a transient search annotation.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited)
    }
}
