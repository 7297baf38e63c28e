//! A* search over the cell canvas, with an incremental visualization hook.
//!
//! The search is classical grid A* over 8-connected cells with unit step
//! cost (diagonal moves are NOT penalized √2) and a squared-Euclidean
//! heuristic. The open and closed lists are plain vectors with linear scans
//! — O(V²) over the reachable cell count, which is fine at the grid sizes
//! this visualizer targets (~25×25).
//!
//! Two behaviors are deliberate contracts, not oversights:
//!
//! - The returned path is ordered **goal-to-start**. Callers that need
//!   start-to-goal order reverse it themselves.
//! - The `on_step` hook fires once per neighbor candidate that passes the
//!   bounds/wall/closed filters — per neighbor, not per expansion. That is
//!   the visualization granularity the frontend replays.

use std::rc::Rc;

use waygrid_core::{Canvas, CellState, Point};

use crate::error::SearchError;
use crate::heuristic::euclidean_sq;
use crate::node::SearchNode;

/// The 8 neighbor offsets, cardinals before diagonals.
///
/// The order is load-bearing: open-list ties break toward the
/// earliest-inserted node, so reordering changes which of several
/// equal-cost paths is found.
const NEIGHBOR_OFFSETS: [Point; 8] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Tuning knobs for [`search_with`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// When a cheaper route to an already-open cell is found, replace the
    /// costlier open node instead of inserting a duplicate.
    ///
    /// Off by default: the default behavior inserts duplicates and never
    /// updates an open node, which can settle on a slightly suboptimal
    /// path. Turning this on changes search results.
    pub reopen_better: bool,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Shortest discovered path from `start` to `end`, or `Ok(None)` when the
/// goal is unreachable.
///
/// Side effects: progressively marks expanded cells [`CellState::Visited`]
/// and discovered cells [`CellState::Frontier`] on `canvas`, and invokes
/// `on_step(canvas)` once per neighbor candidate that passes the
/// bounds/wall/closed filters. Walls are never overwritten; caller-painted
/// `Path` markers at the endpoints are (the start is marked Visited on its
/// expansion, the end Frontier/Visited like any reachable cell) — the caller
/// repaints the path after a successful search.
///
/// The returned sequence runs **goal-to-start**: its first element is `end`
/// and its last is `start`.
pub fn search<F>(
    canvas: &mut Canvas,
    start: Point,
    end: Point,
    on_step: F,
) -> Result<Option<Vec<Point>>, SearchError>
where
    F: FnMut(&Canvas),
{
    search_with(canvas, start, end, SearchOptions::default(), on_step)
}

/// [`search`] with explicit [`SearchOptions`].
pub fn search_with<F>(
    canvas: &mut Canvas,
    start: Point,
    end: Point,
    opts: SearchOptions,
    mut on_step: F,
) -> Result<Option<Vec<Point>>, SearchError>
where
    F: FnMut(&Canvas),
{
    if !canvas.contains(start) {
        return Err(SearchError::StartOutOfBounds(start));
    }
    if !canvas.contains(end) {
        return Err(SearchError::EndOutOfBounds(end));
    }

    log::debug!("search: start={start} end={end} dim={}", canvas.dim());

    let mut open: Vec<Rc<SearchNode>> = vec![Rc::new(SearchNode::root(start))];
    let mut closed: Vec<Rc<SearchNode>> = Vec::new();

    while !open.is_empty() {
        // Linear scan keeping the first strictly smaller f, so ties favor
        // the earliest-inserted candidate.
        let mut best = 0;
        for (i, node) in open.iter().enumerate() {
            if node.f < open[best].f {
                best = i;
            }
        }
        let current = open.remove(best);
        closed.push(Rc::clone(&current));
        canvas.set(current.pos, CellState::Visited);

        if current.pos == end {
            let mut path = Vec::with_capacity(current.g as usize + 1);
            let mut cur: Option<&Rc<SearchNode>> = Some(&current);
            while let Some(node) = cur {
                path.push(node.pos);
                cur = node.parent.as_ref();
            }
            log::debug!("search: found path of {} cells", path.len());
            return Ok(Some(path));
        }

        for off in NEIGHBOR_OFFSETS {
            let np = current.pos + off;
            if !canvas.contains(np) {
                continue;
            }
            if canvas.at(np) == CellState::Wall {
                continue;
            }
            if closed.iter().any(|n| n.pos == np) {
                continue;
            }

            let candidate = SearchNode::step(&current, np, euclidean_sq(np, end));

            // First-found cost at equal-or-better value wins: the candidate
            // is dropped, never merged into the existing open node.
            let beaten = open.iter().any(|n| n.pos == np && candidate.g >= n.g);
            if !beaten {
                if opts.reopen_better {
                    open.retain(|n| n.pos != np);
                }
                open.push(Rc::new(candidate));
                canvas.set(np, CellState::Frontier);
            }

            on_step(canvas);
        }
    }

    log::debug!("search: open list exhausted, no path");
    Ok(None)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn options_round_trip() {
        let opts = SearchOptions { reopen_better: true };
        let json = serde_json::to_string(&opts).unwrap();
        let back: SearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, back);
    }
}
