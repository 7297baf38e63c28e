//! The [`SearchNode`] type.

use std::rc::Rc;

use waygrid_core::Point;

/// A node in the A* search tree.
///
/// Nodes are immutable once created: a cheaper route to an already-open cell
/// allocates a new node rather than editing the old one. Parent links form a
/// chain back to the start node, used for path reconstruction.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Cell this node stands on.
    pub pos: Point,
    /// Originating node, `None` for the start node.
    pub parent: Option<Rc<SearchNode>>,
    /// Steps from the start.
    pub g: i32,
    /// Heuristic estimate to the goal (squared Euclidean).
    pub h: i32,
    /// Total estimated cost, `g + h`.
    pub f: i32,
}

impl SearchNode {
    /// The start node: no parent, all costs zero.
    pub fn root(pos: Point) -> Self {
        Self {
            pos,
            parent: None,
            g: 0,
            h: 0,
            f: 0,
        }
    }

    /// A node one unit step from `parent`.
    pub fn step(parent: &Rc<SearchNode>, pos: Point, h: i32) -> Self {
        let g = parent.g + 1;
        Self {
            pos,
            parent: Some(Rc::clone(parent)),
            g,
            h,
            f: g + h,
        }
    }
}

/// Equality is defined purely by position: two nodes at the same cell are
/// the same node for open/closed membership, regardless of cost or parent.
impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_cost_and_parent() {
        let a = SearchNode::root(Point::new(2, 3));
        let root = Rc::new(SearchNode::root(Point::new(0, 0)));
        let b = SearchNode::step(&root, Point::new(2, 3), 17);
        assert_eq!(a, b);
        assert_ne!(a, SearchNode::root(Point::new(3, 2)));
    }

    #[test]
    fn step_accumulates_costs() {
        let root = Rc::new(SearchNode::root(Point::new(0, 0)));
        let n = SearchNode::step(&root, Point::new(1, 1), 8);
        assert_eq!(n.g, 1);
        assert_eq!(n.h, 8);
        assert_eq!(n.f, 9);
        assert_eq!(n.parent.as_ref().unwrap().pos, Point::new(0, 0));
    }
}
