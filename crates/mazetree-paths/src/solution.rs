//! Start-to-end path extraction from a [`TraversalTree`].

use log::debug;
use mazetree_core::Point;

use crate::tree::{NodeId, TraversalTree};

/// The walk from the tree root to the goal node, both included.
///
/// Empty when the goal is not in the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    points: Vec<Point>,
}

impl Solution {
    /// Find the path to the goal by a pre-order walk of `tree`.
    ///
    /// Each child is explored with its own copy of the path leading to it,
    /// so sibling branches never see each other's cells. When a goal node
    /// is visited the whole path so far replaces the result and the walk
    /// does not go below it; if several goal nodes existed, the last one in
    /// pre-order would win. An empty tree yields an empty solution.
    pub fn extract(tree: &TraversalTree) -> Self {
        let mut points = Vec::new();
        let Some(root) = tree.root() else {
            return Self { points };
        };

        // One shared buffer stands in for the per-branch copies: a node is
        // stacked with the path length of its parent, and the buffer is cut
        // back to that length before the node is appended.
        let mut path: Vec<Point> = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        while let Some((id, parent_len)) = stack.pop() {
            let node = tree.node(id);
            path.truncate(parent_len);
            path.push(node.pos());
            if node.is_end() {
                points.clone_from(&path);
                continue;
            }
            let len = path.len();
            stack.extend(node.children().iter().rev().flatten().map(|&c| (c, len)));
        }

        debug!("solution: {} cells", points.len());
        Self { points }
    }

    /// The path cells in walking order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no path was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `p` lies on the path.
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// The first cell (the start), if any.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The last cell (the end), if any.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Iterate over the path cells in walking order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl From<Solution> for Vec<Point> {
    fn from(s: Solution) -> Self {
        s.points
    }
}
