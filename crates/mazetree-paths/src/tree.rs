//! Depth-first traversal trees.
//!
//! A [`TraversalTree`] spans every cell reachable from a start point. It is
//! built by a depth-first walk that tries the four moves in
//! [`Direction::ALL`] order and never enters a cell twice, so each reachable
//! cell appears at exactly one node and the result has no cycles.
//!
//! Nodes live in an arena and refer to their children by [`NodeId`]. The
//! walk keeps its own stack instead of recursing, so the depth of a maze is
//! not limited by the call stack.

use std::collections::HashSet;

use log::{debug, trace, warn};
use mazetree_core::{Direction, Point};

use crate::traits::GoalPather;

/// Index of a node inside a [`TraversalTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single cell in a traversal tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pos: Point,
    is_end: bool,
    depth: usize,
    children: [Option<NodeId>; 4],
}

impl TreeNode {
    /// The maze coordinate of this node.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Whether this node is the goal cell.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Distance from the root in edges (the root has depth 0).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Child slots indexed by [`Direction::index`].
    #[inline]
    pub fn children(&self) -> &[Option<NodeId>; 4] {
        &self.children
    }

    /// The child reached by moving `dir`, if any.
    #[inline]
    pub fn child(&self, dir: Direction) -> Option<NodeId> {
        self.children[dir.index()]
    }

    /// Whether every child slot is empty.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// A rooted spanning tree over the cells reachable from a start point.
///
/// Nodes are stored in the order the depth-first walk first reached them,
/// which is also their pre-order. An empty tree has no root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalTree {
    nodes: Vec<TreeNode>,
}

// Pending work for one node: the neighbors that existed when it was
// created, and how many of them have been considered so far.
struct Frame {
    node: NodeId,
    neighbors: Vec<(Direction, Point)>,
    next: usize,
}

impl TraversalTree {
    /// Build the tree rooted at `start`.
    ///
    /// `start` must be a cell of `pather`; otherwise the tree is empty.
    pub fn build<P: GoalPather>(pather: &P, start: Point) -> Self {
        let mut visited = HashSet::new();
        Self::build_with_visited(pather, start, &mut visited)
    }

    /// Build the tree rooted at `start`, recording every cell it enters in
    /// `visited`.
    ///
    /// Cells already in `visited` are treated as taken and are not entered
    /// (the root itself is always created). When the call returns, each
    /// node's coordinate has been added to `visited`.
    pub fn build_with_visited<P: GoalPather>(
        pather: &P,
        start: Point,
        visited: &mut HashSet<Point>,
    ) -> Self {
        let mut tree = Self::default();
        if !pather.contains(start) {
            warn!("traversal start {start} is not a maze cell; tree is empty");
            return tree;
        }

        let root = tree.push(start, pather.is_goal(start), 0);
        visited.insert(start);
        let mut stack = vec![Frame::new(pather, root, start)];

        while let Some(frame) = stack.last_mut() {
            let Some(&(dir, next)) = frame.neighbors.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            // A neighbor counts as taken only if it was entered before this
            // slot is reached, exactly as a recursive walk would see it.
            if !visited.insert(next) {
                continue;
            }
            let parent = frame.node;
            let depth = tree.nodes[parent.0].depth + 1;
            let child = tree.push(next, pather.is_goal(next), depth);
            tree.nodes[parent.0].children[dir.index()] = Some(child);
            trace!("{next} attached {dir:?} of {}", tree.nodes[parent.0].pos);
            stack.push(Frame::new(pather, child, next));
        }

        debug!("traversal tree from {start}: {} nodes", tree.nodes.len());
        tree
    }

    fn push(&mut self, pos: Point, is_end: bool, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            pos,
            is_end,
            depth,
            children: [None; 4],
        });
        id
    }

    /// The root node, or `None` for an empty tree.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    /// Access a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether some node holds `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.nodes.iter().any(|n| n.pos == p)
    }

    /// The goal node, if the goal was reachable.
    pub fn end_node(&self) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.is_end).map(NodeId)
    }

    /// Walk the tree in pre-order, visiting children up, down, left, right.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.root().into_iter().collect(),
        }
    }
}

impl Frame {
    fn new<P: GoalPather>(pather: &P, node: NodeId, pos: Point) -> Self {
        let mut neighbors = Vec::with_capacity(4);
        pather.neighbors(pos, &mut neighbors);
        Self {
            node,
            neighbors,
            next: 0,
        }
    }
}

/// Pre-order iterator over `(NodeId, &TreeNode)` pairs.
pub struct Preorder<'a> {
    tree: &'a TraversalTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack.extend(node.children.iter().rev().flatten());
        Some((id, node))
    }
}
