//! Traversal trees and path extraction for parsed mazes.
//!
//! - [`TraversalTree::build`] walks every cell reachable from a start point
//!   depth-first, trying up, down, left, right in that order, and records
//!   the walk as a tree with no repeated cells.
//! - [`Solution::extract`] walks that tree in pre-order and keeps the
//!   root-to-goal path.
//!
//! The solution is *a* path, the one the fixed exploration order finds
//! first; it is not guaranteed to be the shortest.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`GoalPather`] : [`Pather`] | tree building |

mod solution;
mod traits;
mod tree;

pub use solution::Solution;
pub use traits::{GoalPather, Pather};
pub use tree::{NodeId, Preorder, TraversalTree, TreeNode};
