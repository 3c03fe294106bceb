//! **mazetree-core** — maze text parsing and grid geometry.
//!
//! This crate provides the foundational types used across the *mazetree*
//! workspace: geometry primitives, cell kinds, and the parsed [`Maze`]
//! together with its error type.

pub mod cell;
pub mod geom;
pub mod maze;

pub use cell::CellKind;
pub use geom::{Direction, Point, Range};
pub use maze::{Maze, MazeError};
