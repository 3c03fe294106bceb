//! Text output for each [`Command`](crate::Command).
//!
//! Every renderer writes complete lines, including the trailing newline.

use std::collections::HashSet;
use std::fmt::{self, Write};

use mazetree_core::{CellKind, Maze, Point};
use mazetree_paths::{Solution, TraversalTree};

/// Indent added per tree level by [`dump_tree`].
pub const TREE_INDENT: &str = "| ";

/// Every maze cell in column-then-row order, with the endpoints labelled.
pub fn dump_cells(out: &mut impl Write, maze: &Maze) -> fmt::Result {
    writeln!(out, "DUMPING OUT ALL CELLS FROM THE MAZE:")?;
    for (p, kind) in maze.sorted_cells() {
        if kind.is_endpoint() {
            writeln!(out, "  {p}    {kind}")?;
        } else {
            writeln!(out, "  {p}")?;
        }
    }
    Ok(())
}

/// Every tree node in pre-order, indented by depth.
pub fn dump_tree(out: &mut impl Write, tree: &TraversalTree) -> fmt::Result {
    writeln!(out, "DUMPING OUT THE TREE THAT REPRESENTS THE MAZE:")?;
    for (_, node) in tree.preorder() {
        writeln!(out, "  {}{}", TREE_INDENT.repeat(node.depth()), node.pos())?;
    }
    Ok(())
}

/// The bounding box as width and height.
pub fn dump_size(out: &mut impl Write, size: Point) -> fmt::Result {
    writeln!(out, "MAP SIZE:")?;
    writeln!(out, "  wid: {}", size.x)?;
    writeln!(out, "  hei: {}", size.y)
}

/// The solution cells in walking order.
pub fn dump_solution(out: &mut impl Write, solution: &Solution) -> fmt::Result {
    writeln!(out, "PATH OF THE SOLUTION:")?;
    for p in solution.iter() {
        writeln!(out, "  {p}")?;
    }
    Ok(())
}

/// The maze redrawn over its bounding box with the solution marked by `.`.
///
/// Endpoints keep their letters, other cells print `#` and blanks print a
/// space, so every row is exactly as wide as the box.
pub fn solved_maze(out: &mut impl Write, maze: &Maze, solution: &Solution) -> fmt::Result {
    writeln!(out, "SOLUTION:")?;
    let on_path: HashSet<Point> = solution.iter().collect();
    let bounds = maze.bounds();
    let mut row = String::with_capacity(bounds.width().max(0) as usize);
    for y in 0..bounds.height() {
        row.clear();
        row.extend(bounds.line(y).iter().map(|p| match maze.kind(p) {
            Some(CellKind::Path) if on_path.contains(&p) => '.',
            Some(kind) => kind.to_char(),
            None => ' ',
        }));
        writeln!(out, "{row}")?;
    }
    Ok(())
}
