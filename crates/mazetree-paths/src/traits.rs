use mazetree_core::{CellKind, Direction, Maze, Point};

/// Minimal traversal interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the enterable neighbors of `p` into `buf`, each paired with the
    /// move that reaches it, in [`Direction::ALL`] order. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<(Direction, Point)>);
}

/// Pather that knows which points exist and which one is the goal.
pub trait GoalPather: Pather {
    /// Whether `p` is a cell that can be part of a traversal.
    fn contains(&self, p: Point) -> bool;

    /// Whether reaching `p` completes a path.
    fn is_goal(&self, p: Point) -> bool;
}

impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<(Direction, Point)>) {
        for dir in Direction::ALL {
            let n = p.step(dir);
            if Maze::contains(self, n) {
                buf.push((dir, n));
            }
        }
    }
}

impl GoalPather for Maze {
    #[inline]
    fn contains(&self, p: Point) -> bool {
        Maze::contains(self, p)
    }

    #[inline]
    fn is_goal(&self, p: Point) -> bool {
        self.kind(p) == Some(CellKind::End)
    }
}
