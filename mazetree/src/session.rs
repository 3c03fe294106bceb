//! One run of the line-oriented protocol: a maze file name, then a command.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use mazetree_core::{Maze, MazeError, Point};
use mazetree_paths::{Solution, TraversalTree};

use crate::command::{Command, CommandError};
use crate::render;

/// Everything computed for a maze before any command is looked at.
#[derive(Debug, Clone)]
pub struct Solved {
    pub maze: Maze,
    pub tree: TraversalTree,
    pub solution: Solution,
    pub size: Point,
}

impl Solved {
    /// Build the traversal tree from the maze start and extract the
    /// solution.
    pub fn new(maze: Maze) -> Self {
        let tree = TraversalTree::build(&maze, maze.start());
        let solution = Solution::extract(&tree);
        let size = maze.size();
        Self {
            maze,
            tree,
            solution,
            size,
        }
    }

    /// The text printed for `cmd`.
    pub fn render(&self, cmd: Command) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = match cmd {
            Command::DumpCells => render::dump_cells(&mut out, &self.maze),
            Command::DumpTree => render::dump_tree(&mut out, &self.tree),
            Command::DumpSize => render::dump_size(&mut out, self.size),
            Command::DumpSolution => render::dump_solution(&mut out, &self.solution),
            Command::Render => render::solved_maze(&mut out, &self.maze, &self.solution),
        };
        out
    }
}

/// How a session ended. Every variant has already been reported on the
/// session output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran.
    Completed(Command),
    /// The maze file could not be read or parsed; no command was read.
    Rejected(MazeError),
    /// The maze was solved but the command was not recognized.
    Unrecognized(CommandError),
}

/// Reads requests from `input` and writes all user-facing text, including
/// diagnostics, to `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the protocol once.
    ///
    /// Maze and command problems are reported on the output and returned
    /// as an [`Outcome`]; only I/O failures on the streams themselves are
    /// errors.
    pub fn run(&mut self) -> io::Result<Outcome> {
        let filename = self.read_line()?;
        let maze = match Maze::load(&filename) {
            Ok(maze) => maze,
            Err(err) => {
                info!("rejected {filename}: {err}");
                writeln!(self.output, "{}", err.diagnostic())?;
                return Ok(Outcome::Rejected(err));
            }
        };

        let line = self.read_line()?;
        // The maze is solved whether or not the command turns out valid.
        let solved = Solved::new(maze);
        debug!(
            "solved {filename}: {} tree nodes, {} solution cells",
            solved.tree.len(),
            solved.solution.len()
        );

        let outcome = match line.parse::<Command>() {
            Ok(cmd) => {
                self.output.write_all(solved.render(cmd).as_bytes())?;
                Outcome::Completed(cmd)
            }
            Err(err) => {
                writeln!(self.output, "{}", err.diagnostic())?;
                Outcome::Unrecognized(err)
            }
        };
        self.output.flush()?;
        Ok(outcome)
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    // One line without its line break; end of input reads as an empty line.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
