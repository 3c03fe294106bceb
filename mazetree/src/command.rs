//! The command line read after the maze file name.

use std::fmt;
use std::str::FromStr;

/// What to print once the maze has been solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `dumpCells`: every maze cell, column by column.
    DumpCells,
    /// `dumpTree`: the traversal tree in pre-order.
    DumpTree,
    /// `dumpSize`: the bounding box.
    DumpSize,
    /// `dumpSolution`: the solution cells in walking order.
    DumpSolution,
    /// Empty line: the maze with the solution drawn in.
    Render,
}

impl Command {
    /// The text that selects this command.
    pub const fn keyword(self) -> &'static str {
        match self {
            Command::DumpCells => "dumpCells",
            Command::DumpTree => "dumpTree",
            Command::DumpSize => "dumpSize",
            Command::DumpSolution => "dumpSolution",
            Command::Render => "",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Matching is exact: case and surrounding whitespace are significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dumpCells" => Ok(Command::DumpCells),
            "dumpTree" => Ok(Command::DumpTree),
            "dumpSize" => Ok(Command::DumpSize),
            "dumpSolution" => Ok(Command::DumpSolution),
            "" => Ok(Command::Render),
            other => Err(CommandError::Unrecognized(other.to_string())),
        }
    }
}

/// A command line that names no known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unrecognized(String),
}

impl CommandError {
    /// The one-line message shown to the user.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Unrecognized(cmd) => format!("ERROR: Unrecognized command {cmd}"),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(cmd) => write!(f, "unrecognized command {cmd:?}"),
        }
    }
}

impl std::error::Error for CommandError {}
