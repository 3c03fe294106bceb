//! mazetree — solve a text maze read from a file and print one view of it.
//!
//! The protocol is two input lines: a maze file name, then a command
//! (`dumpCells`, `dumpTree`, `dumpSize`, `dumpSolution`, or an empty line
//! for the solved maze). See [`Session`].

pub mod command;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use session::{Outcome, Session, Solved};

/// Environment variable holding the `env_logger` filter. Logging is off
/// unless it is set.
pub const LOG_ENV: &str = "MAZETREE_LOG";

/// Environment variable holding the `env_logger` write style.
pub const LOG_STYLE_ENV: &str = "MAZETREE_LOG_STYLE";
