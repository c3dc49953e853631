//! Tooling & Integration Layer
//!
//! The `deskfs` command line: one-shot commands over a persisted session and
//! an interactive terminal.

pub mod cli;
pub mod repl;

pub use cli::{Cli, CliContext, Commands};
pub use repl::Repl;
