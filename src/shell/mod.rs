//! Terminal shell
//!
//! Turns text command lines into file system calls and renders the result as
//! terminal output. Failures never escape: they come back as `Error: ...`
//! lines, the way a terminal shows them.

pub mod command;

pub use command::{Command, ParseError};

use crate::error::VfsError;
use crate::explorer::format::render_tree;
use crate::session::SharedFileSystem;
use tracing::debug;

pub const HELP_TEXT: &str = "Available commands: mkdir, touch, ls, cat, cd, pwd, rm, mv, echo, write, stat, tree, clear, help";

/// Output of one command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutput {
    Text(String),
    /// The terminal should clear its scrollback
    Clear,
    /// Blank input; nothing to show
    Nothing,
}

impl ShellOutput {
    pub fn text(&self) -> &str {
        match self {
            ShellOutput::Text(text) => text,
            ShellOutput::Clear | ShellOutput::Nothing => "",
        }
    }
}

pub struct Shell {
    fs: SharedFileSystem,
}

impl Shell {
    pub fn new(fs: SharedFileSystem) -> Self {
        Self { fs }
    }

    /// Run one command line.
    pub fn execute(&self, line: &str) -> ShellOutput {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return ShellOutput::Nothing,
            Err(e @ ParseError::UnknownCommand(_)) => return ShellOutput::Text(e.to_string()),
            Err(e) => return ShellOutput::Text(format!("Error: {}", e)),
        };
        debug!(?command, "shell command");
        match self.run(command) {
            Ok(output) => output,
            Err(e) => ShellOutput::Text(format!("Error: {}", e)),
        }
    }

    fn run(&self, command: Command) -> Result<ShellOutput, VfsError> {
        let text = match command {
            Command::Mkdir(path) => self.fs.write().mkdir(&path)?,
            Command::Touch(path) => self.fs.write().touch(&path)?,
            Command::Ls(path) => self
                .fs
                .read()
                .ls(path.as_deref().unwrap_or("."))?
                .into_iter()
                .map(|entry| entry.name)
                .collect::<Vec<_>>()
                .join("\n"),
            Command::Cat(path) => self.fs.read().cat(&path)?,
            Command::Cd(path) => self.fs.write().cd(&path)?,
            Command::Pwd => self.fs.read().pwd(),
            Command::Rm(path) => self.fs.write().rm(&path)?,
            Command::Mv { source, dest } => self.fs.write().mv(&source, &dest)?,
            Command::Echo(text) => text,
            Command::Write { path, content } => self.fs.write().update_file(&path, content)?,
            Command::Stat(path) => {
                let info = self.fs.read().get_file_info(&path)?;
                format!(
                    "Name: {}\nType: {}\nSize: {}\nCreated: {}\nModified: {}",
                    info.name,
                    info.kind,
                    info.size,
                    info.created_at.to_rfc3339(),
                    info.modified_at.to_rfc3339()
                )
            }
            Command::Tree(path) => {
                let tree = self.fs.read().tree(path.as_deref().unwrap_or("."))?;
                render_tree(&tree)
            }
            Command::Clear => return Ok(ShellOutput::Clear),
            Command::Help => HELP_TEXT.to_string(),
        };
        Ok(ShellOutput::Text(text))
    }
}
