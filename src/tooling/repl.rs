//! Interactive terminal loop for `deskfs shell`.

use crate::error::ApiError;
use crate::session::SharedFileSystem;
use crate::shell::{Command, Shell, ShellOutput, HELP_TEXT};
use dialoguer::{Confirm, Input};
use std::io::ErrorKind;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub struct Repl {
    shell: Shell,
    fs: SharedFileSystem,
}

impl Repl {
    pub fn new(shell: Shell, fs: SharedFileSystem) -> Self {
        Self { shell, fs }
    }

    /// Read and run lines until `exit`, `quit` or end of input.
    pub fn run(&self) -> Result<(), ApiError> {
        println!("{}\nType 'exit' to leave.", HELP_TEXT);
        loop {
            let prompt = format!("{} $", self.fs.read().pwd());
            let line: String = match Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(dialoguer::Error::IO(e))
                    if matches!(e.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted) =>
                {
                    break
                }
                Err(e) => return Err(e.into()),
            };

            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
                break;
            }
            if let Some(prompt) = self.removal_prompt(trimmed) {
                let confirmed = Confirm::new().with_prompt(prompt).default(false).interact()?;
                if !confirmed {
                    continue;
                }
            }
            match self.shell.execute(trimmed) {
                ShellOutput::Text(text) if !text.is_empty() => println!("{}", text),
                ShellOutput::Clear => print!("{}", CLEAR_SCREEN),
                ShellOutput::Text(_) | ShellOutput::Nothing => {}
            }
        }
        Ok(())
    }

    /// Confirmation question for an `rm` that would take a non-empty directory with it.
    pub fn removal_prompt(&self, line: &str) -> Option<String> {
        let Ok(Command::Rm(path)) = Command::parse(line) else {
            return None;
        };
        let fs = self.fs.read();
        match fs.subtree_len(&path).ok()? {
            0 => None,
            1 => Some(format!("Remove {} and the 1 entry inside it?", path)),
            n => Some(format!("Remove {} and the {} entries inside it?", path, n)),
        }
    }
}
