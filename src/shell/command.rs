//! Command line parsing for the terminal.

use thiserror::Error;

/// A parsed terminal command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mkdir(String),
    Touch(String),
    Ls(Option<String>),
    Cat(String),
    /// `cd` with no operand goes to `/`
    Cd(String),
    Pwd,
    Rm(String),
    Mv { source: String, dest: String },
    Echo(String),
    Write { path: String, content: String },
    Stat(String),
    Tree(Option<String>),
    Clear,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,

    #[error("Command not found: {0}")]
    UnknownCommand(String),

    #[error("{0}: missing operand")]
    MissingOperand(String),
}

/// Split off the first whitespace-delimited token.
fn split_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], input[at..].trim_start()),
        None => (input, ""),
    }
}

impl Command {
    /// Parse one line. Command names are case-insensitive.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let (name, rest) = split_token(line.trim());
        if name.is_empty() {
            return Err(ParseError::Empty);
        }
        let args: Vec<&str> = rest.split_whitespace().collect();
        let lowered = name.to_lowercase();
        let first = |cmd: &str| -> Result<String, ParseError> {
            args.first()
                .map(|a| a.to_string())
                .ok_or_else(|| ParseError::MissingOperand(cmd.to_string()))
        };

        let command = match lowered.as_str() {
            "mkdir" => Command::Mkdir(first("mkdir")?),
            "touch" => Command::Touch(first("touch")?),
            "ls" => Command::Ls(args.first().map(|a| a.to_string())),
            "cat" => Command::Cat(first("cat")?),
            "cd" => Command::Cd(args.first().map(|a| a.to_string()).unwrap_or_else(|| "/".to_string())),
            "pwd" => Command::Pwd,
            "rm" => Command::Rm(first("rm")?),
            "mv" => match args.as_slice() {
                [source, dest, ..] => Command::Mv {
                    source: source.to_string(),
                    dest: dest.to_string(),
                },
                _ => return Err(ParseError::MissingOperand("mv".to_string())),
            },
            "echo" => Command::Echo(rest.to_string()),
            "write" => {
                let (path, content) = split_token(rest);
                if path.is_empty() {
                    return Err(ParseError::MissingOperand("write".to_string()));
                }
                Command::Write {
                    path: path.to_string(),
                    content: content.to_string(),
                }
            }
            "stat" => Command::Stat(first("stat")?),
            "tree" => Command::Tree(args.first().map(|a| a.to_string())),
            "clear" => Command::Clear,
            "help" => Command::Help,
            _ => return Err(ParseError::UnknownCommand(name.to_string())),
        };
        Ok(command)
    }
}
