//! Command parsing and outcomes

use thiserror::Error;

/// Command parsing error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// One session operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Delete { offset: usize, length: usize },
    Cut { offset: usize, length: usize },
    Copy { offset: usize, length: usize },
    Paste { offset: usize },
    Highlight { offset: usize, length: usize },
    GetText,
    Undo,
    Redo,
    Misspellings,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Delete { .. } => "delete",
            Command::Cut { .. } => "cut",
            Command::Copy { .. } => "copy",
            Command::Paste { .. } => "paste",
            Command::Highlight { .. } => "highlight",
            Command::GetText => "text",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Misspellings => "misspellings",
        }
    }

    /// Whether the command pushes a history entry
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Command::Delete { .. } | Command::Cut { .. } | Command::Paste { .. }
        )
    }

    pub fn offset(&self) -> Option<usize> {
        match *self {
            Command::Delete { offset, .. }
            | Command::Cut { offset, .. }
            | Command::Copy { offset, .. }
            | Command::Paste { offset }
            | Command::Highlight { offset, .. } => Some(offset),
            _ => None,
        }
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Text produced by the operation
    Text(String),
    /// Misspelling count
    Count(usize),
    /// Undo/redo had nothing to report
    Unchanged,
}

/// Parse a command line such as `cut 0 5` or `undo`
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let mut parts = input.split_whitespace();
    let name = parts.next().ok_or(CommandError::Empty)?.to_lowercase();

    let command = match name.as_str() {
        "delete" | "del" => {
            let (offset, length) = offset_and_length(&mut parts)?;
            Command::Delete { offset, length }
        }
        "cut" => {
            let (offset, length) = offset_and_length(&mut parts)?;
            Command::Cut { offset, length }
        }
        "copy" => {
            let (offset, length) = offset_and_length(&mut parts)?;
            Command::Copy { offset, length }
        }
        "paste" => Command::Paste {
            offset: number(parts.next(), "offset")?,
        },
        "highlight" => {
            let (offset, length) = offset_and_length(&mut parts)?;
            Command::Highlight { offset, length }
        }
        "text" | "get_text" => Command::GetText,
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "misspellings" => Command::Misspellings,
        _ => return Err(CommandError::UnknownCommand(name)),
    };

    if let Some(extra) = parts.next() {
        return Err(CommandError::UnexpectedArgument(extra.to_string()));
    }
    Ok(command)
}

fn offset_and_length<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
) -> Result<(usize, usize), CommandError> {
    let offset = number(parts.next(), "offset")?;
    let length = number(parts.next(), "length")?;
    Ok((offset, length))
}

fn number(arg: Option<&str>, name: &'static str) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(name))?;
    arg.parse().map_err(|_| CommandError::InvalidNumber {
        name,
        value: arg.to_string(),
    })
}
