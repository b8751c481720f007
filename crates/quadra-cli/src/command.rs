//! Line commands read from stdin.

use crate::error::{CliError, Result};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Increment(usize),
    Decrement(usize),
    /// Raw values; range and sign are checked by the ballot
    Set { candidate: i64, weight: i64 },
    Show,
    Events,
    Done,
    Quit,
    Help,
}

fn number<T: std::str::FromStr>(line: &str, token: Option<&str>) -> Result<T> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| CliError::BadCommand(line.to_string()))
}

impl Command {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Ok(None);
        };

        let command = match head {
            "+" | "inc" => Command::Increment(number(line, tokens.next())?),
            "-" | "dec" => Command::Decrement(number(line, tokens.next())?),
            "set" => Command::Set {
                candidate: number(line, tokens.next())?,
                weight: number(line, tokens.next())?,
            },
            "show" => Command::Show,
            "events" => Command::Events,
            "done" => Command::Done,
            "quit" | "exit" => Command::Quit,
            "help" | "?" => Command::Help,
            _ => return Err(CliError::BadCommand(line.to_string())),
        };

        if tokens.next().is_some() {
            return Err(CliError::BadCommand(line.to_string()));
        }
        Ok(Some(command))
    }
}
