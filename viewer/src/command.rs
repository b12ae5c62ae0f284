//! Commands a user can issue to a running viewer session.

use std::str::FromStr;

use thiserror::Error;

/// A user trigger. Each one maps to exactly one request except `Help` and
/// `Quit`, which never touch the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Comments,
    Create,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command `{0}` (try `help`)")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "refresh" => Ok(Command::Refresh),
            "c" | "comments" => Ok(Command::Comments),
            "p" | "create" => Ok(Command::Create),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  r, refresh   fetch posts again and redraw the list
  c, comments  fetch comments and log them
  p, create    send the demo post and log the response
  h, help      show this help
  q, quit      exit
";
