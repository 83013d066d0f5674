use std::str::FromStr;

use super::error::{Error, GameResult};

/// The commands the terminal front-end understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A column selection, 1-based as typed by the player.
    Col(usize),
    /// Stop playing.
    Quit,
    /// Show the help page.
    Help,
}

impl Input {
    /// Attempt to get a command from stdin.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for text that parses to no command.
    pub fn get() -> GameResult<Self> {
        let mut buf = String::new();

        std::io::stdin()
            .read_line(&mut buf)
            .expect("Failed to read stdin");
        Input::from_str(&buf)
    }
}

impl FromStr for Input {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "stop" | "exit" | "quit" | "q" | "e" | "s" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            col if col.parse::<usize>().is_ok() => Ok(Self::Col(col.parse::<usize>().unwrap())),
            str => Err(Error::InvalidInput(str.to_string())),
        }
    }
}
