use std::str::FromStr;

use minesweep_core::{Action, Coord};
use thiserror::Error;

/// A line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid coordinates, use numbers for row and column")]
    InvalidCoords,
    #[error("Invalid command, use 'o row col', 'm row col' or 'q'")]
    Unknown,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim().to_lowercase();
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] => Ok(Self::Quit),
            [verb @ ("o" | "m"), row, column] => {
                let coords = (parse_coord(row)?, parse_coord(column)?);
                Ok(Self::Play(if *verb == "o" {
                    Action::Open(coords)
                } else {
                    Action::Mark(coords)
                }))
            }
            _ => Err(CommandError::Unknown),
        }
    }
}

fn parse_coord(text: &str) -> Result<Coord, CommandError> {
    text.parse().map_err(|_| CommandError::InvalidCoords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!("o 1 2".parse(), Ok(Command::Play(Action::Open((1, 2)))));
        assert_eq!("  M 0 7 ".parse(), Ok(Command::Play(Action::Mark((0, 7)))));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("o a 2".parse::<Command>(), Err(CommandError::InvalidCoords));
        assert_eq!("o -1 2".parse::<Command>(), Err(CommandError::InvalidCoords));
        assert_eq!("x 1 2".parse::<Command>(), Err(CommandError::Unknown));
        assert_eq!("o 1".parse::<Command>(), Err(CommandError::Unknown));
        assert_eq!("".parse::<Command>(), Err(CommandError::Unknown));
    }
}
