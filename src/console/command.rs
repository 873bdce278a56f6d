//! Console command parsing.

use crate::games::tictactoe::Position;
use std::str::FromStr;
use tracing::instrument;

/// A single console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current marker.
    Play(Position),
    /// Make a history entry current.
    Jump(usize),
    /// Print the history jump list.
    History,
    /// Print the status line.
    Status,
    /// Print the current board.
    Board,
    /// Print the session as JSON.
    Dump,
    /// Print the command summary.
    Help,
    /// Leave the console.
    Quit,
}

/// Error parsing a console command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// The line was blank.
    #[display("Empty command")]
    Empty,

    /// The first word is not a command or a position.
    #[display("Unknown command: {}", _0)]
    Unknown(String),

    /// A command that needs an argument got none.
    #[display("Missing argument for {}", _0)]
    MissingArgument(&'static str),

    /// The position is not a number 0-8 or a square label.
    #[display("Invalid position: {}", _0)]
    InvalidPosition(String),

    /// The move number is not a non-negative integer.
    #[display("Invalid move number: {}", _0)]
    InvalidMoveNumber(String),
}

impl std::error::Error for CommandError {}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  play <pos>   place the next marker (pos is 0-8 or a label like \"center\")
  <pos>        same as play
  jump <n>     go to move #n (0 is the game start)
  history      list history entries
  status       show the winner or next player
  board        show the current board
  dump         print the session as JSON
  help         show this text
  quit         leave";

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "play" | "p" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("play"));
                }
                Position::from_label_or_number(rest)
                    .map(Command::Play)
                    .ok_or_else(|| CommandError::InvalidPosition(rest.to_string()))
            }
            "jump" | "j" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("jump"));
                }
                rest.parse::<usize>()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::InvalidMoveNumber(rest.to_string()))
            }
            "history" | "h" => Ok(Command::History),
            "status" | "s" => Ok(Command::Status),
            "board" | "b" => Ok(Command::Board),
            "dump" => Ok(Command::Dump),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Position::from_label_or_number(line)
                .map(Command::Play)
                .ok_or_else(|| CommandError::Unknown(word.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_forms() {
        assert_eq!("play 4".parse(), Ok(Command::Play(Position::Center)));
        assert_eq!("p top left".parse(), Ok(Command::Play(Position::TopLeft)));
        assert_eq!("8".parse(), Ok(Command::Play(Position::BottomRight)));
        assert_eq!("Middle right".parse(), Ok(Command::Play(Position::MiddleRight)));
    }

    #[test]
    fn test_parse_jump() {
        assert_eq!("jump 0".parse(), Ok(Command::Jump(0)));
        assert_eq!(" J  12 ".parse(), Ok(Command::Jump(12)));
        assert_eq!(
            "jump -1".parse::<Command>(),
            Err(CommandError::InvalidMoveNumber("-1".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("play".parse::<Command>(), Err(CommandError::MissingArgument("play")));
        assert_eq!(
            "play 9".parse::<Command>(),
            Err(CommandError::InvalidPosition("9".to_string()))
        );
        assert_eq!(
            "undo".parse::<Command>(),
            Err(CommandError::Unknown("undo".to_string()))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("history".parse(), Ok(Command::History));
        assert_eq!("STATUS".parse(), Ok(Command::Status));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }
}
