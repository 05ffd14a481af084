use quarto::{
    GameOutcome, IllegalMove, InvalidStartingPlayer, Move, PieceFromStrErr, PieceIdOutOfRange,
};

/// Error type for a line typed by a player.
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidCommand {
    Empty,
    UnknownCommand { command: String },
    MissingArgument { command: &'static str },
    TooManyArguments { command: &'static str },
    InvalidPieceCode { code: String, err: PieceFromStrErr },
    InvalidPieceId { err: PieceIdOutOfRange },
    InvalidCoordinate { coordinate: String },
}

impl std::error::Error for InvalidCommand {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidCommand::InvalidPieceCode { err, .. } => Some(err),
            InvalidCommand::InvalidPieceId { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvalidCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidCommand::Empty => write!(f, "Please enter a command, or 'help'"),
            InvalidCommand::UnknownCommand { command } => {
                write!(f, "Unknown command '{}', try 'help'", command)
            }
            InvalidCommand::MissingArgument { command } => {
                write!(f, "The '{}' command needs more arguments", command)
            }
            InvalidCommand::TooManyArguments { command } => {
                write!(f, "Too many arguments for the '{}' command", command)
            }
            InvalidCommand::InvalidPieceCode { code, err: _ } => {
                write!(f, "'{}' is not a valid piece", code)
            }
            InvalidCommand::InvalidPieceId { err: _ } => write!(f, "Not a valid piece id"),
            InvalidCommand::InvalidCoordinate { coordinate } => {
                write!(f, "'{}' is not a valid row or column", coordinate)
            }
        }
    }
}

/// Error type for replaying a recorded game.
#[derive(Debug)]
pub enum ReplayError {
    InvalidStartingPlayer {
        err: InvalidStartingPlayer,
    },
    IllegalMove {
        move_idx: usize,
        mv: Move,
        err: IllegalMove,
    },
    OutcomeMismatch {
        recorded: Option<GameOutcome>,
        replayed: Option<GameOutcome>,
    },
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::InvalidStartingPlayer { err } => Some(err),
            ReplayError::IllegalMove { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::InvalidStartingPlayer { err: _ } => {
                write!(f, "The recording has no valid starting player")
            }
            ReplayError::IllegalMove { move_idx, mv, err: _ } => {
                write!(f, "Move number {} ('{}') is illegal", move_idx + 1, mv)
            }
            ReplayError::OutcomeMismatch { recorded, replayed } => write!(
                f,
                "The recording says the game ended with {:?}, but replaying it gives {:?}",
                recorded, replayed
            ),
        }
    }
}
