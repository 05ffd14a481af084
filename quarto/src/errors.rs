use crate::{Mode, PieceId, PlayerIdx};

/// The error type for [`Board::place()`](crate::Board::place).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds,
    CellOccupied,
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds => write!(f, "The cell is outside of the 4x4 board"),
            IllegalPlacement::CellOccupied => write!(f, "The cell already holds a piece"),
        }
    }
}

/// The error type for [`Reserve::take_out()`](crate::Reserve::take_out).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceNotInReserve {
    pub piece_id: PieceId,
}

impl std::error::Error for PieceNotInReserve {}

impl std::fmt::Display for PieceNotInReserve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {} is not in the reserve", self.piece_id)
    }
}

/// The error type for [`TurnEngine::try_new()`](crate::TurnEngine::try_new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidStartingPlayer {
    pub starting_player: PlayerIdx,
}

impl std::error::Error for InvalidStartingPlayer {}

impl std::fmt::Display for InvalidStartingPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The starting player must be 0 or 1, not {}",
            self.starting_player
        )
    }
}

/// The error type for the operations of a [`TurnEngine`](crate::TurnEngine).
///
/// None of these are fatal: the engine is left untouched and the caller may
/// simply try again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// The operation is not allowed in the engine's current mode.
    InvalidState { mode: Mode },
    CellOccupied { row: usize, col: usize },
    /// The piece was already placed.
    PieceUnavailable {
        piece_id: PieceId,
        err: PieceNotInReserve,
    },
    OutOfBounds { row: usize, col: usize },
}

impl IllegalMove {
    pub(crate) fn from_placement(err: IllegalPlacement, row: usize, col: usize) -> Self {
        match err {
            IllegalPlacement::OutOfBounds => IllegalMove::OutOfBounds { row, col },
            IllegalPlacement::CellOccupied => IllegalMove::CellOccupied { row, col },
        }
    }
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::PieceUnavailable { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::InvalidState { mode } => {
                write!(f, "This action is not allowed while the game is {}", mode)
            }
            IllegalMove::CellOccupied { row, col } => {
                write!(f, "Tried to place a piece on the occupied cell ({}, {})", row, col)
            }
            IllegalMove::PieceUnavailable { piece_id, err: _ } => {
                write!(f, "Tried to select piece {}, which cannot be selected", piece_id)
            }
            IllegalMove::OutOfBounds { row, col } => {
                write!(f, "Tried to place a piece outside of the board at ({}, {})", row, col)
            }
        }
    }
}
