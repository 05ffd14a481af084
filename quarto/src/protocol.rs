use serde::{Deserialize, Serialize};

use crate::{Board, GameOutcome, Mode, Piece, PieceId, PiecesSet, PlayerIdx};

/// One successful call into a [`TurnEngine`](crate::TurnEngine).
///
/// A game is fully described by its starting player and its list of moves,
/// which is what recordings store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    /// Hand a piece from the reserve to the opponent.
    Select { piece: PieceId },
    /// Place the handed piece.
    Place { row: usize, col: usize },
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Select { piece } => write!(f, "select {}", Piece::from_id(*piece)),
            Move::Place { row, col } => write!(f, "place {} {}", row, col),
        }
    }
}

/// A read-only copy of everything a presentation layer needs to draw a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub mode: Mode,
    pub current_player: PlayerIdx,
    /// Only present in [`Mode::AwaitingPlacement`].
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub handed_piece: Option<Piece>,
    pub board: Board,
    pub reserve: PiecesSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub outcome: Option<GameOutcome>,
}
