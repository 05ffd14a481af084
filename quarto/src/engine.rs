use serde::{Deserialize, Serialize};

use crate::{
    evaluate, Attribute, AttributeValue, Board, Cell, GameSnapshot, IllegalMove,
    InvalidStartingPlayer, MatchResult, Move, Piece, PieceId, PieceNotInReserve, Reserve,
    BOARD_SIZE,
};

/// Index of a player, either 0 or 1.
pub type PlayerIdx = usize;

/// What the engine expects next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// The current player has to pick a piece for the opponent.
    AwaitingSelection,
    /// The opponent has to place the piece they were handed.
    AwaitingPlacement,
    /// Terminal, see [`TurnEngine::outcome()`].
    GameOver,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::AwaitingSelection => write!(f, "awaiting a selection"),
            Mode::AwaitingPlacement => write!(f, "awaiting a placement"),
            Mode::GameOver => write!(f, "over"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameOutcome {
    Won {
        winner: PlayerIdx,
        winning_group: MatchResult,
    },
    Drawn,
}

/// Returned by [`TurnEngine::select_piece()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    /// The player who selected the piece, i.e. the current player.
    pub player: PlayerIdx,
    pub piece: Piece,
}

/// Returned by [`TurnEngine::place_piece()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlacementEvent {
    TurnChanged {
        new_current_player: PlayerIdx,
    },
    GameWon {
        winner: PlayerIdx,
        attribute: Attribute,
        value: AttributeValue,
        winning_cells: [Cell; BOARD_SIZE],
    },
    GameDrawn,
}

/// Everything a [`GameObserver`] can be told about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    SelectionMade {
        player: PlayerIdx,
        piece: Piece,
    },
    TurnChanged {
        new_current_player: PlayerIdx,
    },
    GameWon {
        winner: PlayerIdx,
        attribute: Attribute,
        value: AttributeValue,
        winning_cells: [Cell; BOARD_SIZE],
    },
    GameDrawn,
}

impl From<SelectionEvent> for GameEvent {
    fn from(SelectionEvent { player, piece }: SelectionEvent) -> Self {
        GameEvent::SelectionMade { player, piece }
    }
}

impl From<PlacementEvent> for GameEvent {
    fn from(event: PlacementEvent) -> Self {
        match event {
            PlacementEvent::TurnChanged { new_current_player } => {
                GameEvent::TurnChanged { new_current_player }
            }
            PlacementEvent::GameWon {
                winner,
                attribute,
                value,
                winning_cells,
            } => GameEvent::GameWon {
                winner,
                attribute,
                value,
                winning_cells,
            },
            PlacementEvent::GameDrawn => GameEvent::GameDrawn,
        }
    }
}

/// Receives the events of a [`TurnEngine`], e.g. to update a display.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Settings for a new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The player who selects the first piece.
    #[serde(default)]
    pub starting_player: PlayerIdx,
}

/// The rules of one game: who selects, who places, and when it is over.
///
/// The current player selects a piece from the reserve, the opponent places
/// it, and then the roles swap. The engine only changes state on success; on
/// error it is left exactly as it was.
pub struct TurnEngine {
    board: Board,
    reserve: Reserve,
    mode: Mode,
    current_player: PlayerIdx,
    starting_player: PlayerIdx,
    handed_piece: Option<Piece>,
    outcome: Option<GameOutcome>,
    history: Vec<Move>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl std::fmt::Debug for TurnEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnEngine")
            .field("board", &self.board)
            .field("reserve", &self.reserve)
            .field("mode", &self.mode)
            .field("current_player", &self.current_player)
            .field("handed_piece", &self.handed_piece)
            .field("outcome", &self.outcome)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl TurnEngine {
    /// Panics if the starting player is not 0 or 1, see [`TurnEngine::try_new()`].
    pub fn new(config: EngineConfig) -> Self {
        match Self::try_new(config) {
            Ok(engine) => engine,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(config: EngineConfig) -> Result<Self, InvalidStartingPlayer> {
        if config.starting_player > 1 {
            return Err(InvalidStartingPlayer {
                starting_player: config.starting_player,
            });
        }
        Ok(Self {
            board: Board::new(),
            reserve: Reserve::new(),
            mode: Mode::AwaitingSelection,
            current_player: config.starting_player,
            starting_player: config.starting_player,
            handed_piece: None,
            outcome: None,
            history: Vec::new(),
            observers: Vec::new(),
        })
    }

    /// Registers an observer. Observers are notified in the order they subscribed.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// The current player hands a piece from the reserve to the opponent.
    ///
    /// The piece stays in the reserve until it is placed.
    pub fn select_piece(&mut self, piece_id: PieceId) -> Result<SelectionEvent, IllegalMove> {
        if self.mode != Mode::AwaitingSelection {
            return Err(IllegalMove::InvalidState { mode: self.mode });
        }
        if !self.reserve.contains(piece_id) {
            return Err(IllegalMove::PieceUnavailable {
                piece_id,
                err: PieceNotInReserve { piece_id },
            });
        }

        let piece = Piece::from_id(piece_id);
        self.handed_piece = Some(piece);
        self.mode = Mode::AwaitingPlacement;
        self.history.push(Move::Select { piece: piece_id });

        let event = SelectionEvent {
            player: self.current_player,
            piece,
        };
        self.emit(event.into());
        Ok(event)
    }

    /// The opponent places the handed piece, which ends the turn.
    ///
    /// If the placement completes a group sharing an attribute, the placer
    /// wins. That is the opponent of the player who selected the piece.
    pub fn place_piece(&mut self, row: usize, col: usize) -> Result<PlacementEvent, IllegalMove> {
        let piece = match (self.mode, self.handed_piece) {
            (Mode::AwaitingPlacement, Some(piece)) => piece,
            (mode, _) => return Err(IllegalMove::InvalidState { mode }),
        };
        self.board
            .place(row, col, piece)
            .map_err(|err| IllegalMove::from_placement(err, row, col))?;
        let taken = self.reserve.take_out(piece.id());
        debug_assert!(taken.is_ok(), "The handed piece was not in the reserve");
        self.handed_piece = None;
        self.history.push(Move::Place { row, col });

        let placer = self.opponent();
        let event = if let Some(result) = evaluate(&self.board, row, col) {
            self.mode = Mode::GameOver;
            self.outcome = Some(GameOutcome::Won {
                winner: placer,
                winning_group: result,
            });
            PlacementEvent::GameWon {
                winner: placer,
                attribute: result.attribute,
                value: result.value,
                winning_cells: result.winning_cells,
            }
        } else if self.reserve.is_empty() {
            self.mode = Mode::GameOver;
            self.outcome = Some(GameOutcome::Drawn);
            PlacementEvent::GameDrawn
        } else {
            self.current_player = placer;
            self.mode = Mode::AwaitingSelection;
            PlacementEvent::TurnChanged {
                new_current_player: placer,
            }
        };
        self.emit(event.into());
        Ok(event)
    }

    /// Dispatches a recorded move to [`Self::select_piece()`] or [`Self::place_piece()`].
    pub fn apply(&mut self, mv: Move) -> Result<GameEvent, IllegalMove> {
        match mv {
            Move::Select { piece } => self.select_piece(piece).map(GameEvent::from),
            Move::Place { row, col } => self.place_piece(row, col).map(GameEvent::from),
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The player who selects in this turn.
    pub fn current_player(&self) -> PlayerIdx {
        self.current_player
    }

    /// The player who places in this turn.
    pub fn opponent(&self) -> PlayerIdx {
        1 - self.current_player
    }

    pub fn starting_player(&self) -> PlayerIdx {
        self.starting_player
    }

    pub fn handed_piece(&self) -> Option<Piece> {
        self.handed_piece
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reserve(&self) -> &Reserve {
        &self.reserve
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Only set when the game was won.
    pub fn winning_group(&self) -> Option<MatchResult> {
        match self.outcome {
            Some(GameOutcome::Won { winning_group, .. }) => Some(winning_group),
            _ => None,
        }
    }

    /// All successful moves so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The number of completed turns, i.e. of pieces on the board.
    pub fn turn_number(&self) -> usize {
        self.board.num_placed()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mode: self.mode,
            current_player: self.current_player,
            handed_piece: self.handed_piece,
            board: self.board.clone(),
            reserve: self.reserve.set(),
            outcome: self.outcome,
        }
    }
}
