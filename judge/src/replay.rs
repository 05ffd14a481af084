use quarto::{EngineConfig, TurnEngine};
use tracing::trace;

use crate::error::ReplayError;
use crate::recording::GameRecording;

/// Plays back a recording and checks that it ends the way it says it does.
///
/// Returns the engine in its final state.
pub fn replay_game(recording: &GameRecording) -> Result<TurnEngine, ReplayError> {
    let mut engine = TurnEngine::try_new(EngineConfig {
        starting_player: recording.starting_player,
    })
    .map_err(|err| ReplayError::InvalidStartingPlayer { err })?;
    for (move_idx, &mv) in recording.moves.iter().enumerate() {
        let event = engine
            .apply(mv)
            .map_err(|err| ReplayError::IllegalMove { move_idx, mv, err })?;
        trace!(move_idx, %mv, ?event);
    }
    if engine.outcome() != recording.outcome {
        return Err(ReplayError::OutcomeMismatch {
            recorded: recording.outcome,
            replayed: engine.outcome(),
        });
    }
    Ok(engine)
}
