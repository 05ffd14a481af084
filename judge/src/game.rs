use std::io::{BufRead, Write};

use quarto::{
    visualize_board, visualize_pieces, GameEvent, IllegalMove, Mode, Move, Piece, TurnEngine,
};
use rand::Rng;
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::config::GameConfig;
use crate::recording::GameRecording;

/// The text asking the right player for the next action.
pub fn prompt(engine: &TurnEngine, players: &[String; 2]) -> String {
    let current = &players[engine.current_player()];
    let opponent = &players[engine.opponent()];
    match (engine.mode(), engine.handed_piece()) {
        (Mode::AwaitingPlacement, Some(piece)) => {
            format!("{}: place the piece {} that {} gave you", opponent, piece, current)
        }
        (Mode::GameOver, _) => String::from("The game is over"),
        _ => format!("{}: select a piece for {}", current, opponent),
    }
}

/// Describes an event for the players.
pub fn describe_event(event: &GameEvent, players: &[String; 2]) -> String {
    match *event {
        GameEvent::SelectionMade { player, piece } => {
            format!("{} hands {} to {}", players[player], piece, players[1 - player])
        }
        GameEvent::TurnChanged { new_current_player } => {
            format!("Next turn, {} selects", players[new_current_player])
        }
        GameEvent::GameWon {
            winner,
            attribute,
            value,
            winning_cells,
        } => {
            let cells: Vec<String> = winning_cells.iter().map(|c| c.to_string()).collect();
            format!(
                "{} wins! All pieces at {} share the {} {}",
                players[winner],
                cells.join(", "),
                attribute,
                attribute.value_name(value)
            )
        }
        GameEvent::GameDrawn => String::from("The board is full, the game is a draw"),
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::SelectionMade { player, piece } => {
            debug!(player, piece = %piece, "Piece selected")
        }
        GameEvent::TurnChanged { new_current_player } => {
            debug!(new_current_player, "Turn changed")
        }
        GameEvent::GameWon {
            winner,
            attribute,
            value,
            ..
        } => info!(winner, %attribute, ?value, "Game won"),
        GameEvent::GameDrawn => info!("Game drawn"),
    }
}

fn write_error_chain<W: Write>(output: &mut W, err: &dyn std::error::Error) -> std::io::Result<()> {
    let mut err_dyn = err;
    writeln!(output, "{}", err_dyn)?;
    while let Some(src_err) = err_dyn.source() {
        writeln!(output, "  {}", src_err)?;
        err_dyn = src_err;
    }
    Ok(())
}

/// Plays one game between two people sharing `input` and `output`.
///
/// Illegal commands and moves are reported and the player is asked again.
/// Returns an error only on I/O failure; if the input ends or a player quits,
/// the recording has no outcome.
pub fn play_game<R: BufRead, W: Write, G: Rng>(
    input: &mut R,
    output: &mut W,
    config: &GameConfig,
    rng: &mut G,
) -> anyhow::Result<GameRecording> {
    let players = &config.players;
    let mut engine = TurnEngine::try_new(config.engine_config(rng))?;
    engine.subscribe(Box::new(log_event));
    // The reserve is shown in this order for the whole game
    let display_order: Vec<Piece> = engine.reserve().shuffled(rng);
    info!(
        starting_player = players[engine.starting_player()].as_str(),
        "New game"
    );

    writeln!(output, "{}", visualize_board(engine.board(), &[]))?;
    let mut line = String::new();
    while engine.mode() != Mode::GameOver {
        writeln!(output, "{}", prompt(&engine, players))?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("Input ended before the game was over");
            break;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                write_error_chain(output, &err)?;
                continue;
            }
        };
        let mv = match command {
            Command::Select(piece) => Move::Select { piece },
            Command::Place { row, col } => Move::Place { row, col },
            Command::Board => {
                writeln!(output, "{}", visualize_board(engine.board(), &[]))?;
                continue;
            }
            Command::Reserve => {
                let remaining = display_order
                    .iter()
                    .copied()
                    .filter(|piece| engine.reserve().contains(piece.id()));
                writeln!(output, "{}", visualize_pieces(remaining))?;
                continue;
            }
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Command::Quit => {
                info!("Game abandoned");
                break;
            }
        };
        match engine.apply(mv) {
            Ok(event) => {
                writeln!(output, "{}", describe_event(&event, players))?;
                if let Move::Place { .. } = mv {
                    let highlighted = engine
                        .winning_group()
                        .map(|result| result.winning_cells.to_vec())
                        .unwrap_or_default();
                    writeln!(output, "{}", visualize_board(engine.board(), &highlighted))?;
                }
            }
            Err(err) => {
                debug!(%mv, %err, "Illegal move");
                write_error_chain(output, &err)?;
                if let IllegalMove::InvalidState { .. } = err {
                    writeln!(output, "Type 'help' for the list of commands")?;
                }
            }
        }
    }

    Ok(GameRecording {
        players: players.clone(),
        starting_player: engine.starting_player(),
        moves: engine.history().to_vec(),
        outcome: engine.outcome(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use quarto::{Attribute, AttributeValue, Cell, GameOutcome, GroupKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn run(script: &str, config: &GameConfig) -> (GameRecording, String) {
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        let recording = play_game(&mut input, &mut output, config, &mut rng).unwrap();
        (recording, String::from_utf8(output).unwrap())
    }

    #[test]
    fn diagonal_win() {
        let script = "\
            select dssn\n place 0 0\n\
            select lstn\n place 1 1\n\
            select dsth\n place 2 2\n\
            select lssh\n place 3 3\n";
        let (recording, output) = run(script, &GameConfig::default());
        assert_eq!(recording.moves.len(), 8);
        match recording.outcome {
            Some(GameOutcome::Won {
                winner,
                winning_group,
            }) => {
                assert_eq!(winner, 0);
                assert_eq!(winning_group.group, GroupKind::MainDiagonal);
                assert_eq!(winning_group.attribute, Attribute::Shape);
                assert_eq!(winning_group.value, AttributeValue::A);
                assert_eq!(winning_group.winning_cells[3], Cell::new(3, 3));
            }
            other => panic!("Unexpected outcome {:?}", other),
        }
        assert!(output.contains("Player 1 wins! All pieces at (0, 0), (1, 1), (2, 2), (3, 3) share the shape square"));
        assert!(output.contains("Player 1: select a piece for Player 2"));
        assert!(output.contains("Player 2: place the piece dssn that Player 1 gave you"));
    }

    #[test]
    fn mistakes_are_reported_and_retried() {
        let config = GameConfig {
            starting_player: 1,
            ..GameConfig::default()
        };
        let script = "\
            place 0 0\n\
            dance\n\
            select lrth\n\
            select dssn\n\
            place 0 0\n\
            select lrth\n\
            select dssn\n\
            place 0 0\n\
            place 0 1\n\
            reserve\n\
            quit\n\
            select lrsn\n";
        let (recording, output) = run(script, &config);
        assert_eq!(recording.outcome, None);
        assert_eq!(recording.starting_player, 1);
        assert_eq!(recording.moves.len(), 4);
        assert!(output.contains("This action is not allowed while the game is awaiting a selection"));
        assert!(output.contains("Unknown command 'dance'"));
        assert!(output.contains("Tried to select piece 15, which cannot be selected"));
        assert!(output.contains("Piece 15 is not in the reserve"));
        assert!(output.contains("Tried to place a piece on the occupied cell (0, 0)"));
        assert!(output.contains("Player 2: select a piece for Player 1"));
        // 14 pieces remain in the reserve
        let reserve_line = output
            .lines()
            .find(|line| line.contains(":lssn"))
            .unwrap();
        assert_eq!(reserve_line.split_whitespace().count(), 14);
    }

    #[test]
    fn unchecked_starting_player_is_an_error() {
        let config = GameConfig {
            starting_player: 2,
            ..GameConfig::default()
        };
        let mut input = Cursor::new("select 3\n".as_bytes());
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        let err = play_game(&mut input, &mut output, &config, &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "The starting player must be 0 or 1, not 2");
        assert!(output.is_empty());
    }

    #[test]
    fn input_may_end_early() {
        let (recording, _) = run("select 3\n", &GameConfig::default());
        assert_eq!(recording.outcome, None);
        assert_eq!(recording.moves.len(), 1);
    }
}
