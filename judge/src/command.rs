use std::str::FromStr;

use quarto::{Piece, PieceId};

use crate::error::InvalidCommand;

pub const HELP: &str = "\
Commands:
  select <piece>     hand a piece to your opponent, by id (0-15) or code (e.g. dsth)
  place <row> <col>  place the piece you were handed, rows and columns go from 0 to 3
  board              show the board
  reserve            show the pieces that can still be selected
  help               show this message
  quit               end the game

Piece codes are one letter per attribute:
  color d(ark)/l(ight), shape s(quare)/r(ound), height s(hort)/t(all), cavity n(one)/h(ollow)";

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Select(PieceId),
    Place { row: usize, col: usize },
    Board,
    Reserve,
    Help,
    Quit,
}

fn parse_piece(arg: &str) -> Result<PieceId, InvalidCommand> {
    if let Ok(id) = arg.parse::<u8>() {
        return PieceId::try_from(id).map_err(|err| InvalidCommand::InvalidPieceId { err });
    }
    arg.parse::<Piece>()
        .map(Piece::id)
        .map_err(|err| InvalidCommand::InvalidPieceCode {
            code: String::from(arg),
            err,
        })
}

// Bounds are checked by the engine, this only rejects non-numbers.
fn parse_coordinate(arg: &str) -> Result<usize, InvalidCommand> {
    arg.parse().map_err(|_| InvalidCommand::InvalidCoordinate {
        coordinate: String::from(arg),
    })
}

impl FromStr for Command {
    type Err = InvalidCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(InvalidCommand::Empty)?;
        let args: Vec<&str> = words.collect();
        let (command, num_args) = match name.to_ascii_lowercase().as_str() {
            "select" | "s" => ("select", 1),
            "place" | "p" => ("place", 2),
            "board" | "b" => ("board", 0),
            "reserve" | "r" => ("reserve", 0),
            "help" | "h" | "?" => ("help", 0),
            "quit" | "q" | "exit" => ("quit", 0),
            _ => {
                return Err(InvalidCommand::UnknownCommand {
                    command: String::from(name),
                })
            }
        };
        if args.len() < num_args {
            return Err(InvalidCommand::MissingArgument { command });
        }
        if args.len() > num_args {
            return Err(InvalidCommand::TooManyArguments { command });
        }
        Ok(match command {
            "select" => Command::Select(parse_piece(args[0])?),
            "place" => Command::Place {
                row: parse_coordinate(args[0])?,
                col: parse_coordinate(args[1])?,
            },
            "board" => Command::Board,
            "reserve" => Command::Reserve,
            "help" => Command::Help,
            _ => Command::Quit,
        })
    }
}

#[cfg(test)]
mod tests {
    use quarto::{piece, PieceFromStrErr};

    use super::*;

    #[test]
    fn select_by_id_or_code() {
        assert_eq!(
            "select 15".parse::<Command>(),
            Ok(Command::Select(piece!("lrth").id()))
        );
        assert_eq!(
            "  S  DSSN ".parse::<Command>(),
            Ok(Command::Select(piece!("dssn").id()))
        );
        assert!(matches!(
            "select 16".parse::<Command>(),
            Err(InvalidCommand::InvalidPieceId { .. })
        ));
        assert_eq!(
            "select dsxn".parse::<Command>(),
            Err(InvalidCommand::InvalidPieceCode {
                code: String::from("dsxn"),
                err: PieceFromStrErr::InvalidHeight
            })
        );
    }

    #[test]
    fn place_and_others() {
        assert_eq!("place 3 0".parse::<Command>(), Ok(Command::Place { row: 3, col: 0 }));
        assert_eq!(
            "place 3".parse::<Command>(),
            Err(InvalidCommand::MissingArgument { command: "place" })
        );
        assert_eq!(
            "place a 1".parse::<Command>(),
            Err(InvalidCommand::InvalidCoordinate {
                coordinate: String::from("a")
            })
        );
        assert_eq!(
            "board now".parse::<Command>(),
            Err(InvalidCommand::TooManyArguments { command: "board" })
        );
        assert_eq!("".parse::<Command>(), Err(InvalidCommand::Empty));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("reserve".parse::<Command>(), Ok(Command::Reserve));
    }
}
