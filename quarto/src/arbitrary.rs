use quickcheck::{Arbitrary, Gen};

use crate::{Move, Piece, PieceId, NUM_PIECES};

/// Moves to throw at an engine, many of them illegal.
///
/// Selections and placements mostly alternate, so that games actually make
/// progress and sometimes end.
#[derive(Clone, Debug)]
pub struct MoveAttempts(pub Vec<Move>);

impl Arbitrary for MoveAttempts {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_turns = usize::arbitrary(g) % 40;
        let mut moves = Vec::with_capacity(num_turns * 3);
        for _ in 0..num_turns {
            moves.push(Move::Select {
                piece: PieceId::arbitrary(g),
            });
            moves.push(arbitrary_placement(g));
            if u8::arbitrary(g) % 8 == 0 {
                moves.push(Move::arbitrary(g));
            }
        }
        MoveAttempts(moves)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(MoveAttempts))
    }
}

// Rows and columns one past the board, to also hit the bounds check
fn arbitrary_placement(g: &mut Gen) -> Move {
    Move::Place {
        row: usize::arbitrary(g) % 5,
        col: usize::arbitrary(g) % 5,
    }
}

impl Arbitrary for Move {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Move::Select {
                piece: PieceId::arbitrary(g),
            }
        } else {
            arbitrary_placement(g)
        }
    }
}

impl Arbitrary for PieceId {
    fn arbitrary(g: &mut Gen) -> Self {
        PieceId::new(u8::arbitrary(g) % NUM_PIECES as u8).unwrap()
    }
}

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        Piece::from_id(PieceId::arbitrary(g))
    }
}
