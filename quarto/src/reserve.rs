use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Piece, PieceId, PieceNotInReserve, PiecesSet};

/// The pieces that have not been placed on the board yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserve {
    pieces: PiecesSet,
}

impl Default for Reserve {
    fn default() -> Self {
        Self::new()
    }
}

impl Reserve {
    /// A full reserve with every one of the 16 pieces.
    pub fn new() -> Self {
        Self {
            pieces: PiecesSet::full(),
        }
    }

    /// Removes a piece for good.
    pub fn take_out(&mut self, piece_id: PieceId) -> Result<Piece, PieceNotInReserve> {
        if !self.pieces.contains(piece_id) {
            return Err(PieceNotInReserve { piece_id });
        }
        self.pieces = self.pieces.remove(piece_id);
        Ok(Piece::from_id(piece_id))
    }

    pub fn contains(&self, piece_id: PieceId) -> bool {
        self.pieces.contains(piece_id)
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// The remaining pieces, by ascending id.
    pub fn iter(&self) -> impl Iterator<Item = Piece> {
        self.pieces.into_iter()
    }

    pub fn set(&self) -> PiecesSet {
        self.pieces
    }

    /// The remaining pieces in random order, for display purposes.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Piece> {
        let mut pieces: Vec<Piece> = self.iter().collect();
        pieces.shuffle(rng);
        pieces
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{all_pieces, piece, NUM_PIECES};

    #[test]
    fn starts_with_every_piece_once() {
        let reserve = Reserve::new();
        assert_eq!(reserve.len(), NUM_PIECES);
        assert!(reserve.iter().eq(all_pieces()));
    }

    #[test]
    fn take_out_once() {
        let mut reserve = Reserve::new();
        let id = piece!("lstn").id();
        assert_eq!(reserve.take_out(id), Ok(piece!("lstn")));
        assert!(!reserve.contains(id));
        assert_eq!(reserve.take_out(id), Err(PieceNotInReserve { piece_id: id }));
        assert_eq!(reserve.len(), NUM_PIECES - 1);
    }

    #[test]
    fn emptied_reserve() {
        let mut reserve = Reserve::new();
        for piece in all_pieces() {
            reserve.take_out(piece.id()).unwrap();
        }
        assert!(reserve.is_empty());
    }

    #[test]
    fn shuffled_keeps_the_same_pieces() {
        let mut rng = StdRng::seed_from_u64(7);
        let reserve = Reserve::new();
        let mut shuffled = reserve.shuffled(&mut rng);
        shuffled.sort_by_key(|p| p.id());
        assert_eq!(shuffled, reserve.iter().collect::<Vec<_>>());
    }
}
