use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::{Piece, PieceId, NUM_PIECES};

/// A compact set of [`Piece`]s, one bit per [`PieceId`].
///
/// ```
/// use quarto::{piece, PiecesSet};
/// let set = PiecesSet::new()
///     .insert(piece!("lrth"))
///     .insert(piece!("dssn"));
/// assert_eq!(set.len(), 2);
/// assert_eq!(Vec::from_iter(set), vec![piece!("dssn"), piece!("lrth")]);
/// assert_eq!((!set).len(), 14);
/// ```
///
/// Like the pieces themselves this is an immutable [`Copy`] type, so
/// `insert` and `remove` return a new set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<PieceId>", into = "Vec<PieceId>")]
pub struct PiecesSet {
    bits: u16,
}

impl PiecesSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// The set of all [`NUM_PIECES`] pieces.
    pub fn full() -> Self {
        Self { bits: u16::MAX }
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, id: PieceId) -> bool {
        self.bits & (1 << id.to_index()) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, piece: Piece) -> Self {
        Self {
            bits: self.bits | (1 << piece.id().to_index()),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, id: PieceId) -> Self {
        Self {
            bits: self.bits & !(1 << id.to_index()),
        }
    }
}

impl std::ops::BitAnd for PiecesSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl std::ops::BitOr for PiecesSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

/// The complement, i.e. all pieces that are not in this set.
impl std::ops::Not for PiecesSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self { bits: !self.bits }
    }
}

impl FromIterator<Piece> for PiecesSet {
    fn from_iter<T: IntoIterator<Item = Piece>>(iter: T) -> Self {
        iter.into_iter().fold(PiecesSet::new(), PiecesSet::insert)
    }
}

impl From<Vec<PieceId>> for PiecesSet {
    fn from(ids: Vec<PieceId>) -> Self {
        ids.into_iter().map(Piece::from_id).collect()
    }
}

impl From<PiecesSet> for Vec<PieceId> {
    fn from(set: PiecesSet) -> Self {
        set.into_iter().map(Piece::id).collect()
    }
}

impl IntoIterator for PiecesSet {
    type Item = Piece;

    type IntoIter = PiecesSetIter;

    fn into_iter(self) -> Self::IntoIter {
        PiecesSetIter { bits: self.bits }
    }
}

/// Iterator for a [`PiecesSet`] that returns pieces by ascending id.
#[derive(Clone, Copy, Debug)]
pub struct PiecesSetIter {
    bits: u16,
}

impl Iterator for PiecesSetIter {
    type Item = Piece;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        // The number of trailing zeros is the piece id
        let id = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        debug_assert!((id as usize) < NUM_PIECES);
        PieceId::new(id).map(Piece::from_id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for PiecesSetIter {}

impl FusedIterator for PiecesSetIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{all_pieces, piece};

    #[test]
    fn full_set_has_every_piece() {
        assert_eq!(PiecesSet::full(), PiecesSet::from_iter(all_pieces()));
        assert_eq!(PiecesSet::full().len(), NUM_PIECES);
        assert!((!PiecesSet::full()).is_empty());
    }

    #[test]
    fn insert_remove() {
        let p = piece!("drtn");
        let set = PiecesSet::new().insert(p).insert(p);
        assert_eq!(set.len(), 1);
        assert!(set.contains(p.id()));
        assert!(set.remove(p.id()).is_empty());
        assert_eq!(set & !set, PiecesSet::new());
        assert_eq!(set | !set, PiecesSet::full());
    }
}
