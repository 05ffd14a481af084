use serde::{Deserialize, Serialize};

use crate::{Attribute, AttributeValue, Board, Cell, GroupKind, Piece, BOARD_SIZE};

/// A completed group whose pieces all share an attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub attribute: Attribute,
    pub value: AttributeValue,
    pub group: GroupKind,
    pub winning_cells: [Cell; BOARD_SIZE],
}

/// The attributes shared by all of the given pieces, in [`Attribute::ALL`] order.
pub fn matching_attributes(
    pieces: &[Piece],
) -> impl Iterator<Item = (Attribute, AttributeValue)> + '_ {
    Attribute::ALL.into_iter().filter_map(move |attribute| {
        let (first, rest) = pieces.split_first()?;
        let value = first.value_of(attribute);
        rest.iter()
            .all(|p| p.value_of(attribute) == value)
            .then_some((attribute, value))
    })
}

/// Looks for a winning group through the given cell.
///
/// Groups are checked in the order of
/// [`Board::groups_for_cell()`](crate::Board::groups_for_cell), and within a
/// group the attributes in the order of [`Attribute::ALL`]; the first match is
/// reported even if there are others. Groups with an empty cell never match.
pub fn evaluate(board: &Board, row: usize, col: usize) -> Option<MatchResult> {
    for group in board.groups_for_cell(row, col) {
        let Some(pieces) = group
            .cells
            .iter()
            .map(|cell| board.occupant_of(cell.row, cell.col))
            .collect::<Option<Vec<Piece>>>()
        else {
            continue;
        };
        let first_match = matching_attributes(&pieces).next();
        if let Some((attribute, value)) = first_match {
            return Some(MatchResult {
                attribute,
                value,
                group: group.kind,
                winning_cells: group.cells,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece;

    fn board_with(pieces: &[(usize, usize, Piece)]) -> Board {
        let mut board = Board::new();
        for &(row, col, piece) in pieces {
            board.place(row, col, piece).unwrap();
        }
        board
    }

    #[test]
    fn row_sharing_color() {
        let board = board_with(&[
            (0, 0, piece!("dssn")),
            (0, 1, piece!("drth")),
            (0, 2, piece!("drsn")),
            (0, 3, piece!("dsth")),
        ]);
        let result = evaluate(&board, 0, 3).unwrap();
        assert_eq!(result.attribute, Attribute::Color);
        assert_eq!(result.value, AttributeValue::A);
        assert_eq!(result.group, GroupKind::Row);
        assert_eq!(
            result.winning_cells,
            [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3)]
        );
    }

    #[test]
    fn color_wins_over_shape() {
        let board = board_with(&[
            (2, 0, piece!("lrsn")),
            (2, 1, piece!("lrth")),
            (2, 2, piece!("lrtn")),
            (2, 3, piece!("lrsh")),
        ]);
        let result = evaluate(&board, 2, 1).unwrap();
        assert_eq!(result.attribute, Attribute::Color);
        assert_eq!(result.value, AttributeValue::B);
        let all: Vec<_> = matching_attributes(&[
            piece!("lrsn"),
            piece!("lrth"),
            piece!("lrtn"),
            piece!("lrsh"),
        ])
        .collect();
        assert_eq!(
            all,
            vec![
                (Attribute::Color, AttributeValue::B),
                (Attribute::Shape, AttributeValue::B)
            ]
        );
    }

    #[test]
    fn incomplete_or_mixed_groups_do_not_match() {
        let mut board = board_with(&[
            (0, 0, piece!("dssn")),
            (1, 1, piece!("dssh")),
            (2, 2, piece!("dstn")),
        ]);
        assert_eq!(evaluate(&board, 2, 2), None);
        // Breaks the color and shape the first three have in common
        board.place(3, 3, piece!("lrth")).unwrap();
        assert_eq!(evaluate(&board, 3, 3), None);
    }

    #[test]
    fn column_is_checked_before_diagonal() {
        let board = board_with(&[
            (0, 0, piece!("dssn")),
            (1, 0, piece!("lsth")),
            (2, 0, piece!("lssh")),
            (3, 0, piece!("drtn")),
            (1, 1, piece!("lrtn")),
            (2, 2, piece!("drsh")),
        ]);
        // Column 0 shares nothing and the diagonal is incomplete
        assert_eq!(evaluate(&board, 0, 0), None);

        // Both column 3 (tall) and the main diagonal (square) match
        let board = board_with(&[
            (3, 3, piece!("dstn")),
            (3, 2, piece!("lrtn")),
            (3, 1, piece!("drsh")),
            (3, 0, piece!("lssn")),
            (0, 3, piece!("dsth")),
            (1, 3, piece!("drth")),
            (2, 3, piece!("lrth")),
            (0, 0, piece!("dssh")),
            (1, 1, piece!("lsth")),
            (2, 2, piece!("lssh")),
        ]);
        let result = evaluate(&board, 3, 3).unwrap();
        assert_eq!(result.group, GroupKind::Column);
        assert_eq!(result.attribute, Attribute::Height);
    }

    #[test]
    fn later_group_matches_after_earlier_ones_fail() {
        // Row 1 and column 2 share nothing, the anti-diagonal is all hollow
        let board = board_with(&[
            (1, 0, piece!("dssn")),
            (1, 1, piece!("lrth")),
            (1, 3, piece!("drsn")),
            (0, 2, piece!("lstn")),
            (2, 2, piece!("drsh")),
            (3, 2, piece!("lssn")),
            (0, 3, piece!("dsth")),
            (2, 1, piece!("lrsh")),
            (3, 0, piece!("lssh")),
            (1, 2, piece!("drth")),
        ]);
        let result = evaluate(&board, 1, 2).unwrap();
        assert_eq!(result.group, GroupKind::AntiDiagonal);
        assert_eq!(result.attribute, Attribute::Cavity);
        assert_eq!(result.value, AttributeValue::B);
    }
}
