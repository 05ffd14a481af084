use crate::{Board, Cell, Piece, BOARD_SIZE};

/// Draws the board as a box of piece codes, with row and column numbers.
///
/// Cells listed in `highlighted` are marked with `*`, e.g. to show a winning
/// group.
pub fn visualize_board(board: &Board, highlighted: &[Cell]) -> String {
    let mut result = String::from("     ");
    for j in 0..BOARD_SIZE {
        result += &format!("{:^6}", j);
    }
    result += "\n    ╭";
    result += &"──────".repeat(BOARD_SIZE);
    result += "╮\n";
    for i in 0..BOARD_SIZE {
        result += &format!("{:>3} │", i);
        for j in 0..BOARD_SIZE {
            let mark = if highlighted.contains(&Cell::new(i, j)) {
                '*'
            } else {
                ' '
            };
            match board.occupant_of(i, j) {
                Some(piece) => result += &format!("{}{}{}", mark, piece, mark),
                None => result += &format!("{} ·· {}", mark, mark),
            }
        }
        result += "│\n";
    }
    result += "    ╰";
    result += &"──────".repeat(BOARD_SIZE);
    result += "╯";
    result
}

/// Lists pieces as `id:code`, in the given order.
pub fn visualize_pieces<I: IntoIterator<Item = Piece>>(pieces: I) -> String {
    pieces
        .into_iter()
        .map(|piece| format!("{:>2}:{}", piece.id(), piece))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece;

    #[test]
    fn board_layout() {
        let mut board = Board::new();
        board.place(1, 2, piece!("lrth")).unwrap();
        let text = visualize_board(&board, &[Cell::new(1, 2)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE + 3);
        assert!(lines[3].starts_with("  1 │"));
        assert!(lines[3].contains("*lrth*"));
        assert_eq!(lines[2].matches("··").count(), BOARD_SIZE);
    }

    #[test]
    fn pieces_list() {
        assert_eq!(
            visualize_pieces([piece!("dssn"), piece!("lrth")]),
            " 0:dssn 15:lrth"
        );
    }
}
