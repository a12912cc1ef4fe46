use crate::board::{Board, Mark};

/// Indices of three cells forming a line
pub type WinningLine = [usize; 3];

/// Winning combinations, checked in this order
pub const LINES: [WinningLine; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // columns
    [0, 4, 8], [2, 4, 6],            // diagonals
];

/// Where a board snapshot stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress { next: Mark },
    Won { mark: Mark, line: WinningLine },
    Draw,
}

/// First line holding three identical marks, if any
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find(|&[a, b, c]| {
        board.get(a).is_some() && board.get(a) == board.get(b) && board.get(b) == board.get(c)
    })
}

/// Check if there's a winner. Returns the mark owning the first winning line
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a))
}

/// Classify `board`, with `next` being whose turn it would be
pub fn outcome(board: &Board, next: Mark) -> Outcome {
    match winning_line(board) {
        Some(line) => match board.get(line[0]) {
            Some(mark) => Outcome::Won { mark, line },
            None => Outcome::InProgress { next },
        },
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress { next },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_check_winner_row() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_check_winner_column() {
        let board = Board::from_cells([O, X, X, O, X, E, O, E, E]);
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_check_winner_diagonal() {
        let board = Board::from_cells([X, O, O, E, X, E, E, E, X]);
        assert_eq!(winning_line(&board), Some([0, 4, 8]));

        let anti = Board::from_cells([X, X, O, E, O, E, O, E, X]);
        assert_eq!(winning_line(&anti), Some([2, 4, 6]));
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Both the top row and the left column are complete
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_cells([X, O, X, E, E, E, E, E, E]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(&Board::new(), Mark::X), Outcome::InProgress { next: Mark::X });

        let won = Board::from_cells([X, O, O, E, X, E, E, E, X]);
        assert_eq!(
            outcome(&won, Mark::O),
            Outcome::Won { mark: Mark::X, line: [0, 4, 8] }
        );

        // X O X
        // X O O
        // O X X
        let draw = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(outcome(&draw, Mark::O), Outcome::Draw);
    }
}
