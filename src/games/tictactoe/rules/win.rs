//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines, in evaluation order: rows top to bottom,
/// columns left to right, then the main and anti diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in [`LINES`] order together with
/// its mark, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, *mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected_alone() {
        for line in LINES {
            let board = board_with(&line.map(|p| (p, Mark::O)));
            assert_eq!(check_winner(&board), Some((Mark::O, line)));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::Center, Mark::X),
            (Position::BottomRight, Mark::X),
            (Position::TopCenter, Mark::O),
        ]);
        assert_eq!(
            check_winner(&board),
            Some((
                Mark::X,
                [Position::TopLeft, Position::Center, Position::BottomRight]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_row_reported_before_column_and_diagonal() {
        // Top row, left column and main diagonal all X.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
            (Position::Center, Mark::X),
            (Position::BottomRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board).map(|(_, line)| line), Some(LINES[0]));
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::MiddleRight, Mark::O),
            (Position::BottomRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::TopLeft, Mark::O),
        ]);
        assert_eq!(check_winner(&board).map(|(_, line)| line), Some(LINES[5]));
    }
}
