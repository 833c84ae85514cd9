//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the controller can run them after every half-move.

pub mod win;

pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::{debug, instrument};

/// Evaluates the board.
///
/// Returns the first completed line as [`Outcome::Winner`], then
/// [`Outcome::Draw`] for a full board, and `None` while the game is
/// still open.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some((mark, line)) = check_winner(board) {
        debug!(%mark, ?line, "Line completed");
        return Some(Outcome::Winner { mark, line });
    }
    if board.is_full() {
        debug!("Board full with no line");
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::{Mark, Position};
    use super::*;

    #[test]
    fn test_open_board_has_no_outcome() {
        let mut board = Board::new();
        assert_eq!(evaluate(&board), None);
        board.set(Position::Center, Mark::X).unwrap();
        board.set(Position::TopLeft, Mark::O).unwrap();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        use Mark::{O, X};
        let mut board = Board::new();
        // X X X / O O X / X O O
        for (pos, mark) in Position::ALL.into_iter().zip([X, X, X, O, O, X, X, O, O]) {
            board.set(pos, mark).unwrap();
        }
        assert_eq!(
            evaluate(&board),
            Some(Outcome::Winner {
                mark: X,
                line: LINES[0]
            })
        );
    }

    #[test]
    fn test_full_board_with_diagonal_is_win() {
        use Mark::{O, X};
        let mut board = Board::new();
        // X O O / O X X / X O X
        for (pos, mark) in Position::ALL.into_iter().zip([X, O, O, O, X, X, X, O, X]) {
            board.set(pos, mark).unwrap();
        }
        assert_eq!(evaluate(&board).and_then(|o| o.winner()), Some(X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        use Mark::{O, X};
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip([X, O, X, X, O, O, O, X, X]) {
            board.set(pos, mark).unwrap();
        }
        assert_eq!(evaluate(&board), Some(Outcome::Draw));
    }
}
