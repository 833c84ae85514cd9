//! Core domain types for tic-tac-toe.

use super::action::{InvalidReason, MoveError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A square only goes from `Empty` to `Occupied`; the only way back is
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` when out of range.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the square is already occupied.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn set(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!("Square already occupied");
            return Err(MoveError::invalid(pos.row(), pos.col(), InvalidReason::Occupied));
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the coordinates are outside the
    /// board or the square is already occupied.
    pub fn set_at(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let pos = Position::from_coords(row, col)
            .ok_or_else(|| MoveError::invalid(row, col, InvalidReason::OutOfRange))?;
        self.set(pos, mark)
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empties every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_mutates_only_target() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::X).unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_set_occupied_fails() {
        let mut board = Board::new();
        board.set_at(0, 0, Mark::X).unwrap();
        let err = board.set_at(0, 0, Mark::O).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidMove {
                row: 0,
                col: 0,
                reason: InvalidReason::Occupied
            }
        );
        assert_eq!(board.get_at(0, 0), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_set_out_of_range_fails() {
        let mut board = Board::new();
        let err = board.set_at(3, 1, Mark::X).unwrap_err();
        assert!(matches!(
            err,
            MoveError::InvalidMove {
                reason: InvalidReason::OutOfRange,
                ..
            }
        ));
        assert_eq!(board, Board::new());
        assert_eq!(board.get_at(1, 3), None);
    }

    #[test]
    fn test_reset_clears_every_square() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.set(*pos, mark).unwrap();
        }
        assert!(board.is_full());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Mark::X).unwrap();
        board.set(Position::Center, Mark::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
