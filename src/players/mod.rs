//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::games::tictactoe::{Board, MoveError, Position};

/// Something that can choose a move for the current board.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned position is empty on `board`; the caller applies it.
    fn produce_move(&mut self, board: &Board) -> Result<Position, MoveError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn produce_move(&mut self, board: &Board) -> Result<Position, MoveError> {
        (**self).produce_move(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
