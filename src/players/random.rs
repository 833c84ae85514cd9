//! Computer player that picks a uniformly random empty square.

use super::Player;
use crate::games::tictactoe::{Board, MoveError, Position};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, instrument};

/// Random computer opponent.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R = ChaCha8Rng> {
    name: String,
    rng: R,
}

impl RandomPlayer<ChaCha8Rng> {
    /// Creates a random player seeded from OS entropy.
    pub fn from_entropy(name: impl Into<String>) -> Self {
        Self::new(name, ChaCha8Rng::from_entropy())
    }

    /// Creates a random player with a fixed seed, for reproducible sessions.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn produce_move(&mut self, board: &Board) -> Result<Position, MoveError> {
        let open = Position::valid_moves(board);
        let position = *open.choose(&mut self.rng).ok_or_else(|| {
            error!("Asked to move on a full board");
            MoveError::NoMovesAvailable
        })?;
        debug!(%position, choices = open.len(), "Computer chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Mark::X).unwrap();
        }
        let mut computer = RandomPlayer::seeded("Computer", 7);
        assert_eq!(
            computer.produce_move(&board),
            Err(MoveError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_single_open_square_is_forced() {
        let mut board = Board::new();
        for pos in Position::ALL.into_iter().filter(|p| *p != Position::BottomCenter) {
            board.set(pos, Mark::O).unwrap();
        }
        let mut computer = RandomPlayer::seeded("Computer", 1);
        for _ in 0..20 {
            assert_eq!(computer.produce_move(&board), Ok(Position::BottomCenter));
        }
    }

    #[test]
    fn test_never_picks_occupied() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Mark::X).unwrap();
        board.set(Position::Center, Mark::O).unwrap();
        let mut computer = RandomPlayer::seeded("Computer", 99);
        for _ in 0..500 {
            let pos = computer.produce_move(&board).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomPlayer::seeded("A", 42);
        let mut b = RandomPlayer::seeded("B", 42);
        for _ in 0..50 {
            assert_eq!(a.produce_move(&board), b.produce_move(&board));
        }
    }
}
