//! Human player fed by cell activations from the surface.

use super::Player;
use crate::games::tictactoe::{Board, InvalidReason, MoveError, Position};
use tracing::{debug, instrument};

/// Human player whose move is the last cell the surface reported.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    pending: Option<Position>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pending: None,
        }
    }

    /// Records the cell the human activated.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn select(&mut self, position: Position) {
        self.pending = Some(position);
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn produce_move(&mut self, board: &Board) -> Result<Position, MoveError> {
        let position = self.pending.take().ok_or(MoveError::AwaitingInput)?;
        if !board.is_empty(position) {
            debug!(%position, "Selected square is occupied");
            return Err(MoveError::invalid(
                position.row(),
                position.col(),
                InvalidReason::Occupied,
            ));
        }
        debug!(%position, "Human chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
