//! Move errors for tic-tac-toe.

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidReason {
    /// Row or column outside `0..3`.
    #[display("out of range")]
    OutOfRange,
    /// Square already holds a mark.
    #[display("square is occupied")]
    Occupied,
}

/// Error that can occur when producing or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target square is occupied or outside the board.
    #[display("Invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Why the move was rejected.
        reason: InvalidReason,
    },

    /// An agent was asked to move on a full board.
    #[display("No moves available: board is full")]
    NoMovesAvailable,

    /// The human adapter was asked for a move before a cell was chosen.
    #[display("No cell selected yet")]
    AwaitingInput,
}

impl MoveError {
    /// Shorthand for [`MoveError::InvalidMove`].
    pub fn invalid(row: usize, col: usize, reason: InvalidReason) -> Self {
        Self::InvalidMove { row, col, reason }
    }
}
