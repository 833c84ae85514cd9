//! Outcome of a finished game.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// An ordered triple of positions forming a winning line.
pub type Line = [Position; 3];

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner { mark, .. } => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<&Line> {
        match self {
            Outcome::Winner { line, .. } => Some(line),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { mark, .. } => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "It's a tie!"),
        }
    }
}
