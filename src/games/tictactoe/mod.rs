//! Tic-tac-toe board, rules and outcomes.

pub mod action;
pub mod phases;
pub mod position;
pub mod rules;
pub mod types;

pub use action::{InvalidReason, MoveError};
pub use phases::{Line, Outcome};
pub use position::Position;
pub use rules::{LINES, evaluate};
pub use types::{Board, Mark, Square};
