//! Tic-tac-toe duel library - a human against a random computer opponent
//!
//! # Architecture
//!
//! - **Games**: board, positions, win and draw rules
//! - **Players**: the human input adapter and the random computer
//! - **Controller**: turn order, scoring, and updates to the surface
//! - **Surface**: the outbound interface the controller draws through
//! - **TUI**: a terminal surface built on ratatui and crossterm
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{DuelConfig, EventLog, GameController, RandomPlayer};
//!
//! let computer = RandomPlayer::seeded("Computer", 7);
//! let mut game = GameController::new(DuelConfig::default(), computer, EventLog::new());
//! game.on_cell_activated(1, 1).unwrap();
//! assert_eq!(game.state().board().occupied(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod games;
mod players;
mod session;
mod surface;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DuelConfig};

// Crate-level exports - Controller
pub use controller::GameController;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, InvalidReason, LINES, Line, Mark, MoveError, Outcome, Position, Square, evaluate,
};

// Crate-level exports - Players
pub use players::{HumanPlayer, Player, RandomPlayer};

// Crate-level exports - Session state
pub use session::{GameState, Phase, Score, Seat};

// Crate-level exports - Presentation
pub use surface::{EventLog, Surface, SurfaceEvent, Tint};
pub use tui::{Action, TuiSurface, key_action, move_cursor, run_tui};
