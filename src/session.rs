//! Per-game state and the session-long score.

use crate::games::tictactoe::{Board, Line, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Which side of the table a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// The person at the keyboard.
    Human,
    /// The random computer opponent.
    Computer,
}

/// Controller state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to activate a cell.
    AwaitingHumanMove,
    /// The computer is about to move. Only seen inside a single click.
    AwaitingAgentMove,
    /// Win or tie reached; only restart is accepted.
    GameOver,
}

/// State of the game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Seat,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Fresh game: empty board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Seat::Human,
            phase: Phase::AwaitingHumanMove,
            outcome: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seat holding the turn.
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome once the game is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Winning line once a mark has won.
    pub fn winning_line(&self) -> Option<&Line> {
        self.outcome.as_ref().and_then(Outcome::line)
    }

    /// Terminal flag.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn hand_turn_to(&mut self, seat: Seat) {
        self.to_move = seat;
        self.phase = match seat {
            Seat::Human => Phase::AwaitingHumanMove,
            Seat::Computer => Phase::AwaitingAgentMove,
        };
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
    }

    pub(crate) fn reset(&mut self) {
        self.board.reset();
        self.hand_turn_to(Seat::Human);
        self.outcome = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Win counters for the lifetime of the process.
///
/// Counters only grow; restarting a game leaves them alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    human: u32,
    computer: u32,
}

impl Score {
    /// Both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `seat`.
    pub fn wins(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Human => self.human,
            Seat::Computer => self.computer,
        }
    }

    /// Adds one win for `seat`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, seat: Seat) {
        let counter = match seat {
            Seat::Human => &mut self.human,
            Seat::Computer => &mut self.computer,
        };
        *counter = counter.saturating_add(1);
        info!(human = self.human, computer = self.computer, "Score updated");
    }

    /// Formats `"<label>: <wins>"` for both seats.
    pub fn labels(&self, player_label: &str, computer_label: &str) -> (String, String) {
        (
            format!("{}: {}", player_label, self.human),
            format!("{}: {}", computer_label, self.computer),
        )
    }
}
