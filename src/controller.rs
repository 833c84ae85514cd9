//! Game controller: turn order, rule checks, scoring and surface updates.

use derive_getters::Getters;
use tracing::{debug, error, info, instrument, warn};

use crate::config::DuelConfig;
use crate::games::tictactoe::{Mark, MoveError, Outcome, Position, rules};
use crate::players::{HumanPlayer, Player, RandomPlayer};
use crate::session::{GameState, Phase, Score, Seat};
use crate::surface::Surface;

/// Drives one human against one computer player.
///
/// The surface reports input through [`GameController::on_cell_activated`]
/// and [`GameController::on_restart_activated`]; the controller answers
/// through the [`Surface`] methods. All game state lives here.
#[derive(Debug, Getters)]
pub struct GameController<S, A = RandomPlayer> {
    state: GameState,
    score: Score,
    #[getter(skip)]
    human: HumanPlayer,
    #[getter(skip)]
    computer: A,
    surface: S,
    config: DuelConfig,
}

impl<S: Surface, A: Player> GameController<S, A> {
    /// Creates a controller and shows the initial scores.
    #[instrument(skip_all, fields(human_mark = %config.human_mark()))]
    pub fn new(config: DuelConfig, computer: A, surface: S) -> Self {
        info!(computer = computer.name(), "Starting new session");
        let mut controller = Self {
            state: GameState::new(),
            score: Score::new(),
            human: HumanPlayer::new(config.player_label().clone()),
            computer,
            surface,
            config,
        };
        controller.publish_score();
        controller
    }

    /// Gives mutable access to the surface, e.g. for drawing or hit-testing.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Mark played from `seat`.
    pub fn mark_of(&self, seat: Seat) -> Mark {
        match seat {
            Seat::Human => *self.config.human_mark(),
            Seat::Computer => self.config.computer_mark(),
        }
    }

    /// Seat that plays `mark`.
    pub fn seat_of(&self, mark: Mark) -> Seat {
        if mark == *self.config.human_mark() {
            Seat::Human
        } else {
            Seat::Computer
        }
    }

    /// Handles a click on `(row, col)`.
    ///
    /// Clicks outside the board, on occupied cells, or after the game is
    /// over are ignored. A legal click plays the human move and, unless
    /// that ends the game, the computer's reply before returning.
    ///
    /// # Errors
    ///
    /// Returns an error only if the computer cannot produce a legal move,
    /// which means the turn sequencing is broken.
    #[instrument(skip(self), fields(phase = ?self.state.phase()))]
    pub fn on_cell_activated(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.state.phase() != Phase::AwaitingHumanMove {
            debug!("Ignoring click: not waiting for a human move");
            return Ok(());
        }
        let Some(position) = Position::from_coords(row, col) else {
            debug!("Ignoring click outside the board");
            return Ok(());
        };
        if !self.state.board().is_empty(position) {
            debug!(%position, "Ignoring click on occupied square");
            return Ok(());
        }

        self.human.select(position);
        let placed = self
            .human
            .produce_move(self.state.board())
            .and_then(|position| self.apply(Seat::Human, position));
        if let Err(e) = placed {
            warn!(error = %e, "Human move rejected");
            return Ok(());
        }
        if self.settle() {
            return Ok(());
        }

        self.state.hand_turn_to(Seat::Computer);
        self.play_computer()?;
        if self.settle() {
            return Ok(());
        }
        self.state.hand_turn_to(Seat::Human);
        Ok(())
    }

    /// Starts a new game. Scores carry over.
    #[instrument(skip(self), fields(phase = ?self.state.phase()))]
    pub fn on_restart_activated(&mut self) {
        let marked: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| !self.state.board().is_empty(*pos))
            .collect();
        self.state.reset();
        info!(cleared = marked.len(), "Game restarted");

        self.surface.set_message("");
        for position in marked {
            self.surface.render_cell(position, None);
        }
        self.surface.reset_cell_styling();
    }

    fn play_computer(&mut self) -> Result<(), MoveError> {
        let position = self
            .computer
            .produce_move(self.state.board())
            .inspect_err(|e| error!(error = %e, "Computer could not move"))?;
        self.apply(Seat::Computer, position)
            .inspect_err(|e| error!(error = %e, "Computer chose an illegal square"))
    }

    fn apply(&mut self, seat: Seat, position: Position) -> Result<(), MoveError> {
        let mark = self.mark_of(seat);
        self.state.board_mut().set(position, mark)?;
        debug!(%seat, %mark, %position, board = %self.state.board().display(), "Move applied");
        self.surface.render_cell(position, Some(mark));
        Ok(())
    }

    /// Runs the rules; returns `true` if the game just ended.
    fn settle(&mut self) -> bool {
        match rules::evaluate(self.state.board()) {
            Some(outcome) => {
                self.finish(outcome);
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, "Game over");
        self.state.finish(outcome);
        self.surface.set_message(&outcome.to_string());
        match outcome {
            Outcome::Winner { mark, line } => {
                self.score.record_win(self.seat_of(mark));
                self.surface.highlight_cells(&line, *self.config.win_tint());
                self.publish_score();
            }
            Outcome::Draw => {
                self.surface
                    .highlight_cells(&Position::ALL, *self.config.tie_tint());
            }
        }
    }

    fn publish_score(&mut self) {
        let (player, computer) = self
            .score
            .labels(self.config.player_label(), self.config.computer_label());
        self.surface.set_score_display(&player, &computer);
    }
}
