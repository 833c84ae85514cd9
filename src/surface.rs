//! Outbound interface from the controller to whatever draws the game.
//!
//! The controller never holds a widget. It calls these methods, and the
//! surface keeps its own view state.

use crate::games::tictactoe::{Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Highlight color for cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    /// Cyan.
    #[display("cyan")]
    Cyan,
    /// Red.
    #[display("red")]
    Red,
    /// Green.
    #[display("green")]
    Green,
    /// Yellow.
    #[display("yellow")]
    Yellow,
    /// Magenta.
    #[display("magenta")]
    Magenta,
    /// Blue.
    #[display("blue")]
    Blue,
}

/// Receiver of presentation updates.
pub trait Surface {
    /// Shows `mark` in the cell, or clears it when `None`.
    fn render_cell(&mut self, position: Position, mark: Option<Mark>);

    /// Replaces the message line.
    fn set_message(&mut self, text: &str);

    /// Replaces both score labels.
    fn set_score_display(&mut self, player_label: &str, computer_label: &str);

    /// Paints the given cells.
    fn highlight_cells(&mut self, cells: &[Position], tint: Tint);

    /// Removes every highlight.
    fn reset_cell_styling(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn render_cell(&mut self, position: Position, mark: Option<Mark>) {
        (**self).render_cell(position, mark);
    }

    fn set_message(&mut self, text: &str) {
        (**self).set_message(text);
    }

    fn set_score_display(&mut self, player_label: &str, computer_label: &str) {
        (**self).set_score_display(player_label, computer_label);
    }

    fn highlight_cells(&mut self, cells: &[Position], tint: Tint) {
        (**self).highlight_cells(cells, tint);
    }

    fn reset_cell_styling(&mut self) {
        (**self).reset_cell_styling();
    }
}

/// One call made on a [`Surface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// [`Surface::render_cell`].
    RenderCell {
        /// Cell rendered.
        position: Position,
        /// Mark shown, `None` for blank.
        mark: Option<Mark>,
    },
    /// [`Surface::set_message`].
    Message(String),
    /// [`Surface::set_score_display`].
    Scores {
        /// Human label, e.g. `You: 1`.
        player: String,
        /// Computer label, e.g. `Computer: 0`.
        computer: String,
    },
    /// [`Surface::highlight_cells`].
    Highlight {
        /// Cells painted.
        cells: Vec<Position>,
        /// Paint color.
        tint: Tint,
    },
    /// [`Surface::reset_cell_styling`].
    ResetStyling,
}

/// Surface that records every call, for headless driving and tests.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SurfaceEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    fn push(&mut self, event: SurfaceEvent) {
        trace!(?event, "Surface event");
        self.events.push(event);
    }
}

impl Surface for EventLog {
    fn render_cell(&mut self, position: Position, mark: Option<Mark>) {
        self.push(SurfaceEvent::RenderCell { position, mark });
    }

    fn set_message(&mut self, text: &str) {
        self.push(SurfaceEvent::Message(text.to_string()));
    }

    fn set_score_display(&mut self, player_label: &str, computer_label: &str) {
        self.push(SurfaceEvent::Scores {
            player: player_label.to_string(),
            computer: computer_label.to_string(),
        });
    }

    fn highlight_cells(&mut self, cells: &[Position], tint: Tint) {
        self.push(SurfaceEvent::Highlight {
            cells: cells.to_vec(),
            tint,
        });
    }

    fn reset_cell_styling(&mut self) {
        self.push(SurfaceEvent::ResetStyling);
    }
}
