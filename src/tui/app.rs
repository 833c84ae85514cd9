//! Terminal view state, fed by the controller through [`Surface`].

use ratatui::layout::Rect;
use tracing::{debug, trace};

use crate::games::tictactoe::{Mark, Position};
use crate::surface::{Surface, Tint};

/// What the terminal shows. Owned by the controller, drawn by [`super::ui`].
#[derive(Debug, Clone)]
pub struct TuiSurface {
    cells: [Option<Mark>; 9],
    tints: [Option<Tint>; 9],
    message: String,
    player_score: String,
    computer_score: String,
    cursor: Position,
    cell_areas: [Rect; 9],
}

impl TuiSurface {
    /// Blank board, cursor in the center.
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            tints: [None; 9],
            message: String::new(),
            player_score: String::new(),
            computer_score: String::new(),
            cursor: Position::Center,
            cell_areas: [Rect::default(); 9],
        }
    }

    /// Mark shown in `position`.
    pub fn cell(&self, position: Position) -> Option<Mark> {
        self.cells[position.to_index()]
    }

    /// Highlight on `position`.
    pub fn tint(&self, position: Position) -> Option<Tint> {
        self.tints[position.to_index()]
    }

    /// Message line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Human and computer score labels.
    pub fn scores(&self) -> (&str, &str) {
        (&self.player_score, &self.computer_score)
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Records where each cell was drawn, in reading order.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Cell under the terminal coordinate `(column, row)`.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Position> {
        let hit = self.cell_areas.iter().position(|area| {
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        });
        trace!(column, row, ?hit, "Hit test");
        hit.and_then(Position::from_index)
    }
}

impl Default for TuiSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TuiSurface {
    fn render_cell(&mut self, position: Position, mark: Option<Mark>) {
        self.cells[position.to_index()] = mark;
    }

    fn set_message(&mut self, text: &str) {
        debug!(text, "Message");
        self.message = text.to_string();
    }

    fn set_score_display(&mut self, player_label: &str, computer_label: &str) {
        self.player_score = player_label.to_string();
        self.computer_score = computer_label.to_string();
    }

    fn highlight_cells(&mut self, cells: &[Position], tint: Tint) {
        for position in cells {
            self.tints[position.to_index()] = Some(tint);
        }
    }

    fn reset_cell_styling(&mut self) {
        self.tints = [None; 9];
    }
}
