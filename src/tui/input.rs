//! Keyboard mapping and cursor movement.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell.
    Activate(Position),
    /// Move the cursor to the given cell.
    MoveCursor(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action; `None` for keys with no binding.
pub fn key_action(key: KeyCode, cursor: Position) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate(cursor)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Activate),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    use Position::*;

    match (cursor, key) {
        // Right movement
        (TopLeft, KeyCode::Right) => TopCenter,
        (TopCenter, KeyCode::Right) => TopRight,
        (MiddleLeft, KeyCode::Right) => Center,
        (Center, KeyCode::Right) => MiddleRight,
        (BottomLeft, KeyCode::Right) => BottomCenter,
        (BottomCenter, KeyCode::Right) => BottomRight,

        // Left movement
        (TopCenter, KeyCode::Left) => TopLeft,
        (TopRight, KeyCode::Left) => TopCenter,
        (Center, KeyCode::Left) => MiddleLeft,
        (MiddleRight, KeyCode::Left) => Center,
        (BottomCenter, KeyCode::Left) => BottomLeft,
        (BottomRight, KeyCode::Left) => BottomCenter,

        // Down movement
        (TopLeft, KeyCode::Down) => MiddleLeft,
        (TopCenter, KeyCode::Down) => Center,
        (TopRight, KeyCode::Down) => MiddleRight,
        (MiddleLeft, KeyCode::Down) => BottomLeft,
        (Center, KeyCode::Down) => BottomCenter,
        (MiddleRight, KeyCode::Down) => BottomRight,

        // Up movement
        (MiddleLeft, KeyCode::Up) => TopLeft,
        (Center, KeyCode::Up) => TopCenter,
        (MiddleRight, KeyCode::Up) => TopRight,
        (BottomLeft, KeyCode::Up) => MiddleLeft,
        (BottomCenter, KeyCode::Up) => Center,
        (BottomRight, KeyCode::Up) => MiddleRight,

        // Edges and other keys
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_activate_in_reading_order() {
        assert_eq!(
            key_action(KeyCode::Char('1'), Position::Center),
            Some(Action::Activate(Position::TopLeft))
        );
        assert_eq!(
            key_action(KeyCode::Char('9'), Position::Center),
            Some(Action::Activate(Position::BottomRight))
        );
        assert_eq!(key_action(KeyCode::Char('0'), Position::Center), None);
    }

    #[test]
    fn test_enter_activates_cursor() {
        assert_eq!(
            key_action(KeyCode::Enter, Position::MiddleRight),
            Some(Action::Activate(Position::MiddleRight))
        );
    }

    #[test]
    fn test_restart_and_quit() {
        assert_eq!(key_action(KeyCode::Char('r'), Position::Center), Some(Action::Restart));
        assert_eq!(key_action(KeyCode::Esc, Position::Center), Some(Action::Quit));
        assert_eq!(key_action(KeyCode::Char('x'), Position::Center), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(
            key_action(KeyCode::Down, Position::Center),
            Some(Action::MoveCursor(Position::BottomCenter))
        );
    }
}
