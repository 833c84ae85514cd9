//! UI rendering using ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::TuiSurface;
use crate::games::tictactoe::{Mark, Position};
use crate::surface::Tint;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen and records the cell rectangles for mouse input.
pub fn draw(frame: &mut Frame, view: &mut TuiSurface, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Scores
            Constraint::Length(3), // Message
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], view);

    let message = Paragraph::new(view.message())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[2]);

    let areas = draw_board(frame, chunks[3], view);
    view.set_cell_areas(areas);

    let help = Paragraph::new("1-9 or click: move | Arrows + Enter: move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, view: &TuiSurface) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let (player, computer) = view.scores();
    frame.render_widget(
        Paragraph::new(player).alignment(Alignment::Center),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(computer).alignment(Alignment::Center),
        halves[1],
    );
}

fn draw_board(frame: &mut Frame, area: Rect, view: &TuiSurface) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        let cols = draw_row(frame, rows[row * 2], view, row);
        areas[row * 3..row * 3 + 3].copy_from_slice(&cols);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_row(frame: &mut Frame, area: Rect, view: &TuiSurface, row: usize) -> [Rect; 3] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    let mut cells = [Rect::default(); 3];
    for col in 0..3 {
        if let Some(pos) = Position::from_coords(row, col) {
            draw_cell(frame, cols[col * 2], view, pos);
        }
        cells[col] = cols[col * 2];
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &TuiSurface, pos: Position) {
    let (symbol, mut style) = match view.cell(pos) {
        None => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if let Some(tint) = view.tint(pos) {
        style = style.bg(tint_color(tint)).fg(Color::Black);
    }
    if pos == view.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Middle line of the cell, padded so the background fills it.
    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(
            format!("{:^width$}", symbol, width = area.width as usize),
            style,
        )),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Cyan => Color::Cyan,
        Tint::Red => Color::Red,
        Tint::Green => Color::Green,
        Tint::Yellow => Color::Yellow,
        Tint::Magenta => Color::Magenta,
        Tint::Blue => Color::Blue,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
