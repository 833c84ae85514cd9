//! Terminal UI: the concrete surface and its event loop.

mod app;
mod guard;
mod input;
mod ui;

pub use app::TuiSurface;
pub use input::{Action, key_action, move_cursor};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::DuelConfig;
use crate::controller::GameController;
use crate::players::Player;
use crate::session::Seat;
use guard::{TerminalGuard, restore_terminal};

type Controller<A> = GameController<TuiSurface, A>;

/// Runs a session in the terminal until the user quits.
#[instrument(skip_all)]
pub fn run_tui<A: Player>(config: DuelConfig, computer: A) -> Result<()> {
    info!("Starting terminal session");

    enable_raw_mode().context("Failed to enable raw mode")?;
    // Restores the terminal if any setup step below fails.
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let title = config.title().clone();
    let mut controller = GameController::new(config, computer, TuiSurface::new());
    let res = event_loop(&mut terminal, &mut controller, &title);

    guard.restore();
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        human = controller.score().wins(Seat::Human),
        computer = controller.score().wins(Seat::Computer),
        "Session ended"
    );
    res
}

fn event_loop<A: Player>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut Controller<A>,
    title: &str,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, controller.surface_mut(), title))?;

        let action = match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                key_action(key.code, controller.surface().cursor())
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                controller
                    .surface()
                    .hit_test(mouse.column, mouse.row)
                    .map(Action::Activate)
            }
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };
        debug!(?action, "Input");
        match action {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Restart => controller.on_restart_activated(),
            Action::MoveCursor(cursor) => controller.surface_mut().set_cursor(cursor),
            Action::Activate(position) => {
                controller.surface_mut().set_cursor(position);
                let (row, col) = position.coords();
                controller.on_cell_activated(row, col)?;
            }
        }
    }
}
