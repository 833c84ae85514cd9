//! Terminal restore guard.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs a restore action exactly once: explicitly via [`TerminalGuard::restore`],
/// or on drop if setup bails out early.
pub struct TerminalGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> TerminalGuard<F> {
    /// Arms the guard with `restore`.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Runs the restore action now.
    pub fn restore(mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

impl<F: FnOnce()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            debug!("Restoring terminal on early exit");
            restore();
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture.
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn failing_setup(restored: &Cell<u32>) -> anyhow::Result<()> {
        let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        Err::<(), _>(io::Error::other("alternate screen unavailable"))?;
        Ok(())
    }

    #[test]
    fn test_restores_when_setup_fails() {
        let restored = Cell::new(0);
        assert!(failing_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_explicit_restore_runs_once() {
        let restored = Cell::new(0);
        let guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        guard.restore();
        assert_eq!(restored.get(), 1);
    }
}
