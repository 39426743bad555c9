//! Terminal setup and teardown.

use anyhow::Result;
use crossterm::{cursor::Show, execute, terminal::LeaveAlternateScreen};
use ratatui::DefaultTerminal;
use std::io;
use tracing::{debug, warn};

/// Runs a restore action when dropped.
///
/// Runs on every exit path, including unwinding from a panic.
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms the guard.
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

/// Switches to raw mode and the alternate screen.
///
/// The guard is armed before any terminal state changes, so a failure
/// halfway through setup is undone too. Setup also installs a panic hook
/// that restores the terminal before the panic message prints.
pub fn enter() -> Result<(RestoreGuard<fn()>, DefaultTerminal)> {
    let guard = RestoreGuard::new(restore as fn());
    let terminal = ratatui::try_init()?;
    Ok((guard, terminal))
}

/// Leaves raw mode and the alternate screen.
///
/// Each step runs even if an earlier one failed.
fn restore() {
    if let Err(error) = crossterm::terminal::disable_raw_mode() {
        warn!(%error, "Failed to disable raw mode");
    }
    if let Err(error) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(%error, "Failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn guarded(restored: &Cell<u32>, fail: bool) -> Result<()> {
        let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        if fail {
            anyhow::bail!("loop failed");
        }
        Ok(())
    }

    #[test]
    fn test_restores_on_success_and_error() {
        let restored = Cell::new(0);
        assert!(guarded(&restored, false).is_ok());
        assert_eq!(restored.get(), 1);

        assert!(guarded(&restored, true).is_err());
        assert_eq!(restored.get(), 2);
    }

    #[test]
    fn test_restores_while_unwinding() {
        let restored = Cell::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
            panic!("invariant violated");
        }));

        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }
}
