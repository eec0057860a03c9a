use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::Show,
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::warn;

/// Puts the terminal into raw mode on the alternate screen and puts it back
/// when dropped, whether the session ends normally, with an error or with a
/// panic.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl TerminalGuard<Stdout> {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // from here on a failed setup step still restores on drop
        let mut guard = Self {
            out: io::stdout(),
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen, EnableFocusChange)?;
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    /// Guard a writer without touching raw mode
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            raw_mode: false,
        }
    }

    fn restore(&mut self) {
        if self.raw_mode {
            if let Err(e) = disable_raw_mode() {
                warn!(error = %e, "failed to disable raw mode");
            }
        }
        if let Err(e) = execute!(self.out, DisableFocusChange, LeaveAlternateScreen, Show) {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        self.restore();
    }
}
