//! Terminal modes held for the lifetime of the app and undone in reverse order on drop, which
//! includes unwinding out of a panic. SIGINT/SIGTERM are turned into a flag the main loop polls.

use crossterm::{cursor, event, execute, terminal};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    RawInput,
    AlternateScreen,
    MouseCapture,
    /// Lets a drag be cancelled when the window loses focus mid-gesture.
    FocusReports,
    HiddenCursor,
}

/// Entered first to last, left last to first.
const MODES: [TerminalMode; 5] = [
    TerminalMode::RawInput,
    TerminalMode::AlternateScreen,
    TerminalMode::MouseCapture,
    TerminalMode::FocusReports,
    TerminalMode::HiddenCursor,
];

pub trait TerminalModes {
    fn enter(&mut self, mode: TerminalMode) -> io::Result<()>;
    fn leave(&mut self, mode: TerminalMode) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct Crossterm;

impl TerminalModes for Crossterm {
    fn enter(&mut self, mode: TerminalMode) -> io::Result<()> {
        let mut out = io::stdout();
        match mode {
            TerminalMode::RawInput => terminal::enable_raw_mode(),
            TerminalMode::AlternateScreen => execute!(out, terminal::EnterAlternateScreen),
            TerminalMode::MouseCapture => execute!(out, event::EnableMouseCapture),
            TerminalMode::FocusReports => execute!(out, event::EnableFocusChange),
            TerminalMode::HiddenCursor => execute!(out, cursor::Hide),
        }
    }

    fn leave(&mut self, mode: TerminalMode) -> io::Result<()> {
        let mut out = io::stdout();
        match mode {
            TerminalMode::RawInput => terminal::disable_raw_mode(),
            TerminalMode::AlternateScreen => execute!(out, terminal::LeaveAlternateScreen),
            TerminalMode::MouseCapture => execute!(out, event::DisableMouseCapture),
            TerminalMode::FocusReports => execute!(out, event::DisableFocusChange),
            TerminalMode::HiddenCursor => execute!(out, cursor::Show),
        }
    }
}

pub struct TerminalGuard<M: TerminalModes = Crossterm> {
    modes: M,
    active: Vec<TerminalMode>,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_modes(Crossterm)
    }
}

impl<M: TerminalModes> TerminalGuard<M> {
    /// Enters every mode in order. If one fails, the ones already entered are left again
    /// before the error is returned.
    pub fn with_modes(modes: M) -> io::Result<Self> {
        let mut guard = Self {
            modes,
            active: Vec::with_capacity(MODES.len()),
        };
        for mode in MODES {
            guard.modes.enter(mode)?;
            guard.active.push(mode);
        }
        Ok(guard)
    }

    /// Leaves every active mode, even past failures, and reports the first error.
    pub fn restore(&mut self) -> io::Result<()> {
        let mut first_err = None;
        while let Some(mode) = self.active.pop() {
            if let Err(err) = self.modes.leave(mode) {
                tracing::warn!(?mode, error = %err, "failed to restore terminal mode");
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

impl<M: TerminalModes> Drop for TerminalGuard<M> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// `128 + signal number`, as shells report it.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

const RAISED_INTERRUPT: usize = 1;
const RAISED_TERMINATE: usize = 2;

/// The first SIGINT/SIGTERM is only recorded, so the main loop can unwind and restore the
/// terminal. A second one exits the process immediately.
pub struct TerminationSignals {
    raised: Arc<AtomicUsize>,
}

impl TerminationSignals {
    pub fn install() -> io::Result<Self> {
        let raised = Arc::new(AtomicUsize::new(0));

        #[cfg(unix)]
        {
            use signal_hook::consts::signal::{SIGINT, SIGTERM};
            use signal_hook::flag;
            use std::sync::atomic::AtomicBool;

            let term_now = Arc::new(AtomicBool::new(false));
            for (signal, code) in [(SIGINT, RAISED_INTERRUPT), (SIGTERM, RAISED_TERMINATE)] {
                // Checked before the flag is set, so it only fires from the second signal on.
                flag::register_conditional_shutdown(signal, 1, Arc::clone(&term_now))?;
                flag::register(signal, Arc::clone(&term_now))?;
                flag::register_usize(signal, Arc::clone(&raised), code)?;
            }
        }

        Ok(Self { raised })
    }

    pub fn pending(&self) -> Option<TerminationSignal> {
        match self.raised.load(Ordering::SeqCst) {
            RAISED_INTERRUPT => Some(TerminationSignal::Interrupt),
            RAISED_TERMINATE => Some(TerminationSignal::Terminate),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
