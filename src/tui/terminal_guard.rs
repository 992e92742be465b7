//! Raw-mode screen session for the calculator.
//!
//! Entering switches to the alternate screen with mouse capture; leaving
//! undoes it exactly once, whether from `Drop`, an explicit call, or the
//! signal watcher thread.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How long the signal watcher waits for the event loop before forcing exit.
const SIGNAL_GRACE: Duration = Duration::from_millis(500);

/// Terminal side effects, split out so sessions can run against a fake.
pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermOps;

impl TerminalOps for CrosstermOps {
    fn enter(&self) -> io::Result<()> {
        use crossterm::event::EnableMouseCapture;
        use crossterm::terminal::{self, EnterAlternateScreen};

        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            crossterm::cursor::Hide
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::event::DisableMouseCapture;
        use crossterm::terminal::{self, LeaveAlternateScreen};

        let raw = terminal::disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            crossterm::cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        raw.and(screen)
    }
}

struct Session {
    ops: Box<dyn TerminalOps>,
    active: AtomicBool,
}

impl Session {
    fn leave(&self) -> io::Result<()> {
        if !self.active.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave()
    }
}

pub struct TerminalGuard {
    session: Arc<Session>,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(CrosstermOps)
    }

    /// Half-entered terminals are left again before the error is returned.
    pub fn with_ops(ops: impl TerminalOps) -> io::Result<Self> {
        if let Err(err) = ops.enter() {
            if let Err(leave_err) = ops.leave() {
                tracing::warn!(error = %leave_err, "terminal rollback failed");
            }
            return Err(err);
        }
        Ok(Self {
            session: Arc::new(Session {
                ops: Box::new(ops),
                active: AtomicBool::new(true),
            }),
        })
    }

    pub fn is_active(&self) -> bool {
        self.session.active.load(Ordering::SeqCst)
    }

    pub fn leave(&self) -> io::Result<()> {
        self.session.leave()
    }

    /// Forwards SIGINT/SIGTERM to the returned channel. If the event loop has
    /// not exited within the grace period, the watcher leaves the terminal and
    /// exits the process itself.
    #[cfg(unix)]
    pub fn watch_signals(&self) -> io::Result<std::sync::mpsc::Receiver<TerminationSignal>> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGINT, SIGTERM])?;
        let (tx, rx) = std::sync::mpsc::channel();
        let session = Arc::clone(&self.session);

        std::thread::Builder::new()
            .name("zcalc-signals".to_string())
            .spawn(move || {
                for raw in signals.forever() {
                    let Some(signal) = TerminationSignal::from_raw(raw) else {
                        continue;
                    };
                    tracing::info!(?signal, "termination signal received");
                    let _ = tx.send(signal);

                    std::thread::sleep(SIGNAL_GRACE);
                    let _ = session.leave();
                    std::process::exit(signal.exit_code());
                }
            })?;
        Ok(rx)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.session.leave() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    #[cfg(unix)]
    pub fn from_raw(raw: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match raw {
            SIGINT => Some(TerminationSignal::Interrupt),
            SIGTERM => Some(TerminationSignal::Terminate),
            _ => None,
        }
    }

    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
