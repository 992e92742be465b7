use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use zcalc::app::App;
use zcalc::services;
use zcalc::tui::{TerminalGuard, TerminationSignal};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let logging_guard = logging::init();

    if let Err(err) = services::ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let settings = services::load_settings();
    let mut app = App::from_settings(&settings);

    let guard = TerminalGuard::new()?;
    #[cfg(unix)]
    let signal_rx = guard.watch_signals()?;
    #[cfg(not(unix))]
    let signal_rx = std::sync::mpsc::channel::<TerminationSignal>().1;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let outcome = run(&mut terminal, &mut app, &signal_rx);

    drop(terminal);
    drop(guard);

    match outcome? {
        Some(signal) => {
            tracing::info!(?signal, "exiting on signal");
            drop(logging_guard);
            std::process::exit(signal.exit_code());
        }
        None => {
            tracing::info!(display = app.engine().display(), "exiting");
            Ok(())
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }

        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }

        let event = crossterm::event::read()?;
        let result = app.handle_event(&event);
        if result.is_quit() {
            return Ok(None);
        }
        dirty |= result.needs_redraw();
    }
}
