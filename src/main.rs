use langdeck::app::theme::ColorDepth;
use langdeck::app::{DeckApp, DeckTheme};
use langdeck::core::view::{EventResult, View};
use langdeck::kernel::deck::{default_items, DeckState};
use langdeck::tui::crossterm::into_input_event;
use langdeck::tui::terminal_guard::{TerminalGuard, TerminationSignal, TerminationSignals};
use langdeck::ui::backend::terminal::RatatuiTerminal;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let mut logging = langdeck::logging::init();
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());

    let settings = langdeck::settings::load_settings();
    let mut theme = DeckTheme::default();
    theme.apply_settings(&settings.theme);
    theme.set_depth(ColorDepth::detect());

    let deck = DeckState::new(default_items())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    let mut app = DeckApp::new(deck, theme, settings.drag_threshold, log_rx);

    let signals = TerminationSignals::install()?;
    let mut guard = TerminalGuard::new()?;
    let result = RatatuiTerminal::new(io::stdout())
        .and_then(|mut terminal| run(&mut app, &mut terminal, &signals));
    if let Err(err) = guard.restore() {
        tracing::warn!(error = %err, "terminal not fully restored");
    }

    match result {
        Ok(None) => {
            tracing::info!("exiting");
            Ok(())
        }
        Ok(Some(signal)) => {
            tracing::info!(?signal, "exiting on signal");
            drop(logging);
            std::process::exit(signal.exit_code());
        }
        Err(err) => {
            tracing::error!(error = %err, "terminal error");
            Err(err)
        }
    }
}

fn run(
    app: &mut DeckApp,
    terminal: &mut RatatuiTerminal,
    signals: &TerminationSignals,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if let Some(signal) = signals.pending() {
            return Ok(Some(signal));
        }

        dirty |= app.tick();
        if dirty {
            terminal.draw(|backend, area| app.render(backend, area))?;
            dirty = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = into_input_event(crossterm::event::read()?) else {
            continue;
        };
        match app.handle_input(&event) {
            EventResult::Quit => return Ok(None),
            EventResult::Consumed => dirty = true,
            EventResult::Ignored => {}
        }
    }
}
