//! `tracing` setup: a daily-rolling file in the cache dir, plus a second layer that feeds
//! INFO-and-above messages to the status line through a channel.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const LOG_ENV: &str = "LANGDECK_LOG";
const DEFAULT_FILTER: &str = "langdeck=info";
const LOG_FILE_PREFIX: &str = "langdeck.log";

/// Keeps the background file writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    /// The status-line feed. Only the first caller gets it.
    pub fn take_log_rx(&mut self) -> Option<Receiver<String>> {
        self.log_rx.take()
    }
}

#[derive(Clone)]
struct StatusSink(Sender<String>);

impl<'a> MakeWriter<'a> for StatusSink {
    type Writer = StatusRecord;

    fn make_writer(&'a self) -> Self::Writer {
        StatusRecord {
            text: Vec::new(),
            tx: self.0.clone(),
        }
    }
}

/// One formatted event. The fmt layer asks for a fresh writer per event, so the record is
/// complete when it is dropped.
struct StatusRecord {
    text: Vec<u8>,
    tx: Sender<String>,
}

impl Write for StatusRecord {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.text.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for StatusRecord {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.text);
        let line = text.trim();
        if !line.is_empty() {
            // The app may be gone already; nothing to report to then.
            let _ = self.tx.send(line.to_string());
        }
    }
}

/// Bare messages (no time, level or target) for the one-line status bar.
fn status_layer<S>(tx: Sender<String>) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(StatusSink(tx))
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO)
}

fn log_dir() -> io::Result<PathBuf> {
    crate::settings::ensure_log_dir().or_else(|_| -> io::Result<PathBuf> {
        let dir = std::env::temp_dir().join("langdeck").join("logs");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Returns `None` if no log dir is usable or a subscriber is
/// already installed; the app runs without logs in that case.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let (log_tx, log_rx) = mpsc::channel();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(status_layer(log_tx))
        .try_init()
        .ok()?;

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "panic");
        previous(info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "logging to file");

    Some(LoggingGuard {
        _guard: guard,
        log_rx: Some(log_rx),
    })
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
