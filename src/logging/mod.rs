//! Logging context and caller-labelled logging helpers.
//!
//! A [`LoggingContext`] is built once in `main`, installs the global
//! `tracing` subscriber and owns the [`SharedLogQueue`] that keeps the
//! most recent records for the debug log viewer and error dialogs.
//!
//! The free functions (`debug`, `info`, `warning`, ...) tag each event with
//! a caller label. When no label is given, the stem of the calling source
//! file is used.

mod layer;
mod queue;
mod record;

pub use layer::QueueLayer;
pub use queue::{BoundedLogQueue, SharedLogQueue, DEFAULT_LOG_CAPACITY};
pub use record::{LogRecord, Severity};

use std::io::Write;
use std::panic::Location;
use std::path::Path;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::error::{Error, Result};

/// Default console filter when `RUST_LOG` is not set
const DEFAULT_CONSOLE_FILTER: &str = "info";

/// Process-wide logging setup with explicit teardown.
pub struct LoggingContext {
    queue: SharedLogQueue,
    installed: bool,
}

impl LoggingContext {
    /// Create a context retaining at most `capacity` records.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            queue: SharedLogQueue::with_capacity(capacity)?,
            installed: false,
        })
    }

    /// Handle to the in-memory record queue
    pub fn queue(&self) -> &SharedLogQueue {
        &self.queue
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Install the global subscriber: console output at INFO (or `RUST_LOG`)
    /// and the in-memory queue at DEBUG.
    pub fn install(&mut self) -> Result<()> {
        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER));

        let console_layer = fmt::layer().with_target(true).with_filter(console_filter);
        let queue_layer = QueueLayer::new(self.queue.clone()).with_filter(LevelFilter::DEBUG);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(queue_layer)
            .try_init()
            .map_err(|e| Error::Logging(e.to_string()))?;

        self.installed = true;
        tracing::debug!(capacity = self.queue.capacity(), "logging installed");
        Ok(())
    }

    /// Flush console output. The queue itself needs no teardown.
    pub fn shutdown(self) {
        tracing::debug!(retained = self.queue.len(), "logging shut down");
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}

/// Label for a source location: the file name without its extension.
pub fn caller_label(location: &Location<'_>) -> String {
    Path::new(location.file())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Emit `text` at `severity`, labelled with `caller` or the calling file.
#[track_caller]
pub fn log(severity: Severity, text: &str, caller: Option<&str>) {
    let caller = match caller {
        Some(caller) => caller.to_string(),
        None => caller_label(Location::caller()),
    };
    let caller = caller.as_str();

    match severity {
        Severity::Debug => tracing::debug!(caller, "{}", text),
        Severity::Info => tracing::info!(caller, "{}", text),
        Severity::Warning => tracing::warn!(caller, "{}", text),
        Severity::Error => tracing::error!(caller, "{}", text),
        Severity::Critical => tracing::error!(caller, critical = true, "{}", text),
    }
}

/// Legacy entry point taking the old numeric debug level (1..=5).
#[track_caller]
pub fn dbg(text: &str, caller: Option<&str>, level: u8) {
    log(Severity::from_dbg_level(level), text, caller);
}

#[track_caller]
pub fn debug(text: &str, caller: Option<&str>) {
    log(Severity::Debug, text, caller);
}

#[track_caller]
pub fn info(text: &str, caller: Option<&str>) {
    log(Severity::Info, text, caller);
}

#[track_caller]
pub fn warning(text: &str, caller: Option<&str>) {
    log(Severity::Warning, text, caller);
}

#[track_caller]
pub fn error(text: &str, caller: Option<&str>) {
    log(Severity::Error, text, caller);
}

#[track_caller]
pub fn critical(text: &str, caller: Option<&str>) {
    log(Severity::Critical, text, caller);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce()) -> Vec<LogRecord> {
        let queue = SharedLogQueue::with_capacity(16).unwrap();
        let subscriber = tracing_subscriber::registry().with(QueueLayer::new(queue.clone()));
        tracing::subscriber::with_default(subscriber, f);
        queue.snapshot()
    }

    #[test]
    fn test_context_rejects_zero_capacity() {
        assert!(matches!(
            LoggingContext::new(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_context_starts_uninstalled() {
        let ctx = LoggingContext::new(5).unwrap();
        assert!(!ctx.is_installed());
        assert_eq!(ctx.queue().capacity(), 5);
        ctx.shutdown();
    }

    #[test]
    fn test_explicit_caller() {
        let records = capture(|| {
            info("connected", Some("session"));
        });

        assert_eq!(records[0].caller, "session");
        assert_eq!(records[0].severity, Severity::Info);
        assert_eq!(records[0].message, "connected");
    }

    #[test]
    fn test_caller_defaults_to_file_stem() {
        let records = capture(|| {
            warning("no path for emote", None);
        });

        // this test lives in src/logging/mod.rs
        assert_eq!(records[0].caller, "mod");
    }

    #[test]
    fn test_severity_helpers() {
        let records = capture(|| {
            debug("d", Some("t"));
            error("e", Some("t"));
            critical("c", Some("t"));
            dbg("legacy", Some("t"), 3);
        });

        let severities: Vec<Severity> = records.iter().map(|r| r.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Debug, Severity::Error, Severity::Critical, Severity::Warning]
        );
    }
}
