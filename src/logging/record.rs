//! Log records retained by the in-memory sink.

use chrono::{DateTime, Local};
use std::fmt;

/// Severity of a log record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Map a legacy `dbg` level (1..=5, scaled by ten) to a severity.
    ///
    /// Out-of-range values clamp to the nearest end of the scale.
    pub fn from_dbg_level(level: u8) -> Self {
        match level {
            0 | 1 => Severity::Debug,
            2 => Severity::Info,
            3 => Severity::Warning,
            4 => Severity::Error,
            _ => Severity::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Convert a tracing level into a severity. Tracing has no
    /// critical level, so critical records carry an extra field instead.
    pub fn from_tracing(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Severity::Debug,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::WARN => Severity::Warning,
            tracing::Level::ERROR => Severity::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single timestamped message with its originating caller.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub caller: String,
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    pub fn new(severity: Severity, caller: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            caller: caller.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogRecord {
    // Format: [HH:MM:SS caller] message
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {}] {}",
            self.timestamp.format("%H:%M:%S"),
            self.caller,
            self.message
        )
    }
}
