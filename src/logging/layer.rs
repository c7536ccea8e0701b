//! `tracing` layer that feeds every event into a [`SharedLogQueue`].

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::queue::SharedLogQueue;
use super::record::{LogRecord, Severity};

/// Layer that records events into a bounded in-memory queue.
#[derive(Debug, Clone)]
pub struct QueueLayer {
    queue: SharedLogQueue,
}

impl QueueLayer {
    pub fn new(queue: SharedLogQueue) -> Self {
        Self { queue }
    }
}

impl<S: Subscriber> Layer<S> for QueueLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let severity = if visitor.critical {
            Severity::Critical
        } else {
            Severity::from_tracing(metadata.level())
        };
        let caller = visitor
            .caller
            .take()
            .unwrap_or_else(|| metadata.target().to_string());

        self.queue.push(LogRecord::new(severity, caller, visitor.into_message()));
    }
}

/// Collects the message, caller label and any extra fields of an event.
#[derive(Default)]
struct RecordVisitor {
    message: String,
    caller: Option<String>,
    critical: bool,
    extra: Vec<String>,
}

impl RecordVisitor {
    fn into_message(self) -> String {
        if self.extra.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.extra.join(" ")
        } else {
            format!("{} {}", self.message, self.extra.join(" "))
        }
    }
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "caller" => self.caller = Some(value.to_string()),
            name => self.extra.push(format!("{}={}", name, value)),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "critical" => self.critical = value,
            name => self.extra.push(format!("{}={}", name, value)),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{:?}", value),
            "caller" => self.caller = Some(format!("{:?}", value)),
            name => self.extra.push(format!("{}={:?}", name, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn capture(f: impl FnOnce()) -> Vec<LogRecord> {
        let queue = SharedLogQueue::with_capacity(10).unwrap();
        let subscriber = tracing_subscriber::registry().with(QueueLayer::new(queue.clone()));
        tracing::subscriber::with_default(subscriber, f);
        queue.snapshot()
    }

    #[test]
    fn test_records_message_and_caller() {
        let records = capture(|| {
            tracing::info!(caller = "dialog", "window opened");
        });

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Info);
        assert_eq!(records[0].caller, "dialog");
        assert_eq!(records[0].message, "window opened");
    }

    #[test]
    fn test_falls_back_to_target() {
        let records = capture(|| {
            tracing::warn!(target: "mesinyer::roster", "duplicate contact");
        });

        assert_eq!(records[0].caller, "mesinyer::roster");
        assert_eq!(records[0].severity, Severity::Warning);
    }

    #[test]
    fn test_critical_flag_upgrades_severity() {
        let records = capture(|| {
            tracing::error!(critical = true, "session lost");
            tracing::error!("plain error");
        });

        assert_eq!(records[0].severity, Severity::Critical);
        assert_eq!(records[1].severity, Severity::Error);
    }

    #[test]
    fn test_extra_fields_are_appended() {
        let records = capture(|| {
            tracing::debug!(count = 3, "emotes loaded");
        });

        assert_eq!(records[0].message, "emotes loaded count=3");
    }
}
