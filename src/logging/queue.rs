//! Bounded in-memory log sink.
//!
//! Keeps the last N records so that recent history can be shown when
//! something goes wrong, independent of how (or whether) it is displayed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use super::record::LogRecord;
use crate::error::{Error, Result};

/// Default number of records retained
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// Insertion-ordered ring buffer of log records.
///
/// `len() <= capacity()` always holds; once full, every push evicts the
/// oldest record.
#[derive(Debug, Clone)]
pub struct BoundedLogQueue {
    records: VecDeque<LogRecord>,
    capacity: usize,
}

impl BoundedLogQueue {
    /// Create a queue holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "log queue capacity must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a record, evicting the oldest one if the queue is over capacity.
    pub fn push(&mut self, record: LogRecord) {
        self.records.push_back(record);
        if self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// Iterate over the held records, oldest first, without consuming them.
    pub fn drain_snapshot(&self) -> impl Iterator<Item = &LogRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for BoundedLogQueue {
    fn default() -> Self {
        Self {
            records: VecDeque::with_capacity(DEFAULT_LOG_CAPACITY),
            capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

/// Cloneable handle to a queue shared between the tracing layer and the UI.
#[derive(Debug, Clone, Default)]
pub struct SharedLogQueue {
    inner: Arc<Mutex<BoundedLogQueue>>,
}

impl SharedLogQueue {
    pub fn new(queue: BoundedLogQueue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::new(BoundedLogQueue::with_capacity(capacity)?))
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, BoundedLogQueue> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, record: LogRecord) {
        self.lock().push(record);
    }

    /// Copy of the currently held records, oldest first.
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.lock().drain_snapshot().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
