//! Cancellable one-shot deadline for auto-hiding popups.
//!
//! The timer never acts on its own. The UI loop polls it and applies the
//! hide itself, so the popup state has a single writer.

use std::time::{Duration, Instant};

/// Delay before a popup hides once the pointer leaves it
pub const AUTO_HIDE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct AutoHideTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl AutoHideTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Start the countdown. An already armed timer keeps its deadline.
    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.delay);
        }
    }

    /// Stop the countdown; a cancelled timer never fires.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed, disarming
    /// the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, for scheduling a repaint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for AutoHideTimer {
    fn default() -> Self {
        Self::new(AUTO_HIDE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::default();
        timer.arm(start);

        assert!(!timer.poll(start + Duration::from_millis(499)));
        assert!(timer.poll(start + AUTO_HIDE_DELAY));
        assert!(!timer.poll(start + Duration::from_secs(2)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::default();
        timer.arm(start);
        timer.cancel();

        assert!(!timer.poll(start + Duration::from_secs(5)));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn test_rearm_keeps_first_deadline() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::new(Duration::from_millis(100));
        timer.arm(start);
        timer.arm(start + Duration::from_millis(80));

        assert_eq!(
            timer.remaining(start + Duration::from_millis(50)),
            Some(Duration::from_millis(50))
        );
        assert!(timer.poll(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_rearm_after_cancel_restarts() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::new(Duration::from_millis(100));
        timer.arm(start);
        timer.cancel();
        timer.arm(start + Duration::from_millis(90));

        assert!(!timer.poll(start + Duration::from_millis(150)));
        assert!(timer.poll(start + Duration::from_millis(190)));
    }
}
