//! Frame-driven debouncing.
//!
//! The UI thread has no timers of its own; instead the value is pushed on every edit and
//! polled once per frame. The caller supplies `now` so tests need not sleep.

use std::time::{Duration, Instant};

/// Holds the latest value until it has been stable for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Record a new value, restarting the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Release the pending value once it has settled.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, changed_at)) if now.saturating_duration_since(*changed_at) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending value settles, for repaint scheduling.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, changed_at)| self.delay.saturating_sub(now.saturating_duration_since(*changed_at)))
    }
}
