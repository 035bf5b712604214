//! Icon request queue with exponential backoff
//!
//! Pure state: the queue never sleeps or looks at a clock. Each transition
//! returns how long the driver should wait before trying the head again.
//! The head is only removed once it has been handled; a rate-limited
//! request is retried as-is after the delay doubles (up to the cap).

use crate::items::ItemDefinition;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BackoffQueue {
    pending: VecDeque<&'static ItemDefinition>,
    initial_delay: Duration,
    max_delay: Duration,
    delay: Duration,
    consecutive_failures: u32,
}

impl BackoffQueue {
    pub fn new(
        pending: impl IntoIterator<Item = &'static ItemDefinition>,
        initial_delay: Duration,
        max_delay: Duration,
    ) -> Self {
        Self {
            pending: pending.into_iter().collect(),
            initial_delay,
            max_delay,
            delay: initial_delay,
            consecutive_failures: 0,
        }
    }

    /// Next definition to request
    pub fn head(&self) -> Option<&'static ItemDefinition> {
        self.pending.front().copied()
    }

    /// The head was handled: drop it and reset the delay
    ///
    /// Returns the pause before the next request, or `None` once the queue
    /// is drained.
    pub fn on_success(&mut self) -> Option<Duration> {
        self.pending.pop_front();
        self.delay = self.initial_delay;
        self.consecutive_failures = 0;
        if self.pending.is_empty() {
            None
        } else {
            Some(self.delay)
        }
    }

    /// The head was rate limited: keep it and double the delay
    pub fn on_failure(&mut self) -> Duration {
        self.consecutive_failures += 1;
        self.delay = self.delay.saturating_mul(2).min(self.max_delay);
        self.delay
    }

    pub fn current_delay(&self) -> Duration {
        self.delay
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn is_backing_off(&self) -> bool {
        self.consecutive_failures > 0
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
