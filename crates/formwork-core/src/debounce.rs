#![forbid(unsafe_code)]

//! Debounce policy for settle-before-firing input handling.
//!
//! Rapid input (keystrokes in a search box, resize storms) should trigger
//! work only once the stream settles. [`Debouncer`] implements the
//! timer-reset-on-input policy: every input replaces any pending deadline
//! with `now + delay`, and [`Debouncer::poll`] fires at most once per
//! settled burst. The clock is injected as [`Instant`] arguments, so the
//! policy itself never sleeps, spawns, or reads wall time — callers drive
//! it from whatever tick they already have.

use std::time::{Duration, Instant};

/// Fires once after input has been quiet for a configured delay.
///
/// Not thread-safe; drive it from the event loop that owns the input.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given settle delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured settle delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an input event at `now`.
    ///
    /// Any pending deadline is replaced; only the last input before the
    /// stream settles determines when the debouncer fires.
    pub fn input(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Check whether the settle delay has elapsed.
    ///
    /// Returns `true` exactly once per burst: the pending deadline is
    /// cleared when it fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fire immediately if an input is pending, clearing the deadline.
    ///
    /// Returns `true` when there was something to flush.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether an input is waiting to settle.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_after_delay() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.input(t0);
        assert!(!d.poll(t0));
        assert!(!d.poll(t0 + Duration::from_millis(299)));
        assert!(d.poll(t0 + DELAY));
    }

    #[test]
    fn fires_at_most_once_per_burst() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.input(t0);
        assert!(d.poll(t0 + DELAY));
        assert!(!d.poll(t0 + DELAY * 2));
        assert!(!d.is_pending());
    }

    #[test]
    fn input_resets_deadline() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.input(t0);
        d.input(t0 + Duration::from_millis(200));
        // The first deadline would have been t0 + 300ms.
        assert!(!d.poll(t0 + Duration::from_millis(400)));
        assert!(d.poll(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn flush_fires_pending() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.input(t0);
        assert!(d.flush());
        assert!(!d.flush());
        assert!(!d.poll(t0 + DELAY));
    }

    #[test]
    fn cancel_discards_pending() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.input(t0);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.poll(t0 + DELAY));
    }

    #[test]
    fn idle_poll_is_quiet() {
        let mut d = Debouncer::new(DELAY);
        assert!(!d.poll(Instant::now()));
        assert!(!d.flush());
    }
}
