#![forbid(unsafe_code)]

//! Tooltip show-delay state.
//!
//! A tooltip appears only after the pointer has hovered its trigger for a
//! configured delay (default 500 ms) and hides as soon as the pointer
//! leaves. Unlike a debouncer, the deadline is armed once per hover and is
//! not reset by continued hovering.

use std::time::{Duration, Instant};

/// Default show delay, matching the original wrapper.
const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Show-delay state machine for a tooltip.
#[derive(Debug, Clone)]
pub struct Tooltip {
    delay: Duration,
    armed_at: Option<Instant>,
    visible: bool,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Tooltip {
    /// Create a tooltip with the given show delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
            visible: false,
        }
    }

    /// The configured show delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The pointer entered the trigger at `now`.
    ///
    /// Re-entering while already armed or visible does not restart the
    /// delay.
    pub fn hover_start(&mut self, now: Instant) {
        if !self.visible && self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    /// The pointer left the trigger: hide and disarm.
    pub fn hover_end(&mut self) {
        self.armed_at = None;
        self.visible = false;
    }

    /// Advance the state at `now`; returns whether the tooltip is visible.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(armed_at) = self.armed_at
            && now >= armed_at + self.delay
        {
            self.armed_at = None;
            self.visible = true;
        }
        self.visible
    }

    /// Whether the tooltip is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
