#![forbid(unsafe_code)]

//! Copy-button feedback state.
//!
//! After a copy the button shows a confirmation (checkmark) and reverts to
//! idle once a timeout passes. The clipboard itself is an external
//! collaborator: [`CopyButton::copy`] hands the text to a caller-supplied
//! sink and only tracks the feedback phase.

use std::time::{Duration, Instant};

/// Visual phase of the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPhase {
    /// Ready to copy.
    Idle,
    /// Recently copied; showing confirmation.
    Copied,
}

/// Default confirmation duration.
const DEFAULT_REVERT: Duration = Duration::from_millis(2000);

/// Feedback state for a copy-to-clipboard button.
#[derive(Debug, Clone)]
pub struct CopyButton {
    revert_after: Duration,
    copied_until: Option<Instant>,
}

impl Default for CopyButton {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyButton {
    /// Create a button with the default 2 s confirmation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            revert_after: DEFAULT_REVERT,
            copied_until: None,
        }
    }

    /// Set how long the confirmation shows (builder).
    #[must_use]
    pub fn revert_after(mut self, duration: Duration) -> Self {
        self.revert_after = duration;
        self
    }

    /// Copy `text` through the caller's clipboard sink and enter the
    /// confirmation phase until `now + revert_after`.
    pub fn copy(&mut self, text: &str, now: Instant, sink: impl FnOnce(&str)) {
        sink(text);
        self.copied_until = Some(now + self.revert_after);

        #[cfg(feature = "tracing")]
        tracing::debug!(len = text.len(), "copied to clipboard sink");
    }

    /// The phase at `now`, without mutating state.
    #[must_use]
    pub fn phase(&self, now: Instant) -> CopyPhase {
        match self.copied_until {
            Some(until) if now < until => CopyPhase::Copied,
            _ => CopyPhase::Idle,
        }
    }

    /// Advance the state at `now`.
    ///
    /// Returns `true` exactly when the confirmation reverted on this poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.copied_until {
            Some(until) if now >= until => {
                self.copied_until = None;
                true
            }
            _ => false,
        }
    }
}
