#![forbid(unsafe_code)]

//! Loading overlay visibility.
//!
//! The overlay is depth-counted: nested loads each call [`LoadingOverlay::begin`]
//! and [`LoadingOverlay::end`], and the overlay stays visible until the
//! outermost load finishes. This avoids flicker when one load starts as
//! another completes.

/// Depth-counted loading overlay state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingOverlay {
    depth: usize,
}

impl LoadingOverlay {
    /// Create a hidden overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A load started.
    pub fn begin(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    /// A load finished. Unbalanced calls saturate at zero.
    pub fn end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Whether the overlay should be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.depth > 0
    }

    /// Force the overlay hidden, discarding any outstanding loads.
    pub fn reset(&mut self) {
        self.depth = 0;
    }
}
