#![forbid(unsafe_code)]

//! Pagination range computation.
//!
//! Given the current page, the total page count, and a display budget,
//! [`PageRange::compute`] decides which page numbers a pagination bar should
//! show and whether a truncation indicator (ellipsis) is needed on either
//! side. Ellipsis visibility is derived from the distance to the true edges
//! of the page sequence, not from the clamped window, so an ellipsis only
//! appears when pages are genuinely hidden behind it.
//!
//! `current_page` is expected to lie in `[1, total_pages]` when
//! `total_pages > 0`. This function does not clamp out-of-range input; the
//! pagination state that owns the current page is responsible for clamping
//! before calling (see `formwork-widgets`).

use std::fmt;

/// Errors for invalid pagination range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// `items_to_display` was zero; a pagination window must hold at least
    /// one slot.
    ZeroWindow,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindow => write!(f, "items_to_display must be at least 1"),
        }
    }
}

impl std::error::Error for RangeError {}

/// The pages a pagination bar should display, plus ellipsis flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRange {
    /// Page numbers to show, strictly ascending, all in `[1, total_pages]`.
    pub pages: Vec<u32>,
    /// Whether pages are hidden between page 1 and the window.
    pub show_left_ellipsis: bool,
    /// Whether pages are hidden between the window and the last page.
    pub show_right_ellipsis: bool,
}

impl PageRange {
    /// Compute the visible page window.
    ///
    /// When `total_pages <= items_to_display` every page is returned and
    /// both ellipsis flags are false. Otherwise a window of width
    /// `items_to_display` is centered on `current_page`, shifted back in
    /// range at the edges, and shrunk by one slot on each side that shows
    /// an ellipsis (the indicator occupies the slot it replaces).
    ///
    /// `total_pages == 0` yields an empty range with no ellipses.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ZeroWindow`] when `items_to_display == 0`.
    pub fn compute(
        current_page: u32,
        total_pages: u32,
        items_to_display: u32,
    ) -> Result<Self, RangeError> {
        if items_to_display == 0 {
            return Err(RangeError::ZeroWindow);
        }

        if total_pages <= items_to_display {
            return Ok(Self {
                pages: (1..=total_pages).collect(),
                show_left_ellipsis: false,
                show_right_ellipsis: false,
            });
        }

        // Signed arithmetic: the tentative window may extend past either edge
        // before clamping.
        let current = i64::from(current_page);
        let total = i64::from(total_pages);
        let items = i64::from(items_to_display);

        // Ellipsis visibility is measured against the true sequence edges,
        // from the raw inputs, so a flag is set only when at least one page
        // is actually hidden on that side.
        let show_left_ellipsis = current > (items + 1) / 2 + 1;
        let show_right_ellipsis = current < total - items / 2;

        let half = items / 2;
        let mut start = current - half;
        let mut end = current + half;

        if start < 1 {
            start = 1;
            end = items;
        }
        if end > total {
            end = total;
            start = total - items + 1;
        }

        // Each visible ellipsis replaces the outermost page on its side.
        if show_left_ellipsis {
            start += 1;
        }
        if show_right_ellipsis {
            end -= 1;
        }

        // The reservation step can push the window out of range when both
        // adjustments fire at small budgets; clamp and treat an inverted
        // range as empty.
        start = start.max(1);
        end = end.min(total);

        let pages = if start > end {
            Vec::new()
        } else {
            (start..=end).map(|p| p as u32).collect()
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            current_page,
            total_pages,
            items_to_display,
            window = ?(start, end),
            show_left_ellipsis,
            show_right_ellipsis,
            "computed page range"
        );

        Ok(Self {
            pages,
            show_left_ellipsis,
            show_right_ellipsis,
        })
    }

    /// Whether the range contains no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
