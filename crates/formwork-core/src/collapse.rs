#![forbid(unsafe_code)]

//! Breadcrumb collapsing.
//!
//! Long breadcrumb trails fold a contiguous middle section behind an
//! overflow affordance. [`collapse`] partitions an item slice into an
//! always-visible head, a collapsed middle, and an always-visible tail.
//! The partition borrows from the input, so concatenating the three slices
//! reconstructs the original sequence exactly.
//!
//! A degenerate configuration (threshold not met, or the keep-at-end count
//! consuming everything the start index leaves available) falls back to
//! showing every item uncollapsed rather than producing an invalid
//! partition.

/// Parameters controlling when and where a trail collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseConfig {
    /// Item count at which collapsing triggers.
    pub collapse_at: usize,
    /// First index eligible for collapsing; everything before it stays
    /// visible at the front.
    pub dropdown_start_index: usize,
    /// Trailing items that always stay visible.
    pub keep_visible_at_end: usize,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            collapse_at: 6,
            dropdown_start_index: 1,
            keep_visible_at_end: 2,
        }
    }
}

impl CollapseConfig {
    /// Create a config with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collapse threshold (builder).
    #[must_use]
    pub fn collapse_at(mut self, collapse_at: usize) -> Self {
        self.collapse_at = collapse_at;
        self
    }

    /// Set the first collapsible index (builder).
    #[must_use]
    pub fn dropdown_start_index(mut self, index: usize) -> Self {
        self.dropdown_start_index = index;
        self
    }

    /// Set the always-visible tail length (builder).
    #[must_use]
    pub fn keep_visible_at_end(mut self, count: usize) -> Self {
        self.keep_visible_at_end = count;
        self
    }
}

/// A partition of a breadcrumb trail into visible and collapsed sections.
///
/// `head`, `collapsed`, and `tail` concatenate (in that order) to the
/// original input slice. When `collapsed` is empty no overflow affordance
/// is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseResult<'a, T> {
    /// Items shown before the overflow affordance.
    pub head: &'a [T],
    /// Items hidden behind the overflow affordance.
    pub collapsed: &'a [T],
    /// Items shown after the overflow affordance.
    pub tail: &'a [T],
}

impl<'a, T> CollapseResult<'a, T> {
    /// Whether any items are hidden behind the overflow affordance.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        !self.collapsed.is_empty()
    }

    /// Total item count across all three sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.head.len() + self.collapsed.len() + self.tail.len()
    }

    /// Whether the partition holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `items` according to `config`.
///
/// Collapsing triggers only when `items.len() >= collapse_at` and the
/// dropdown region `[dropdown_start_index, len - keep_visible_at_end)` is
/// non-empty; otherwise everything lands in `head` and the other sections
/// are empty. Unsigned indices make negative configuration unrepresentable,
/// and the guard absorbs every inverted-region configuration, so this
/// function cannot fail.
#[must_use]
pub fn collapse<'a, T>(items: &'a [T], config: &CollapseConfig) -> CollapseResult<'a, T> {
    let len = items.len();
    let should_collapse = len >= config.collapse_at
        && len > config.keep_visible_at_end
        && config.dropdown_start_index < len - config.keep_visible_at_end;

    if !should_collapse {
        return CollapseResult {
            head: items,
            collapsed: &[],
            tail: &[],
        };
    }

    let dropdown_end_index = len - config.keep_visible_at_end;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        len,
        dropdown_start_index = config.dropdown_start_index,
        dropdown_end_index,
        "collapsing breadcrumb trail"
    );

    CollapseResult {
        head: &items[..config.dropdown_start_index],
        collapsed: &items[config.dropdown_start_index..dropdown_end_index],
        tail: &items[dropdown_end_index..],
    }
}
