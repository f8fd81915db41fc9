#![forbid(unsafe_code)]

//! Pagination bar state and render model.
//!
//! [`PaginationState`] owns the current page and page size (the state a URL
//! query-string collaborator reads and writes) and enforces the clamping
//! precondition of [`PageRange::compute`]. [`PaginationBar`] is the
//! presentation-side builder: it turns a state plus a total page count into
//! a [`PaginationModel`] of page slots, ellipsis markers, and optional
//! info/size-selector sections.

use bitflags::bitflags;
use formwork_core::{PageRange, RangeError};

bitflags! {
    /// Optional sections of the pagination bar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PaginationSections: u8 {
        /// "Page X of Y" summary line.
        const PAGE_INFO = 1 << 0;
        /// Items-per-page dropdown.
        const PAGE_SIZE_SELECTOR = 1 << 1;
        /// Previous/next arrows.
        const PREV_NEXT = 1 << 2;
    }
}

impl Default for PaginationSections {
    fn default() -> Self {
        Self::all()
    }
}

/// Current page and page size, with reset defaults.
///
/// This is the state the external address-bar collaborator synchronizes;
/// it owns the clamping of `current_page` into `[1, total_pages]` that the
/// range computation documents as a precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    default_page: u32,
    default_page_size: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 12)
    }
}

impl PaginationState {
    /// Create a state with the given defaults for page and page size.
    ///
    /// Zero defaults are lifted to 1 so the state always holds a valid
    /// page and a nonzero page size.
    #[must_use]
    pub fn new(default_page: u32, default_page_size: u32) -> Self {
        let default_page = default_page.max(1);
        let default_page_size = default_page_size.max(1);
        Self {
            current_page: default_page,
            page_size: default_page_size,
            default_page,
            default_page_size,
        }
    }

    /// The current page (1-based).
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// The current page size.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Set the current page, clamped into `[1, total_pages]`.
    ///
    /// With `total_pages == 0` the page clamps to 1, matching an empty
    /// result set that still shows "page 1".
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Change the page size.
    ///
    /// Navigating away from the first page and then changing how many items
    /// fit on a page would land on an arbitrary window, so the page resets
    /// to 1 whenever the size changes while off the first page. A zero size
    /// is lifted to 1.
    pub fn set_page_size(&mut self, page_size: u32) {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return;
        }
        self.page_size = page_size;
        if self.current_page > 1 {
            self.current_page = 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(page_size, "page size changed");
    }

    /// Restore the configured defaults.
    pub fn reset(&mut self) {
        self.current_page = self.default_page;
        self.page_size = self.default_page_size;
    }

    /// Total pages needed for `total_items` at the current page size.
    #[must_use]
    pub fn total_pages(&self, total_items: u64) -> u32 {
        let pages = total_items.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// One slot in the rendered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A numbered page link.
    Page {
        /// The page number (1-based).
        number: u32,
        /// Whether this is the current page.
        is_current: bool,
    },
    /// A truncation indicator standing in for hidden pages.
    Ellipsis,
}

/// A selectable items-per-page option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeOption {
    /// The page size this option selects.
    pub value: u32,
    /// Whether it is the active size.
    pub active: bool,
}

/// The "Page X of Y" summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-based).
    pub current: u32,
    /// Total page count.
    pub total: u32,
}

/// Everything a renderer needs to draw the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationModel {
    /// Page links and ellipsis markers, in display order.
    pub slots: Vec<PageSlot>,
    /// Whether the previous-page control is enabled. `None` when the
    /// PREV_NEXT section is off.
    pub prev_enabled: Option<bool>,
    /// Whether the next-page control is enabled. `None` when the
    /// PREV_NEXT section is off.
    pub next_enabled: Option<bool>,
    /// Summary line, when the PAGE_INFO section is on.
    pub page_info: Option<PageInfo>,
    /// Items-per-page options, when the PAGE_SIZE_SELECTOR section is on.
    pub size_options: Option<Vec<SizeOption>>,
    /// Whether every control should render disabled.
    pub disabled: bool,
}

/// Builder for the pagination bar's presentation settings.
#[derive(Debug, Clone)]
pub struct PaginationBar {
    items_to_display: u32,
    page_size_options: Vec<u32>,
    sections: PaginationSections,
    disabled: bool,
}

impl Default for PaginationBar {
    fn default() -> Self {
        Self {
            items_to_display: 5,
            page_size_options: vec![5, 10, 25, 50],
            sections: PaginationSections::default(),
            disabled: false,
        }
    }
}

impl PaginationBar {
    /// Create a bar with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of page links to display (builder).
    #[must_use]
    pub fn items_to_display(mut self, items: u32) -> Self {
        self.items_to_display = items;
        self
    }

    /// Set the available page-size options (builder).
    #[must_use]
    pub fn page_size_options(mut self, options: impl Into<Vec<u32>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Select which optional sections render (builder).
    #[must_use]
    pub fn sections(mut self, sections: PaginationSections) -> Self {
        self.sections = sections;
        self
    }

    /// Disable all controls (builder).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Build the render model for `state` over `total_pages`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ZeroWindow`] when the bar was configured with
    /// a zero display budget.
    pub fn model(
        &self,
        state: &PaginationState,
        total_pages: u32,
    ) -> Result<PaginationModel, RangeError> {
        let current = state.current_page();
        let range = PageRange::compute(current, total_pages, self.items_to_display)?;

        let mut slots =
            Vec::with_capacity(range.pages.len() + 2);
        if range.show_left_ellipsis {
            slots.push(PageSlot::Ellipsis);
        }
        for number in &range.pages {
            slots.push(PageSlot::Page {
                number: *number,
                is_current: *number == current,
            });
        }
        if range.show_right_ellipsis {
            slots.push(PageSlot::Ellipsis);
        }

        let (prev_enabled, next_enabled) = if self.sections.contains(PaginationSections::PREV_NEXT)
        {
            (
                Some(!self.disabled && current > 1),
                Some(!self.disabled && current < total_pages),
            )
        } else {
            (None, None)
        };

        let page_info = self
            .sections
            .contains(PaginationSections::PAGE_INFO)
            .then_some(PageInfo {
                current,
                total: total_pages,
            });

        let size_options = self
            .sections
            .contains(PaginationSections::PAGE_SIZE_SELECTOR)
            .then(|| {
                self.page_size_options
                    .iter()
                    .map(|&value| SizeOption {
                        value,
                        active: value == state.page_size(),
                    })
                    .collect()
            });

        Ok(PaginationModel {
            slots,
            prev_enabled,
            next_enabled,
            page_info,
            size_options,
            disabled: self.disabled,
        })
    }
}
