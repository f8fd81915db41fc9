#![forbid(unsafe_code)]

//! Headless component state for Formwork.
//!
//! Each widget here owns state and produces a render *model*: plain data a
//! rendering collaborator draws however it likes. No widget performs I/O;
//! timing-sensitive widgets take [`std::time::Instant`] arguments so the
//! caller's event loop drives them.

pub mod breadcrumb;
pub mod copy_button;
pub mod dialog;
pub mod overlay;
pub mod pagination;
pub mod search;
pub mod select;
pub mod text_field;
pub mod tooltip;

pub use breadcrumb::{BreadcrumbTrail, Crumb, CrumbView, TrailModel, TrailNode};
pub use copy_button::{CopyButton, CopyPhase};
pub use dialog::{ButtonVariant, ConfirmDialog, DialogError, DialogOutcome};
pub use overlay::LoadingOverlay;
pub use pagination::{
    PageInfo, PageSlot, PaginationBar, PaginationModel, PaginationSections, PaginationState,
    SizeOption,
};
pub use search::{SearchEvent, SearchInput, SearchVariant};
pub use select::{MultiSelect, Select, SelectError, SelectOption};
pub use text_field::{FieldVariant, TextField};
pub use tooltip::Tooltip;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncate `label` to at most `max_width` display cells, appending an
/// ellipsis when anything was cut.
///
/// Grapheme-cluster aware; a grapheme that would straddle the limit is
/// dropped entirely. A `max_width` of zero yields an empty string.
pub(crate) fn truncate_to_width(label: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(label) <= max_width {
        return label.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one cell for the ellipsis.
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0usize;
    for grapheme in label.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(truncate_to_width("Home", 10), "Home");
        assert_eq!(truncate_to_width("Home", 4), "Home");
    }

    #[test]
    fn long_labels_get_ellipsis() {
        assert_eq!(truncate_to_width("Dashboard", 6), "Dashb…");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate_to_width("Dashboard", 0), "");
    }

    #[test]
    fn wide_graphemes_are_not_split() {
        // "日" is two cells wide; with budget 2 only the ellipsis fits
        // beside a single cell, so the wide grapheme is dropped whole.
        assert_eq!(truncate_to_width("日本語", 2), "…");
        assert_eq!(truncate_to_width("日本語", 3), "日…");
    }
}
