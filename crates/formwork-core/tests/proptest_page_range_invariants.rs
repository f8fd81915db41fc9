//! Property-based invariant tests for pagination range computation.
//!
//! These tests verify structural invariants that must hold for any valid
//! inputs:
//!
//! 1. Pages are strictly ascending and unique.
//! 2. Every page lies in `[1, total_pages]`.
//! 3. The window never exceeds the display budget.
//! 4. When every page fits, the full range is returned with no ellipses.
//! 5. A left ellipsis implies page 1 is genuinely hidden; a right ellipsis
//!    implies the last page is genuinely hidden.
//! 6. Identical inputs produce identical outputs (purity).
//! 7. No panics on extreme values.

use formwork_core::PageRange;
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = (u32, u32, u32)> {
    (0u32..=2_000).prop_flat_map(|total| {
        let current = 1u32..=total.max(1);
        (current, Just(total), 1u32..=64)
    })
}

proptest! {
    #[test]
    fn pages_strictly_ascending_in_bounds((current, total, items) in inputs()) {
        let range = PageRange::compute(current, total, items).unwrap();
        for pair in range.pages.windows(2) {
            prop_assert!(pair[0] < pair[1], "not ascending: {:?}", range.pages);
        }
        for p in &range.pages {
            prop_assert!(*p >= 1 && *p <= total, "page {p} out of [1, {total}]");
        }
    }
}

proptest! {
    #[test]
    fn window_respects_budget((current, total, items) in inputs()) {
        let range = PageRange::compute(current, total, items).unwrap();
        prop_assert!(
            range.pages.len() <= items as usize,
            "{} pages for budget {items}",
            range.pages.len()
        );
    }
}

proptest! {
    #[test]
    fn full_range_when_everything_fits(total in 0u32..=64, extra in 0u32..=32) {
        let items = total + extra.max(1);
        let current = total.max(1);
        let range = PageRange::compute(current, total, items).unwrap();
        let expected: Vec<u32> = (1..=total).collect();
        prop_assert_eq!(&range.pages, &expected);
        prop_assert!(!range.show_left_ellipsis);
        prop_assert!(!range.show_right_ellipsis);
    }
}

proptest! {
    #[test]
    fn ellipses_only_when_pages_hidden((current, total, items) in inputs()) {
        let range = PageRange::compute(current, total, items).unwrap();
        if range.show_left_ellipsis {
            // Something left of the window must be hidden.
            prop_assert!(range.pages.first().is_none_or(|first| *first > 1));
        }
        if range.show_right_ellipsis {
            prop_assert!(range.pages.last().is_none_or(|last| *last < total));
        }
    }
}

proptest! {
    #[test]
    fn computation_is_pure((current, total, items) in inputs()) {
        let a = PageRange::compute(current, total, items).unwrap();
        let b = PageRange::compute(current, total, items).unwrap();
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn no_panic_on_extremes(current in any::<u32>(), total in 0u32..=10_000, items in any::<u32>()) {
        // Out-of-range current_page is a documented caller precondition for
        // sensible output, but must never panic.
        let _ = PageRange::compute(current, total, items);
    }
}
