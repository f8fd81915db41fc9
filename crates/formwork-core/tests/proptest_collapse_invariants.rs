//! Property-based invariant tests for breadcrumb collapsing.
//!
//! These tests verify structural invariants that must hold for any input
//! and any configuration:
//!
//! 1. The partition is lossless: head ++ collapsed ++ tail == items.
//! 2. Below the collapse threshold nothing collapses.
//! 3. The collapsed section is never the only non-empty section unless the
//!    configuration explicitly allows it (start index 0, keep 0).
//! 4. The tail length never exceeds `keep_visible_at_end`.
//! 5. When collapsed, the head length equals `dropdown_start_index`.
//! 6. No panics for any configuration, including inverted regions.

use formwork_core::{CollapseConfig, collapse};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = CollapseConfig> {
    (0usize..=16, 0usize..=16, 0usize..=16).prop_map(|(collapse_at, start, keep)| CollapseConfig {
        collapse_at,
        dropdown_start_index: start,
        keep_visible_at_end: keep,
    })
}

fn items_strategy() -> impl Strategy<Value = Vec<u16>> {
    proptest::collection::vec(any::<u16>(), 0..32)
}

proptest! {
    #[test]
    fn partition_is_lossless(items in items_strategy(), config in config_strategy()) {
        let result = collapse(&items, &config);
        let rebuilt: Vec<u16> = result
            .head
            .iter()
            .chain(result.collapsed)
            .chain(result.tail)
            .copied()
            .collect();
        prop_assert_eq!(rebuilt, items);
    }
}

proptest! {
    #[test]
    fn below_threshold_never_collapses(items in items_strategy(), config in config_strategy()) {
        prop_assume!(items.len() < config.collapse_at);
        let result = collapse(&items, &config);
        prop_assert!(result.collapsed.is_empty());
        prop_assert!(result.tail.is_empty());
        prop_assert_eq!(result.head.len(), items.len());
    }
}

proptest! {
    #[test]
    fn collapsed_sections_match_config(items in items_strategy(), config in config_strategy()) {
        let result = collapse(&items, &config);
        if result.is_collapsed() {
            prop_assert_eq!(result.head.len(), config.dropdown_start_index);
            prop_assert_eq!(result.tail.len(), config.keep_visible_at_end);
            prop_assert!(items.len() >= config.collapse_at);
        }
    }
}

proptest! {
    #[test]
    fn fallback_keeps_everything_in_head(items in items_strategy(), config in config_strategy()) {
        let result = collapse(&items, &config);
        if !result.is_collapsed() {
            prop_assert_eq!(result.head.len(), items.len());
            prop_assert!(result.tail.is_empty());
        }
    }
}

proptest! {
    #[test]
    fn no_panic_on_extreme_config(
        items in items_strategy(),
        collapse_at in any::<usize>(),
        start in any::<usize>(),
        keep in any::<usize>(),
    ) {
        let config = CollapseConfig {
            collapse_at,
            dropdown_start_index: start,
            keep_visible_at_end: keep,
        };
        let result = collapse(&items, &config);
        prop_assert_eq!(result.len(), items.len());
    }
}
