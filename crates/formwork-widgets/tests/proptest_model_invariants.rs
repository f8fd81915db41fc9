//! Property-based invariant tests for the widget render models.
//!
//! These tests verify structural invariants that must hold for any trail
//! and any pagination state:
//!
//! 1. A separator is never the final trail node.
//! 2. Separators never appear back to back.
//! 3. Visible items plus overflow items reconstruct the input labels in
//!    order (the model loses nothing).
//! 4. The overflow menu appears at most once and is never empty.
//! 5. The pagination model marks at most one slot current, and that slot
//!    matches the state's current page.
//! 6. Slot count never exceeds the display budget plus two ellipses.

use formwork_widgets::{
    BreadcrumbTrail, Crumb, PageSlot, PaginationBar, PaginationState, TrailNode,
};
use proptest::prelude::*;

fn crumbs_strategy() -> impl Strategy<Value = Vec<Crumb>> {
    proptest::collection::vec("[a-z]{1,12}", 0..24).prop_map(|labels| {
        let n = labels.len();
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                if i + 1 == n {
                    Crumb::page(label)
                } else {
                    Crumb::link(label, format!("/{i}"))
                }
            })
            .collect()
    })
}

fn trail_strategy() -> impl Strategy<Value = BreadcrumbTrail> {
    (0usize..=12, 0usize..=12, 0usize..=12).prop_map(|(collapse_at, start, keep)| {
        BreadcrumbTrail::new()
            .collapse_at(collapse_at)
            .dropdown_start_index(start)
            .keep_visible_at_end(keep)
    })
}

proptest! {
    #[test]
    fn separator_never_trails_the_final_node(
        items in crumbs_strategy(),
        trail in trail_strategy(),
    ) {
        let model = trail.model(&items);
        prop_assert!(!matches!(model.nodes.last(), Some(TrailNode::Separator)));
    }
}

proptest! {
    #[test]
    fn separators_never_adjacent(items in crumbs_strategy(), trail in trail_strategy()) {
        let model = trail.model(&items);
        for pair in model.nodes.windows(2) {
            prop_assert!(
                !(matches!(pair[0], TrailNode::Separator)
                    && matches!(pair[1], TrailNode::Separator))
            );
        }
    }
}

proptest! {
    #[test]
    fn model_preserves_every_label(items in crumbs_strategy(), trail in trail_strategy()) {
        let model = trail.model(&items);
        let mut seen = Vec::new();
        for node in &model.nodes {
            match node {
                TrailNode::Item(view) => seen.push(view.label.clone()),
                TrailNode::OverflowMenu(hidden) => {
                    seen.extend(hidden.iter().map(|v| v.label.clone()));
                }
                TrailNode::Separator | TrailNode::Skeleton => {}
            }
        }
        let expected: Vec<String> = items.iter().map(|c| c.label.clone()).collect();
        prop_assert_eq!(seen, expected);
    }
}

proptest! {
    #[test]
    fn overflow_menu_at_most_once_and_never_empty(
        items in crumbs_strategy(),
        trail in trail_strategy(),
    ) {
        let model = trail.model(&items);
        let menus: Vec<usize> = model
            .nodes
            .iter()
            .filter_map(|node| match node {
                TrailNode::OverflowMenu(hidden) => Some(hidden.len()),
                _ => None,
            })
            .collect();
        prop_assert!(menus.len() <= 1);
        if let Some(len) = menus.first() {
            prop_assert!(*len > 0);
        }
    }
}

proptest! {
    #[test]
    fn at_most_one_current_slot(
        page in 1u32..=500,
        total in 0u32..=500,
        items in 1u32..=12,
    ) {
        let mut state = PaginationState::default();
        state.set_page(page, total);
        let model = PaginationBar::new()
            .items_to_display(items)
            .model(&state, total)
            .unwrap();
        let current: Vec<u32> = model
            .slots
            .iter()
            .filter_map(|slot| match slot {
                PageSlot::Page { number, is_current: true } => Some(*number),
                _ => None,
            })
            .collect();
        prop_assert!(current.len() <= 1);
        if let Some(number) = current.first() {
            prop_assert_eq!(*number, state.current_page());
        }
    }
}

proptest! {
    #[test]
    fn slot_count_bounded_by_budget(
        page in 1u32..=500,
        total in 0u32..=500,
        items in 1u32..=12,
    ) {
        let mut state = PaginationState::default();
        state.set_page(page, total);
        let model = PaginationBar::new()
            .items_to_display(items)
            .model(&state, total)
            .unwrap();
        prop_assert!(model.slots.len() <= items as usize + 2);
    }
}
