#![forbid(unsafe_code)]

//! Breadcrumb trail state and render model.
//!
//! [`BreadcrumbTrail`] wraps the core collapse algorithm with the
//! presentation rules a renderer needs: separators between visible nodes
//! (never after the last), an overflow menu standing in for the collapsed
//! middle, optional label truncation, and a skeleton model while the trail
//! is still loading.

use formwork_core::{CollapseConfig, collapse};

use crate::truncate_to_width;

/// One breadcrumb item as supplied by the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Display text.
    pub label: String,
    /// Navigation target; `None` for non-navigable items.
    pub href: Option<String>,
    /// Marks the current page (typically the last item).
    pub is_current: bool,
}

impl Crumb {
    /// A navigable crumb.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            is_current: false,
        }
    }

    /// The current, non-navigable page.
    pub fn page(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            is_current: true,
        }
    }
}

/// A crumb prepared for rendering (label possibly truncated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrumbView {
    /// Display text, truncated to the trail's label budget.
    pub label: String,
    /// Navigation target.
    pub href: Option<String>,
    /// Whether this is the current page.
    pub is_current: bool,
}

/// One node in the rendered trail, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailNode {
    /// A visible crumb.
    Item(CrumbView),
    /// The overflow affordance hiding the collapsed middle items.
    OverflowMenu(Vec<CrumbView>),
    /// A separator between adjacent visible nodes.
    Separator,
    /// A loading placeholder slot.
    Skeleton,
}

/// The full render model for a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailModel {
    /// Nodes in display order.
    pub nodes: Vec<TrailNode>,
}

impl TrailModel {
    /// The overflow menu's hidden items, when the trail collapsed.
    #[must_use]
    pub fn overflow(&self) -> Option<&[CrumbView]> {
        self.nodes.iter().find_map(|node| match node {
            TrailNode::OverflowMenu(items) => Some(items.as_slice()),
            _ => None,
        })
    }
}

/// Builder for breadcrumb presentation settings.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbTrail {
    config: CollapseConfig,
    loading: bool,
    max_label_width: Option<usize>,
}

/// Skeleton slots shown while loading.
const SKELETON_SLOTS: usize = 3;

impl BreadcrumbTrail {
    /// Create a trail with the default collapse thresholds (6 / 1 / 2).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item count at which collapsing triggers (builder).
    #[must_use]
    pub fn collapse_at(mut self, collapse_at: usize) -> Self {
        self.config.collapse_at = collapse_at;
        self
    }

    /// Set the first index eligible for collapsing (builder).
    #[must_use]
    pub fn dropdown_start_index(mut self, index: usize) -> Self {
        self.config.dropdown_start_index = index;
        self
    }

    /// Set how many trailing items always stay visible (builder).
    #[must_use]
    pub fn keep_visible_at_end(mut self, count: usize) -> Self {
        self.config.keep_visible_at_end = count;
        self
    }

    /// Show skeleton placeholders instead of items (builder).
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Truncate labels to at most this many display cells (builder).
    #[must_use]
    pub fn max_label_width(mut self, width: usize) -> Self {
        self.max_label_width = Some(width);
        self
    }

    fn view(&self, crumb: &Crumb) -> CrumbView {
        let label = match self.max_label_width {
            Some(width) => truncate_to_width(&crumb.label, width),
            None => crumb.label.clone(),
        };
        CrumbView {
            label,
            href: crumb.href.clone(),
            is_current: crumb.is_current,
        }
    }

    /// Build the render model for `items`.
    ///
    /// While loading, the model is a fixed run of skeleton slots with
    /// separators between them. Otherwise items are partitioned by the
    /// collapse algorithm; separators appear between adjacent visible
    /// nodes and never after the final one.
    #[must_use]
    pub fn model(&self, items: &[Crumb]) -> TrailModel {
        if self.loading {
            let mut nodes = Vec::with_capacity(SKELETON_SLOTS * 2 - 1);
            for i in 0..SKELETON_SLOTS {
                nodes.push(TrailNode::Skeleton);
                if i + 1 < SKELETON_SLOTS {
                    nodes.push(TrailNode::Separator);
                }
            }
            return TrailModel { nodes };
        }

        let partition = collapse(items, &self.config);
        let mut nodes = Vec::with_capacity(items.len() * 2);

        if !partition.is_collapsed() {
            for (i, crumb) in partition.head.iter().enumerate() {
                nodes.push(TrailNode::Item(self.view(crumb)));
                if i + 1 < partition.head.len() {
                    nodes.push(TrailNode::Separator);
                }
            }
            return TrailModel { nodes };
        }

        // Head items are always followed by more content (the overflow
        // menu at minimum), so each one takes a trailing separator.
        for crumb in partition.head {
            nodes.push(TrailNode::Item(self.view(crumb)));
            nodes.push(TrailNode::Separator);
        }

        let hidden: Vec<CrumbView> = partition.collapsed.iter().map(|c| self.view(c)).collect();
        nodes.push(TrailNode::OverflowMenu(hidden));
        if !partition.tail.is_empty() {
            nodes.push(TrailNode::Separator);
        }

        for (i, crumb) in partition.tail.iter().enumerate() {
            nodes.push(TrailNode::Item(self.view(crumb)));
            if i + 1 < partition.tail.len() {
                nodes.push(TrailNode::Separator);
            }
        }

        TrailModel { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail_of(n: usize) -> Vec<Crumb> {
        (0..n)
            .map(|i| {
                if i + 1 == n {
                    Crumb::page(format!("item-{i}"))
                } else {
                    Crumb::link(format!("item-{i}"), format!("/item-{i}"))
                }
            })
            .collect()
    }

    fn labels(model: &TrailModel) -> Vec<String> {
        model
            .nodes
            .iter()
            .filter_map(|node| match node {
                TrailNode::Item(view) => Some(view.label.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn short_trail_renders_flat() {
        let items = trail_of(3);
        let model = BreadcrumbTrail::new().model(&items);
        assert_eq!(labels(&model), vec!["item-0", "item-1", "item-2"]);
        assert!(model.overflow().is_none());
        // item, sep, item, sep, item
        assert_eq!(model.nodes.len(), 5);
    }

    #[test]
    fn no_separator_after_last_item() {
        let items = trail_of(4);
        let model = BreadcrumbTrail::new().model(&items);
        assert!(!matches!(model.nodes.last(), Some(TrailNode::Separator)));
    }

    #[test]
    fn long_trail_collapses_middle() {
        let items = trail_of(8);
        let model = BreadcrumbTrail::new().model(&items);
        assert_eq!(labels(&model), vec!["item-0", "item-6", "item-7"]);
        let hidden = model.overflow().unwrap();
        let hidden_labels: Vec<&str> = hidden.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(
            hidden_labels,
            vec!["item-1", "item-2", "item-3", "item-4", "item-5"]
        );
    }

    #[test]
    fn collapsed_trail_node_order() {
        let items = trail_of(6);
        let model = BreadcrumbTrail::new().model(&items);
        let shape: Vec<&str> = model
            .nodes
            .iter()
            .map(|node| match node {
                TrailNode::Item(_) => "item",
                TrailNode::OverflowMenu(_) => "menu",
                TrailNode::Separator => "sep",
                TrailNode::Skeleton => "skeleton",
            })
            .collect();
        assert_eq!(
            shape,
            vec!["item", "sep", "menu", "sep", "item", "sep", "item"]
        );
    }

    #[test]
    fn empty_tail_gets_no_trailing_separator() {
        let items = trail_of(6);
        let model = BreadcrumbTrail::new().keep_visible_at_end(0).model(&items);
        assert!(matches!(model.nodes.last(), Some(TrailNode::OverflowMenu(_))));
    }

    #[test]
    fn current_page_flag_survives() {
        let items = trail_of(3);
        let model = BreadcrumbTrail::new().model(&items);
        let current: Vec<bool> = model
            .nodes
            .iter()
            .filter_map(|node| match node {
                TrailNode::Item(view) => Some(view.is_current),
                _ => None,
            })
            .collect();
        assert_eq!(current, vec![false, false, true]);
    }

    #[test]
    fn loading_shows_skeletons() {
        let items = trail_of(8);
        let model = BreadcrumbTrail::new().loading(true).model(&items);
        let skeletons = model
            .nodes
            .iter()
            .filter(|node| matches!(node, TrailNode::Skeleton))
            .count();
        assert_eq!(skeletons, 3);
        assert!(!matches!(model.nodes.last(), Some(TrailNode::Separator)));
    }

    #[test]
    fn labels_truncate_to_budget() {
        let items = vec![
            Crumb::link("Administration", "/admin"),
            Crumb::page("Users"),
        ];
        let model = BreadcrumbTrail::new().max_label_width(8).model(&items);
        assert_eq!(labels(&model), vec!["Adminis…", "Users"]);
    }

    #[test]
    fn empty_trail_is_empty_model() {
        let model = BreadcrumbTrail::new().model(&[]);
        assert!(model.nodes.is_empty());
    }
}
