//! Visual-tool node tree to Layout IR.
//!
//! [`Classifier::classify`] looks at one node and returns the IR node it reads as,
//! or `None` when the subtree contributes nothing. Parents prune `None` children,
//! so an empty wrapper never reaches the IR.
//!
//! Dispatch order:
//!
//!     1. Text nodes become `text` or `heading` (by font size).
//!     2. Childless nodes become `image` when they carry an image paint, else nothing.
//!     3. The pattern rules in [`rules::RULES`] are tried in priority order
//!        (card, input, button, nav). A rule fires when its predicate holds and its
//!        builder produces a node.
//!     4. Otherwise the auto-layout axis decides: horizontal rows become `columns`,
//!        vertical stacks become a `container`, and free-positioned children are
//!        grouped into visual rows.

mod layouts;
mod leaves;
pub mod rules;

use crate::rows::{find_background_index, sorted_children};
use crate::source::{LayoutMode, NodeType, SourceNode};
use crate::style::visual_style;
use crate::thresholds::Thresholds;
use blueprint_core::{LayoutNode, Style};
use tracing::debug;

/// Stateless classifier over a set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Classifier { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify `node` and its subtree.
    pub fn classify(&self, node: &SourceNode) -> Option<LayoutNode> {
        if node.node_type == NodeType::Text {
            return leaves::text(self, node);
        }

        if node.children.is_empty() {
            return leaves::image(self, node);
        }

        for rule in rules::RULES {
            if !(rule.matches)(self, node) {
                continue;
            }
            if let Some(out) = (rule.build)(self, node) {
                debug!(rule = rule.name, node = %node.name, "pattern rule matched");
                return Some(out);
            }
        }

        match node.layout_mode {
            LayoutMode::Horizontal => layouts::horizontal(self, node),
            LayoutMode::Vertical => layouts::vertical(self, node),
            LayoutMode::None => layouts::free(self, node),
        }
    }

    /// Classify each node, dropping the ones that contribute nothing.
    pub(crate) fn classify_all<'a>(
        &self,
        nodes: impl IntoIterator<Item = &'a SourceNode>,
    ) -> Vec<LayoutNode> {
        nodes
            .into_iter()
            .filter_map(|node| self.classify(node))
            .collect()
    }

    /// Sorted children with the background-like child split off.
    pub(crate) fn split_background<'a>(
        &self,
        node: &'a SourceNode,
    ) -> (Vec<&'a SourceNode>, Option<&'a SourceNode>) {
        let mut children = sorted_children(node);
        match find_background_index(node, &children, &self.thresholds) {
            Some(index) => {
                let background = children.remove(index);
                (children, Some(background))
            }
            None => (children, None),
        }
    }

    /// Visual style for a layout node. A node without its own fill, border,
    /// radius or shadow absorbs its background-like child, which is then removed
    /// from `children`.
    pub(crate) fn absorb_background<'a>(
        &self,
        node: &'a SourceNode,
    ) -> (Vec<&'a SourceNode>, Style) {
        let own = visual_style(node);
        if own.has_visual() {
            return (sorted_children(node), own);
        }

        match self.split_background(node) {
            (children, Some(background)) => (children, own.merged(&visual_style(background))),
            (children, None) => (children, own),
        }
    }
}
