//! Resolving screen coordinates back to tree nodes.

use crate::{node::NodeId, render::{Dimension, FlatLayout, LayoutNode, Rect}};

impl FlatLayout {
    /// Finds the most specific selectable node under a point: the one with the smallest bounding
    /// box which contains it. If two candidates have the same area, the later one in paint order
    /// wins, since it was drawn on top.
    pub fn hit_test(&self, x: Dimension, y: Dimension) -> Option<&LayoutNode> {
        let mut best: Option<&LayoutNode> = None;

        for node in &self.nodes {
            if !node.selectable || !node.bounds.contains(x, y) {
                continue;
            }
            best = match best {
                Some(current) if current.bounds.area() < node.bounds.area() => Some(current),
                _ => Some(node),
            };
        }

        best
    }

    /// The region covered by every fragment drawn for a tree node, such as both halves of a
    /// parenthesised group as well as its contents.
    pub fn selection_bounds(&self, node: NodeId) -> Option<Rect> {
        union_bounds(self.nodes.iter().filter(|n| n.id.node == node))
    }

    /// The region covered by several tree nodes selected together.
    pub fn combined_selection_bounds(&self, nodes: &[NodeId]) -> Option<Rect> {
        union_bounds(self.nodes.iter().filter(|n| nodes.contains(&n.id.node)))
    }
}

/// The smallest rectangle enclosing every given layout node, or `None` if there are none.
pub fn union_bounds<'a>(nodes: impl IntoIterator<Item = &'a LayoutNode>) -> Option<Rect> {
    nodes
        .into_iter()
        .map(|n| n.bounds)
        .reduce(|acc, b| acc.union(&b))
}
