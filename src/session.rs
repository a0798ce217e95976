//! A ready-made controller which ties the tree, its layout and the rule catalog together.
//!
//! A front-end owns one [Session]. It forwards clicks to [Session::click], offers the rules from
//! [Session::applicable_node_rules] and [Session::applicable_selection_rules] in a menu, and
//! plays the [AnimatedLayout] returned when a rule is applied.

use core::mem;

use alloc::vec::Vec;
use log::{debug, warn};

use crate::{
    animation::AnimatedLayout,
    error::{PreconditionError, TransformError},
    node::{NodeId, Tree},
    render::{create_flat_layout_with, Dimension, FlatLayout, LayoutConfig, LayoutId, Surface},
    transform::{self, InputRequest, NodeTransform, Selection, SelectionTransform},
};

#[derive(Clone, Debug)]
pub struct Session {
    tree: Tree,
    font_size: Dimension,
    viewport: (Dimension, Dimension),
    config: LayoutConfig,
    layout: FlatLayout,
    selections: Vec<Selection>,
    history: Vec<Tree>,
}

impl Session {
    pub fn new(tree: Tree, font_size: Dimension, viewport_width: Dimension, viewport_height: Dimension) -> Session {
        Self::with_config(tree, font_size, viewport_width, viewport_height, LayoutConfig::default())
    }

    pub fn with_config(tree: Tree, font_size: Dimension, viewport_width: Dimension, viewport_height: Dimension, config: LayoutConfig) -> Session {
        let layout = create_flat_layout_with(&tree, font_size, viewport_width, viewport_height, &config);
        Session {
            tree,
            font_size,
            viewport: (viewport_width, viewport_height),
            config,
            layout,
            selections: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn layout(&self) -> &FlatLayout {
        &self.layout
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Every tree which was replaced by applying a rule, oldest first.
    pub fn history(&self) -> &[Tree] {
        &self.history
    }

    /// Handles a click at (x, y), returning the tree node under it.
    ///
    /// Clicking an unselected node adds it as a new selection, and clicking a selected node
    /// deselects it. Clicking empty space clears every selection.
    pub fn click(&mut self, x: Dimension, y: Dimension) -> Option<NodeId> {
        let node = match self.layout.hit_test(x, y) {
            Some(layout_node) => layout_node.id.node,
            None => {
                self.selections.clear();
                return None;
            }
        };

        let selection = Selection::single(node);
        if let Some(index) = self.selections.iter().position(|s| *s == selection) {
            self.selections.remove(index);
        } else {
            self.selections.push(selection);
        }

        debug!("clicked {} at ({}, {}), {} selected", node, x, y, self.selections.len());
        Some(node)
    }

    pub fn clear_selections(&mut self) {
        self.selections.clear();
    }

    /// The node rules which apply to the selected node, if exactly one node is selected.
    pub fn applicable_node_rules(&self) -> Vec<&'static dyn NodeTransform> {
        match self.selections.as_slice() {
            [selection] => match selection.only() {
                Some(node) => transform::applicable_node_rules(&self.tree, node),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// The selection rules which apply to the current selections.
    pub fn applicable_selection_rules(&self) -> Vec<&'static dyn SelectionTransform> {
        transform::applicable_selection_rules(&self.tree, &self.selections)
    }

    /// Describes what to ask the user for before applying `rule` to the current selections.
    pub fn input_request(&self, rule: &dyn SelectionTransform) -> Result<InputRequest, TransformError> {
        rule.input_request(&self.tree, &self.selections)
    }

    /// Applies a node rule to `node`, returning an animation from the old layout to the new one.
    /// The tree is unchanged if this fails.
    pub fn apply_node_rule(&mut self, rule: &dyn NodeTransform, node: NodeId) -> Result<AnimatedLayout, TransformError> {
        if !rule.can_transform(&self.tree, node) {
            return Err(PreconditionError(rule.label()).into());
        }

        let mut next = self.tree.clone();
        rule.do_transform(&mut next, node)?;

        debug!("applied '{}' to {}", rule.label(), node);
        Ok(self.commit(next))
    }

    /// Applies a selection rule to the current selections with the user's `input`, returning an
    /// animation from the old layout to the new one. The tree is unchanged if this fails.
    pub fn apply_selection_rule(&mut self, rule: &dyn SelectionTransform, input: &Tree) -> Result<AnimatedLayout, TransformError> {
        if !rule.can_transform_nodes(&self.tree, &self.selections) {
            return Err(PreconditionError(rule.label()).into());
        }
        if rule.needs_user_input() && !rule.validate_input(&self.tree, input) {
            warn!("'{}' rejected {}", rule.label(), input);
            return Err(TransformError::InvalidInput(rule.label()));
        }

        let mut next = self.tree.clone();
        rule.transform_nodes(&mut next, &self.selections, input)?;

        debug!("applied '{}' to {} selections", rule.label(), self.selections.len());
        Ok(self.commit(next))
    }

    /// Returns to the tree before the last rule was applied, if there was one.
    pub fn undo(&mut self) -> Option<AnimatedLayout> {
        let previous = self.history.pop()?;
        let (_, old_layout) = self.relayout(previous);
        self.selections.clear();
        Some(AnimatedLayout::new(old_layout, self.layout.clone()))
    }

    /// Draws a halo behind each selection, then the layout itself. A selection of several nodes
    /// gets one halo around all of them.
    pub fn render(&self, surface: &mut impl Surface) {
        for selection in &self.selections {
            let bounds = match self.layout.combined_selection_bounds(selection.nodes()) {
                Some(b) => b,
                None => continue,
            };
            let circle = selection.only()
                .and_then(|node| self.layout.get(LayoutId::node(node)))
                .map_or(false, |n| n.circle);
            self.layout.render_selection(surface, bounds, circle);
        }

        self.layout.render(surface);
    }

    /// Installs a new tree, remembering the old one.
    fn commit(&mut self, next: Tree) -> AnimatedLayout {
        let (previous, old_layout) = self.relayout(next);
        self.history.push(previous);
        self.selections.clear();
        AnimatedLayout::new(old_layout, self.layout.clone())
    }

    /// Replaces the tree and recomputes the layout from scratch, returning the old tree and
    /// layout.
    fn relayout(&mut self, tree: Tree) -> (Tree, FlatLayout) {
        let layout = create_flat_layout_with(&tree, self.font_size, self.viewport.0, self.viewport.1, &self.config);
        (mem::replace(&mut self.tree, tree), mem::replace(&mut self.layout, layout))
    }
}
