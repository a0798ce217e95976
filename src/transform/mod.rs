//! Local algebraic rewrite rules.
//!
//! A rule comes in one of two shapes. A [NodeTransform] acts on a single node which the user
//! clicked; a [SelectionTransform] acts on one or more [Selection]s and needs an auxiliary
//! expression supplied by the user, such as the value to divide both sides of an equation by.
//!
//! Every rule checks its precondition before touching the tree, so a failed rule leaves the tree
//! exactly as it was.

use alloc::{vec, vec::Vec};

use crate::{error::TransformError, node::{NodeId, Tree}};

mod distribute_backwards;
mod rewrite_as_negation;
mod evaluate;
mod equation_div;
mod expression_sub_zero;

pub use distribute_backwards::DistributeBackwards;
pub use rewrite_as_negation::RewriteAsNegation;
pub use evaluate::EvaluateOperator;
pub use equation_div::DivideBothSides;
pub use expression_sub_zero::SubtractZero;

/// A group of nodes selected together. Most rules only look at the first.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Selection(pub Vec<NodeId>);

impl Selection {
    pub fn single(node: NodeId) -> Selection {
        Selection(vec![node])
    }

    pub fn first(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the node if this selection holds exactly one.
    pub fn only(&self) -> Option<NodeId> {
        match self.0.as_slice() {
            [node] => Some(*node),
            _ => None,
        }
    }
}

/// What to show the user while asking for a rule's auxiliary expression.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct InputRequest {
    pub prompt: &'static str,

    /// The math being operated on, as a standalone copy.
    pub math: Tree,
}

/// A rule which rewrites around a single node.
pub trait NodeTransform {
    fn label(&self) -> &'static str;

    /// Returns true if this rule can be applied to `node`.
    fn can_transform(&self, tree: &Tree, node: NodeId) -> bool;

    /// Applies this rule to `node`. Fails with a
    /// [PreconditionError](crate::error::PreconditionError) if
    /// [can_transform](NodeTransform::can_transform) does not hold.
    fn do_transform(&self, tree: &mut Tree, node: NodeId) -> Result<(), TransformError>;
}

/// A rule which rewrites a set of selections using an expression supplied by the user.
pub trait SelectionTransform {
    fn label(&self) -> &'static str;

    fn can_transform_nodes(&self, tree: &Tree, selections: &[Selection]) -> bool;

    /// Applies this rule. Fails with a [PreconditionError](crate::error::PreconditionError) if
    /// the selections don't fit, or with [TransformError::InvalidInput] if `input` is rejected
    /// by [validate_input](SelectionTransform::validate_input).
    fn transform_nodes(&self, tree: &mut Tree, selections: &[Selection], input: &Tree) -> Result<(), TransformError>;

    fn needs_user_input(&self) -> bool {
        true
    }

    /// Returns true if `input` is acceptable as this rule's auxiliary expression.
    fn validate_input(&self, tree: &Tree, input: &Tree) -> bool;

    fn input_request(&self, tree: &Tree, selections: &[Selection]) -> Result<InputRequest, TransformError>;
}

/// An entry of the rule catalog.
#[derive(Clone, Copy)]
pub enum Rule {
    Node(&'static dyn NodeTransform),
    Selection(&'static dyn SelectionTransform),
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Node(rule) => rule.label(),
            Self::Selection(rule) => rule.label(),
        }
    }
}

impl core::fmt::Debug for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Node(rule) => write!(f, "Rule::Node({:?})", rule.label()),
            Self::Selection(rule) => write!(f, "Rule::Selection({:?})", rule.label()),
        }
    }
}

/// Every rule which can be offered to the user.
pub fn catalog() -> Vec<Rule> {
    vec![
        Rule::Node(&DistributeBackwards),
        Rule::Node(&RewriteAsNegation),
        Rule::Node(&EvaluateOperator),
        Rule::Selection(&DivideBothSides),
        Rule::Selection(&SubtractZero),
    ]
}

/// The node rules in the catalog which apply to `node`.
pub fn applicable_node_rules(tree: &Tree, node: NodeId) -> Vec<&'static dyn NodeTransform> {
    catalog()
        .into_iter()
        .filter_map(|rule| match rule {
            Rule::Node(rule) if rule.can_transform(tree, node) => Some(rule),
            _ => None,
        })
        .collect()
}

/// The selection rules in the catalog which apply to `selections`.
pub fn applicable_selection_rules(tree: &Tree, selections: &[Selection]) -> Vec<&'static dyn SelectionTransform> {
    catalog()
        .into_iter()
        .filter_map(|rule| match rule {
            Rule::Selection(rule) if rule.can_transform_nodes(tree, selections) => Some(rule),
            _ => None,
        })
        .collect()
}
