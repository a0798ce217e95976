use log::debug;
use num_traits::One;

use crate::{
    error::{PreconditionError, TransformError},
    node::{NodeId, NodeKind, Operator, Tree},
    transform::NodeTransform,
};

/// Rewrites `-1 * x` as `-x`. When `x` is a positive literal the result is a negative literal
/// rather than a negation.
pub struct RewriteAsNegation;

impl RewriteAsNegation {
    /// Returns true if `id` is a product of exactly `-1 * x`.
    fn is_negated_product(tree: &Tree, id: NodeId) -> bool {
        match tree.kind(id) {
            Some(NodeKind::Product(children)) if children.len() == 3 =>
                tree.literal_value(children[0]).map_or(false, |v| (-v).is_one())
                    && tree.operator_symbol(children[1]) == Some(Operator::Multiply),
            _ => false,
        }
    }

    /// The product to rewrite, either `node` itself or the parent of its leading `-1`.
    fn target(tree: &Tree, node: NodeId) -> Option<NodeId> {
        let product = if Self::is_negated_product(tree, node) {
            node
        } else {
            let parent = tree.parent(node)?;
            if tree.first(parent) != Some(node) || !Self::is_negated_product(tree, parent) {
                return None;
            }
            parent
        };

        tree.parent(product).map(|_| product)
    }
}

impl NodeTransform for RewriteAsNegation {
    fn label(&self) -> &'static str {
        "rewrite as negation"
    }

    fn can_transform(&self, tree: &Tree, node: NodeId) -> bool {
        Self::target(tree, node).is_some()
    }

    fn do_transform(&self, tree: &mut Tree, node: NodeId) -> Result<(), TransformError> {
        let product = Self::target(tree, node).ok_or(PreconditionError(self.label()))?;
        let parent = tree.parent(product).ok_or(PreconditionError(self.label()))?;
        let factor = tree.last(product).ok_or(PreconditionError(self.label()))?;

        let replacement = match tree.literal_value(factor) {
            Some(value) if value.is_positive() => Tree::literal(-value),
            _ => Tree::negation(tree.clone_subtree(factor, false)?)?,
        };
        tree.replace(parent, product, replacement)?;

        debug!("rewrote {} as a negation", product);
        Ok(())
    }
}
