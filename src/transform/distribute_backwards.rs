use log::debug;

use crate::{
    error::{PreconditionError, TransformError},
    node::{mul, NodeId, NodeKind, Operator, Tree},
    transform::NodeTransform,
};

/// Multiplies each term of a bracketed sum by the literal after it:
/// `(a + b) * k` becomes `a * k + b * k`.
pub struct DistributeBackwards;

impl DistributeBackwards {
    /// Finds the product and the expression which `node` would distribute over.
    fn targets(tree: &Tree, node: NodeId) -> Option<(NodeId, NodeId)> {
        tree.literal_value(node)?;

        let product = tree.parent(node)?;
        if !matches!(tree.kind(product)?, NodeKind::Product(_)) {
            return None;
        }
        let times = tree.prev(node)?;
        if tree.operator_symbol(times)? != Operator::Multiply {
            return None;
        }
        let expression = tree.prev(times)?;
        if !matches!(tree.kind(expression)?, NodeKind::Expression(_)) {
            return None;
        }

        // Something like `2 / (a + b) * k` is really `(2 / (a + b)) * k`
        if let Some(before) = tree.prev(expression) {
            if tree.operator_symbol(before)? != Operator::Multiply {
                return None;
            }
        }

        // Removing the whole product means replacing it in its parent
        tree.parent(product)?;

        Some((product, expression))
    }
}

impl NodeTransform for DistributeBackwards {
    fn label(&self) -> &'static str {
        "distribute backwards"
    }

    fn can_transform(&self, tree: &Tree, node: NodeId) -> bool {
        Self::targets(tree, node).is_some()
    }

    fn do_transform(&self, tree: &mut Tree, node: NodeId) -> Result<(), TransformError> {
        let (product, expression) = Self::targets(tree, node).ok_or(PreconditionError(self.label()))?;
        let factor = tree.literal_value(node).ok_or(PreconditionError(self.label()))?;

        // Terms keep their ids so they can be animated into place, but each copy of the factor is
        // a new node
        for term in tree.operands(expression) {
            let scaled = mul(tree.clone_subtree(term, false)?, Tree::literal(factor))?;
            tree.replace(expression, term, scaled)?;
        }

        let start = tree.index_in_parent(expression).unwrap_or_default();
        let distributed = tree.clone_subtree(expression, false)?;
        tree.splice_run(product, start, 3, distributed)?;

        debug!("distributed {} over {}", factor, expression);
        Ok(())
    }
}
