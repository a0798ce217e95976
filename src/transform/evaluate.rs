use log::debug;

use crate::{
    Number,
    error::{PreconditionError, TransformError},
    node::{NodeId, Operator, Tree},
    transform::NodeTransform,
};

/// Folds an operator between two literals into one literal, such as `2 + 3` into `5`.
///
/// The left operand must not be bound to anything on its own left, otherwise `1 - 2 + 3` would
/// become `1 - 5`. It must therefore be the first operand of its chain, or follow a `+` or `*`.
pub struct EvaluateOperator;

impl EvaluateOperator {
    /// The container of `node`, the index of the literal to its left, and the folded value.
    fn fold(tree: &Tree, node: NodeId) -> Option<(NodeId, usize, Number)> {
        let op = tree.operator_symbol(node)?;
        let container = tree.parent(node)?;
        let left = tree.prev(node)?;
        let right = tree.next(node)?;

        if let Some(before) = tree.prev(left) {
            if !matches!(tree.operator_symbol(before)?, Operator::Add | Operator::Multiply) {
                return None;
            }
        }

        let value = op.apply(tree.literal_value(left)?, tree.literal_value(right)?).ok()?;

        // Folding the whole chain replaces it, which the root can't be
        if tree.children(container).len() == 3 {
            tree.parent(container)?;
        }

        Some((container, tree.index_in_parent(left)?, value))
    }
}

impl NodeTransform for EvaluateOperator {
    fn label(&self) -> &'static str {
        "evaluate"
    }

    fn can_transform(&self, tree: &Tree, node: NodeId) -> bool {
        Self::fold(tree, node).is_some()
    }

    fn do_transform(&self, tree: &mut Tree, node: NodeId) -> Result<(), TransformError> {
        let (container, start, value) = Self::fold(tree, node).ok_or(PreconditionError(self.label()))?;
        tree.splice_run(container, start, 3, Tree::literal(value))?;

        debug!("evaluated {} to {}", node, value);
        Ok(())
    }
}
