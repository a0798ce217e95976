use log::{debug, warn};
use num_traits::Zero;

use crate::{
    error::{PreconditionError, TransformError},
    evaluate::Evaluable,
    node::{sub, NodeId, NodeKind, Tree},
    transform::{InputRequest, Selection, SelectionTransform},
};

/// Subtracts something equal to zero from a node, for example to introduce `x - x`-shaped terms
/// which can be rearranged later.
pub struct SubtractZero;

impl SubtractZero {
    fn target(tree: &Tree, selections: &[Selection]) -> Option<(NodeId, NodeId)> {
        let node = match selections {
            [selection] => selection.only()?,
            _ => return None,
        };
        if matches!(tree.kind(node)?, NodeKind::Operator(_)) {
            return None;
        }
        Some((tree.parent(node)?, node))
    }
}

impl SelectionTransform for SubtractZero {
    fn label(&self) -> &'static str {
        "subtract zero..."
    }

    fn can_transform_nodes(&self, tree: &Tree, selections: &[Selection]) -> bool {
        Self::target(tree, selections).is_some()
    }

    fn transform_nodes(&self, tree: &mut Tree, selections: &[Selection], input: &Tree) -> Result<(), TransformError> {
        let (parent, node) = Self::target(tree, selections).ok_or(PreconditionError(self.label()))?;
        if !self.validate_input(tree, input) {
            return Err(TransformError::InvalidInput(self.label()));
        }

        let zero = input.clone_subtree(input.root(), true)?;
        let replacement = sub(tree.clone_subtree(node, false)?, zero)?;
        tree.replace(parent, node, replacement)?;

        debug!("subtracted {} from {}", input, node);
        Ok(())
    }

    fn validate_input(&self, _tree: &Tree, input: &Tree) -> bool {
        if matches!(input.root_kind(), NodeKind::Equation { .. }) {
            warn!("cannot subtract an equation");
            return false;
        }

        match input.evaluate() {
            Ok(value) => value.is_zero(),
            Err(e) => {
                warn!("{} is not known to be zero: {}", input, e);
                false
            }
        }
    }

    fn input_request(&self, tree: &Tree, selections: &[Selection]) -> Result<InputRequest, TransformError> {
        let (_, node) = Self::target(tree, selections).ok_or(PreconditionError(self.label()))?;
        Ok(InputRequest {
            prompt: "Subtract an expression equal to zero",
            math: tree.clone_subtree(node, true)?,
        })
    }
}
