use log::{debug, warn};
use num_traits::Zero;

use crate::{
    error::{MathsError, PreconditionError, TransformError},
    evaluate::Evaluable,
    node::{div, NodeId, NodeKind, Tree},
    transform::{InputRequest, Selection, SelectionTransform},
};

/// Divides both sides of an equation by an expression entered by the user.
pub struct DivideBothSides;

impl DivideBothSides {
    /// The two sides of the equation, if the selections are one whole side each.
    fn sides(tree: &Tree, selections: &[Selection]) -> Option<(NodeId, NodeId, NodeId)> {
        let (first, last) = match selections {
            [first, last] => (first.only()?, last.only()?),
            _ => return None,
        };

        let equation = tree.parent(first)?;
        if !matches!(tree.kind(equation)?, NodeKind::Equation { .. })
            || tree.parent(last)? != equation
            || first == last
        {
            return None;
        }

        Some((equation, first, last))
    }
}

impl SelectionTransform for DivideBothSides {
    fn label(&self) -> &'static str {
        "divide both sides"
    }

    fn can_transform_nodes(&self, tree: &Tree, selections: &[Selection]) -> bool {
        Self::sides(tree, selections).is_some()
    }

    fn transform_nodes(&self, tree: &mut Tree, selections: &[Selection], input: &Tree) -> Result<(), TransformError> {
        let (equation, first, last) = Self::sides(tree, selections).ok_or(PreconditionError(self.label()))?;
        if !self.validate_input(tree, input) {
            return Err(TransformError::InvalidInput(self.label()));
        }

        // The divisor appears twice, so each copy needs its own ids
        for side in [first, last] {
            let divisor = input.clone_subtree(input.root(), true)?;
            let fraction = div(tree.clone_subtree(side, false)?, divisor)?;
            tree.replace(equation, side, fraction)?;
        }

        debug!("divided both sides of {} by {}", equation, input);
        Ok(())
    }

    fn validate_input(&self, _tree: &Tree, input: &Tree) -> bool {
        if !input.root_kind().is_operand() {
            warn!("cannot divide by a {}", input.root_kind().name());
            return false;
        }

        match input.evaluate() {
            Ok(value) if value.is_zero() => {
                warn!("cannot divide by {}, which is zero", input);
                false
            }
            Ok(_) | Err(MathsError::UnboundIdentifier(_)) => true,
            Err(e) => {
                warn!("cannot divide by {}: {}", input, e);
                false
            }
        }
    }

    fn input_request(&self, tree: &Tree, selections: &[Selection]) -> Result<InputRequest, TransformError> {
        let (_, first, _) = Self::sides(tree, selections).ok_or(PreconditionError(self.label()))?;
        Ok(InputRequest {
            prompt: "Divide both sides by",
            math: tree.clone_subtree(first, true)?,
        })
    }
}
