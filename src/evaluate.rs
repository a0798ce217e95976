//! An abstraction for something which can be evaluated into a number.
//!
//! Rules use evaluation to fold literals together and to check auxiliary expressions supplied by
//! the user, for example that an expression to subtract really is zero.

use crate::{Number, error::MathsError, node::{NodeId, NodeKind, Tree}};

/// Something which can be evaluated into a number.
pub trait Evaluable {
    /// Evaluates this expression and returns either a [Number] with the result, or a [MathsError]
    /// if evaluation was not successful.
    fn evaluate(&self) -> Result<Number, MathsError>;
}

impl Evaluable for Tree {
    fn evaluate(&self) -> Result<Number, MathsError> {
        self.evaluate_node(self.root())
    }
}

impl Tree {
    /// Evaluates the subtree rooted at `id`. Identifiers have no value, and neither do equations
    /// or lone operators.
    pub fn evaluate_node(&self, id: NodeId) -> Result<Number, MathsError> {
        match self.kind(id).ok_or(MathsError::NotAnExpression)? {
            NodeKind::Literal(n) => Ok(*n),
            NodeKind::Identifier(name) => Err(MathsError::UnboundIdentifier(name.clone())),
            NodeKind::Operator(_) | NodeKind::Equation { .. } => Err(MathsError::NotAnExpression),

            NodeKind::Expression(children) | NodeKind::Product(children) => {
                let (first, rest) = children.split_first().ok_or(MathsError::NotAnExpression)?;
                let mut result = self.evaluate_node(*first)?;
                for pair in rest.chunks(2) {
                    if let [op, operand] = pair {
                        let op = self.operator_symbol(*op).ok_or(MathsError::NotAnExpression)?;
                        result = op.apply(result, self.evaluate_node(*operand)?)?;
                    }
                }
                Ok(result)
            }

            NodeKind::Fraction { numerator, denominator } =>
                self.evaluate_node(*numerator)?.checked_div(self.evaluate_node(*denominator)?),
            NodeKind::Negation(inner) => Ok(-self.evaluate_node(*inner)?),
        }
    }
}
