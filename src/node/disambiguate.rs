//! Decides where parentheses are needed to show the order of operations. Layout and display both
//! use this, so what is drawn always matches what is printed.

use crate::node::{NodeId, NodeKind, Operator, Tree};

impl Tree {
    /// Returns true if the node should be wrapped in parentheses when rendered in its current
    /// position. Parentheses are never stored in the tree; they are derived from context:
    ///   - an `Expression` directly inside a `Product`, `Fraction` or `Negation`, or following a
    ///     `-` in another `Expression`, e.g. (3+2)*4 or 3-(3-2)
    ///   - a `Product` inside a `Negation`, or a `Product` which follows an operator in an
    ///     `Expression` and leads with a negative literal or a negation, e.g. 1+(-1*5)
    ///   - a negative literal or a `Negation` following an operator or inside a `Negation`,
    ///     e.g. 5*(-4)
    ///
    /// A `Product` nested inside another `Product` is not parenthesised.
    pub fn needs_parentheses(&self, id: NodeId) -> bool {
        let parent = match self.parent(id) {
            Some(p) => p,
            None => return false,
        };
        let (kind, parent_kind) = match (self.kind(id), self.kind(parent)) {
            (Some(k), Some(p)) => (k, p),
            _ => return false,
        };
        let after_operator = self.prev(id).and_then(|p| self.operator_symbol(p));
        let in_negation = matches!(parent_kind, NodeKind::Negation(_));

        match kind {
            NodeKind::Expression(_) => match parent_kind {
                NodeKind::Product(_) | NodeKind::Fraction { .. } | NodeKind::Negation(_) => true,
                NodeKind::Expression(_) => after_operator == Some(Operator::Subtract),
                _ => false,
            },

            NodeKind::Product(children) => match parent_kind {
                NodeKind::Negation(_) => true,
                NodeKind::Expression(_) => after_operator.is_some()
                    && children.first().map_or(false, |f| self.is_negative_term(*f)),
                _ => false,
            },

            NodeKind::Literal(n) if n.is_negative() => after_operator.is_some() || in_negation,
            NodeKind::Negation(_) => after_operator.is_some() || in_negation,

            _ => false,
        }
    }

    /// Returns true if the node is a negative literal or a negation.
    pub fn is_negative_term(&self, id: NodeId) -> bool {
        match self.kind(id) {
            Some(NodeKind::Literal(n)) => n.is_negative(),
            Some(NodeKind::Negation(_)) => true,
            _ => false,
        }
    }
}
