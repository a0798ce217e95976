//! Plain-text printing of trees, mostly for logs and tests.

use core::fmt;

use crate::node::{NodeId, NodeKind, Operator, Tree};

/// Displays the subtree of a tree rooted at a particular node. Created by [Tree::display_node].
pub struct NodeDisplay<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl Tree {
    /// Returns a value which prints the subtree rooted at `id`.
    pub fn display_node(&self, id: NodeId) -> NodeDisplay<'_> {
        NodeDisplay { tree: self, id }
    }

    fn fmt_node(&self, id: NodeId, top: bool, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind(id) {
            Some(k) => k,
            None => return write!(f, "?"),
        };

        // Layout stacks fractions vertically, but on one line nested chains need to be grouped,
        // including a chain divided into, which would otherwise read as `a / b * c`
        let parent_kind = self.parent(id).and_then(|p| self.kind(p));
        let in_fraction = matches!(parent_kind, Some(NodeKind::Fraction { .. }));
        let after_divide = matches!(parent_kind, Some(NodeKind::Product(_)))
            && self.prev(id).and_then(|op| self.operator_symbol(op)) == Some(Operator::Divide);
        let parens = !top && (
            self.needs_parentheses(id)
            || ((in_fraction || after_divide) && matches!(kind, NodeKind::Product(_) | NodeKind::Fraction { .. }))
        );

        if parens { write!(f, "(")?; }
        match kind {
            NodeKind::Literal(n) => write!(f, "{}", n)?,
            NodeKind::Identifier(name) => write!(f, "{}", name)?,
            NodeKind::Operator(op) => write!(f, "{}", op.symbol())?,
            NodeKind::Expression(children) | NodeKind::Product(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 { write!(f, " ")?; }
                    self.fmt_node(*child, false, f)?;
                }
            }
            NodeKind::Fraction { numerator, denominator } => {
                self.fmt_node(*numerator, false, f)?;
                write!(f, " / ")?;
                self.fmt_node(*denominator, false, f)?;
            }
            NodeKind::Negation(inner) => {
                write!(f, "-")?;
                self.fmt_node(*inner, false, f)?;
            }
            NodeKind::Equation { left, right } => {
                self.fmt_node(*left, false, f)?;
                write!(f, " = ")?;
                self.fmt_node(*right, false, f)?;
            }
        }
        if parens { write!(f, ")")?; }

        Ok(())
    }
}

impl<'a> fmt::Display for NodeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.tree.fmt_node(self.id, true, f)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_node(self.root(), true, f)
    }
}
