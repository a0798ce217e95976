//! Shorthands for combining trees with arithmetic.
//!
//! When the left-hand side is already a chain of the right sort, the new operand is appended to
//! it rather than nested, so `add(add(a, b), c)` builds `a + b + c` instead of `(a + b) + c`.

use alloc::vec;

use crate::{error::StructureError, node::{NodeKind, Operator, Tree}};

fn chain_onto(mut left: Tree, op: Operator, right: Tree) -> Result<Tree, StructureError> {
    let extends = match left.root_kind() {
        NodeKind::Expression(_) => op.is_additive(),
        NodeKind::Product(_) => op.is_multiplicative(),
        _ => false,
    };

    if extends {
        let root = left.root();
        left.push_term(root, op, right)?;
        Ok(left)
    } else if op.is_additive() {
        Tree::expression(left, vec![(op, right)])
    } else {
        Tree::product(left, vec![(op, right)])
    }
}

/// `left + right`
pub fn add(left: Tree, right: Tree) -> Result<Tree, StructureError> {
    chain_onto(left, Operator::Add, right)
}

/// `left - right`
pub fn sub(left: Tree, right: Tree) -> Result<Tree, StructureError> {
    chain_onto(left, Operator::Subtract, right)
}

/// `left * right`
pub fn mul(left: Tree, right: Tree) -> Result<Tree, StructureError> {
    chain_onto(left, Operator::Multiply, right)
}

/// `numerator / denominator`, as a fraction.
pub fn div(numerator: Tree, denominator: Tree) -> Result<Tree, StructureError> {
    Tree::fraction(numerator, denominator)
}
