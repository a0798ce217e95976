use simplelog::{Config, LevelFilter, TestLogger};

use crate::{node::{NodeId, NodeKind}, Tree};

macro_rules! op {
    (+) => { crate::Operator::Add };
    (-) => { crate::Operator::Subtract };
    (*) => { crate::Operator::Multiply };
    (/) => { crate::Operator::Divide };
}

macro_rules! lit {
    ($n:expr) => { crate::Tree::literal($n) };
}

macro_rules! ident {
    ($n:ident) => { crate::Tree::identifier(stringify!($n)) };
}

macro_rules! expr {
    ($first:expr $(, $op:tt $operand:expr)* $(,)?) => {
        crate::Tree::expression($first, alloc::vec![$((op!($op), $operand)),*]).unwrap()
    };
}

macro_rules! prod {
    ($first:expr $(, $op:tt $operand:expr)* $(,)?) => {
        crate::Tree::product($first, alloc::vec![$((op!($op), $operand)),*]).unwrap()
    };
}

macro_rules! frac {
    ($t:expr, $b:expr $(,)?) => { crate::Tree::fraction($t, $b).unwrap() };
}

macro_rules! neg {
    ($n:expr) => { crate::Tree::negation($n).unwrap() };
}

macro_rules! eqn {
    ($l:expr, $r:expr $(,)?) => { crate::Tree::equation($l, $r).unwrap() };
}

macro_rules! rat {
    ($n:literal)             => { crate::Number::Rational($n, 1)  };
    ($n:literal, $d:literal) => { crate::Number::Rational($n, $d) };
}

/// Routes `log` output through the test harness, so it is shown for failing tests.
pub fn init_logging() {
    // Fails if another test got there first, which is fine
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// `2 * (3 + 5 * (-4)) = (-1 * (-3) - 12) / 3`
pub fn sample_equation() -> Tree {
    eqn!(
        prod!(lit!(2), * expr!(lit!(3), + prod!(lit!(5), * lit!(-4)))),
        frac!(
            expr!(prod!(lit!(-1), * lit!(-3)), - lit!(12)),
            lit!(3),
        ),
    )
}

/// The first node in the tree, in pre-order, which is a literal with a particular value.
pub fn find_literal(tree: &Tree, value: i64) -> NodeId {
    tree.descendants(tree.root())
        .into_iter()
        .find(|id| tree.literal_value(*id) == Some(crate::Number::from(value)))
        .unwrap()
}

/// The first node in the tree, in pre-order, of a particular kind.
pub fn find_kind(tree: &Tree, name: &str) -> NodeId {
    tree.descendants(tree.root())
        .into_iter()
        .find(|id| tree.kind(*id).map(NodeKind::name) == Some(name))
        .unwrap()
}
