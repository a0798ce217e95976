//! The equation tree being edited.
//!
//! A [Tree] is an arena of [Node]s keyed by [NodeId]. Parent and sibling links are ids rather
//! than references, so navigation upwards is cheap without the tree owning itself. Every change
//! to an editing session's tree goes through [Tree::replace] or the container helpers built
//! alongside it, which refuse any change that would break the invariants documented on
//! [NodeKind].
//!
//! Standalone trees double as fragments: [Tree::clone_subtree] produces one, the constructors
//! and [operations] build them, and [Tree::replace] consumes one.

mod tree;
pub use tree::*;

pub mod operations;
pub use operations::{add, sub, mul, div};

mod compare;
mod disambiguate;

mod display;
pub use display::NodeDisplay;
