//! Building blocks for direct-manipulation equation editors.
//!
//! An equation is held as a [Tree](node::Tree) of typed nodes. It is typeset into a
//! [FlatLayout](render::FlatLayout) of positioned boxes, which clicks can be resolved against with
//! [hit_test](render::FlatLayout::hit_test). The rules in [transform] rewrite the tree in place,
//! and [AnimatedLayout](animation::AnimatedLayout) slides the boxes of the old layout into their
//! new positions.

#![no_std]
extern crate alloc;

pub mod error;
pub mod node;
pub mod number;
pub mod evaluate;
pub mod metrics;
pub mod render;
pub mod renderers;
pub mod hit_test;
pub mod animation;
pub mod transform;
pub mod session;

#[cfg(test)]
mod tests;

pub use crate::{
    number::Number,
    node::{NodeId, NodeKind, Operator, Tree},
    render::{create_flat_layout, create_flat_layout_with, FlatLayout, LayoutConfig},
    animation::AnimatedLayout,
    transform::{catalog, Rule},
    session::Session,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
