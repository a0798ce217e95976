//! Smooth transitions between the layouts before and after a rule is applied.
//!
//! Layout nodes in the two layouts are correlated by [LayoutId](crate::render::LayoutId), which
//! works because rewrites keep the ids of the nodes they move. A node present in both layouts
//! slides linearly from its old bounds to its new ones. A node which only exists in the old
//! layout has been consumed by the rewrite and disappears from the first frame; a node which only
//! exists in the new layout is created by the rewrite and pops in on the final frame.

use alloc::{collections::BTreeMap, vec::Vec};
use log::trace;

use crate::render::{Dimension, FlatLayout, LayoutId, Payload, Rect};

pub const DEFAULT_STEPS: usize = 30;

/// One snapshot of an animation.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Frame {
    /// Which step this is, from 1 up to the animation's step count.
    pub step: usize,
    pub layout: FlatLayout,
}

#[derive(Clone, Debug)]
pub struct AnimatedLayout {
    from: FlatLayout,
    to: FlatLayout,
    steps: usize,
    current: usize,
}

fn lerp(from: Dimension, to: Dimension, step: usize, steps: usize) -> Dimension {
    from + (to - from) * step as Dimension / steps as Dimension
}

fn lerp_rect(from: Rect, to: Rect, step: usize, steps: usize) -> Rect {
    Rect {
        left: lerp(from.left, to.left, step, steps),
        top: lerp(from.top, to.top, step, steps),
        right: lerp(from.right, to.right, step, steps),
        bottom: lerp(from.bottom, to.bottom, step, steps),
    }
}

impl AnimatedLayout {
    /// Creates an animation from `from` to `to` over [DEFAULT_STEPS] steps.
    pub fn new(from: FlatLayout, to: FlatLayout) -> AnimatedLayout {
        Self::with_steps(from, to, DEFAULT_STEPS)
    }

    /// Creates an animation with a particular number of steps. A step count of zero is treated
    /// as one, which jumps straight to the final layout.
    pub fn with_steps(from: FlatLayout, to: FlatLayout, steps: usize) -> AnimatedLayout {
        AnimatedLayout { from, to, steps: steps.max(1), current: 0 }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The number of steps taken so far.
    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.steps
    }

    /// Rewinds to before the first step.
    pub fn restart(&mut self) {
        self.current = 0;
    }

    /// The layout being animated towards.
    pub fn target(&self) -> &FlatLayout {
        &self.to
    }

    /// Advances by one step and returns the new frame, or `None` if the animation has already
    /// finished.
    pub fn step(&mut self) -> Option<Frame> {
        if self.is_complete() {
            return None;
        }
        self.current += 1;
        Some(Frame { step: self.current, layout: self.frame_at(self.current) })
    }

    /// Runs every remaining step, passing each frame to `callback` in order.
    pub fn start(&mut self, mut callback: impl FnMut(Frame)) {
        while let Some(frame) = self.step() {
            callback(frame);
        }
    }

    /// Computes the layout at a given step without advancing.
    pub fn frame_at(&self, step: usize) -> FlatLayout {
        let step = step.min(self.steps);
        let old: BTreeMap<LayoutId, Rect> = self.from.nodes.iter().map(|n| (n.id, n.bounds)).collect();
        let last = step == self.steps;

        // Decide which nodes of the target exist at this step before moving them, because groups
        // need to know how many of their contents survive
        let keep: Vec<bool> = self.to.nodes
            .iter()
            .map(|n| last || old.contains_key(&n.id))
            .collect();

        let mut nodes = Vec::with_capacity(self.to.nodes.len());
        for (i, node) in self.to.nodes.iter().enumerate() {
            if !keep[i] {
                continue;
            }

            let mut node = node.clone();
            if let Some(from) = old.get(&node.id) {
                node.bounds = lerp_rect(*from, node.bounds, step, self.steps);
            }
            if let Payload::Group { len } = &mut node.payload {
                *len = keep[i + 1..i + 1 + *len].iter().filter(|k| **k).count();
            }
            nodes.push(node);
        }

        trace!("animation frame {}/{} has {} nodes", step, self.steps, nodes.len());
        FlatLayout::from_nodes(nodes, self.to.halo_padding)
    }
}
