//! Typesetting of equation trees.
//!
//! Layout happens in two passes. The bottom-up pass builds a [LayoutBlock] for each node, with
//! every layout node positioned relative to the block's own top-left corner; blocks are combined
//! by shifting and merging them along a shared baseline. The top-down pass then moves the root
//! block into the centre of the viewport, resolving every node to device pixels.
//!
//! The result is a [FlatLayout]: a flat, paint-ordered list of [LayoutNode]s, each correlated to
//! the tree node it was produced from by a [LayoutId].

use core::{cmp::max, fmt};

use alloc::{string::{String, ToString}, vec, vec::Vec};
use log::trace;

use crate::{metrics::{get_metrics, scale}, node::{NodeId, NodeKind, Tree}};

pub type Dimension = i64;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Area {
    pub width: Dimension,
    pub height: Dimension,
}

impl Area {
    pub fn new(width: Dimension, height: Dimension) -> Area {
        Area { width, height }
    }
}

/// A bounding box in device pixels.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Rect {
    pub left: Dimension,
    pub top: Dimension,
    pub right: Dimension,
    pub bottom: Dimension,
}

impl Rect {
    pub fn new(left: Dimension, top: Dimension, right: Dimension, bottom: Dimension) -> Rect {
        Rect { left, top, right, bottom }
    }

    /// A rectangle with its top-left corner at (x, y).
    pub fn at(x: Dimension, y: Dimension, area: Area) -> Rect {
        Rect { left: x, top: y, right: x + area.width, bottom: y + area.height }
    }

    pub fn width(&self) -> Dimension { self.right - self.left }
    pub fn height(&self) -> Dimension { self.bottom - self.top }

    /// The number of pixels covered.
    pub fn area(&self) -> Dimension {
        self.width() * self.height()
    }

    pub fn centre(&self) -> (Dimension, Dimension) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Returns true if the point lies inside this rectangle or on its edge.
    pub fn contains(&self, x: Dimension, y: Dimension) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }

    /// The smallest rectangle enclosing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn offset(&self, dx: Dimension, dy: Dimension) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Grows the rectangle by `padding` on every side.
    pub fn pad(&self, padding: Dimension) -> Rect {
        Rect {
            left: self.left - padding,
            top: self.top - padding,
            right: self.right + padding,
            bottom: self.bottom + padding,
        }
    }
}

/// Distinguishes the several glyphs which one tree node can produce.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Part {
    /// The bar of a fraction.
    Bar,
    /// The opening parenthesis placed around a node.
    Open,
    /// The closing parenthesis placed around a node.
    Close,
    /// The `=` of an equation.
    Equals,
    /// The minus sign of a negation.
    Sign,
}

impl Part {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Open => "open",
            Self::Close => "close",
            Self::Equals => "equals",
            Self::Sign => "sign",
        }
    }
}

/// The id of a layout node: the tree node it was produced from, plus which part of that node it
/// draws. Displays as `"<id>"` or `"<id>:<part>"`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct LayoutId {
    pub node: NodeId,
    pub part: Option<Part>,
}

impl LayoutId {
    pub fn node(node: NodeId) -> LayoutId {
        LayoutId { node, part: None }
    }

    pub fn part(node: NodeId, part: Part) -> LayoutId {
        LayoutId { node, part: Some(part) }
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.part {
            Some(part) => write!(f, "{}:{}", self.node, part.suffix()),
            None => write!(f, "{}", self.node),
        }
    }
}

/// What a layout node draws.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Payload {
    /// A run of text. `baseline` is the distance from the top of the box to the font baseline.
    Text { text: String, font_size: Dimension, baseline: Dimension },

    /// A horizontal rule filling the box, such as a fraction bar.
    Bar,

    /// A parenthesis stretched to the height of the box.
    Parenthesis { open: bool, thickness: Dimension },

    /// A composite of the `len` layout nodes which immediately follow this one.
    Group { len: usize },
}

/// One positioned visual element.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LayoutNode {
    pub id: LayoutId,
    pub bounds: Rect,
    pub selectable: bool,

    /// Whether a selection halo around this node should be a circle rather than a rounded
    /// rectangle. Set for single atomic operands.
    pub circle: bool,

    pub payload: Payload,
}

impl LayoutNode {
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_group(&self) -> bool {
        matches!(self.payload, Payload::Group { .. })
    }
}

/// Tunable spacing used by the layout engine. Ratios are in thousandths of the font size.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct LayoutConfig {
    /// Horizontal gap between the children of an expression or product.
    pub gap: Dimension,

    /// Horizontal gap either side of an equation's `=`.
    pub equals_gap: Dimension,

    /// Extra width of a fraction bar beyond its widest part.
    pub bar_padding: Dimension,

    pub bar_thickness: Dimension,

    /// Vertical gap between a fraction bar and its numerator or denominator.
    pub bar_gap: Dimension,

    pub parenthesis_width: Dimension,

    /// How far parentheses extend above and below what they enclose.
    pub parenthesis_padding: Dimension,

    /// Padding around a selection halo, in pixels.
    pub halo_padding: Dimension,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            gap: 150,
            equals_gap: 300,
            bar_padding: 250,
            bar_thickness: 60,
            bar_gap: 100,
            parenthesis_width: 333,
            parenthesis_padding: 50,
            halo_padding: 8,
        }
    }
}

/// The configuration together with the font size, scaled to pixels once per layout.
#[derive(Clone, Copy, Debug)]
struct LayoutComputationProperties {
    font_size: Dimension,
    gap: Dimension,
    equals_gap: Dimension,
    bar_padding: Dimension,
    bar_thickness: Dimension,
    bar_gap: Dimension,
    parenthesis_width: Dimension,
    parenthesis_padding: Dimension,
}

impl LayoutComputationProperties {
    fn new(config: &LayoutConfig, font_size: Dimension) -> Self {
        Self {
            font_size,
            gap: scale(config.gap, font_size),
            equals_gap: scale(config.equals_gap, font_size),
            bar_padding: scale(config.bar_padding, font_size),
            bar_thickness: max(1, scale(config.bar_thickness, font_size)),
            bar_gap: scale(config.bar_gap, font_size),
            parenthesis_width: scale(config.parenthesis_width, font_size),
            parenthesis_padding: scale(config.parenthesis_padding, font_size),
        }
    }
}

pub enum MergeBaseline {
    SelfAsBaseline,
    OtherAsBaseline,
}

/// A laid-out fragment, with its nodes positioned relative to its own top-left corner.
#[derive(Debug, Clone)]
pub struct LayoutBlock {
    pub nodes: Vec<LayoutNode>,
    pub baseline: Dimension,
    pub area: Area,
}

impl LayoutBlock {
    fn empty() -> LayoutBlock {
        LayoutBlock { nodes: vec![], baseline: 0, area: Area::default() }
    }

    /// Creates a block with one node at the origin. The baseline is the centre of this node, so
    /// that text and fraction bars line up along the middle of the line.
    fn from_node(id: LayoutId, area: Area, payload: Payload) -> LayoutBlock {
        LayoutBlock {
            nodes: vec![LayoutNode {
                id,
                bounds: Rect::at(0, 0, area),
                selectable: true,
                circle: false,
                payload,
            }],
            baseline: area.height / 2,
            area,
        }
    }

    /// Creates a block holding a run of text.
    fn from_text(id: LayoutId, text: String, properties: LayoutComputationProperties) -> LayoutBlock {
        let metrics = get_metrics(&text, properties.font_size);
        LayoutBlock::from_node(
            id,
            Area::new(metrics.width, metrics.height),
            Payload::Text { text, font_size: properties.font_size, baseline: metrics.baseline },
        )
    }

    fn circled(mut self) -> LayoutBlock {
        for node in &mut self.nodes {
            node.circle = true;
        }
        self
    }

    fn offset(mut self, dx: Dimension, dy: Dimension) -> LayoutBlock {
        for node in &mut self.nodes {
            node.bounds = node.bounds.offset(dx, dy);
        }
        self.baseline += dy;
        self.area = Area::new(self.area.width + dx, self.area.height + dy);
        self
    }

    /// Merges the nodes of two blocks without moving either, keeping `self`'s nodes first.
    fn merge_in_place(mut self, other: LayoutBlock, baseline: MergeBaseline) -> LayoutBlock {
        self.baseline = match baseline {
            MergeBaseline::SelfAsBaseline => self.baseline,
            MergeBaseline::OtherAsBaseline => other.baseline,
        };
        self.area = Area::new(
            max(self.area.width, other.area.width),
            max(self.area.height, other.area.height),
        );
        self.nodes.extend(other.nodes);
        self
    }

    /// Merges two blocks, shifting whichever has the lesser baseline down so that the baselines
    /// match. Offsets can't go negative, so the other block is left where it is.
    fn merge_along_baseline(self, other: LayoutBlock) -> LayoutBlock {
        if self.baseline < other.baseline {
            let difference = other.baseline - self.baseline;
            self.offset(0, difference).merge_in_place(other, MergeBaseline::OtherAsBaseline)
        } else {
            let difference = self.baseline - other.baseline;
            self.merge_in_place(other.offset(0, difference), MergeBaseline::SelfAsBaseline)
        }
    }

    /// Assuming that two layout blocks start at the same point, returns this block moved
    /// directly to the right of another layout block, plus a gap.
    fn move_right_of_other(self, other: &LayoutBlock, gap: Dimension) -> LayoutBlock {
        self.offset(other.area.width + gap, 0)
    }

    /// Assuming that two layout blocks start at the same point, returns this block moved
    /// directly below another layout block, plus a gap.
    fn move_below_other(self, other: &LayoutBlock, gap: Dimension) -> LayoutBlock {
        self.offset(0, other.area.height + gap)
    }

    /// Places blocks one after the other horizontally, separated by `gap`.
    fn layout_horizontal(blocks: Vec<LayoutBlock>, gap: Dimension) -> LayoutBlock {
        let mut result = LayoutBlock::empty();

        for block in blocks {
            result = if result.nodes.is_empty() {
                block
            } else {
                let block = block.move_right_of_other(&result, gap);
                result.merge_along_baseline(block)
            };
        }

        result
    }

    /// Inserts a group node covering this whole block in front of its nodes.
    fn grouped(mut self, id: LayoutId) -> LayoutBlock {
        let group = LayoutNode {
            id,
            bounds: Rect::at(0, 0, self.area),
            selectable: true,
            circle: false,
            payload: Payload::Group { len: self.nodes.len() },
        };
        self.nodes.insert(0, group);
        self
    }
}

fn layout_fraction(tree: &Tree, id: NodeId, numerator: NodeId, denominator: NodeId, properties: LayoutComputationProperties) -> LayoutBlock {
    let top = layout_node(tree, numerator, properties);
    let bottom = layout_node(tree, denominator, properties);

    // The fraction bar should be the widest of the two, plus some padding
    let bar_width = max(top.area.width, bottom.area.width) + properties.bar_padding;
    let bar = LayoutBlock::from_node(
        LayoutId::part(id, Part::Bar),
        Area::new(bar_width, properties.bar_thickness),
        Payload::Bar,
    ).move_below_other(&top, properties.bar_gap);

    let top_width = top.area.width;
    let bottom_width = bottom.area.width;
    let bottom = bottom
        .move_below_other(&bar, properties.bar_gap)
        .offset((bar_width - bottom_width) / 2, 0);
    let top = top.offset((bar_width - top_width) / 2, 0);

    top
        .merge_in_place(bar, MergeBaseline::OtherAsBaseline)
        .merge_in_place(bottom, MergeBaseline::SelfAsBaseline)
}

fn layout_parentheses(inner: LayoutBlock, id: NodeId, properties: LayoutComputationProperties) -> LayoutBlock {
    let height = inner.area.height + 2 * properties.parenthesis_padding;
    let thickness = max(1, properties.font_size / 20);
    let paren = |part, open| {
        let mut block = LayoutBlock::from_node(
            LayoutId::part(id, part),
            Area::new(properties.parenthesis_width, height),
            Payload::Parenthesis { open, thickness },
        );
        block.nodes[0].selectable = false;
        block.baseline = inner.baseline + properties.parenthesis_padding;
        block
    };
    let open = paren(Part::Open, true);
    let close = paren(Part::Close, false);

    LayoutBlock::layout_horizontal(vec![open, inner, close], 0)
}

/// Lays out a node and everything beneath it, including any parentheses the node needs in its
/// current position.
fn layout_node(tree: &Tree, id: NodeId, properties: LayoutComputationProperties) -> LayoutBlock {
    let kind = match tree.kind(id) {
        Some(kind) => kind,
        None => return LayoutBlock::empty(),
    };

    let block = match kind {
        NodeKind::Literal(number)
            => LayoutBlock::from_text(LayoutId::node(id), number.to_string(), properties).circled(),
        NodeKind::Identifier(name)
            => LayoutBlock::from_text(LayoutId::node(id), name.clone(), properties).circled(),
        NodeKind::Operator(op)
            => LayoutBlock::from_text(LayoutId::node(id), op.symbol().to_string(), properties),

        NodeKind::Expression(children) | NodeKind::Product(children) => {
            let blocks = children
                .iter()
                .map(|child| layout_node(tree, *child, properties))
                .collect::<Vec<_>>();
            LayoutBlock::layout_horizontal(blocks, properties.gap).grouped(LayoutId::node(id))
        }

        NodeKind::Fraction { numerator, denominator }
            => layout_fraction(tree, id, *numerator, *denominator, properties).grouped(LayoutId::node(id)),

        NodeKind::Negation(inner) => {
            let sign = LayoutBlock::from_text(LayoutId::part(id, Part::Sign), "-".into(), properties);
            let inner = layout_node(tree, *inner, properties);
            LayoutBlock::layout_horizontal(vec![sign, inner], 0).grouped(LayoutId::node(id))
        }

        NodeKind::Equation { left, right } => {
            let left = layout_node(tree, *left, properties);
            let equals = LayoutBlock::from_text(LayoutId::part(id, Part::Equals), "=".into(), properties);
            let right = layout_node(tree, *right, properties);
            LayoutBlock::layout_horizontal(vec![left, equals, right], properties.equals_gap)
                .grouped(LayoutId::node(id))
        }
    };

    trace!("laid out {} {} at {}x{}", kind.name(), id, block.area.width, block.area.height);

    if tree.needs_parentheses(id) {
        layout_parentheses(block, id, properties)
    } else {
        block
    }
}

/// A drawing surface which layouts are rendered onto. Coordinates are device pixels, matching the
/// bounds of the layout nodes.
pub trait Surface {
    /// Fills a run of text whose baseline starts at (x, y).
    fn fill_text(&mut self, text: &str, x: Dimension, y: Dimension, font_size: Dimension);

    /// Strokes a straight line.
    fn line(&mut self, from: (Dimension, Dimension), to: (Dimension, Dimension), thickness: Dimension);

    /// Strokes a quadratic curve from `from` to `to`, bending towards `control`.
    fn curve(&mut self, from: (Dimension, Dimension), control: (Dimension, Dimension), to: (Dimension, Dimension), thickness: Dimension);

    fn fill_round_rect(&mut self, rect: Rect, radius: Dimension);

    fn fill_circle(&mut self, centre: (Dimension, Dimension), radius: Dimension);
}

/// A fully positioned layout of a tree.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FlatLayout {
    pub(crate) nodes: Vec<LayoutNode>,
    pub(crate) halo_padding: Dimension,
}

impl FlatLayout {
    pub(crate) fn from_nodes(nodes: Vec<LayoutNode>, halo_padding: Dimension) -> FlatLayout {
        FlatLayout { nodes, halo_padding }
    }

    /// Every layout node, in paint order. Groups come before the nodes they contain.
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the layout node with a particular id.
    pub fn get(&self, id: LayoutId) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The nodes which make up the group at `index`, or an empty slice if it is not a group.
    pub fn group_contents(&self, index: usize) -> &[LayoutNode] {
        match self.nodes.get(index).map(|n| &n.payload) {
            Some(Payload::Group { len }) => &self.nodes[index + 1..index + 1 + len],
            _ => &[],
        }
    }

    /// The bounds enclosing the whole layout.
    pub fn bounds(&self) -> Rect {
        crate::hit_test::union_bounds(self.nodes.iter()).unwrap_or_default()
    }

    /// Draws every visible node onto a surface.
    pub fn render(&self, surface: &mut impl Surface) {
        for node in &self.nodes {
            let b = node.bounds;
            match &node.payload {
                Payload::Text { text, font_size, baseline } =>
                    surface.fill_text(text, b.left, b.top + baseline, *font_size),

                Payload::Bar => {
                    let y = (b.top + b.bottom) / 2;
                    surface.line((b.left, y), (b.right, y), b.height());
                }

                Payload::Parenthesis { open, thickness } => {
                    let (x, control_x) = if *open {
                        (b.right - thickness, b.left)
                    } else {
                        (b.left + thickness, b.right)
                    };
                    let (_, mid) = b.centre();
                    surface.curve((x, b.top), (control_x, mid), (x, b.bottom), *thickness);
                }

                Payload::Group { .. } => (),
            }
        }
    }

    /// Draws a selection halo behind a region: a circle for single atomic operands, otherwise a
    /// rounded rectangle.
    pub fn render_selection(&self, surface: &mut impl Surface, bounds: Rect, circle: bool) {
        let padding = self.halo_padding;
        if circle {
            surface.fill_circle(bounds.centre(), bounds.width() / 2 + padding);
        } else {
            surface.fill_round_rect(bounds.pad(padding), padding);
        }
    }
}

/// Lays out a tree with the default [LayoutConfig], centred in a viewport.
pub fn create_flat_layout(tree: &Tree, font_size: Dimension, viewport_width: Dimension, viewport_height: Dimension) -> FlatLayout {
    create_flat_layout_with(tree, font_size, viewport_width, viewport_height, &LayoutConfig::default())
}

/// Lays out a tree, centred in a viewport.
pub fn create_flat_layout_with(tree: &Tree, font_size: Dimension, viewport_width: Dimension, viewport_height: Dimension, config: &LayoutConfig) -> FlatLayout {
    let properties = LayoutComputationProperties::new(config, font_size);
    let block = layout_node(tree, tree.root(), properties);

    // Resolve every node against the root's position in the viewport
    let left = (viewport_width - block.area.width) / 2;
    let top = (viewport_height - block.area.height) / 2;
    let block = block.offset(left, top);

    FlatLayout::from_nodes(block.nodes, config.halo_padding)
}
