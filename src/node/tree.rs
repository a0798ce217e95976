//! The arena which owns every node of an equation tree, and the structural primitives which all
//! rewrites are built from.

use core::{fmt, sync::atomic::{AtomicU64, Ordering}};

use alloc::{collections::{BTreeMap, BTreeSet}, format, string::String, vec, vec::Vec};
use log::{debug, trace};

use crate::{Number, error::{MathsError, StructureError}};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one node. Ids handed out by [NodeId::fresh] are unique across every tree in the
/// process, so nodes from different trees can be merged without colliding.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocates an id which has never been returned before.
    pub fn fresh() -> NodeId {
        NodeId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The symbol held by an [Operator](NodeKind::Operator) node.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl Operator {
    /// The text printed for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equals => "=",
        }
    }

    /// True for the operators which may appear in an [Expression](NodeKind::Expression).
    pub fn is_additive(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    /// True for the operators which may appear in a [Product](NodeKind::Product).
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Applies this operator to two numbers.
    pub fn apply(&self, left: Number, right: Number) -> Result<Number, MathsError> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Subtract => left.checked_sub(right),
            Self::Multiply => left.checked_mul(right),
            Self::Divide => left.checked_div(right),
            Self::Equals => Err(MathsError::NotAnExpression),
        }
    }
}

/// The variant of a node, along with the ids of its children.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum NodeKind {
    /// A number.
    Literal(Number),

    /// A named symbol, such as `x`.
    Identifier(String),

    /// An operator between two operands of an `Expression` or `Product`.
    Operator(Operator),

    /// A chain of additions and subtractions, alternating operand, operator, operand...
    Expression(Vec<NodeId>),

    /// A chain of multiplications and divisions, with the same shape as `Expression`.
    Product(Vec<NodeId>),

    Fraction { numerator: NodeId, denominator: NodeId },

    Negation(NodeId),

    /// Two sides which are equal. Only ever the root of a tree.
    Equation { left: NodeId, right: NodeId },
}

impl NodeKind {
    /// A short name for this variant, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Literal(_) => "Literal",
            Self::Identifier(_) => "Identifier",
            Self::Operator(_) => "Operator",
            Self::Expression(_) => "Expression",
            Self::Product(_) => "Product",
            Self::Fraction { .. } => "Fraction",
            Self::Negation(_) => "Negation",
            Self::Equation { .. } => "Equation",
        }
    }

    /// Returns true if this node may appear as an operand: anywhere except an operator position
    /// or the root of the tree.
    pub fn is_operand(&self) -> bool {
        !matches!(self, Self::Operator(_) | Self::Equation { .. })
    }

    /// Returns true if this is an `Expression` or `Product`.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Expression(_) | Self::Product(_))
    }

    /// The ids of this node's children, in order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Self::Literal(_) | Self::Identifier(_) | Self::Operator(_) => vec![],
            Self::Expression(c) | Self::Product(c) => c.clone(),
            Self::Fraction { numerator, denominator } => vec![*numerator, *denominator],
            Self::Negation(inner) => vec![*inner],
            Self::Equation { left, right } => vec![*left, *right],
        }
    }

    fn map_ids(&self, f: &dyn Fn(NodeId) -> NodeId) -> NodeKind {
        match self {
            Self::Literal(_) | Self::Identifier(_) | Self::Operator(_) => self.clone(),
            Self::Expression(c) => Self::Expression(c.iter().map(|id| f(*id)).collect()),
            Self::Product(c) => Self::Product(c.iter().map(|id| f(*id)).collect()),
            Self::Fraction { numerator, denominator } => Self::Fraction {
                numerator: f(*numerator),
                denominator: f(*denominator),
            },
            Self::Negation(inner) => Self::Negation(f(*inner)),
            Self::Equation { left, right } => Self::Equation { left: f(*left), right: f(*right) },
        }
    }

    fn replace_child(&mut self, old: NodeId, new: NodeId) {
        let mapped = self.map_ids(&|id| if id == old { new } else { id });
        *self = mapped;
    }
}

/// One node of a [Tree]. Links to other nodes are ids, looked up through the tree.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    parent: Option<NodeId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl Node {
    fn detached(id: NodeId, kind: NodeKind) -> Node {
        Node { id, kind, parent: None, prev: None, next: None }
    }

    pub fn id(&self) -> NodeId { self.id }
    pub fn kind(&self) -> &NodeKind { &self.kind }
    pub fn parent(&self) -> Option<NodeId> { self.parent }

    /// The previous sibling, if this node is inside an `Expression` or `Product`.
    pub fn prev(&self) -> Option<NodeId> { self.prev }

    /// The next sibling, if this node is inside an `Expression` or `Product`.
    pub fn next(&self) -> Option<NodeId> { self.next }
}

/// A tree of nodes, stored as an arena keyed by [NodeId].
///
/// A `Tree` is used both for the equation being edited and for standalone fragments: built
/// pieces, clones, and auxiliary expressions supplied by the user. Fragments are consumed when
/// they are installed into another tree, and their nodes keep their ids.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Tree {
    nodes: BTreeMap<NodeId, Node>,
    root: NodeId,
}

impl Tree {
    fn leaf(kind: NodeKind) -> Tree {
        let id = NodeId::fresh();
        let mut nodes = BTreeMap::new();
        nodes.insert(id, Node::detached(id, kind));
        Tree { nodes, root: id }
    }

    /// Creates a tree holding a single `Literal`.
    pub fn literal(value: impl Into<Number>) -> Tree {
        Self::leaf(NodeKind::Literal(value.into()))
    }

    /// Creates a tree holding a single `Identifier`.
    pub fn identifier(name: impl Into<String>) -> Tree {
        Self::leaf(NodeKind::Identifier(name.into()))
    }

    /// Creates a tree holding a single `Operator`. This is only useful as the replacement for
    /// another operator.
    pub fn operator(op: Operator) -> Tree {
        Self::leaf(NodeKind::Operator(op))
    }

    /// Creates an `Expression` from a first operand and a sequence of (operator, operand) pairs.
    /// The operators must be `+` or `-`.
    pub fn expression(first: Tree, rest: Vec<(Operator, Tree)>) -> Result<Tree, StructureError> {
        Self::chain(true, first, rest)
    }

    /// Creates a `Product` from a first operand and a sequence of (operator, operand) pairs.
    /// The operators must be `*` or `/`.
    pub fn product(first: Tree, rest: Vec<(Operator, Tree)>) -> Result<Tree, StructureError> {
        Self::chain(false, first, rest)
    }

    fn chain(additive: bool, first: Tree, rest: Vec<(Operator, Tree)>) -> Result<Tree, StructureError> {
        let mut tree = Tree { nodes: BTreeMap::new(), root: NodeId::fresh() };
        let mut children = vec![tree.adopt_operand(first)?];

        for (op, operand) in rest {
            if (additive && !op.is_additive()) || (!additive && !op.is_multiplicative()) {
                return Err(StructureError::InvalidSlot(format!(
                    "{} cannot join an {}", op.symbol(), if additive { "Expression" } else { "Product" }
                )));
            }
            children.push(tree.adopt(Tree::operator(op))?);
            children.push(tree.adopt_operand(operand)?);
        }

        let kind = if additive { NodeKind::Expression(children) } else { NodeKind::Product(children) };
        Ok(tree.finish(kind))
    }

    /// Creates a `Fraction`.
    pub fn fraction(numerator: Tree, denominator: Tree) -> Result<Tree, StructureError> {
        let mut tree = Tree { nodes: BTreeMap::new(), root: NodeId::fresh() };
        let numerator = tree.adopt_operand(numerator)?;
        let denominator = tree.adopt_operand(denominator)?;
        Ok(tree.finish(NodeKind::Fraction { numerator, denominator }))
    }

    /// Creates a `Negation`.
    pub fn negation(operand: Tree) -> Result<Tree, StructureError> {
        let mut tree = Tree { nodes: BTreeMap::new(), root: NodeId::fresh() };
        let inner = tree.adopt_operand(operand)?;
        Ok(tree.finish(NodeKind::Negation(inner)))
    }

    /// Creates an `Equation`, which is the root of an editing session.
    pub fn equation(left: Tree, right: Tree) -> Result<Tree, StructureError> {
        let mut tree = Tree { nodes: BTreeMap::new(), root: NodeId::fresh() };
        let left = tree.adopt_operand(left)?;
        let right = tree.adopt_operand(right)?;
        Ok(tree.finish(NodeKind::Equation { left, right }))
    }

    /// Installs the root node of a tree under construction, and links its children to it.
    fn finish(mut self, kind: NodeKind) -> Tree {
        let root = self.root;
        self.nodes.insert(root, Node::detached(root, kind));
        self.link_children(root);
        self
    }

    /// Moves every node of `other` into this arena, returning the id of its root. Fails without
    /// moving anything if an id is already present.
    fn adopt(&mut self, other: Tree) -> Result<NodeId, StructureError> {
        self.check_ids(&other, &BTreeSet::new())?;
        let root = other.root;
        self.nodes.extend(other.nodes);
        Ok(root)
    }

    fn adopt_operand(&mut self, other: Tree) -> Result<NodeId, StructureError> {
        if !other.root_kind().is_operand() {
            return Err(StructureError::InvalidSlot(format!(
                "{} cannot be an operand", other.root_kind().name()
            )));
        }
        self.adopt(other)
    }

    /// Checks that none of the nodes in `incoming` would collide with a node which stays in this
    /// tree. Nodes in `leaving` are about to be removed, so may be reused.
    fn check_ids(&self, incoming: &Tree, leaving: &BTreeSet<NodeId>) -> Result<(), StructureError> {
        for id in incoming.nodes.keys() {
            if self.nodes.contains_key(id) && !leaving.contains(id) {
                return Err(StructureError::IdCollision(*id));
            }
        }
        Ok(())
    }

    /// Rewrites the parent and sibling links of the children of `id`.
    fn link_children(&mut self, id: NodeId) {
        let (children, ordered) = match self.nodes.get(&id) {
            Some(node) => (node.kind.children(), node.kind.is_container()),
            None => return,
        };

        for (i, child) in children.iter().enumerate() {
            let prev = if ordered && i > 0 { Some(children[i - 1]) } else { None };
            let next = if ordered { children.get(i + 1).copied() } else { None };
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = Some(id);
                node.prev = prev;
                node.next = next;
            }
        }
    }

    /// The id of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The kind of the root node.
    pub fn root_kind(&self) -> &NodeKind {
        &self.nodes[&self.root].kind
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(&id).map(|n| &n.kind)
    }

    /// Every id in the tree, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id)?.parent
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id)?.prev
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id)?.next
    }

    /// The children of a node, in order. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.kind(id).map(|k| k.children()).unwrap_or_default()
    }

    /// The first child of an `Expression` or `Product`.
    pub fn first(&self, id: NodeId) -> Option<NodeId> {
        match self.kind(id)? {
            NodeKind::Expression(c) | NodeKind::Product(c) => c.first().copied(),
            _ => None,
        }
    }

    /// The last child of an `Expression` or `Product`.
    pub fn last(&self, id: NodeId) -> Option<NodeId> {
        match self.kind(id)? {
            NodeKind::Expression(c) | NodeKind::Product(c) => c.last().copied(),
            _ => None,
        }
    }

    /// The children of a node which are not operators.
    pub fn operands(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .into_iter()
            .filter(|c| !matches!(self.kind(*c), Some(NodeKind::Operator(_))))
            .collect()
    }

    /// The position of a node among its parent's children.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|c| *c == id)
    }

    /// The value of a `Literal` node.
    pub fn literal_value(&self, id: NodeId) -> Option<Number> {
        match self.kind(id)? {
            NodeKind::Literal(n) => Some(*n),
            _ => None,
        }
    }

    /// The symbol of an `Operator` node.
    pub fn operator_symbol(&self, id: NodeId) -> Option<Operator> {
        match self.kind(id)? {
            NodeKind::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// The ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = vec![];
        let mut current = self.parent(id);
        while let Some(p) = current {
            result.push(p);
            current = self.parent(p);
        }
        result
    }

    /// A node and all of its descendants, in pre-order. Empty if the node is unknown.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = vec![];
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                result.push(current);
                stack.extend(node.kind.children().into_iter().rev());
            }
        }
        result
    }

    /// Deep-copies the subtree rooted at `id` into a new, independent tree.
    ///
    /// If `regenerate_ids` is false, every copied node keeps its id, so the copy is "the same"
    /// object as far as layout correlation is concerned. If it is true, every copied node gets a
    /// fresh id, so the copy can live alongside the original.
    pub fn clone_subtree(&self, id: NodeId, regenerate_ids: bool) -> Result<Tree, StructureError> {
        let ids = self.descendants(id);
        if ids.is_empty() {
            return Err(StructureError::UnknownNode(id));
        }

        let mapping: BTreeMap<NodeId, NodeId> = ids
            .iter()
            .map(|old| (*old, if regenerate_ids { NodeId::fresh() } else { *old }))
            .collect();
        let map = |old: NodeId| mapping.get(&old).copied().unwrap_or(old);

        let mut nodes = BTreeMap::new();
        for old in &ids {
            let node = &self.nodes[old];
            let new_id = map(*old);
            let (parent, prev, next) = if *old == id {
                (None, None, None)
            } else {
                (node.parent.map(map), node.prev.map(map), node.next.map(map))
            };
            nodes.insert(new_id, Node { id: new_id, kind: node.kind.map_ids(&map), parent, prev, next });
        }

        Ok(Tree { nodes, root: map(id) })
    }

    /// Replaces the child `old` of `parent` with the tree `new`, returning the detached subtree
    /// which used to be at `old`. The detached subtree's root has no parent or siblings.
    ///
    /// Nothing is modified if this returns an error.
    pub fn replace(&mut self, parent: NodeId, old: NodeId, new: Tree) -> Result<Tree, StructureError> {
        let parent_kind = self.kind(parent).ok_or(StructureError::UnknownNode(parent))?;
        if !parent_kind.children().contains(&old) {
            return Err(StructureError::NotAChild { parent, child: old });
        }
        self.check_slot(parent, old, new.root_kind())?;

        let leaving: BTreeSet<NodeId> = self.descendants(old).into_iter().collect();
        self.check_ids(&new, &leaving)?;

        let detached = self.detach(old, &leaving);
        let new_root = new.root;
        self.nodes.extend(new.nodes);
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.kind.replace_child(old, new_root);
        }
        self.link_children(parent);

        debug!("replaced {} with {} under {}", old, new_root, parent);
        Ok(detached)
    }

    /// Checks that a node of kind `new` could take the place of `old`, a child of `parent`.
    fn check_slot(&self, parent: NodeId, old: NodeId, new: &NodeKind) -> Result<(), StructureError> {
        let old_is_operator = matches!(self.kind(old), Some(NodeKind::Operator(_)));

        match new {
            NodeKind::Operator(op) => {
                if !old_is_operator {
                    return Err(StructureError::InvalidSlot("an operator can only replace an operator".into()));
                }
                let fits = match self.kind(parent) {
                    Some(NodeKind::Expression(_)) => op.is_additive(),
                    Some(NodeKind::Product(_)) => op.is_multiplicative(),
                    _ => false,
                };
                if fits {
                    Ok(())
                } else {
                    Err(StructureError::InvalidSlot(format!("{} does not belong here", op.symbol())))
                }
            }
            _ if old_is_operator
                => Err(StructureError::InvalidSlot("only an operator can replace an operator".into())),
            NodeKind::Equation { .. }
                => Err(StructureError::InvalidSlot("an equation can only be the root".into())),
            _ => Ok(()),
        }
    }

    /// Removes the nodes in `leaving` from this arena, returning them as a tree rooted at `root`.
    fn detach(&mut self, root: NodeId, leaving: &BTreeSet<NodeId>) -> Tree {
        let mut nodes = BTreeMap::new();
        for id in leaving {
            if let Some(node) = self.nodes.remove(id) {
                nodes.insert(*id, node);
            }
        }
        if let Some(node) = nodes.get_mut(&root) {
            node.parent = None;
            node.prev = None;
            node.next = None;
        }
        Tree { nodes, root }
    }

    /// Replaces a run of `len` children of an `Expression` or `Product`, starting at `start`, with
    /// a single operand. The run must begin and end on an operand, so the container keeps
    /// alternating. If the run covers the whole container, the container itself is replaced.
    ///
    /// Nothing is modified if this returns an error.
    pub fn splice_run(&mut self, container: NodeId, start: usize, len: usize, replacement: Tree) -> Result<(), StructureError> {
        let children = match self.kind(container) {
            Some(NodeKind::Expression(c)) | Some(NodeKind::Product(c)) => c.clone(),
            Some(other) => return Err(StructureError::InvalidSlot(format!("{} has no runs", other.name()))),
            None => return Err(StructureError::UnknownNode(container)),
        };
        if len % 2 == 0 || start % 2 == 1 || start + len > children.len() {
            return Err(StructureError::InvalidSlot("a run must start and end on an operand".into()));
        }
        if !replacement.root_kind().is_operand() {
            return Err(StructureError::InvalidSlot(format!(
                "{} cannot be an operand", replacement.root_kind().name()
            )));
        }

        if len == children.len() {
            let parent = self.parent(container)
                .ok_or_else(|| StructureError::InvalidSlot("cannot replace the root".into()))?;
            return self.replace(parent, container, replacement).map(|_| ());
        }

        let leaving: BTreeSet<NodeId> = children[start..start + len]
            .iter()
            .flat_map(|c| self.descendants(*c))
            .collect();
        self.check_ids(&replacement, &leaving)?;

        for id in &leaving {
            self.nodes.remove(id);
        }
        let new_root = replacement.root;
        self.nodes.extend(replacement.nodes);
        if let Some(node) = self.nodes.get_mut(&container) {
            if let NodeKind::Expression(c) | NodeKind::Product(c) = &mut node.kind {
                c.drain(start..start + len);
                c.insert(start, new_root);
            }
        }
        self.link_children(container);

        debug!("spliced {} children of {} into {}", len, container, new_root);
        Ok(())
    }

    /// Appends an operator and an operand to the end of an `Expression` or `Product`.
    pub fn push_term(&mut self, container: NodeId, op: Operator, operand: Tree) -> Result<(), StructureError> {
        let fits = match self.kind(container) {
            Some(NodeKind::Expression(_)) => op.is_additive(),
            Some(NodeKind::Product(_)) => op.is_multiplicative(),
            Some(other) => return Err(StructureError::InvalidSlot(format!("cannot push onto {}", other.name()))),
            None => return Err(StructureError::UnknownNode(container)),
        };
        if !fits {
            return Err(StructureError::InvalidSlot(format!("{} does not belong here", op.symbol())));
        }
        if !operand.root_kind().is_operand() {
            return Err(StructureError::InvalidSlot(format!(
                "{} cannot be an operand", operand.root_kind().name()
            )));
        }
        self.check_ids(&operand, &BTreeSet::new())?;

        let op_id = self.adopt(Tree::operator(op))?;
        let operand_id = self.adopt(operand)?;
        if let Some(node) = self.nodes.get_mut(&container) {
            if let NodeKind::Expression(c) | NodeKind::Product(c) = &mut node.kind {
                c.push(op_id);
                c.push(operand_id);
            }
        }
        self.link_children(container);

        trace!("pushed {} {} onto {}", op.symbol(), operand_id, container);
        Ok(())
    }

    /// Walks the whole tree checking that every structural invariant holds: parent and sibling
    /// links agree with the children lists, containers alternate operand and operator, and only
    /// the root may be an equation.
    pub fn check_invariants(&self) -> Result<(), StructureError> {
        for (id, node) in &self.nodes {
            let children = node.kind.children();

            if let NodeKind::Expression(c) | NodeKind::Product(c) = &node.kind {
                let additive = matches!(node.kind, NodeKind::Expression(_));
                if c.len() % 2 == 0 {
                    return Err(StructureError::InvalidSlot(format!("{} has an even length", id)));
                }
                for (i, child) in c.iter().enumerate() {
                    let kind = self.kind(*child).ok_or(StructureError::UnknownNode(*child))?;
                    match (i % 2 == 1, kind) {
                        (true, NodeKind::Operator(op)) => {
                            if op.is_additive() != additive {
                                return Err(StructureError::InvalidSlot(format!("{} is misplaced", child)));
                            }
                        }
                        (false, k) if k.is_operand() => (),
                        _ => return Err(StructureError::InvalidSlot(format!("{} breaks alternation", child))),
                    }
                }
            } else {
                for child in &children {
                    let kind = self.kind(*child).ok_or(StructureError::UnknownNode(*child))?;
                    if !kind.is_operand() {
                        return Err(StructureError::InvalidSlot(format!("{} cannot be an operand", child)));
                    }
                }
            }

            for (i, child) in children.iter().enumerate() {
                let child_node = self.get(*child).ok_or(StructureError::UnknownNode(*child))?;
                let ordered = node.kind.is_container();
                let expected_prev = if ordered && i > 0 { Some(children[i - 1]) } else { None };
                let expected_next = if ordered { children.get(i + 1).copied() } else { None };
                if child_node.parent != Some(*id) || child_node.prev != expected_prev || child_node.next != expected_next {
                    return Err(StructureError::NotAChild { parent: *id, child: *child });
                }
            }

            if *id == self.root {
                if node.parent.is_some() {
                    return Err(StructureError::InvalidSlot("the root has a parent".into()));
                }
            } else if node.parent.is_none() {
                return Err(StructureError::InvalidSlot(format!("{} is unreachable", id)));
            } else if matches!(node.kind, NodeKind::Equation { .. }) {
                return Err(StructureError::InvalidSlot("an equation can only be the root".into()));
            }
        }

        Ok(())
    }
}
