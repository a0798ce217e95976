use alloc::{string::String, fmt};

use crate::node::NodeId;

pub trait Error : alloc::fmt::Display + alloc::fmt::Debug {}

/// An attempted mutation would break the containment rules of a [Tree](crate::node::Tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The node does not exist in this tree.
    UnknownNode(NodeId),

    /// `child` is not currently a child of `parent`.
    NotAChild { parent: NodeId, child: NodeId },

    /// The replacement cannot occupy the slot it was given, for example an operand in an
    /// operator's position, or an equation nested below the root.
    InvalidSlot(String),

    /// A node being installed has the same id as a node which is still in the tree.
    IdCollision(NodeId),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "node {} is not in this tree", id),
            Self::NotAChild { parent, child } => write!(f, "node {} is not a child of {}", child, parent),
            Self::InvalidSlot(reason) => write!(f, "invalid slot: {}", reason),
            Self::IdCollision(id) => write!(f, "node {} is already in this tree", id),
        }
    }
}
impl Error for StructureError {}

/// A rule's effect was invoked while its predicate did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionError(pub &'static str);

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' cannot be applied here", self.0)
    }
}
impl Error for PreconditionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathsError {
    DivisionByZero,
    Overflow,
    UnboundIdentifier(String),
    NotAnExpression,
}

impl fmt::Display for MathsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "overflow"),
            Self::UnboundIdentifier(name) => write!(f, "{} has no value", name),
            Self::NotAnExpression => write!(f, "not an expression"),
        }
    }
}
impl Error for MathsError {}

/// Any failure from applying a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    Structure(StructureError),
    Precondition(PreconditionError),

    /// The auxiliary expression was rejected by the rule's input validation.
    InvalidInput(&'static str),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Structure(e) => write!(f, "{}", e),
            Self::Precondition(e) => write!(f, "{}", e),
            Self::InvalidInput(label) => write!(f, "input rejected by '{}'", label),
        }
    }
}
impl Error for TransformError {}

impl From<StructureError> for TransformError {
    fn from(e: StructureError) -> Self {
        Self::Structure(e)
    }
}

impl From<PreconditionError> for TransformError {
    fn from(e: PreconditionError) -> Self {
        Self::Precondition(e)
    }
}
