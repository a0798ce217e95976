use crate::node::{NodeId, NodeKind, Tree};

impl Tree {
    /// Compares the subtree at `id` with the subtree at `other_id` of another tree, ignoring ids.
    pub fn structurally_equal(&self, id: NodeId, other: &Tree, other_id: NodeId) -> bool {
        let (kind, other_kind) = match (self.kind(id), other.kind(other_id)) {
            (Some(k), Some(o)) => (k, o),
            _ => return false,
        };

        let same_leaf = match (kind, other_kind) {
            (NodeKind::Literal(a), NodeKind::Literal(b)) => a == b,
            (NodeKind::Identifier(a), NodeKind::Identifier(b)) => a == b,
            (NodeKind::Operator(a), NodeKind::Operator(b)) => a == b,
            (a, b) => a.name() == b.name(),
        };
        if !same_leaf {
            return false;
        }

        let children = kind.children();
        let other_children = other_kind.children();
        children.len() == other_children.len()
            && children
                .iter()
                .zip(other_children.iter())
                .all(|(a, b)| self.structurally_equal(*a, other, *b))
    }

    /// Compares two whole trees, ignoring ids.
    pub fn same_shape(&self, other: &Tree) -> bool {
        self.structurally_equal(self.root(), other, other.root())
    }
}
