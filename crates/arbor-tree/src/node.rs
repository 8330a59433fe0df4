//! Owned, nested view of a built tree.

use std::fmt;

use arbor_core::NodeId;

use crate::traverse::NodePreOrder;

/// A tree vertex that owns its children outright.
///
/// Children are ordered by ascending id. Equality and drop walk the subtree
/// with an explicit stack, so arbitrarily deep chains are safe. `Debug` shows
/// one level only.
pub struct Node {
    id: NodeId,
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn leaf(id: NodeId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_children(id: NodeId, children: Vec<Node>) -> Self {
        Self { id, children }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Take ownership of the children, leaving this node a leaf.
    pub fn into_children(mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Number of nodes in this subtree, this node included.
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    /// Subtree nodes in pre-order, this node first.
    pub fn pre_order(&self) -> NodePreOrder<'_> {
        NodePreOrder::new(self)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<NodeId> = self.children.iter().map(|c| c.id).collect();
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("children", &children)
            .finish()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.id != b.id || a.children.len() != b.children.len() {
                return false;
            }
            pending.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
