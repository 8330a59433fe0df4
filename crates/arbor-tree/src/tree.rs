//! The built tree, stored as an arena.

use arbor_core::{ArborError, ArborResult, NodeId, Record};

use crate::node::Node;
use crate::traverse::PreOrder;

/// One vertex of the arena.
///
/// A slot's position in the arena equals its id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Slot {
    pub id: NodeId,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    /// Child ids, strictly ascending.
    pub children: Vec<NodeId>,
}

/// A validated, immutable tree.
///
/// The tree stores every vertex in a vector indexed by id, with children held
/// as ids rather than references. Slot 0 is the root. A `Tree` is only ever
/// produced by the builder, so it always holds at least the root and every
/// non-root slot has a parent with a smaller id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tree {
    #[cfg_attr(feature = "serde", serde(rename = "nodes"))]
    pub(crate) slots: Vec<Slot>,
}

impl Tree {
    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: an empty record set never produces a `Tree`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The root id (always index 0).
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// All slots in id order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Get a slot by ID (returns None if ID out of bounds).
    pub fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.as_usize())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.as_usize() < self.slots.len()
    }

    /// Children of `id` in ascending order; empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id)?.parent
    }

    /// Number of edges between the root and `id`.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut current = self.slot(id)?;
        let mut depth = 0;
        while let Some(parent) = current.parent {
            current = self.slot(parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Map a raw record id onto the arena.
    pub fn lookup(&self, raw: i64) -> ArborResult<NodeId> {
        crate::validate::checked_id(raw, self.slots.len()).ok_or(ArborError::IndexOob {
            what: "node id",
            index: raw,
            len: self.slots.len(),
        })
    }

    /// Ids in pre-order: each node before its children, siblings ascending.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Flatten back into records, in pre-order. The root becomes `{0, 0}`.
    pub fn to_records(&self) -> Vec<Record> {
        self.pre_order()
            .map(|id| {
                let parent = self.parent(id).unwrap_or(NodeId::ROOT);
                Record::new(i64::from(id.index()), i64::from(parent.index()))
            })
            .collect()
    }

    /// Convert into the owned, nested form.
    ///
    /// Slots are assembled from the highest id down. Every child id is larger
    /// than its parent's, so each node's children are finished before the node
    /// itself is.
    pub fn into_node(self) -> Node {
        let mut finished: Vec<Option<Node>> = std::iter::repeat_with(|| None)
            .take(self.slots.len())
            .collect();
        let mut root = Node::leaf(NodeId::ROOT);

        for slot in self.slots.into_iter().rev() {
            let children = slot
                .children
                .iter()
                .filter_map(|child| finished[child.as_usize()].take())
                .collect();
            let node = Node::with_children(slot.id, children);
            if slot.id.is_root() {
                root = node;
            } else {
                finished[slot.id.as_usize()] = Some(node);
            }
        }

        root
    }
}
