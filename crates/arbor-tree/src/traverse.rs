//! Stack-based traversals.

use arbor_core::NodeId;

use crate::node::Node;
use crate::tree::Tree;

/// Pre-order walk over a [`Tree`], yielding ids.
///
/// Children are pushed in reverse so the smallest id is visited first.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        let stack = if tree.is_empty() {
            Vec::new()
        } else {
            vec![(tree.root(), 0)]
        };
        Self { tree, stack }
    }

    /// Yield `(id, depth)` pairs instead of bare ids.
    pub fn with_depth(self) -> WithDepth<'a> {
        WithDepth(self)
    }

    fn advance(&mut self) -> Option<(NodeId, usize)> {
        let (id, depth) = self.stack.pop()?;
        self.stack.extend(
            self.tree
                .children(id)
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((id, depth))
    }
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.advance().map(|(id, _)| id)
    }
}

/// Pre-order walk that also reports each node's depth (root = 0).
#[derive(Debug, Clone)]
pub struct WithDepth<'a>(PreOrder<'a>);

impl Iterator for WithDepth<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<(NodeId, usize)> {
        self.0.advance()
    }
}

/// Pre-order walk over an owned [`Node`] subtree.
#[derive(Debug, Clone)]
pub struct NodePreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> NodePreOrder<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for NodePreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
