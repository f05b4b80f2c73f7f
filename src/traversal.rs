//! Depth-first walks over a subtree. They keep their own stacks instead of recursing, so they
//! handle degenerate (chain shaped) trees of any height.

use std::iter::FusedIterator;

use crate::node_ref::NodeRef;
use crate::tree::{NodeId, Tree};

/// Yields the nodes of a subtree in sorted order: left subtree, node, right subtree.
/// Equal values come out in the order they were inserted.
pub struct InOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
    next: Option<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: NodeId) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            next: Some(start),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.next {
            self.stack.push(id);
            self.next = self.tree.node(id).left;
        }

        let id = self.stack.pop()?;
        self.next = self.tree.node(id).right;
        Some(NodeRef::new(self.tree, id))
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Yields each node of a subtree before its left and then right subtrees.
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: NodeId) -> Self {
        Self {
            tree,
            stack: vec![start],
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Right first so the left subtree pops first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(NodeRef::new(self.tree, id))
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

/// Yields each node of a subtree after its left and then right subtrees.
pub struct PostOrder<'a, T> {
    tree: &'a Tree<T>,
    /// Nodes paired with whether their children have already been pushed.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: NodeId) -> Self {
        Self {
            tree,
            stack: vec![(start, false)],
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            if expanded {
                return Some(NodeRef::new(self.tree, id));
            }

            let node = self.tree.node(id);
            self.stack.push((id, true));
            self.stack.extend(node.right.map(|r| (r, false)));
            self.stack.extend(node.left.map(|l| (l, false)));
        }
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}
