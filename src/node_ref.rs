use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use crate::traversal::{InOrder, PostOrder, PreOrder};
use crate::tree::{Node, NodeId, Tree};
use crate::util::Side;

/// A read-only view of one node of a [`Tree`].
///
/// Any node can be queried, not only the root, and every query is about the subtree rooted at
/// the viewed node. Two `NodeRef`s are equal when they view the *same node* of the same tree;
/// nodes holding equal values are still distinct.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

/// Manual implementations of `Clone` and `Copy` so that they don't require `T: Clone`.
impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            id: self.id,
        }
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}
impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node<T> {
        self.tree.node(self.id)
    }

    fn view(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.tree, id))
    }

    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// The parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.view(self.node().parent)
    }

    /// The left child, holding a value smaller than this node's.
    pub fn left(&self) -> Option<Self> {
        self.view(self.node().left)
    }

    /// The right child, holding a value at least as large as this node's.
    pub fn right(&self) -> Option<Self> {
        self.view(self.node().right)
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.has_any_child()
    }

    /// Whether this node is its parent's left child. This checks identity: a right child
    /// holding the same value as its left sibling is still not a left child.
    pub fn is_left_child(&self) -> bool {
        self.is_child_on(Side::Left)
    }

    /// Whether this node is its parent's right child. See [`NodeRef::is_left_child`].
    pub fn is_right_child(&self) -> bool {
        self.is_child_on(Side::Right)
    }

    fn is_child_on(&self, side: Side) -> bool {
        self.parent()
            .map_or(false, |parent| parent.node().child(side) == Some(self.id))
    }

    /// Whether this node has a left child.
    pub fn has_left_child(&self) -> bool {
        self.node().left.is_some()
    }

    /// Whether this node has a right child.
    pub fn has_right_child(&self) -> bool {
        self.node().right.is_some()
    }

    /// Whether this node has at least one child.
    pub fn has_any_child(&self) -> bool {
        self.has_left_child() || self.has_right_child()
    }

    /// Whether this node has two children.
    pub fn has_both_children(&self) -> bool {
        self.has_left_child() && self.has_right_child()
    }

    /// Counts the nodes of the subtree rooted here, this node included. Nothing is cached so
    /// this walks the whole subtree on every call.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            let node = self.tree.node(id);
            count += 1;
            stack.extend(node.left);
            stack.extend(node.right);
        }

        count
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.id, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.tree.node(id);
            height = height.max(depth);
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }

        height
    }

    /// The number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = *self;
        while let Some(parent) = node.parent() {
            depth += 1;
            node = parent;
        }

        depth
    }

    /// Searches this subtree for `value`, descending the same way an insert would. Since equal
    /// values are stored to the right, the node returned is the closest one to this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree = Tree::from_slice(&[5, 3, 8, 3]);
    /// let three = tree.find(&3).unwrap();
    ///
    /// assert!(three.is_left_child());
    /// assert_eq!(three.right().map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<Self>
    where
        T: Ord,
    {
        let mut current = Some(*self);
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// The leftmost node of this subtree.
    pub fn min(&self) -> Self {
        let mut node = *self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The rightmost node of this subtree. With repeated values this is the last one inserted.
    pub fn max(&self) -> Self {
        let mut node = *self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Visits the subtree rooted here in sorted order.
    pub fn in_order(&self) -> InOrder<'a, T> {
        InOrder::new(self.tree, self.id)
    }

    /// Visits the subtree rooted here, each node before its children.
    pub fn pre_order(&self) -> PreOrder<'a, T> {
        PreOrder::new(self.tree, self.id)
    }

    /// Visits the subtree rooted here, each node after its children.
    pub fn post_order(&self) -> PostOrder<'a, T> {
        PostOrder::new(self.tree, self.id)
    }

    /// Renders this subtree for debugging. Same as `to_string`.
    pub fn description(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

/// A pending chunk of output while rendering a subtree.
enum Piece {
    Subtree(NodeId),
    Value(NodeId),
    Text(&'static str),
}

impl<'a, T> NodeRef<'a, T>
where
    T: fmt::Display,
{
    fn write_description<W: fmt::Write>(&self, f: &mut W) -> fmt::Result {
        // Pieces are pushed in reverse so they pop off in print order.
        let mut stack = vec![Piece::Subtree(self.id)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Subtree(id) => {
                    let node = self.tree.node(id);
                    if let Some(right) = node.right {
                        stack.push(Piece::Text(")"));
                        stack.push(Piece::Subtree(right));
                        stack.push(Piece::Text(" -> ("));
                    }
                    stack.push(Piece::Value(id));
                    if let Some(left) = node.left {
                        stack.push(Piece::Text(") <- "));
                        stack.push(Piece::Subtree(left));
                        stack.push(Piece::Text("("));
                    }
                }
                Piece::Value(id) => write!(f, "{}", self.tree.node(id).value)?,
                Piece::Text(text) => f.write_str(text)?,
            }
        }

        Ok(())
    }
}

/// Renders the subtree as `(left) <- value -> (right)`, leaving out absent children. The output
/// mirrors the shape of the tree and is not meant to be parsed. Width, fill, alignment and
/// precision apply to the whole rendering.
impl<'a, T> fmt::Display for NodeRef<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            return self.write_description(f);
        }

        let mut rendered = String::new();
        self.write_description(&mut rendered)?;
        f.pad(&rendered)
    }
}
