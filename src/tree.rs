//! An arena backed BST. Every node lives in one `Vec` owned by the [`Tree`] and nodes point at
//! their parent and children with [`NodeId`] handles rather than references, so the parent link
//! never owns anything and dropping the tree never recurses.
//!
//! # Examples
//!
//! ```
//! use arena_bst::Tree;
//!
//! let mut tree = Tree::from_slice(&[5, 3, 8]);
//! assert_eq!(tree.to_string(), "(3) <- 5 -> (8)");
//!
//! // Equal values are routed to the right.
//! let five = tree.insert(5);
//! assert!(tree.get(five).unwrap().is_left_child());
//! assert_eq!(tree.to_string(), "(3) <- 5 -> ((5) <- 8)");
//!
//! assert_eq!(tree.count(), 4);
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::EmptySequenceError;
use crate::node_ref::NodeRef;
use crate::traversal::{InOrder, PostOrder, PreOrder};
use crate::util::Side;

/// The most nodes [`Tree::try_from_iter`] reserves up front from an iterator's size hint.
const MAX_PREALLOCATED: usize = 1 << 16;

/// A stable handle on a node of a [`Tree`]. Handles are only meaningful for the tree that
/// produced them. Comparing two handles compares node identity, not stored values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root is always the first node pushed into the arena.
    const ROOT: Self = NodeId(0);

    /// The position of this node in its tree's arena, which is also the order it was inserted in.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// An unbalanced Binary Search Tree whose nodes know their parent.
///
/// A `Tree` is never empty: it is created with a root value and nodes are only ever added.
/// Values less than a node go to its left, values greater than *or equal to* it go to its right.
/// There is no rebalancing, so the shape depends entirely on insertion order.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Tree<T> {
    /// Creates a single node tree holding `value`.
    pub fn new(value: T) -> Self {
        Self::with_capacity(value, 1)
    }

    /// Creates a single node tree holding `value` with room for `capacity` nodes before the
    /// arena reallocates.
    pub fn with_capacity(value: T, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new(value, None));
        Self { nodes }
    }

    /// Builds a tree from `values`. The first value becomes the root and the rest are inserted
    /// in order, so different orderings of the same values give differently shaped trees.
    ///
    /// ## Panics
    ///
    /// When `values` is empty. Use [`Tree::try_from_slice`] to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let bushy = Tree::from_slice(&[5, 3, 8, 1, 4]);
    /// let chain = Tree::from_slice(&[1, 3, 4, 5, 8]);
    ///
    /// assert_eq!(bushy.root().height(), 2);
    /// assert_eq!(chain.root().height(), 4);
    /// ```
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Ord + Clone,
    {
        Self::try_from_slice(values).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Like [`Tree::from_slice`] but returns an error instead of panicking on empty input.
    pub fn try_from_slice(values: &[T]) -> Result<Self, EmptySequenceError>
    where
        T: Ord + Clone,
    {
        Self::try_from_iter(values.iter().cloned())
    }

    /// Builds a tree from the values of an iterator, rooted at the first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::{EmptySequenceError, Tree};
    ///
    /// let tree = Tree::try_from_iter(vec![2, 1, 3]).unwrap();
    /// assert!(tree.root().has_both_children());
    ///
    /// assert_eq!(Tree::<i32>::try_from_iter(None).unwrap_err(), EmptySequenceError);
    /// ```
    pub fn try_from_iter<I>(values: I) -> Result<Self, EmptySequenceError>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values = values.into_iter();
        let first = values.next().ok_or(EmptySequenceError)?;
        // The lower bound is only a hint, so clamp it instead of trusting it.
        let hint = values.size_hint().0.min(MAX_PREALLOCATED);
        let mut tree = Self::with_capacity(first, hint.saturating_add(1));
        tree.extend(values);

        debug!("built a tree of {} nodes from a sequence", tree.size());
        Ok(tree)
    }

    /// Inserts `value` below the root. See [`Tree::insert_at`].
    pub fn insert(&mut self, value: T) -> NodeId
    where
        T: Ord,
    {
        self.insert_at(NodeId::ROOT, value)
    }

    /// Inserts `value` into the subtree rooted at `at` and returns the handle of the new node.
    ///
    /// Starting from `at`, smaller values descend left and everything else descends right until
    /// an empty child slot is found. The ordering invariant is only guaranteed relative to that
    /// subtree: inserting below a non-root node can place a value that its ancestors would have
    /// routed elsewhere.
    ///
    /// ## Panics
    ///
    /// When `at` is out of range for this tree. A handle taken from another tree is not detected
    /// if its index happens to be in range: the value is then inserted below whichever node of
    /// this tree has that index. Use [`Tree::get`] to check a handle first.
    pub fn insert_at(&mut self, at: NodeId, value: T) -> NodeId
    where
        T: Ord,
    {
        let mut current = at;
        let (parent, side) = loop {
            let node = &self.nodes[current.0];
            let side = Side::of(&value, &node.value);
            match node.child(side) {
                Some(child) => current = child,
                None => break (current, side),
            }
        };

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value, Some(parent)));
        *self.nodes[parent.0].child_mut(side) = Some(id);
        trace!("attached node {} as the {:?} child of node {}", id.0, side, parent.0);

        if cfg!(debug_assertions) {
            assert_eq!(self.nodes[id.0].parent, Some(parent));
            assert_eq!(self.nodes[parent.0].child(side), Some(id));
            assert!(self.nodes[id.0].left.is_none() && self.nodes[id.0].right.is_none());
        }
        id
    }

    /// A view of the root node.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// The handle of the root node.
    pub fn root_id(&self) -> NodeId {
        NodeId::ROOT
    }

    /// A view of the node with the given handle, or `None` if this tree has no such node.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        if id.0 < self.nodes.len() {
            Some(NodeRef::new(self, id))
        } else {
            None
        }
    }

    /// The number of nodes in the arena. Unlike [`Tree::count`] this does not walk the tree.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Counts the nodes reachable from the root by walking the whole tree.
    pub fn count(&self) -> usize {
        self.root().count()
    }

    /// Finds the first node holding `value` on the path from the root. See [`NodeRef::find`].
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        self.root().find(value)
    }

    /// Visits every node in sorted order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        self.root().in_order()
    }

    /// Visits every node before its children, left subtree first.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        self.root().pre_order()
    }

    /// Visits every node after its children, left subtree first.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        self.root().post_order()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T> TryFrom<Vec<T>> for Tree<T>
where
    T: Ord,
{
    type Error = EmptySequenceError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_iter(values)
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}
