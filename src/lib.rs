//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes
//! know their parent, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a value and may have
//! a left and a right child `Node`. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    strictly less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than *or equal to* its own value. Duplicates always go right.
//! 3. If a `Node` is a child of another `Node`, its parent link points back
//!    at that `Node`. Exactly one `Node`, the root, has no parent.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Nothing here rebalances, so inserting sorted values builds a chain whose
//! height is the number of values minus one. Nothing is ever deleted either.
//!
//! ## Ownership
//!
//! Parent links are the classic problem for BSTs in Rust: a child can't own
//! its parent and a reference to it would alias the parent's own `&mut`.
//! Here every node lives in an arena owned by the [`Tree`] and links are
//! [`NodeId`] handles, so a parent link is just an index. Queries go through
//! [`NodeRef`], a borrowed view of a single node, and all walks use explicit
//! stacks so deep trees can't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use arena_bst::Tree;
//!
//! let tree = Tree::from_slice(&[5, 3, 8, 1, 4]);
//! let root = tree.root();
//!
//! assert!(root.is_root());
//! assert_eq!(root.count(), 5);
//! assert_eq!(tree.to_string(), "((1) <- 3 -> (4)) <- 5 -> (8)");
//!
//! let four = tree.find(&4).unwrap();
//! assert!(four.is_leaf());
//! assert!(four.is_right_child());
//! assert_eq!(four.parent().map(|n| *n.value()), Some(3));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node_ref;
pub mod traversal;
mod tree;
mod util;

#[cfg(test)]
mod test;

pub use error::EmptySequenceError;
pub use node_ref::NodeRef;
pub use tree::{NodeId, Tree};
