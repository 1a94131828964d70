//! A mutable binary tree container, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an item and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    item less than its own item.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    item not less than its own item.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for items in the tree takes `O(height)` (where `height` is the number
//! of `Node`s on the longest path from the root `Node` to a leaf `Node`). The trees
//! here don't balance themselves: adding items in ascending order builds a chain
//! of height `N`. [`SearchTree::rebuild_balanced`] reshapes a tree to height
//! `ceil(lg(N + 1))` without changing its contents.
//!
//! ## Placement
//!
//! Every tree in this crate is a [`Tree`]. Its second type parameter is a
//! [`Placement`] policy which decides where [`Tree::add`] puts new items and how
//! [`Tree::remove`] finds and splices out old ones:
//!
//! - [`SearchTree`] (`Tree<T, Ordered>`) is a Binary Search Tree.
//! - [`BinaryTree`] (`Tree<T, Structural>`) ignores ordering and grows whichever
//!   side of the tree is shorter.
//!
//! ```
//! use ordered_tree::{BinaryTree, SearchTree};
//!
//! let search: SearchTree<_> = vec![3, 1, 2].into_iter().collect();
//! let plain: BinaryTree<_> = vec![3, 1, 2].into_iter().collect();
//!
//! assert_eq!(search.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(plain.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod person;
pub mod placement;
pub mod tree;

pub use error::{Result, TreeError};
pub use placement::{Ordered, Placement, Structural};
pub use tree::{BinaryTree, SearchTree, Tree};
