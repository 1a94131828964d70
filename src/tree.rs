//! A mutable binary tree whose placement strategy is fixed by a type parameter.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::SearchTree;
//!
//! let mut tree = SearchTree::new();
//! for x in [1, 8, 3, 4, 5, 6, 7, 9, 2] {
//!     tree.add(x);
//! }
//!
//! let mut sorted = Vec::new();
//! tree.inorder_traverse(|x| sorted.push(*x));
//! assert_eq!(sorted, (1..=9).collect::<Vec<_>>());
//!
//! // Removing returns whether anything was removed.
//! assert!(tree.remove(&4));
//! assert!(!tree.remove(&4));
//! assert!(!tree.contains(&4));
//!
//! // An ascending insert order builds a tall tree. Rebuilding fixes that.
//! assert_eq!(tree.height(), 6);
//! tree.rebuild_balanced();
//! assert_eq!(tree.height(), 4);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::node::{copy_link, Link, Node};
use crate::placement::{self, Ordered, Placement, Structural};

/// A Binary Search Tree. Smaller items live to the left of larger ones so lookups, insertions and
/// removals take `O(height)`.
pub type SearchTree<T> = Tree<T, Ordered>;

/// A binary tree that ignores item order and places new items so the tree stays short.
pub type BinaryTree<T> = Tree<T, Structural>;

/// A binary tree owning all of its nodes. `P` is the [`Placement`] policy deciding where items go
/// on [`add`][Tree::add] and how [`remove`][Tree::remove] and [`contains`][Tree::contains] search.
///
/// Copying a `Tree` (with [`Clone`]) copies every node; two trees never share storage.
pub struct Tree<T, P = Ordered> {
    root: Link<T>,
    placement: PhantomData<P>,
}

impl<T, P> Default for Tree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Drop for Tree<T, P> {
    fn drop(&mut self) {
        drop_nodes(self.root.take());
    }
}

impl<T, P> Clone for Tree<T, P>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: copy_link(&self.root),
            placement: PhantomData,
        }
    }

    /// Releases the current nodes before copying `source`'s.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = copy_link(&source.root);
    }
}

impl<T, P> fmt::Debug for Tree<T, P>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P> Tree<T, P> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            placement: PhantomData,
        }
    }

    /// Generate a `Tree` holding a single item.
    pub fn with_root(item: T) -> Self {
        Self {
            root: Some(Node::boxed(item)),
            placement: PhantomData,
        }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root a height of 1.
    ///
    /// This is computed by visiting every node, so it takes `O(n)`.
    pub fn height(&self) -> usize {
        placement::height(&self.root)
    }

    /// The number of items stored in the tree. This is computed by visiting every node, so it
    /// takes `O(n)`.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.preorder_traverse(|_| count += 1);
        count
    }

    /// The item stored at the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::PreconditionViolated`] if the tree is empty.
    pub fn root_data(&self) -> Result<&T> {
        self.root.as_ref().map(|root| &root.item).ok_or_else(|| {
            TreeError::PreconditionViolated("cannot read the root of an empty tree".to_string())
        })
    }

    /// Drops every node, leaving an empty tree.
    pub fn clear(&mut self) {
        debug!("clearing tree");
        drop_nodes(self.root.take());
    }

    /// Visits every item root first, then the left subtree, then the right subtree.
    pub fn preorder_traverse(&self, visit: impl FnMut(&T)) {
        walk(&self.root, Order::Pre, visit);
    }

    /// Visits every item left subtree first, then the root, then the right subtree. For a
    /// [`SearchTree`] this visits items in ascending order.
    pub fn inorder_traverse(&self, visit: impl FnMut(&T)) {
        walk(&self.root, Order::In, visit);
    }

    /// Visits every item left subtree first, then the right subtree, then the root.
    pub fn postorder_traverse(&self, visit: impl FnMut(&T)) {
        walk(&self.root, Order::Post, visit);
    }

    /// An iterator over the items in inorder.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<T, P> Tree<T, P>
where
    P: Placement<T>,
{
    /// Adds `item` to the tree where the placement policy puts it. This never rejects an item
    /// (a [`SearchTree`] keeps duplicates to the right of their equals) so it always returns
    /// `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// assert!(tree.add(3));
    /// assert!(tree.add(3));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, item: T) -> bool {
        trace!(placement = P::NAME, "adding item");
        P::place(&mut self.root, item);
        true
    }

    /// Removes one item equal to `target`. Returns `false`, leaving the tree untouched, if there
    /// is no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::SearchTree;
    ///
    /// let mut tree: SearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&42));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, target: &T) -> bool {
        let removed = P::remove(&mut self.root, target).is_some();
        trace!(placement = P::NAME, removed, "removing item");
        removed
    }

    /// Whether some stored item is equal to `target`.
    pub fn contains(&self, target: &T) -> bool {
        P::find(&self.root, target).is_some()
    }

    /// The stored item equal to `target`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no stored item is equal to `target`.
    pub fn get_entry(&self, target: &T) -> Result<&T> {
        P::find(&self.root, target)
            .ok_or_else(|| TreeError::NotFound("item is not in the tree".to_string()))
    }

    /// Replaces the item at the root, or creates the root of an empty tree.
    ///
    /// # Errors
    ///
    /// A [`SearchTree`] always fails with [`TreeError::PreconditionViolated`] since overwriting
    /// its root could break the ordering. Use [`add`][Tree::add] and [`remove`][Tree::remove]
    /// instead.
    pub fn set_root_data(&mut self, item: T) -> Result<()> {
        P::set_root(&mut self.root, item)
    }
}

impl<T> Tree<T, Ordered> {
    /// Builds a tree of minimal height from items already sorted in ascending order. The middle
    /// item (the lower one for an even count) becomes the root and each half is built the same
    /// way.
    ///
    /// If `items` isn't sorted the result isn't a valid [`SearchTree`].
    pub fn from_sorted(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            root: build_balanced(&mut items.into_iter(), len),
            placement: PhantomData,
        }
    }

    /// Copies the items into a vector in ascending order. The vector's capacity is exactly the
    /// number of items.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(self.len());
        self.inorder_traverse(|item| items.push(item.clone()));
        items
    }

    /// Moves the items into a vector in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        drain_inorder(self.root.take(), &mut items);
        items
    }

    /// Reshapes the tree to have minimal height without changing its inorder sequence. The tree
    /// is exported in order and rebuilt as in [`from_sorted`][Tree::from_sorted].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::SearchTree;
    ///
    /// let mut tree: SearchTree<_> = (0..15).collect();
    /// assert_eq!(tree.height(), 15);
    ///
    /// tree.rebuild_balanced();
    /// assert_eq!(tree.height(), 4);
    /// assert_eq!(tree.root_data(), Ok(&7));
    /// ```
    pub fn rebuild_balanced(&mut self) {
        let mut items = Vec::with_capacity(self.len());
        drain_inorder(self.root.take(), &mut items);
        let len = items.len();
        self.root = build_balanced(&mut items.into_iter(), len);
        debug!(nodes = len, height = self.height(), "rebuilt balanced tree");
    }
}

impl<T> Tree<T, Structural> {
    /// Generate a `BinaryTree` with `item` at the root and the nodes of `left` and `right` as its
    /// subtrees. Both trees are consumed.
    ///
    /// ```
    /// use ordered_tree::BinaryTree;
    ///
    /// let tree = BinaryTree::with_children(2, BinaryTree::with_root(1), BinaryTree::new());
    /// let mut items = Vec::new();
    /// tree.preorder_traverse(|x| items.push(*x));
    ///
    /// assert_eq!(items, vec![2, 1]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn with_children(item: T, mut left: Self, mut right: Self) -> Self {
        Self {
            root: Some(Box::new(Node::with_children(
                item,
                left.root.take(),
                right.root.take(),
            ))),
            placement: PhantomData,
        }
    }

    /// Like [`preorder_traverse`][Tree::preorder_traverse] but the visitor may modify items.
    /// Only a [`BinaryTree`] offers this since it has no ordering to break.
    pub fn preorder_traverse_mut(&mut self, visit: impl FnMut(&mut T)) {
        walk_mut(&mut self.root, Order::Pre, visit);
    }

    /// Like [`inorder_traverse`][Tree::inorder_traverse] but the visitor may modify items.
    pub fn inorder_traverse_mut(&mut self, visit: impl FnMut(&mut T)) {
        walk_mut(&mut self.root, Order::In, visit);
    }

    /// Like [`postorder_traverse`][Tree::postorder_traverse] but the visitor may modify items.
    pub fn postorder_traverse_mut(&mut self, visit: impl FnMut(&mut T)) {
        walk_mut(&mut self.root, Order::Post, visit);
    }
}

impl<T, P> FromIterator<T> for Tree<T, P>
where
    P: Placement<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, P> Extend<T> for Tree<T, P>
where
    P: Placement<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T, P> IntoIterator for &'a Tree<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inorder iterator returned by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.item)
    }
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

/// A pending step of a depth-first walk: either a subtree still to be opened up or an item ready
/// to be visited.
enum Frame<N, I> {
    Expand(N),
    Visit(I),
}

/// Depth-first walk with an explicit stack. Frames are pushed in the reverse of the order they
/// should be handled in.
fn walk<'a, T>(root: &'a Link<T>, order: Order, mut visit: impl FnMut(&'a T)) {
    let mut stack: Vec<Frame<&'a Node<T>, &'a T>> =
        root.as_deref().map(Frame::Expand).into_iter().collect();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Visit(item) => visit(item),
            Frame::Expand(node) => {
                let left = node.left.as_deref().map(Frame::Expand);
                let right = node.right.as_deref().map(Frame::Expand);
                let item = Frame::Visit(&node.item);
                match order {
                    Order::Pre => {
                        stack.extend(right);
                        stack.extend(left);
                        stack.push(item);
                    }
                    Order::In => {
                        stack.extend(right);
                        stack.push(item);
                        stack.extend(left);
                    }
                    Order::Post => {
                        stack.push(item);
                        stack.extend(right);
                        stack.extend(left);
                    }
                }
            }
        }
    }
}

/// [`walk`] handing out mutable items.
fn walk_mut<T>(root: &mut Link<T>, order: Order, mut visit: impl FnMut(&mut T)) {
    let mut stack: Vec<Frame<&mut Node<T>, &mut T>> =
        root.as_deref_mut().map(Frame::Expand).into_iter().collect();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Visit(item) => visit(item),
            Frame::Expand(node) => {
                let Node { item, left, right } = node;
                let left = left.as_deref_mut().map(Frame::Expand);
                let right = right.as_deref_mut().map(Frame::Expand);
                let item = Frame::Visit(item);
                match order {
                    Order::Pre => {
                        stack.extend(right);
                        stack.extend(left);
                        stack.push(item);
                    }
                    Order::In => {
                        stack.extend(right);
                        stack.push(item);
                        stack.extend(left);
                    }
                    Order::Post => {
                        stack.push(item);
                        stack.extend(right);
                        stack.extend(left);
                    }
                }
            }
        }
    }
}

/// Drops a subtree one node at a time. Letting `Box` drop a subtree recurses once per level,
/// which overflows the stack on long chains.
fn drop_nodes<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Moves every item of a subtree, in inorder, onto the end of `items`, freeing nodes as it goes.
fn drain_inorder<T>(root: Link<T>, items: &mut Vec<T>) {
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        match stack.pop() {
            Some(node) => {
                let Node { item, right, .. } = *node;
                items.push(item);
                current = right;
            }
            None => break,
        }
    }
}

/// Builds a minimal-height subtree from the next `len` items of `items`, which must be sorted.
/// The root is item `len / 2` of the run: everything before it forms the left subtree and
/// everything after the right one.
fn build_balanced<T>(items: &mut impl Iterator<Item = T>, len: usize) -> Link<T> {
    if len == 0 {
        return None;
    }
    let left_len = len / 2;
    let left = build_balanced(items, left_len);
    let item = items.next()?;
    let right = build_balanced(items, len - left_len - 1);
    Some(Box::new(Node::with_children(item, left, right)))
}
