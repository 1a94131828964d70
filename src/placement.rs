//! Placement policies decide where new items go, how items are searched for, and how nodes are
//! spliced out. A [`Tree`][crate::Tree] picks exactly one policy through its type parameter when
//! it is constructed; everything else about the tree (copying, dropping, traversals, sizes) is
//! shared.
//!
//! - [`Ordered`] turns the tree into a Binary Search Tree. Items are placed by comparison and
//!   removal preserves the ordering.
//! - [`Structural`] ignores ordering entirely. New items go wherever keeps the tree short and
//!   removal pulls values up from below until a leaf can be dropped.

use std::cmp::Ordering;
use std::mem;

use crate::error::{Result, TreeError};
use crate::node::{Link, Node};

mod private {
    pub trait Sealed {}

    impl Sealed for super::Ordered {}
    impl Sealed for super::Structural {}
}

/// The operations that differ between tree flavors. This trait is sealed; use [`Ordered`] or
/// [`Structural`].
pub trait Placement<T>: private::Sealed {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Hangs a new leaf holding `item` somewhere below `root`.
    fn place(root: &mut Link<T>, item: T);

    /// Finds a stored item equal to `target`.
    fn find<'a>(root: &'a Link<T>, target: &T) -> Option<&'a T>;

    /// Removes one stored item equal to `target` and returns it.
    fn remove(root: &mut Link<T>, target: &T) -> Option<T>;

    /// Replaces the item at the root, creating the root if there isn't one.
    fn set_root(root: &mut Link<T>, item: T) -> Result<()>;
}

/// Binary Search Tree placement: smaller items to the left, everything else to the right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordered;

/// Order-agnostic placement that keeps the tree short by always growing its shorter side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structural;

/// Which child to step into when walking down from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<T> Placement<T> for Ordered
where
    T: Ord,
{
    const NAME: &'static str = "ordered";

    /// Items comparing equal to a stored item go to its right, so duplicates are kept.
    fn place(root: &mut Link<T>, item: T) {
        let mut link = root;
        while let Some(node) = link {
            link = match item.cmp(&node.item) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::boxed(item));
    }

    fn find<'a>(root: &'a Link<T>, target: &T) -> Option<&'a T> {
        let mut link = root;
        while let Some(node) = link {
            link = match target.cmp(&node.item) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.item),
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// Classic BST deletion of the first match on the search path.
    ///
    /// 1. A leaf is simply detached.
    /// 2. A node with one child is replaced by that child.
    /// 3. A node with two children takes the item of its in-order successor (the leftmost node
    ///    of its right subtree) and the successor, which has no left child, is spliced out.
    fn remove(root: &mut Link<T>, target: &T) -> Option<T> {
        let link = search_link_mut(root, target);
        let mut node = link.take()?;

        match (node.left.take(), node.right.take()) {
            (None, None) => Some(node.item),
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                Some(node.item)
            }
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let successor = remove_leftmost(&mut right)?;
                let removed = mem::replace(&mut node.item, successor);
                node.left = Some(left);
                node.right = right;
                *link = Some(node);
                Some(removed)
            }
        }
    }

    fn set_root(_root: &mut Link<T>, _item: T) -> Result<()> {
        Err(TreeError::PreconditionViolated(
            "cannot change the root of an ordered tree directly; use add and remove".to_string(),
        ))
    }
}

impl<T> Placement<T> for Structural
where
    T: PartialEq,
{
    const NAME: &'static str = "structural";

    /// Walks towards the shorter subtree (the left one on ties) and attaches a leaf at the first
    /// empty link.
    fn place(root: &mut Link<T>, item: T) {
        let mut link = root;
        while let Some(node) = link {
            link = if height(&node.left) > height(&node.right) {
                &mut node.right
            } else {
                &mut node.left
            };
        }
        *link = Some(Node::boxed(item));
    }

    fn find<'a>(root: &'a Link<T>, target: &T) -> Option<&'a T> {
        let mut stack: Vec<&Node<T>> = root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.item == *target {
                return Some(&node.item);
            }
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        None
    }

    /// Finds the first match in preorder and then moves values up: the node swaps items with its
    /// left child (or its right child when there is no left one) and the walk continues in that
    /// child. Once the unwanted item has sunk into a leaf, the leaf is dropped.
    fn remove(root: &mut Link<T>, target: &T) -> Option<T> {
        let path = preorder_path(root, target)?;
        let mut link = follow_mut(root, &path);

        while link.as_deref().map_or(false, |node| !node.is_leaf()) {
            if let Some(node) = link {
                let Node { item, left, right } = &mut **node;
                let child = if left.is_some() { left } else { right };
                if let Some(child_node) = child.as_mut() {
                    mem::swap(item, &mut child_node.item);
                }
                link = child;
            }
        }

        link.take().map(|leaf| leaf.item)
    }

    fn set_root(root: &mut Link<T>, item: T) -> Result<()> {
        match root {
            Some(node) => node.item = item,
            None => *root = Some(Node::boxed(item)),
        }
        Ok(())
    }
}

/// Height of the subtree under `link`: 0 for an empty link, 1 for a leaf.
///
/// Walks the whole subtree with an explicit stack so degenerate chains can't exhaust the call
/// stack.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    let mut tallest = 0;
    let mut stack: Vec<(&Node<T>, usize)> = link.as_deref().map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        tallest = tallest.max(depth);
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }
    tallest
}

/// Returns the link holding the first node on `target`'s search path that compares equal to it,
/// or the empty link where `target` would be inserted.
fn search_link_mut<'a, T>(mut link: &'a mut Link<T>, target: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    while let Some(ordering) = link.as_deref().map(|node| target.cmp(&node.item)) {
        if ordering == Ordering::Equal {
            break;
        }
        if let Some(node) = link {
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }
    link
}

/// Splices out the leftmost node below `link` and returns its item. The leftmost node has no left
/// child so its right subtree takes its place.
fn remove_leftmost<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_deref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    let mut leftmost = link.take()?;
    *link = leftmost.right.take();
    Some(leftmost.item)
}

/// The sequence of turns from `root` to the first node, in preorder, holding an item equal to
/// `target`. An empty path means the root itself.
fn preorder_path<T>(root: &Link<T>, target: &T) -> Option<Vec<Side>>
where
    T: PartialEq,
{
    let mut path = Vec::new();
    // Each entry is a node, its depth and the turn taken from its parent to reach it.
    let mut stack: Vec<(&Node<T>, usize, Option<Side>)> =
        root.as_deref().map(|n| (n, 0, None)).into_iter().collect();

    while let Some((node, depth, side)) = stack.pop() {
        path.truncate(depth.saturating_sub(1));
        path.extend(side);
        if node.item == *target {
            return Some(path);
        }
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1, Some(Side::Right))));
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1, Some(Side::Left))));
    }
    None
}

fn follow_mut<'a, T>(mut link: &'a mut Link<T>, path: &[Side]) -> &'a mut Link<T> {
    for side in path {
        if let Some(node) = link {
            link = match side {
                Side::Left => &mut node.left,
                Side::Right => &mut node.right,
            };
        }
    }
    link
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build<P: Placement<i32>>(items: &[i32]) -> Link<i32> {
        let mut root = None;
        for item in items {
            P::place(&mut root, *item);
        }
        root
    }

    fn preorder(link: &Link<i32>) -> Vec<i32> {
        let mut items = Vec::new();
        let mut stack: Vec<&Node<i32>> = link.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            items.push(node.item);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        items
    }

    #[test]
    fn test_height() {
        assert_eq!(height::<i32>(&None), 0);
        assert_eq!(height(&build::<Ordered>(&[1])), 1);
        assert_eq!(height(&build::<Ordered>(&[2, 1, 3])), 2);
        assert_eq!(height(&build::<Ordered>(&[1, 2, 3, 4])), 4);
    }

    #[test]
    fn test_ordered_place_equal_goes_right() {
        let root = build::<Ordered>(&[2, 2, 1]);
        let root_node = root.as_deref().expect("root was placed");

        assert_eq!(root_node.left.as_ref().map(|n| n.item), Some(1));
        assert_eq!(root_node.right.as_ref().map(|n| n.item), Some(2));
    }

    #[test]
    fn test_ordered_remove_leaf() {
        let mut root = build::<Ordered>(&[2, 1, 3]);
        assert_eq!(Ordered::remove(&mut root, &3), Some(3));
        assert_eq!(preorder(&root), vec![2, 1]);
    }

    #[test]
    fn test_ordered_remove_one_child() {
        let mut root = build::<Ordered>(&[2, 1, 4, 3]);
        assert_eq!(Ordered::remove(&mut root, &4), Some(4));
        assert_eq!(preorder(&root), vec![2, 1, 3]);
    }

    #[test]
    fn test_ordered_remove_two_children_uses_successor() {
        let mut root = build::<Ordered>(&[4, 2, 8, 6, 9, 7]);
        assert_eq!(Ordered::remove(&mut root, &4), Some(4));
        // 6 is the leftmost node of 8's subtree; its right child 7 moves up.
        assert_eq!(preorder(&root), vec![6, 2, 8, 7, 9]);
    }

    #[test]
    fn test_ordered_remove_missing() {
        let mut root = build::<Ordered>(&[2, 1, 3]);
        assert_eq!(Ordered::remove(&mut root, &5), None);
        assert_eq!(preorder(&root), vec![2, 1, 3]);

        let mut empty: Link<i32> = None;
        assert_eq!(Ordered::remove(&mut empty, &5), None);
    }

    #[test]
    fn test_ordered_find() {
        let root = build::<Ordered>(&[5, 3, 8, 1, 4]);
        assert_eq!(Ordered::find(&root, &4), Some(&4));
        assert_eq!(Ordered::find(&root, &7), None);
    }

    #[test]
    fn test_ordered_set_root_is_rejected() {
        let mut root = build::<Ordered>(&[5]);
        assert!(matches!(
            Ordered::set_root(&mut root, 3),
            Err(TreeError::PreconditionViolated(_))
        ));
        assert_eq!(preorder(&root), vec![5]);
    }

    #[test]
    fn test_structural_place_fills_shorter_side() {
        let root = build::<Structural>(&[1, 2, 3, 4, 5]);
        assert_eq!(preorder(&root), vec![1, 2, 4, 3, 5]);
        assert_eq!(height(&root), 3);
    }

    #[test]
    fn test_structural_find_ignores_order() {
        let root = build::<Structural>(&[10, 3, 7, 1]);
        assert_eq!(Structural::find(&root, &7), Some(&7));
        assert_eq!(Structural::find(&root, &1), Some(&1));
        assert_eq!(Structural::find(&root, &2), None);
    }

    #[test]
    fn test_structural_remove_moves_values_up() {
        let mut root = build::<Structural>(&[1, 2, 3, 4, 5]);
        assert_eq!(Structural::remove(&mut root, &1), Some(1));
        assert_eq!(preorder(&root), vec![2, 4, 3, 5]);
    }

    #[test]
    fn test_structural_remove_right_only_child() {
        let mut root = Some(Box::new(Node::with_children(
            1,
            None,
            Some(Node::boxed(2)),
        )));
        assert_eq!(Structural::remove(&mut root, &1), Some(1));
        assert_eq!(preorder(&root), vec![2]);
    }

    #[test]
    fn test_structural_remove_deep_match() {
        let mut root = build::<Structural>(&[1, 2, 3, 4, 5]);
        assert_eq!(Structural::remove(&mut root, &5), Some(5));
        assert_eq!(preorder(&root), vec![1, 2, 4, 3]);
        assert_eq!(Structural::remove(&mut root, &5), None);
    }

    #[test]
    fn test_structural_set_root() {
        let mut root: Link<i32> = None;
        assert!(Structural::set_root(&mut root, 3).is_ok());
        assert_eq!(preorder(&root), vec![3]);

        Structural::place(&mut root, 4);
        assert!(Structural::set_root(&mut root, 9).is_ok());
        assert_eq!(preorder(&root), vec![9, 4]);
    }

    #[test]
    fn test_preorder_path() {
        let root = build::<Structural>(&[1, 2, 3, 4, 5]);
        assert_eq!(preorder_path(&root, &1), Some(vec![]));
        assert_eq!(preorder_path(&root, &4), Some(vec![Side::Left, Side::Left]));
        assert_eq!(preorder_path(&root, &5), Some(vec![Side::Right, Side::Left]));
        assert_eq!(preorder_path(&root, &6), None);
    }
}
