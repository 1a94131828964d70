//! The building block of every tree in this crate.

/// An owning link to a child subtree. `None` marks the empty spot below a leaf.
pub type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one item and exclusively owns its (optional) left and right children. There
/// are no parent pointers, so a node graph is always a proper tree and dropping a link drops the
/// whole subtree beneath it.
///
/// Nodes are only created and reshaped by [`Tree`][crate::Tree]; outside the crate they are
/// opaque.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Deep copies the subtree under `link`, so the copy shares no storage with the source.
///
/// Nodes are copied root first off an explicit stack: each popped source node gets its copy
/// written into the destination link, and its children are queued against the copy's empty
/// child links.
pub(crate) fn copy_link<T>(link: &Link<T>) -> Link<T>
where
    T: Clone,
{
    let mut copy = None;
    let mut stack: Vec<(&Node<T>, &mut Link<T>)> =
        link.as_deref().map(|n| (n, &mut copy)).into_iter().collect();

    while let Some((source, target)) = stack.pop() {
        let node = target.insert(Node::boxed(source.item.clone()));
        let Node { left, right, .. } = &mut **node;
        stack.extend(source.left.as_deref().map(|n| (n, left)));
        stack.extend(source.right.as_deref().map(|n| (n, right)));
    }
    copy
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `item`.
    pub(crate) fn new(item: T) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }

    /// Construct a new leaf `Node` on the heap, ready to be hung on a [`Link`].
    pub(crate) fn boxed(item: T) -> Box<Self> {
        Box::new(Self::new(item))
    }

    /// Construct a `Node` with the given children.
    pub(crate) fn with_children(item: T, left: Link<T>, right: Link<T>) -> Self {
        Self { item, left, right }
    }

    /// Whether this node has no children.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
