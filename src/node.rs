//! A single cell of a [`PasswordStorage`](crate::PasswordStorage).
//!
//! A `Node` knows nothing about ordering. It holds one record and owns up to
//! two children; keeping the search-tree invariants is entirely the job of the
//! tree that owns it.

/// An owned child slot. `None` marks the empty pointer at the bottom of a
/// subtree.
pub type Link<R> = Option<Box<Node<R>>>;

/// A record plus ownership of its (at most two) children.
#[derive(Debug)]
pub struct Node<R> {
    record: R,
    left: Link<R>,
    right: Link<R>,
}

impl<R> Node<R> {
    /// Construct a childless `Node` holding `record`.
    pub fn new(record: R) -> Self {
        Self::with_children(record, None, None)
    }

    /// Construct a `Node` holding `record` that owns the given children.
    pub fn with_children(record: R, left: Link<R>, right: Link<R>) -> Self {
        Self {
            record,
            left,
            right,
        }
    }

    /// The stored record.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<R>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<R>> {
        self.right.as_deref()
    }

    /// Replaces the left child and hands the previous one back to the caller.
    pub fn set_left(&mut self, left: Link<R>) -> Link<R> {
        std::mem::replace(&mut self.left, left)
    }

    /// Replaces the right child and hands the previous one back to the caller.
    pub fn set_right(&mut self, right: Link<R>) -> Link<R> {
        std::mem::replace(&mut self.right, right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether this node has a left child.
    pub fn has_left_child(&self) -> bool {
        self.left.is_some()
    }

    /// Whether this node has a right child.
    pub fn has_right_child(&self) -> bool {
        self.right.is_some()
    }

    /// How many children this node has: 0, 1 or 2.
    pub fn number_of_children(&self) -> usize {
        usize::from(self.has_left_child()) + usize::from(self.has_right_child())
    }

    /// The in-order predecessor of this node's record within its own subtree:
    /// the rightmost record of the left subtree. `None` when there is no left
    /// child.
    pub fn find_predecessor(&self) -> Option<&R> {
        self.left().map(|left| left.rightmost().record())
    }

    /// The rightmost node of this subtree.
    pub(crate) fn rightmost(&self) -> &Node<R> {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// The leftmost node of this subtree.
    pub(crate) fn leftmost(&self) -> &Node<R> {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    pub(crate) fn take_left(&mut self) -> Link<R> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Link<R> {
        self.right.take()
    }

    pub(crate) fn left_slot_mut(&mut self) -> &mut Link<R> {
        &mut self.left
    }

    pub(crate) fn right_slot_mut(&mut self) -> &mut Link<R> {
        &mut self.right
    }

    /// Swaps in a new record, returning the old one. Children are untouched.
    pub(crate) fn replace_record(&mut self, record: R) -> R {
        std::mem::replace(&mut self.record, record)
    }

    /// Consumes the node, dropping any children it still owns.
    pub(crate) fn into_record(self) -> R {
        self.record
    }
}
