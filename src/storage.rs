//! An unbalanced BST of records ordered by a criterion fixed at construction.
//!
//! # Examples
//!
//! ```
//! use password_storage::{Attribute, Password, PasswordStorage, StorageError};
//!
//! let mut storage = PasswordStorage::new(Attribute::Occurrence);
//!
//! // Nothing in here yet.
//! assert_eq!(storage.lookup(&Password::new("", 5, 0)), None);
//!
//! storage.insert(Password::new("qwerty", 5, 1)).unwrap();
//! storage.insert(Password::new("letmein", 2, 2)).unwrap();
//!
//! // Only the occurrence is used to find a match.
//! let probe = Password::new("", 5, 0);
//! assert_eq!(storage.lookup(&probe).map(Password::text), Some("qwerty"));
//!
//! // Equal under the criterion means duplicate, whatever the text.
//! assert_eq!(
//!     storage.insert(Password::new("dragon", 5, 9)),
//!     Err(StorageError::DuplicateEntry)
//! );
//!
//! // Removing hands the stored record back.
//! let removed = storage.remove(&probe).unwrap();
//! assert_eq!(removed.text(), "qwerty");
//! assert_eq!(storage.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace, warn};

use crate::error::{Result, StorageError};
use crate::node::{Link, Node};
use crate::record::Record;

/// A Binary Search Tree of records. Every ordering and equality decision is
/// made with [`Record::compare_by`] under the criterion the tree was created
/// with. The tree is never rebalanced.
#[derive(Debug)]
pub struct PasswordStorage<R: Record> {
    root: Link<R>,
    size: usize,
    criterion: R::Criterion,
}

impl<R: Record> Drop for PasswordStorage<R> {
    // Boxes drop recursively, so a list-shaped tree would blow the stack.
    // Every other walk in this module is a loop for the same reason.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<R>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_left());
            stack.extend(node.take_right());
        }
    }
}

impl<R: Record> PasswordStorage<R> {
    /// Generate a new, empty tree ordered by `criterion`.
    pub fn new(criterion: R::Criterion) -> Self {
        Self {
            root: None,
            size: 0,
            criterion,
        }
    }

    /// The criterion this tree orders by.
    pub fn criterion(&self) -> R::Criterion {
        self.criterion
    }

    /// How many records are stored.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether no records are stored.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.size == 0, self.root.is_none());
        self.size == 0
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<R>> {
        self.root.as_deref()
    }

    /// Finds the stored record comparing equal to `key`. A miss is `None`,
    /// not an error.
    pub fn lookup(&self, key: &R) -> Option<&R> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.compare_by(node.record(), self.criterion) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node.record()),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// The greatest record under the criterion (the "best" password).
    ///
    /// # Errors
    ///
    /// [`StorageError::EmptyCollection`] if the tree is empty.
    pub fn max(&self) -> Result<&R> {
        self.root()
            .map(|root| root.rightmost().record())
            .ok_or(StorageError::EmptyCollection)
    }

    /// The least record under the criterion (the "worst" password).
    ///
    /// # Errors
    ///
    /// [`StorageError::EmptyCollection`] if the tree is empty.
    pub fn min(&self) -> Result<&R> {
        self.root()
            .map(|root| root.leftmost().record())
            .ok_or(StorageError::EmptyCollection)
    }

    /// The greatest stored record strictly less than `key`, whether or not
    /// `key` itself is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use password_storage::{Attribute, Password, PasswordStorage};
    ///
    /// let mut storage = PasswordStorage::new(Attribute::Strength);
    /// for (text, strength) in [("a", 5), ("b", 2), ("c", 8), ("d", 4)] {
    ///     storage.insert(Password::new(text, 0, strength)).unwrap();
    /// }
    ///
    /// let probe = |s| Password::new("", 0, s);
    /// assert_eq!(storage.predecessor(&probe(5)).map(Password::text), Some("d"));
    /// assert_eq!(storage.predecessor(&probe(7)).map(Password::text), Some("a"));
    /// assert_eq!(storage.predecessor(&probe(2)), None);
    /// ```
    pub fn predecessor(&self, key: &R) -> Option<&R> {
        let mut candidate = None;
        let mut current = self.root();
        while let Some(node) = current {
            match key.compare_by(node.record(), self.criterion) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return node.find_predecessor().or(candidate),
                Ordering::Greater => {
                    candidate = Some(node.record());
                    current = node.right();
                }
            }
        }
        candidate
    }

    /// Iterates over the records in ascending order.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.root())
    }

    /// Every record in ascending order, one per line, each line terminated
    /// by `'\n'`. An empty tree gives the empty string.
    pub fn to_ordered_string(&self) -> String {
        self.to_string()
    }

    /// Checks that every record lies strictly between the bounds inherited
    /// from its ancestors, starting from the record type's sentinels.
    pub fn is_valid_bst(&self) -> bool {
        let valid = is_valid_subtree(
            self.root(),
            &R::min_sentinel(),
            &R::max_sentinel(),
            self.criterion,
        );
        if !valid {
            warn!("tree ordered by {:?} violates the BST invariant", self.criterion);
        }
        valid
    }

    /// Inserts `record` as a new leaf.
    ///
    /// # Errors
    ///
    /// [`StorageError::DuplicateEntry`] if a record comparing equal is
    /// already stored. The tree is left untouched.
    pub fn insert(&mut self, record: R) -> Result<()> {
        if self.lookup(&record).is_some() {
            return Err(StorageError::DuplicateEntry);
        }

        debug!("adding {} ordered by {:?}", record, self.criterion);
        attach(&mut self.root, record, self.criterion)?;
        self.size += 1;
        Ok(())
    }

    /// Removes the record comparing equal to `record` and returns it.
    ///
    /// A node with two children takes over the record of its in-order
    /// predecessor, whose own node is then removed from the left subtree.
    ///
    /// # Errors
    ///
    /// [`StorageError::NotFound`] if no record compares equal. The tree is
    /// left untouched.
    pub fn remove(&mut self, record: &R) -> Result<R> {
        if self.lookup(record).is_none() {
            return Err(StorageError::NotFound);
        }

        let removed =
            remove_from(&mut self.root, record, self.criterion).ok_or(StorageError::NotFound)?;
        self.size -= 1;
        debug!("removed {} ordered by {:?}", removed, self.criterion);
        Ok(removed)
    }
}

impl<R: Record> fmt::Display for PasswordStorage<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

impl<'a, R: Record> IntoIterator for &'a PasswordStorage<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`PasswordStorage`], created by
/// [`PasswordStorage::iter`].
#[derive(Debug)]
pub struct Iter<'a, R> {
    /// Nodes whose left subtree has been fully visited but which themselves
    /// haven't been yielded yet.
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> Iter<'a, R> {
    fn new(root: Option<&'a Node<R>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<R>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.record())
    }
}

/// Walks down from `root` and hangs `record` off the first empty slot on its
/// search path.
fn attach<R: Record>(root: &mut Link<R>, record: R, criterion: R::Criterion) -> Result<()> {
    let mut slot = root;
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => record.compare_by(node.record(), criterion),
            None => break,
        };
        slot = match slot {
            Some(node) => match ordering {
                Ordering::Less => node.left_slot_mut(),
                Ordering::Greater => node.right_slot_mut(),
                Ordering::Equal => return Err(StorageError::DuplicateEntry),
            },
            None => return Err(StorageError::DuplicateEntry),
        };
    }
    *slot = Some(Box::new(Node::new(record)));
    Ok(())
}

/// Removes `target` from the subtree rooted at `root`. The slot that held
/// the matching node is rewritten in place with whatever replaces it.
fn remove_from<R: Record>(root: &mut Link<R>, target: &R, criterion: R::Criterion) -> Option<R> {
    let mut slot = root;
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => target.compare_by(node.record(), criterion),
            None => return None,
        };
        // Stop before borrowing the match mutably; `slot` is rewritten below.
        if ordering == Ordering::Equal {
            break;
        }
        slot = match slot {
            Some(node) => {
                if ordering == Ordering::Less {
                    node.left_slot_mut()
                } else {
                    node.right_slot_mut()
                }
            }
            None => return None,
        };
    }

    let (record, replacement) = unlink(slot.take()?);
    *slot = replacement;
    Some(record)
}

/// Takes `node` out of the tree. Returns its record and whatever should
/// occupy its slot now.
fn unlink<R>(mut node: Box<Node<R>>) -> (R, Link<R>) {
    trace!("unlinking node with {} children", node.number_of_children());
    match (node.take_left(), node.take_right()) {
        (None, None) => (node.into_record(), None),
        (Some(child), None) | (None, Some(child)) => (node.into_record(), Some(child)),
        (Some(left), Some(right)) => {
            // The matched node stays in place with the predecessor's record;
            // the predecessor's node is dropped by `remove_max`.
            let mut left = Some(left);
            match remove_max(&mut left) {
                Some(predecessor) => {
                    let record = node.replace_record(predecessor);
                    node.set_left(left);
                    node.set_right(Some(right));
                    (record, Some(node))
                }
                None => (node.into_record(), Some(right)),
            }
        }
    }
}

/// Removes the rightmost node of the subtree rooted at `root` and returns
/// its record. The node's left child, if any, takes its slot.
fn remove_max<R>(root: &mut Link<R>) -> Option<R> {
    let mut slot = root;
    while slot.as_deref().map_or(false, Node::has_right_child) {
        slot = match slot {
            Some(node) => node.right_slot_mut(),
            None => return None,
        };
    }

    let mut node = slot.take()?;
    *slot = node.take_left();
    Some(node.into_record())
}

/// Whether every record under `root` lies strictly within `(lower, upper)`
/// and the same holds for each subtree with its parent's record tightening
/// one of the bounds. Any single violation makes the whole tree invalid.
fn is_valid_subtree<R: Record>(
    root: Option<&Node<R>>,
    lower: &R,
    upper: &R,
    criterion: R::Criterion,
) -> bool {
    let mut pending = vec![(root, lower, upper)];
    while let Some((node, lower, upper)) = pending.pop() {
        let node = match node {
            Some(node) => node,
            None => continue,
        };
        let record = node.record();

        let in_bounds = record.compare_by(lower, criterion) == Ordering::Greater
            && record.compare_by(upper, criterion) == Ordering::Less;
        if !in_bounds {
            return false;
        }

        pending.push((node.left(), lower, record));
        pending.push((node.right(), record, upper));
    }
    true
}
