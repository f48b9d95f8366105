//! This crate stores password records in a Binary Search Tree ordered by a
//! comparison attribute chosen when the tree is created.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are defined recursively
//! using the notion of a [`Node`]. A `Node` stores one record and may have
//! child `Node`s. The invariants of a [`PasswordStorage`] are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold records
//!    less than its own under the tree's criterion.
//! 2. For every `Node`, all the `Node`s in its right subtree hold records
//!    greater than its own under the tree's criterion.
//! 3. No two records compare equal under the criterion.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a record takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). This tree is never rebalanced,
//! so inserting records in sorted order degrades it to a list. Sorted
//! iteration falls out of visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! ## Criteria
//!
//! Records are not compared with [`Ord`]. Anything implementing [`Record`]
//! exposes a single comparison taking a criterion value, and a tree passes
//! the criterion it was built with to every comparison it makes. [`Password`]
//! is the record shipped with this crate, ordered by an [`Attribute`].
//!
//! ```
//! use password_storage::{Attribute, Password, PasswordStorage};
//!
//! let criterion: Attribute = "strength".parse().unwrap();
//! let mut storage = PasswordStorage::new(criterion);
//!
//! storage.insert(Password::new("123456", 250, 1)).unwrap();
//! storage.insert(Password::new("Tr0ub4dor&3", 2, 6)).unwrap();
//! storage.insert(Password::new("password1", 90, 2)).unwrap();
//!
//! assert_eq!(storage.max().unwrap().text(), "Tr0ub4dor&3");
//! assert_eq!(storage.min().unwrap().text(), "123456");
//! assert!(storage.is_valid_bst());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod password;
pub mod record;
pub mod storage;

pub use error::{Result, StorageError};
pub use node::Node;
pub use password::{Attribute, ParseAttributeError, Password};
pub use record::Record;
pub use storage::{Iter, PasswordStorage};
