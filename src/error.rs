//! Errors surfaced by [`PasswordStorage`](crate::PasswordStorage).

use thiserror::Error;

/// Everything that can go wrong when mutating or querying a
/// [`PasswordStorage`](crate::PasswordStorage).
///
/// A lookup miss is not an error: [`lookup`](crate::PasswordStorage::lookup)
/// returns `None` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// A record comparing equal under the tree's criterion is already stored.
    #[error("a matching password is already in the tree")]
    DuplicateEntry,

    /// No record comparing equal under the tree's criterion is stored.
    #[error("the password isn't in the tree")]
    NotFound,

    /// The tree has no records to answer a min/max query with.
    #[error("attempted to query an empty tree")]
    EmptyCollection,
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
