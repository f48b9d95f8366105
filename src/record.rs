//! The contract a value must satisfy to be stored in a
//! [`PasswordStorage`](crate::PasswordStorage).

use std::cmp::Ordering;
use std::fmt;

/// A value that can be ordered by a runtime-selected criterion.
///
/// Rather than relying on [`Ord`], every comparison the tree makes is routed
/// through [`compare_by`](Record::compare_by) together with the criterion the
/// tree was built with. Two records are "the same" for the tree exactly when
/// they compare [`Equal`](Ordering::Equal) under that criterion, even if they
/// differ in every other field.
pub trait Record: fmt::Display {
    /// The selector for which attribute of the record drives ordering.
    type Criterion: Copy + fmt::Debug;

    /// Three-way comparison of `self` against `other` under `criterion`.
    fn compare_by(&self, other: &Self, criterion: Self::Criterion) -> Ordering;

    /// Equality under `criterion`.
    fn eq_by(&self, other: &Self, criterion: Self::Criterion) -> bool {
        self.compare_by(other, criterion) == Ordering::Equal
    }

    /// A record comparing strictly less than every legitimate record, under
    /// every criterion.
    fn min_sentinel() -> Self
    where
        Self: Sized;

    /// A record comparing strictly greater than every legitimate record,
    /// under every criterion.
    fn max_sentinel() -> Self
    where
        Self: Sized;
}
