//! A password entry and the attributes it can be ordered by.
//!
//! # Examples
//!
//! ```
//! use password_storage::{Attribute, Password, Record};
//!
//! let weak = Password::new("hunter2", 40, 2);
//! let strong = Password::new("correct horse battery staple", 1, 9);
//!
//! assert!(weak.compare_by(&strong, Attribute::Strength).is_lt());
//! assert!(weak.compare_by(&strong, Attribute::Occurrence).is_gt());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::record::Record;

/// Which field of a [`Password`] a tree orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// How many times the password was seen.
    Occurrence,
    /// The caller-supplied strength rating.
    Strength,
    /// The password text, lexicographically.
    Text,
}

/// Returned when text doesn't name an [`Attribute`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown comparison attribute: {0:?}")]
pub struct ParseAttributeError(String);

impl FromStr for Attribute {
    type Err = ParseAttributeError;

    /// Parses `"occurrence"`, `"strength"` or `"text"`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "occurrence" => Ok(Self::Occurrence),
            "strength" => Ok(Self::Strength),
            "text" => Ok(Self::Text),
            _ => Err(ParseAttributeError(s.to_owned())),
        }
    }
}

/// Where a password sits relative to the sentinels. Declared in ascending
/// order so the derived `Ord` puts `Min` below and `Max` above everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Kind {
    Min,
    Regular,
    Max,
}

/// A stored password together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Password {
    kind: Kind,
    text: String,
    occurrence: u32,
    strength: u32,
}

impl Password {
    /// Creates a regular password entry.
    pub fn new(text: impl Into<String>, occurrence: u32, strength: u32) -> Self {
        Self {
            kind: Kind::Regular,
            text: text.into(),
            occurrence,
            strength,
        }
    }

    /// The sentinel below every regular password.
    pub fn min() -> Self {
        Self {
            kind: Kind::Min,
            text: String::new(),
            occurrence: 0,
            strength: 0,
        }
    }

    /// The sentinel above every regular password.
    pub fn max() -> Self {
        Self {
            kind: Kind::Max,
            text: String::new(),
            occurrence: u32::MAX,
            strength: u32::MAX,
        }
    }

    /// The password itself.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times the password was seen.
    pub fn occurrence(&self) -> u32 {
        self.occurrence
    }

    /// The strength rating.
    pub fn strength(&self) -> u32 {
        self.strength
    }
}

impl Record for Password {
    type Criterion = Attribute;

    fn compare_by(&self, other: &Self, criterion: Attribute) -> Ordering {
        self.kind.cmp(&other.kind).then_with(|| match criterion {
            Attribute::Occurrence => self.occurrence.cmp(&other.occurrence),
            Attribute::Strength => self.strength.cmp(&other.strength),
            Attribute::Text => self.text.cmp(&other.text),
        })
    }

    fn min_sentinel() -> Self {
        Self::min()
    }

    fn max_sentinel() -> Self {
        Self::max()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Min => f.write_str("<min>"),
            Kind::Max => f.write_str("<max>"),
            Kind::Regular => write!(
                f,
                "{} (occurrence: {}, strength: {})",
                self.text, self.occurrence, self.strength
            ),
        }
    }
}
