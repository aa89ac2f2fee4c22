//! Core type definitions with validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A client name contained a character outside `[a-z0-9_-]`.
    #[error("invalid client name: {value}")]
    InvalidClientName { value: String },

    /// A table number was not a positive integer.
    #[error("invalid table number: {value}")]
    InvalidTableNumber { value: String },
}

/// Returns true if `c` may appear in a client name.
const fn is_name_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-')
}

/// A validated client name.
///
/// Names are non-empty and use only lowercase ASCII letters, digits, `_` and `-`.
/// Ordering is byte-wise, which is what end-of-day reconciliation sorts by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientName(String);

impl ClientName {
    /// Creates a new client name after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::Empty {
                field: "client name",
            });
        }
        if !name.chars().all(is_name_char) {
            return Err(ValidationError::InvalidClientName { value: name });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClientName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientName> for String {
    fn from(name: ClientName) -> Self {
        name.0
    }
}

impl FromStr for ClientName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A 1-based table number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct TableNumber(usize);

impl TableNumber {
    /// Creates a table number, rejecting zero.
    pub fn new(number: usize) -> Result<Self, ValidationError> {
        if number == 0 {
            return Err(ValidationError::InvalidTableNumber {
                value: number.to_string(),
            });
        }
        Ok(Self(number))
    }

    /// Returns the 1-based number.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the 0-based index into per-table storage.
    pub const fn index(self) -> usize {
        self.0 - 1
    }
}

impl TryFrom<usize> for TableNumber {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableNumber> for usize {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
