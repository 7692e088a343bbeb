//! Strongly-typed identifiers for domain entities
//!
//! Customer identities are integers assigned by the storage layer on insert.
//! Wrapping them in a newtype keeps them from being mixed up with ages or
//! other plain integers flowing through the same code paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Creates from a raw storage value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw storage value
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i32> for CustomerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<CustomerId> for i32 {
    fn from(id: CustomerId) -> i32 {
        id.0
    }
}
