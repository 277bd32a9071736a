use serde::{Deserialize, Serialize};

/// Number identifying a table in the venue.
///
/// Table numbers are assigned when tables are seeded and never change,
/// so the newtype is `Copy` and ordered for stable listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableNumber(i32);

impl TableNumber {
    /// Creates a table number from its raw value.
    pub fn new(number: i32) -> Self {
        Self(number)
    }

    /// Returns the raw table number.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for TableNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TableNumber {
    fn from(number: i32) -> Self {
        Self(number)
    }
}

impl From<TableNumber> for i32 {
    fn from(number: TableNumber) -> Self {
        number.0
    }
}

/// Name a reservation is held under.
///
/// The guest name is the key for both reservations and arrivals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestName(String);

impl GuestName {
    /// Creates a guest name from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the guest name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for GuestName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GuestName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GuestName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for GuestName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
