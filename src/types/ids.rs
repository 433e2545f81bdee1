//! Opaque entity identifiers.
//!
//! Boards and lists get a ULID at creation time. The literal value carries
//! no meaning; uniqueness is the only contract. Cards have no identifier,
//! they are addressed purely by position.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardId(Ulid);

impl BoardId {
    /// Create a new random board ID
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse a BoardId from a string representation
    pub fn parse(s: &str) -> Result<Self, String> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|e| format!("Invalid board ID '{s}': {e}"))
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a list within a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListId(Ulid);

impl ListId {
    /// Create a new random list ID
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse a ListId from a string representation
    pub fn parse(s: &str) -> Result<Self, String> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|e| format!("Invalid list ID '{s}': {e}"))
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
