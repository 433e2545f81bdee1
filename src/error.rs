//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when addressing boards, lists, or positions.
///
/// Everything the UI layer can legitimately produce is a silent no-op, not
/// an error; these variants only fire on out-of-domain addressing from a
/// library caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Board index outside the current board sequence
    #[error("board index {index} out of range (boards: {len})")]
    BoardIndexOutOfRange { index: usize, len: usize },

    /// List index outside the addressed board's list sequence
    #[error("list index {index} out of range (lists: {len})")]
    ListIndexOutOfRange { index: usize, len: usize },

    /// No board with the given ID
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// No list with the given ID in the addressed board
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Move source or destination outside the sequence
    #[error("position {index} out of range (items: {len})")]
    PositionOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Create a board-not-found error
    pub fn board_not_found(id: impl ToString) -> Self {
        Self::BoardNotFound { id: id.to_string() }
    }

    /// Create a list-not-found error
    pub fn list_not_found(id: impl ToString) -> Self {
        Self::ListNotFound { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::BoardIndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "board index 4 out of range (boards: 2)");
    }

    #[test]
    fn test_not_found_helpers() {
        let err = Error::list_not_found("01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert!(err.to_string().contains("list not found"));
    }
}
