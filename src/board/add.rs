//! AddBoard command

use crate::error::Result;
use crate::op::{Apply, Outcome};
use crate::types::{Board, BoardSet};
use serde::{Deserialize, Serialize};

/// Append a new board to the end of the board sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBoard {
    /// The board title, stored as given
    pub title: String,
}

impl AddBoard {
    /// Create a new AddBoard command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Apply for AddBoard {
    fn apply(&self, set: &BoardSet) -> Result<Outcome> {
        if self.title.trim().is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let board = Board::new(self.title.clone());
        tracing::debug!("add board {} ({:?})", board.id, board.title);
        Ok(Outcome::Changed(set.with_appended(board)))
    }
}
