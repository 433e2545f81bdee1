//! MoveBoard command

use crate::error::Result;
use crate::op::{Apply, Outcome};
use crate::reorder::splice_move;
use crate::types::BoardSet;
use serde::{Deserialize, Serialize};

/// Move a board to a new position in the top-level order.
///
/// There is only one board sequence, so no container addressing applies;
/// both indices are positions in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveBoard {
    /// Index the board is moving from
    pub from: usize,
    /// Index the board lands at
    pub to: usize,
}

impl MoveBoard {
    /// Create a new MoveBoard command
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl Apply for MoveBoard {
    fn apply(&self, set: &BoardSet) -> Result<Outcome> {
        let boards = splice_move(set.boards(), self.from, self.to)?;
        tracing::debug!("move board {} -> {}", self.from, self.to);
        Ok(Outcome::Changed(BoardSet::from_boards(boards)))
    }
}
