//! The top-level state snapshot.

use super::board::Board;
use super::ids::BoardId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An immutable snapshot of every board.
///
/// Operations never edit a snapshot in place; they build the next one,
/// sharing the allocation of every board they do not touch. Holding an old
/// snapshot while the store advances is always safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoardSet {
    boards: Vec<Arc<Board>>,
}

impl BoardSet {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// The boards, in display order
    pub fn boards(&self) -> &[Arc<Board>] {
        &self.boards
    }

    /// Number of boards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Check whether there are no boards
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The board at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Arc<Board>> {
        self.boards.get(index)
    }

    /// Index of the board with the given ID
    pub fn find_board(&self, id: &BoardId) -> Option<usize> {
        self.boards.iter().position(|board| board.id == *id)
    }

    /// Next snapshot with the given board order
    pub(crate) fn from_boards(boards: Vec<Arc<Board>>) -> Self {
        Self { boards }
    }

    /// Next snapshot with `board` appended at the end
    pub(crate) fn with_appended(&self, board: Board) -> Self {
        let mut boards = self.boards.clone();
        boards.push(Arc::new(board));
        Self { boards }
    }

    /// Next snapshot with the board at `index` replaced. Every other board
    /// keeps its allocation.
    pub(crate) fn with_board(&self, index: usize, board: Board) -> Self {
        let mut boards = self.boards.clone();
        boards[index] = Arc::new(board);
        Self { boards }
    }
}
