//! MoveCard command

use crate::error::{Error, Result};
use crate::op::{Apply, Outcome};
use crate::reorder::splice_move;
use crate::types::{Board, BoardId, BoardSet, List, ListId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Move a card to a new position within its list.
///
/// Only the addressed board's branch is rebuilt; every other board, and
/// every other list in the addressed board, keeps its allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCard {
    /// ID of the board that owns the list
    pub board: BoardId,
    /// ID of the list whose cards are reordered
    pub list: ListId,
    /// Index the card is moving from
    pub from: usize,
    /// Index the card lands at
    pub to: usize,
}

impl MoveCard {
    /// Create a new MoveCard command
    pub fn new(board: BoardId, list: ListId, from: usize, to: usize) -> Self {
        Self {
            board,
            list,
            from,
            to,
        }
    }
}

impl Apply for MoveCard {
    fn apply(&self, set: &BoardSet) -> Result<Outcome> {
        let board_index = set
            .find_board(&self.board)
            .ok_or_else(|| Error::board_not_found(self.board))?;
        let board = &set.boards()[board_index];

        let list_index = board
            .find_list(&self.list)
            .ok_or_else(|| Error::list_not_found(self.list))?;
        let list = &board.lists[list_index];

        let cards = splice_move(&list.cards, self.from, self.to)?;
        tracing::debug!(
            "move card {} -> {} in list {} on board {}",
            self.from,
            self.to,
            list.id,
            board.id
        );

        let next_list = List {
            id: list.id,
            title: list.title.clone(),
            cards,
        };
        let mut lists = board.lists.clone();
        lists[list_index] = Arc::new(next_list);
        let next_board = Board {
            id: board.id,
            title: board.title.clone(),
            lists,
        };

        Ok(Outcome::Changed(set.with_board(board_index, next_board)))
    }
}
