//! AddList command

use crate::error::{Error, Result};
use crate::op::{Apply, Outcome};
use crate::types::{BoardSet, List};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Append a new list to the end of a board's list sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddList {
    /// Index of the board that receives the list
    pub board: usize,
    /// The list title, stored as given
    pub title: String,
}

impl AddList {
    /// Create a new AddList command
    pub fn new(board: usize, title: impl Into<String>) -> Self {
        Self {
            board,
            title: title.into(),
        }
    }
}

impl Apply for AddList {
    fn apply(&self, set: &BoardSet) -> Result<Outcome> {
        if self.title.trim().is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let board = set.get(self.board).ok_or(Error::BoardIndexOutOfRange {
            index: self.board,
            len: set.len(),
        })?;

        let list = List::new(self.title.clone());
        tracing::debug!("add list {} to board {}", list.id, board.id);

        let mut next = (**board).clone();
        next.lists.push(Arc::new(list));
        Ok(Outcome::Changed(set.with_board(self.board, next)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;

    fn two_boards() -> BoardSet {
        let set = AddBoard::new("A")
            .apply(&BoardSet::new())
            .unwrap()
            .into_changed()
            .unwrap();
        AddBoard::new("B").apply(&set).unwrap().into_changed().unwrap()
    }

    #[test]
    fn test_add_list() {
        let set = two_boards();
        let next = AddList::new(1, "Todo")
            .apply(&set)
            .unwrap()
            .into_changed()
            .unwrap();

        assert_eq!(next.boards()[1].lists.len(), 1);
        assert_eq!(next.boards()[1].lists[0].title, "Todo");
        assert!(next.boards()[1].lists[0].cards.is_empty());
        assert!(next.boards()[0].lists.is_empty());
    }

    #[test]
    fn test_empty_title_is_a_no_op() {
        let set = two_boards();
        assert_eq!(
            AddList::new(0, "  ").apply(&set).unwrap(),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_sibling_boards_are_untouched() {
        let set = two_boards();
        let next = AddList::new(0, "Todo")
            .apply(&set)
            .unwrap()
            .into_changed()
            .unwrap();

        assert!(Arc::ptr_eq(&set.boards()[1], &next.boards()[1]));
        assert!(!Arc::ptr_eq(&set.boards()[0], &next.boards()[0]));
    }

    #[test]
    fn test_board_index_out_of_range() {
        let set = two_boards();
        let err = AddList::new(5, "Todo").apply(&set).unwrap_err();
        assert!(matches!(
            err,
            Error::BoardIndexOutOfRange { index: 5, len: 2 }
        ));
    }
}
