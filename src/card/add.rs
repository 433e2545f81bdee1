//! AddCard command

use crate::error::{Error, Result};
use crate::op::{Apply, Outcome};
use crate::types::{Board, BoardSet, Card, List};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Append a card to the end of a list's card sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCard {
    /// Index of the board that owns the list
    pub board: usize,
    /// Index of the list that receives the card
    pub list: usize,
    /// The card text, stored as given
    pub text: String,
}

impl AddCard {
    /// Create a new AddCard command
    pub fn new(board: usize, list: usize, text: impl Into<String>) -> Self {
        Self {
            board,
            list,
            text: text.into(),
        }
    }
}

impl Apply for AddCard {
    fn apply(&self, set: &BoardSet) -> Result<Outcome> {
        if self.text.trim().is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let board = set.get(self.board).ok_or(Error::BoardIndexOutOfRange {
            index: self.board,
            len: set.len(),
        })?;
        let list = board.lists.get(self.list).ok_or(Error::ListIndexOutOfRange {
            index: self.list,
            len: board.lists.len(),
        })?;

        tracing::debug!("add card to list {} on board {}", list.id, board.id);

        let mut cards = list.cards.clone();
        cards.push(Card::new(self.text.clone()));
        let next_list = List {
            id: list.id,
            title: list.title.clone(),
            cards,
        };

        let mut lists = board.lists.clone();
        lists[self.list] = Arc::new(next_list);
        let next_board = Board {
            id: board.id,
            title: board.title.clone(),
            lists,
        };

        Ok(Outcome::Changed(set.with_board(self.board, next_board)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;
    use crate::list::AddList;

    fn board_with_two_lists() -> BoardSet {
        let mut set = AddBoard::new("A")
            .apply(&BoardSet::new())
            .unwrap()
            .into_changed()
            .unwrap();
        for title in ["Todo", "Done"] {
            set = AddList::new(0, title)
                .apply(&set)
                .unwrap()
                .into_changed()
                .unwrap();
        }
        set
    }

    #[test]
    fn test_add_card() {
        let set = board_with_two_lists();
        let next = AddCard::new(0, 0, "Write docs")
            .apply(&set)
            .unwrap()
            .into_changed()
            .unwrap();

        let cards = &next.boards()[0].lists[0].cards;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].text(), "Write docs");
    }

    #[test]
    fn test_empty_text_is_a_no_op() {
        let set = board_with_two_lists();
        assert_eq!(
            AddCard::new(0, 0, " \n ").apply(&set).unwrap(),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_sibling_lists_are_untouched() {
        let set = board_with_two_lists();
        let next = AddCard::new(0, 0, "x")
            .apply(&set)
            .unwrap()
            .into_changed()
            .unwrap();

        assert!(Arc::ptr_eq(
            &set.boards()[0].lists[1],
            &next.boards()[0].lists[1]
        ));
    }

    #[test]
    fn test_list_index_out_of_range() {
        let set = board_with_two_lists();
        let err = AddCard::new(0, 9, "x").apply(&set).unwrap_err();
        assert!(matches!(err, Error::ListIndexOutOfRange { index: 9, len: 2 }));
    }
}
