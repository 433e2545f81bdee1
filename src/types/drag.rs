//! Drag gesture results.

use super::ids::{BoardId, ListId};
use serde::{Deserialize, Serialize};

/// Where a card sits: owning board, owning list, position within the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlot {
    pub board: BoardId,
    pub list: ListId,
    pub index: usize,
}

impl CardSlot {
    /// Create a new card slot
    pub fn new(board: BoardId, list: ListId, index: usize) -> Self {
        Self { board, list, index }
    }

    /// Check whether two slots address the same list
    pub fn same_list(&self, other: &CardSlot) -> bool {
        self.board == other.board && self.list == other.list
    }
}

/// The outcome of a completed drag gesture.
///
/// A `destination` of `None` means the item was dropped outside every valid
/// target; the gesture is cancelled and no state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragResult {
    /// A board dragged within the single top-level sequence
    Board {
        source: usize,
        destination: Option<usize>,
    },
    /// A list dragged within a board. The drag surface exposes list
    /// handles, but list reordering is not wired to any state change.
    List {
        board: BoardId,
        source: usize,
        destination: Option<usize>,
    },
    /// A card dragged between card slots
    Card {
        source: CardSlot,
        destination: Option<CardSlot>,
    },
}

impl DragResult {
    /// Check whether the gesture was dropped outside every valid target
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Board {
                destination: None,
                ..
            } | Self::List {
                destination: None,
                ..
            } | Self::Card {
                destination: None,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_when_destination_missing() {
        let drag = DragResult::Board {
            source: 2,
            destination: None,
        };
        assert!(drag.is_cancelled());

        let drag = DragResult::Board {
            source: 2,
            destination: Some(0),
        };
        assert!(!drag.is_cancelled());
    }

    #[test]
    fn test_drag_result_is_tagged() {
        let drag = DragResult::Board {
            source: 1,
            destination: Some(0),
        };
        let json = serde_json::to_value(&drag).unwrap();
        assert_eq!(json["type"], "board");
        assert_eq!(json["source"], 1);

        let parsed: DragResult = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, drag);
    }

    #[test]
    fn test_same_list() {
        let board = BoardId::new();
        let list = ListId::new();
        let a = CardSlot::new(board, list, 0);
        let b = CardSlot::new(board, list, 3);
        let c = CardSlot::new(board, ListId::new(), 3);

        assert!(a.same_list(&b));
        assert!(!a.same_list(&c));
    }
}
