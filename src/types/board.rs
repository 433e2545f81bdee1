//! Board-level types: Board, List, Card

use super::ids::{BoardId, ListId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A board holds an ordered sequence of lists.
///
/// Lists are kept behind `Arc` so that a snapshot update touching one list
/// can reuse every sibling's allocation unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub lists: Vec<Arc<List>>,
}

impl Board {
    /// Create a new board with the given title and no lists
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            title: title.into(),
            lists: Vec::new(),
        }
    }

    /// Index of the list with the given ID
    pub fn find_list(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id == *id)
    }
}

/// A list within a board holds an ordered sequence of cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl List {
    /// Create a new list with the given title and no cards
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            cards: Vec::new(),
        }
    }
}

/// A card is plain text. It has no identity beyond its position in a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Card(String);

impl Card {
    /// Create a new card holding the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The card text
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
