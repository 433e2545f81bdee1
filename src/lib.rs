//! In-memory kanban board engine
//!
//! This crate provides the state model behind a kanban board UI: boards hold
//! lists, lists hold cards, and completed drag-and-drop gestures reorder
//! boards and cards. Rendering is someone else's job; this is the part that
//! decides what the next state is.
//!
//! ## Overview
//!
//! - **Snapshots, not mutation** - state is an immutable [`BoardSet`];
//!   operations build the next snapshot and share every branch they do not
//!   touch, so stale snapshots never observe later edits
//! - **Struct-per-operation** - each mutation is a struct whose fields are
//!   the parameters ([`AddBoard`], [`AddList`], [`AddCard`], [`MoveBoard`],
//!   [`MoveCard`]), applied through the [`Apply`] trait
//! - **Drag routing** - a completed gesture arrives as a [`DragResult`];
//!   [`apply_drag`] turns it into a reorder, a clean cancellation, or an
//!   ignored drop (cross-list card moves and list drags are not wired)
//! - **Silent rejection** - empty titles, empty card text, and drops outside
//!   any target are no-ops, not errors
//!
//! ## Basic Usage
//!
//! ```rust
//! use cardwall::{AddBoard, AddCard, AddList, Store};
//!
//! # fn main() -> cardwall::Result<()> {
//! let mut store = Store::new();
//! store.apply(&AddBoard::new("Launch"))?;
//! store.apply(&AddList::new(0, "Todo"))?;
//! store.apply(&AddCard::new(0, 0, "Write the announcement"))?;
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.boards()[0].lists[0].cards.len(), 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod op;
mod reorder;
mod store;
pub mod types;

// Command modules
pub mod board;
pub mod card;
pub mod list;

pub use error::{Error, Result};
pub use op::{Apply, Outcome};
pub use reorder::apply_drag;
pub use store::Store;

// Re-export commonly used types
pub use board::{AddBoard, MoveBoard};
pub use card::{AddCard, MoveCard};
pub use list::AddList;
pub use types::{Board, BoardId, BoardSet, Card, CardSlot, DragResult, List, ListId};
