//! Core types for the board engine

mod board;
mod drag;
mod ids;
mod snapshot;

// Re-export all types
pub use board::{Board, Card, List};
pub use drag::{CardSlot, DragResult};
pub use ids::{BoardId, ListId};
pub use snapshot::BoardSet;
