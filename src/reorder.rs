//! Reorder engine: turns a completed drag gesture into the next snapshot.
//!
//! Routing rules:
//! - No destination means the item was dropped outside every valid target;
//!   the gesture cancels and the snapshot stands.
//! - Board drags reorder the single top-level sequence.
//! - Card drags reorder within one list. A drop whose destination container
//!   differs from its source is ignored; cross-list moves are not wired.
//! - List drags carry positions but are not wired to any reorder.

use crate::board::MoveBoard;
use crate::card::MoveCard;
use crate::error::{Error, Result};
use crate::op::{Apply, Outcome};
use crate::types::{BoardSet, DragResult};

/// Move the element at `from` to `to`, keeping every other element's
/// relative order.
///
/// The element is removed first and `to` indexes the shortened sequence as
/// given, with no adjustment. Both indices must address the original
/// sequence.
pub(crate) fn splice_move<T: Clone>(seq: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    if from >= seq.len() {
        return Err(Error::PositionOutOfRange {
            index: from,
            len: seq.len(),
        });
    }
    if to >= seq.len() {
        return Err(Error::PositionOutOfRange {
            index: to,
            len: seq.len(),
        });
    }

    let mut next = seq.to_vec();
    let item = next.remove(from);
    next.insert(to, item);
    Ok(next)
}

/// Apply a completed drag gesture to a snapshot
pub fn apply_drag(set: &BoardSet, drag: &DragResult) -> Result<Outcome> {
    if drag.is_cancelled() {
        tracing::debug!("drag cancelled, no destination");
        return Ok(Outcome::Unchanged);
    }

    match drag {
        DragResult::Board {
            source,
            destination: Some(to),
        } => MoveBoard::new(*source, *to).apply(set),
        DragResult::List {
            board,
            source,
            destination: Some(to),
        } => {
            tracing::debug!(
                "list drag {} -> {} on board {} ignored: list reordering is not wired",
                source,
                to,
                board
            );
            Ok(Outcome::Unchanged)
        }
        DragResult::Card {
            source,
            destination: Some(dest),
        } => {
            if !source.same_list(dest) {
                tracing::debug!(
                    "cross-list card drop ignored (list {} -> list {})",
                    source.list,
                    dest.list
                );
                return Ok(Outcome::Unchanged);
            }
            MoveCard::new(source.board, source.list, source.index, dest.index).apply(set)
        }
        // is_cancelled() already returned for every destination-less variant
        _ => Ok(Outcome::Unchanged),
    }
}
