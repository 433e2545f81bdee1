//! The state store: holds the current snapshot and replaces it on change.

use crate::error::Result;
use crate::op::{Apply, Outcome};
use crate::reorder::apply_drag;
use crate::types::{BoardSet, DragResult};
use std::sync::Arc;

/// Holds the current board snapshot.
///
/// The store's only primitive beyond reading is replacing the snapshot
/// wholesale; every transformation lives in the operations. Snapshots handed
/// out by [`snapshot`](Store::snapshot) are immutable and stay valid after
/// later replacements.
#[derive(Debug, Clone, Default)]
pub struct Store {
    current: Arc<BoardSet>,
}

impl Store {
    /// Create a store holding an empty board set
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<BoardSet> {
        Arc::clone(&self.current)
    }

    /// Replace the current snapshot
    pub fn replace(&mut self, next: BoardSet) {
        self.current = Arc::new(next);
    }

    /// Apply an operation to the current snapshot, replacing it if the
    /// operation changed anything.
    ///
    /// Returns whether it did. Creation forms clear their input exactly when
    /// this is true; a rejected submission leaves the input untouched.
    pub fn apply<O: Apply>(&mut self, op: &O) -> Result<bool> {
        let outcome = op.apply(&self.current)?;
        Ok(self.commit(outcome))
    }

    /// Apply a completed drag gesture
    pub fn drag(&mut self, result: &DragResult) -> Result<bool> {
        let outcome = apply_drag(&self.current, result)?;
        Ok(self.commit(outcome))
    }

    fn commit(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Changed(next) => {
                self.replace(next);
                true
            }
            Outcome::Unchanged => false,
        }
    }
}
