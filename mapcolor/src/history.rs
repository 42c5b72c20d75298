//! Bounded undo log of coloring actions.
//!
//! Overflow evicts from the front, so the most recent action can always be
//! reverted no matter how long play has gone on.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX_UNDO_STEPS;
use crate::model::{PaletteIndex, RegionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    pub region_id: RegionId,
    pub previous_color: Option<PaletteIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoHistory {
    entries: VecDeque<UndoEntry>,
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        UndoHistory::new(DEFAULT_MAX_UNDO_STEPS)
    }
}

impl UndoHistory {
    /// A capacity of zero disables undo; every push is dropped.
    pub fn new(capacity: usize) -> Self {
        UndoHistory {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: UndoEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop_back()
    }

    pub fn discard_last(&mut self) {
        self.entries.pop_back();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &UndoEntry> {
        self.entries.iter()
    }
}

impl Extend<UndoEntry> for UndoHistory {
    fn extend<T: IntoIterator<Item = UndoEntry>>(&mut self, iter: T) {
        for e in iter {
            self.push(e);
        }
    }
}
