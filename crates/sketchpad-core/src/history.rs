//! Bounded undo history of raster snapshots.

use std::collections::VecDeque;

/// Maximum number of undo entries to keep.
pub const UNDO_CAPACITY: usize = 20;

/// A full-buffer snapshot paired with the content flag at capture time.
#[derive(Debug)]
pub struct UndoEntry<S> {
    pub snapshot: S,
    pub has_content: bool,
}

impl<S> UndoEntry<S> {
    pub fn new(snapshot: S, has_content: bool) -> Self {
        Self {
            snapshot,
            has_content,
        }
    }
}

/// Undo stack with a capped depth.
///
/// Entries are pushed and popped at the tail. Once the store holds
/// `UNDO_CAPACITY` entries, each push evicts the oldest entry at the head.
#[derive(Debug)]
pub struct UndoStore<S> {
    entries: VecDeque<UndoEntry<S>>,
}

impl<S> Default for UndoStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> UndoStore<S> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(UNDO_CAPACITY),
        }
    }

    /// Push an entry, evicting the oldest one when the store is full.
    ///
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, entry: UndoEntry<S>) -> Option<UndoEntry<S>> {
        let evicted = if self.entries.len() == UNDO_CAPACITY {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Remove and return the most recently pushed entry.
    pub fn pop(&mut self) -> Option<UndoEntry<S>> {
        self.entries.pop_back()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
