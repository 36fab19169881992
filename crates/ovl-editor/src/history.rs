//! Snapshot-based undo/redo history.
//!
//! Every discrete user action pushes a full structural clone of the
//! document; intermediate gesture frames push nothing. History is linear:
//! a new snapshot after an undo discards the abandoned future. The stack
//! is a bounded ring — once over capacity the oldest entry is evicted and
//! the cursor shifts with it.

use ovl_core::Layout;

const DEFAULT_CAPACITY: usize = 50;

/// Bounded stack of immutable document snapshots plus a cursor.
pub struct History {
    snapshots: Vec<Layout>,
    /// Index of the snapshot matching the live document.
    cursor: usize,
    capacity: usize,
}

impl History {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record the current document state.
    ///
    /// A snapshot identical to the current entry is dropped (repeated
    /// no-op edits must not grow history). Otherwise any redo branch past
    /// the cursor is truncated, the clone is appended, and the front is
    /// evicted when over capacity. Returns whether an entry was pushed.
    pub fn snapshot(&mut self, layout: &Layout) -> bool {
        if self.snapshots.get(self.cursor) == Some(layout) {
            return false;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(layout.clone());
        self.cursor = self.snapshots.len() - 1;

        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
            self.cursor -= 1;
            log::trace!("history at capacity, evicted oldest snapshot");
        }
        true
    }

    /// Step back; `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<Layout> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.snapshots[self.cursor].clone())
    }

    /// Step forward; `None` at the newest entry.
    pub fn redo(&mut self) -> Option<Layout> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.snapshots[self.cursor].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor + 1 < self.snapshots.len()
    }

    /// Drop everything. Used when a wholesale new/loaded document replaces
    /// the current one; the caller re-seeds with the fresh state.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
