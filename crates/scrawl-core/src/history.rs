//! Versioned element-list history with undo/redo.

use crate::elements::Element;

/// A linear log of full element-list snapshots with a cursor at the
/// active one.
///
/// Two write paths exist: `append` commits a new undoable state and cuts
/// off any redo branch, while `overwrite` replaces the active snapshot in
/// place. Drags, resizes and in-progress strokes overwrite so that a
/// gesture coalesces into a single history entry instead of one per
/// pointer-move.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Element>>,
    index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding a single empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Vec::new()],
            index: 0,
        }
    }

    /// Create a history whose initial snapshot is the given element list.
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            snapshots: vec![elements],
            index: 0,
        }
    }

    /// The active snapshot.
    pub fn current(&self) -> &[Element] {
        &self.snapshots[self.index]
    }

    /// Commit a new snapshot. Any snapshots after the cursor (the redo
    /// branch) are discarded.
    pub fn append(&mut self, elements: Vec<Element>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(elements);
        self.index += 1;
    }

    /// Replace the active snapshot in place without growing the log.
    pub fn overwrite(&mut self, elements: Vec<Element>) {
        self.snapshots[self.index] = elements;
    }

    /// Step back one snapshot. Silent no-op at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one snapshot. Silent no-op at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.index < self.snapshots.len() - 1 {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index < self.snapshots.len() - 1
    }

    /// Number of snapshots in the log.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the active snapshot.
    pub fn index(&self) -> usize {
        self.index
    }
}
