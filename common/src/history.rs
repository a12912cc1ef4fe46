use crate::board::{Board, GridLocation, Mark};

/// Snapshot of the board plus the cell played to reach it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub squares: Board,
    /// Index of the cell played, `None` for the initial empty board
    pub location: Option<usize>,
}

impl HistoryEntry {
    pub fn initial() -> Self {
        Self {
            squares: Board::new(),
            location: None,
        }
    }

    pub fn grid_location(&self) -> Option<GridLocation> {
        self.location.and_then(GridLocation::from_index)
    }
}

/// Ordered list of snapshots, never empty.
///
/// Entries are only ever appended; a move made after rewinding first drops
/// every entry past the step it was made from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, the initial entry can't be removed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step of the most recent entry
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Play `mark` at `index` on top of the snapshot at `from_step`.
    ///
    /// Entries after `from_step` are dropped before the new one is appended.
    /// Returns the step of the new entry, or `None` (history untouched) if
    /// the step doesn't exist or the cell can't take the mark.
    pub fn branch(&mut self, from_step: usize, index: usize, mark: Mark) -> Option<usize> {
        let base = self.entries.get(from_step)?;
        let squares = base.squares.with_mark(index, mark)?;

        self.entries.truncate(from_step + 1);
        self.entries.push(HistoryEntry {
            squares,
            location: Some(index),
        });
        Some(self.last_step())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
