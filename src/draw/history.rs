//! Linear undo history of raster snapshots.

use super::raster::{RasterError, Snapshot};

/// Ordered snapshots plus a cursor at the one currently displayed.
///
/// The cursor is `None` exactly when the history is empty; otherwise it
/// always indexes a stored snapshot. Pushing while the cursor is behind the
/// newest entry discards everything after the cursor, so there is no redo.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
    step: Option<usize>,
    /// Maximum number of snapshots kept (0 = unlimited)
    max_snapshots: usize,
    /// Whether snapshots are gzip-compressed when pushed
    compress: bool,
}

impl History {
    /// Creates an empty history.
    ///
    /// When `max_snapshots` is positive, the oldest snapshots are dropped once
    /// the limit is exceeded.
    pub fn new(max_snapshots: usize, compress: bool) -> Self {
        Self {
            snapshots: Vec::new(),
            step: None,
            max_snapshots,
            compress,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the displayed snapshot, `None` while empty.
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.step.and_then(|step| self.snapshots.get(step))
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Returns true if [`History::undo`] would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.step.is_some_and(|step| step > 0)
    }

    /// Appends a snapshot after the cursor and moves the cursor onto it.
    ///
    /// Snapshots after the cursor are discarded first. Fails only if
    /// compression is enabled and the encoder errors, in which case the
    /// history is left untouched.
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), RasterError> {
        let snapshot = if self.compress {
            snapshot.compressed()?
        } else {
            snapshot
        };

        let keep = self.step.map_or(0, |step| step + 1);
        if keep < self.snapshots.len() {
            log::debug!(
                "Discarding {} snapshot(s) after undo cursor",
                self.snapshots.len() - keep
            );
            self.snapshots.truncate(keep);
        }
        self.snapshots.push(snapshot);

        if self.max_snapshots > 0 && self.snapshots.len() > self.max_snapshots {
            let excess = self.snapshots.len() - self.max_snapshots;
            self.snapshots.drain(..excess);
        }

        self.step = Some(self.snapshots.len() - 1);
        Ok(())
    }

    /// Moves the cursor back one step and returns the snapshot now displayed.
    ///
    /// Returns `None` (and changes nothing) at the first snapshot or when empty.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let step = self.step.filter(|&step| step > 0)? - 1;
        self.step = Some(step);
        self.snapshots.get(step)
    }
}
