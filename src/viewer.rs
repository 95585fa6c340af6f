//! Transposition preview
//!
//! A viewer shows a saved chord sheet shifted by a pending number of
//! semitones. The shift is only applied to the sheet on [`TransposeView::commit`].

use tracing::debug;

use crate::transpose::transpose_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransposeView {
    committed: String,
    delta: i64,
}

impl TransposeView {
    pub fn new(chords: impl Into<String>) -> Self {
        Self {
            committed: chords.into(),
            delta: 0,
        }
    }

    /// Adjust the pending shift (`+1`/`-1` per button press).
    pub fn step(&mut self, semitones: i32) {
        self.delta += i64::from(semitones);
    }

    pub fn delta(&self) -> i64 {
        self.delta
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// True while a non-zero shift is pending.
    pub fn is_dirty(&self) -> bool {
        self.delta != 0
    }

    /// The committed sheet rendered at the pending shift.
    pub fn preview(&self) -> String {
        // rem_euclid(12) always fits in an i32
        transpose_text(&self.committed, self.delta.rem_euclid(12) as i32)
    }

    /// Make the preview the committed sheet and clear the pending shift.
    /// Returns `None` when nothing was pending.
    pub fn commit(&mut self) -> Option<&str> {
        if !self.is_dirty() {
            return None;
        }
        debug!(delta = self.delta, "committing transposition");
        self.committed = self.preview();
        self.delta = 0;
        Some(self.committed.as_str())
    }

    /// Drop the pending shift.
    pub fn reset(&mut self) {
        self.delta = 0;
    }
}
