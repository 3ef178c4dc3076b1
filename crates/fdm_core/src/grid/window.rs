//! Rolling-window state machine for the two-slice grid.

use std::cell::{Cell, RefCell};

/// Window-advance state for [`super::TwoStepGrid`].
///
/// Tracks the oldest retained time index and a per-cell written bitmap over
/// the two physical slices. At any moment only the three consecutive time
/// indices `[min_index_of_t, min_index_of_t + 2]` are addressable, and only
/// the newest two are retained: touching `min_index_of_t + 2` (read or
/// write) advances the window by one, discarding the slice that the new
/// index reuses.
///
/// Kept separate from the value storage so the invariant can be exercised
/// on its own.
#[derive(Debug)]
pub struct RollingWindow {
    num_s: usize,
    min_index_of_t: Cell<usize>,
    written: RefCell<Vec<bool>>,
}

impl RollingWindow {
    /// Creates a window over two slices of `num_s` cells each, with every
    /// cell initially marked written.
    pub fn new(num_s: usize) -> Self {
        Self {
            num_s,
            min_index_of_t: Cell::new(0),
            written: RefCell::new(vec![true; 2 * num_s]),
        }
    }

    /// The oldest time index currently addressable.
    #[inline]
    pub fn min_index_of_t(&self) -> usize {
        self.min_index_of_t.get()
    }

    /// Maps a `(it, is)` access to a slot in the two-slice storage,
    /// advancing the window when the access touches `min_index_of_t + 2`.
    ///
    /// On advance the slice that time index `it` reuses is marked unwritten
    /// before the slot is returned.
    ///
    /// # Panics
    /// Panics if `it` lies outside `[min_index_of_t, min_index_of_t + 2]`
    /// or `is >= num_s`.
    pub fn slot(&self, it: usize, is: usize) -> usize {
        let min = self.min_index_of_t.get();
        assert!(
            it >= min && it <= min + 2,
            "time index {} outside rolling window [{}, {}]",
            it,
            min,
            min + 2
        );
        assert!(
            is < self.num_s,
            "underlying index {} out of range [0, {})",
            is,
            self.num_s
        );

        let slice = it % 2;
        if it == min + 2 {
            self.min_index_of_t.set(min + 1);
            let mut written = self.written.borrow_mut();
            written[slice * self.num_s..(slice + 1) * self.num_s].fill(false);
        }
        slice * self.num_s + is
    }

    /// Marks a slot as written.
    #[inline]
    pub fn mark_written(&self, slot: usize) {
        self.written.borrow_mut()[slot] = true;
    }

    /// Returns whether a slot has been written since it entered the window.
    #[inline]
    pub fn is_written(&self, slot: usize) -> bool {
        self.written.borrow()[slot]
    }

    /// Rewinds the window to time index 0 and marks every cell written.
    pub fn reset(&self) {
        self.min_index_of_t.set(0);
        self.written.borrow_mut().fill(true);
    }
}
