//! Rolling two-slice grid storage.

use super::{Grid, GridSpec, RollingWindow};

/// Memory-optimised [`Grid`] implementation retaining two time slices.
///
/// Stores `2 · num_s` cells regardless of the number of time steps, so a
/// march of any length runs in constant memory. In exchange, only the three
/// consecutive time indices of the active [`RollingWindow`] are addressable,
/// historical slices cannot be exported, and reading a cell that was never
/// written after a window advance panics.
///
/// # Examples
/// ```
/// use fdm_core::grid::{Grid, GridSpec, TwoStepGrid};
///
/// let spec = GridSpec::new(0.1, 0.0, 1.0, 1.0, 0.0, 5.0).unwrap();
/// let mut grid = TwoStepGrid::new(spec);
/// grid.set(0, 3, 1.0);
/// grid.set(1, 3, 2.0);
/// grid.set(2, 3, 3.0); // advances the window; index 0 is gone
/// assert_eq!(grid.get(2, 3), 3.0);
/// ```
#[derive(Debug)]
pub struct TwoStepGrid {
    spec: GridSpec,
    nodes: Vec<f64>,
    window: RollingWindow,
}

impl TwoStepGrid {
    /// Creates a rolling grid with both slices initialised to zero.
    pub fn new(spec: GridSpec) -> Self {
        let num_s = spec.num_s();
        Self {
            spec,
            nodes: vec![0.0; 2 * num_s],
            window: RollingWindow::new(num_s),
        }
    }

    /// The oldest time index currently addressable.
    #[inline]
    pub fn min_index_of_t(&self) -> usize {
        self.window.min_index_of_t()
    }
}

impl Grid for TwoStepGrid {
    fn spec(&self) -> &GridSpec {
        &self.spec
    }

    fn get(&self, it: usize, is: usize) -> f64 {
        let slot = self.window.slot(it, is);
        assert!(
            self.window.is_written(slot),
            "cell ({}, {}) not set",
            it,
            is
        );
        self.nodes[slot]
    }

    fn set(&mut self, it: usize, is: usize, value: f64) {
        let slot = self.window.slot(it, is);
        self.nodes[slot] = value;
        self.window.mark_written(slot);
    }

    fn reset(&mut self) {
        self.nodes.fill(0.0);
        self.window.reset();
    }
}
