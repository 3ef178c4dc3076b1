//! Discretised (time × underlying) value surfaces.
//!
//! This module provides the grid contract shared by the pricing engine and
//! two interchangeable storage strategies:
//!
//! - [`FullGrid`]: retains every time slice; supports exporting the whole
//!   surface as delimited text after a pricing run.
//! - [`TwoStepGrid`]: retains exactly two time slices in a rolling window,
//!   trading O(num_t · num_s) memory for O(num_s) at the cost of forbidding
//!   random access outside the active window.
//!
//! Out-of-contract access (an index outside the rolling window, or a read of
//! a cell that was never written) is a usage bug and panics, in the same way
//! slice indexing does. Recoverable conditions are reported through `Result`
//! by the layers above.

mod full;
mod spec;
mod two_step;
mod window;

use std::io::{self, Write};

pub use full::FullGrid;
pub use spec::GridSpec;
pub use two_step::TwoStepGrid;
pub use window::RollingWindow;

/// Cashflow timing information the grid needs to gate convergence.
///
/// Implemented by every priceable claim in the layers above; the grid only
/// ever asks for the two times, never for values.
pub trait CashflowSchedule {
    /// Time to the final cashflow of the claim, as a year fraction.
    fn time_to_maturity(&self) -> f64;

    /// Time to the earliest cashflow of the claim, as a year fraction.
    ///
    /// For single-cashflow claims this equals
    /// [`time_to_maturity`](CashflowSchedule::time_to_maturity).
    fn time_to_nearest_cashflow(&self) -> f64;
}

/// Contract for a discretised value surface.
///
/// Cells are addressed by `(it, is)` where `it` indexes the time axis
/// (0 = maturity end, `num_t - 1` = present) and `is` indexes the
/// underlying axis.
pub trait Grid {
    /// Returns the grid geometry.
    fn spec(&self) -> &GridSpec;

    /// Returns the value of the cell at `(it, is)`.
    ///
    /// # Panics
    /// Panics if the indices are out of range, or (for rolling storage) if
    /// the cell is outside the active window or was never written.
    fn get(&self, it: usize, is: usize) -> f64;

    /// Writes the value of the cell at `(it, is)`.
    ///
    /// # Panics
    /// Panics if the indices are out of range, or (for rolling storage) if
    /// the time index is outside the active window.
    fn set(&mut self, it: usize, is: usize, value: f64);

    /// Returns the grid to its empty state: all cells zero, rolling
    /// windows rewound.
    fn reset(&mut self);

    /// Returns the value at the present slice (`it == num_t - 1`).
    fn present(&self, is: usize) -> f64 {
        self.get(self.spec().num_t() - 1, is)
    }

    /// Returns the present value for any underlying level within the grid
    /// range, linearly interpolated between the two bracketing nodes and
    /// clamped at the range edges.
    fn present_interpolated(&self, s: f64) -> f64 {
        let spec = self.spec();
        if s <= spec.s_min() {
            self.present(0)
        } else if s >= spec.s_max() {
            self.present(spec.num_s() - 1)
        } else {
            let is = spec.index_of_s(s);
            let s1 = spec.s(is);
            let v1 = self.present(is);
            let v2 = self.present(is + 1);
            v1 + (v2 - v1) * (s - s1) / spec.s_step()
        }
    }

    /// Checks that the grid resolution is numerically reliable for the
    /// given volatility and claim.
    ///
    /// Reproduces the configured stability gate
    /// `floor(time_to_nearest_cashflow / t_step) > vol² · num_s²`
    /// with a strict inequality: equality is `false`. A `false` result means
    /// the pricing run must not be performed with this combination.
    fn validate<C: CashflowSchedule + ?Sized>(&self, vol: f64, claim: &C) -> bool {
        let spec = self.spec();
        let critical_steps = (claim.time_to_nearest_cashflow() / spec.t_step()).trunc();
        let num_s = spec.num_s() as f64;
        critical_steps > vol * vol * num_s * num_s
    }

    /// Writes the values of one time slice as a single delimited line:
    /// `time; v(0); v(1); …; v(num_s - 1)`.
    fn write_step<W: Write>(&self, it: usize, out: &mut W) -> io::Result<()> {
        let spec = self.spec();
        write!(out, "{};", spec.t(it))?;
        for is in 0..spec.num_s() - 1 {
            write!(out, "{}; ", self.get(it, is))?;
        }
        writeln!(out, "{}", self.get(it, spec.num_s() - 1))
    }
}
