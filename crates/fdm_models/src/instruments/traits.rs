//! The contingent-claim contract.

use fdm_core::grid::{CashflowSchedule, Grid};

use super::InstrumentError;

/// Core contract for a claim priced by the finite-difference engine.
///
/// A claim exposes its cashflows slice by slice and its asymptotic value at
/// the extreme edges of the underlying range. The engine adds cashflows to
/// the grid during the backward march and queries boundary values only at
/// the two extreme columns.
pub trait ContingentClaim: CashflowSchedule {
    /// The cashflow generated in one time slice for a given underlying
    /// level.
    ///
    /// Returns a payment if the claim pays at `t ± t_step / 2`, zero
    /// otherwise.
    fn cashflow(&self, t: f64, t_step: f64, s: f64) -> f64;

    /// The claim value for extreme underlying levels.
    ///
    /// Only defined when `s` is at or beyond the claim's deep in/out-of-the-
    /// money thresholds; the thresholds depend on the claim and its
    /// direction.
    ///
    /// # Errors
    /// [`InstrumentError::BoundaryNotValid`] if `s` does not satisfy the
    /// far-from-strike predicate. The engine cannot continue past such a
    /// request, so callers must treat the error as fatal for the current
    /// march.
    fn boundary_value(&self, t: f64, t_step: f64, s: f64, r: f64) -> Result<f64, InstrumentError>;

    /// Alternate boundary estimator: linear extrapolation from the two
    /// adjacent interior grid nodes.
    ///
    /// Behaves under the same validity contract as
    /// [`boundary_value`](ContingentClaim::boundary_value) but derives the
    /// value from the current grid content instead of closed-form
    /// asymptotics. Not used by the default pricing path.
    ///
    /// # Errors
    /// [`InstrumentError::BoundaryNotValid`] outside the valid boundary
    /// region.
    fn boundary_value_extrapolated<G: Grid>(
        &self,
        it: usize,
        is: usize,
        grid: &G,
    ) -> Result<f64, InstrumentError>;
}
