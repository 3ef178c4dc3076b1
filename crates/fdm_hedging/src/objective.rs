//! Black-box objective functions over hedge allocations.

use fdm_core::grid::Grid;

use crate::error::HedgingError;
use crate::strategy::StaticHedgingStrategy;

/// A real-valued function of a position vector, suitable for a derivative-
/// free maximiser.
///
/// Implementations may carry expensive state (a whole pricing grid) and are
/// therefore evaluated through `&mut self`.
pub trait Objective {
    /// Length of the position vectors this objective accepts.
    fn dimension(&self) -> usize;

    /// Evaluates the objective at `point`.
    ///
    /// # Errors
    /// [`HedgingError::DimensionMismatch`] if `point` has the wrong length;
    /// other variants when the underlying valuation fails.
    fn evaluate(&mut self, point: &[f64]) -> Result<f64, HedgingError>;
}

/// Exposes a [`StaticHedgingStrategy`] as an [`Objective`]: the candidate
/// vector becomes the hedge positions, the book is repriced, and the value
/// is the P&L at a fixed spot.
///
/// Each evaluation mutates the shared portfolio in place; the positions
/// left behind are those of the last candidate evaluated.
pub struct HedgeObjective<'a, G: Grid> {
    strategy: &'a mut StaticHedgingStrategy<G>,
    spot: f64,
}

impl<'a, G: Grid> HedgeObjective<'a, G> {
    /// Creates an objective that values the strategy at `spot`.
    pub fn new(strategy: &'a mut StaticHedgingStrategy<G>, spot: f64) -> Self {
        Self { strategy, spot }
    }
}

impl<G: Grid> Objective for HedgeObjective<'_, G> {
    fn dimension(&self) -> usize {
        self.strategy.num_hedges()
    }

    fn evaluate(&mut self, point: &[f64]) -> Result<f64, HedgingError> {
        self.strategy.set_hedge_positions(point)?;
        if !self.strategy.run_pricing()?.is_priced() {
            return Err(HedgingError::GridRejected);
        }
        Ok(self.strategy.pnl_at(self.spot))
    }
}
