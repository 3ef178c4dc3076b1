//! A derivative book with a static hedge, repriced as one claim.

use std::cell::RefCell;
use std::rc::Rc;

use fdm_core::grid::Grid;
use fdm_models::instruments::Portfolio;
use fdm_pricing::{
    evaluate, evaluate_observed, ExplicitScheme, PricingError, PricingObserver, PricingOutcome,
};

use crate::error::HedgingError;

/// One grid, one shared portfolio, and a repriceable mark-to-market P&L.
///
/// The grid is owned exclusively: every call to
/// [`run_pricing`](Self::run_pricing) overwrites its contents, so results
/// read between runs always refer to the latest run. The portfolio is
/// shared through `Rc<RefCell<_>>` with whoever mutates positions between
/// runs (an optimiser adapter, or a caller inverting the book for the
/// short side).
pub struct StaticHedgingStrategy<G: Grid> {
    grid: G,
    portfolio: Rc<RefCell<Portfolio>>,
    scheme: ExplicitScheme,
    rate: f64,
}

impl<G: Grid> StaticHedgingStrategy<G> {
    /// Creates a strategy over a grid, a shared portfolio, a stepping
    /// scheme, and a flat risk-free rate.
    pub fn new(
        grid: G,
        portfolio: Rc<RefCell<Portfolio>>,
        scheme: ExplicitScheme,
        rate: f64,
    ) -> Self {
        Self {
            grid,
            portfolio,
            scheme,
            rate,
        }
    }

    /// Prices the whole portfolio, overwriting the grid.
    ///
    /// # Errors
    /// [`PricingError`] if a boundary value cannot be produced.
    pub fn run_pricing(&mut self) -> Result<PricingOutcome, PricingError> {
        let portfolio = self.portfolio.borrow();
        evaluate(&mut self.grid, &*portfolio, self.scheme, self.rate)
    }

    /// [`run_pricing`](Self::run_pricing) with progress callbacks.
    pub fn run_pricing_observed<O: PricingObserver>(
        &mut self,
        observer: &mut O,
    ) -> Result<PricingOutcome, PricingError> {
        let portfolio = self.portfolio.borrow();
        evaluate_observed(&mut self.grid, &*portfolio, self.scheme, self.rate, observer)
    }

    /// Present value of the book at spot `s`, net of the cash paid for the
    /// hedge legs at their quoted unit prices.
    pub fn pnl_at(&self, s: f64) -> f64 {
        self.grid.present_interpolated(s) - self.portfolio.borrow().hedge_cost_basis()
    }

    /// Number of hedge legs in the shared portfolio.
    pub fn num_hedges(&self) -> usize {
        self.portfolio.borrow().num_hedges()
    }

    /// Current hedge positions, in portfolio insertion order.
    pub fn hedge_positions(&self) -> Vec<f64> {
        self.portfolio.borrow().hedge_positions()
    }

    /// One-line rendering of the hedge legs, for reports.
    pub fn hedge_positions_description(&self) -> String {
        let portfolio = self.portfolio.borrow();
        let legs: Vec<String> = portfolio
            .hedge_items()
            .map(|(id, _, item)| format!("{}: {:.4} @ {:.4}", id, item.position, item.unit_price))
            .collect();
        format!("[{}]", legs.join(", "))
    }

    /// Overwrites the hedge positions with a candidate vector.
    ///
    /// # Errors
    /// [`HedgingError::DimensionMismatch`] when the vector length differs
    /// from the number of hedge legs. The portfolio is untouched on error.
    pub fn set_hedge_positions(&mut self, positions: &[f64]) -> Result<(), HedgingError> {
        let expected = self.num_hedges();
        if positions.len() != expected {
            return Err(HedgingError::DimensionMismatch {
                expected,
                actual: positions.len(),
            });
        }
        self.portfolio.borrow_mut().set_hedge_positions(positions);
        Ok(())
    }

    /// The underlying grid, holding the surface of the latest run.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// A handle to the shared portfolio.
    pub fn portfolio(&self) -> Rc<RefCell<Portfolio>> {
        Rc::clone(&self.portfolio)
    }
}
