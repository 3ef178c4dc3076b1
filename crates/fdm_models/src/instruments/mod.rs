//! Contingent-claim definitions.
//!
//! A claim is anything the finite-difference engine can march against.
//! To handle claims of different maturities within one analysis, the value
//! at maturity is treated like any other cashflow: whenever a claim pays at
//! a grid time, the payment is added to the grid value at that slice during
//! the march.
//!
//! Polymorphism is a tagged sum type, [`Instrument`], dispatched through the
//! [`ContingentClaim`] trait:
//! - [`VanillaOption`]: payoff `max(±(S − K), 0)` at maturity
//! - [`BinaryOption`]: cash-or-nothing 0/1 payoff at maturity
//! - [`Portfolio`]: position-weighted aggregate of other instruments
//!
//! Boundary values are only defined at implementation-specific extreme
//! underlying levels (deep in/out-of-the-money asymptotics); asking
//! anywhere else is an [`InstrumentError::BoundaryNotValid`]. The engine
//! only asks at the two extreme grid columns.

mod binary;
mod direction;
mod error;
mod portfolio;
mod traits;
mod vanilla;

pub use binary::BinaryOption;
pub use direction::Direction;
pub use error::InstrumentError;
pub use portfolio::{InstrumentId, Item, Portfolio};
pub use traits::ContingentClaim;
pub use vanilla::VanillaOption;

use fdm_core::grid::{CashflowSchedule, Grid};

/// Sum type over every claim the engine can price.
///
/// # Examples
/// ```
/// use fdm_models::instruments::{Direction, Instrument, VanillaOption};
/// use fdm_models::instruments::ContingentClaim;
///
/// let call = VanillaOption::new(Direction::Call, 100.0, 1.0).unwrap();
/// let claim = Instrument::Vanilla(call);
/// assert_eq!(claim.cashflow(1.0, 0.01, 110.0), 10.0);
/// ```
#[derive(Debug, Clone)]
pub enum Instrument {
    /// Plain vanilla option.
    Vanilla(VanillaOption),
    /// Binary cash-or-nothing option.
    Binary(BinaryOption),
    /// Composite portfolio of other instruments.
    Portfolio(Portfolio),
}

impl CashflowSchedule for Instrument {
    fn time_to_maturity(&self) -> f64 {
        match self {
            Instrument::Vanilla(o) => o.time_to_maturity(),
            Instrument::Binary(o) => o.time_to_maturity(),
            Instrument::Portfolio(p) => p.time_to_maturity(),
        }
    }

    fn time_to_nearest_cashflow(&self) -> f64 {
        match self {
            Instrument::Vanilla(o) => o.time_to_nearest_cashflow(),
            Instrument::Binary(o) => o.time_to_nearest_cashflow(),
            Instrument::Portfolio(p) => p.time_to_nearest_cashflow(),
        }
    }
}

impl ContingentClaim for Instrument {
    fn cashflow(&self, t: f64, t_step: f64, s: f64) -> f64 {
        match self {
            Instrument::Vanilla(o) => o.cashflow(t, t_step, s),
            Instrument::Binary(o) => o.cashflow(t, t_step, s),
            Instrument::Portfolio(p) => p.cashflow(t, t_step, s),
        }
    }

    fn boundary_value(&self, t: f64, t_step: f64, s: f64, r: f64) -> Result<f64, InstrumentError> {
        match self {
            Instrument::Vanilla(o) => o.boundary_value(t, t_step, s, r),
            Instrument::Binary(o) => o.boundary_value(t, t_step, s, r),
            Instrument::Portfolio(p) => p.boundary_value(t, t_step, s, r),
        }
    }

    fn boundary_value_extrapolated<G: Grid>(
        &self,
        it: usize,
        is: usize,
        grid: &G,
    ) -> Result<f64, InstrumentError> {
        match self {
            Instrument::Vanilla(o) => o.boundary_value_extrapolated(it, is, grid),
            Instrument::Binary(o) => o.boundary_value_extrapolated(it, is, grid),
            Instrument::Portfolio(p) => p.boundary_value_extrapolated(it, is, grid),
        }
    }
}
