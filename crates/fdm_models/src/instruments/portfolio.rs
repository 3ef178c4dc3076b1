//! Composite portfolio claim.

use std::fmt;

use fdm_core::grid::{CashflowSchedule, Grid};

use super::{ContingentClaim, Instrument, InstrumentError};

/// Opaque handle to one portfolio entry.
///
/// Handles are assigned at insertion time and carry instance identity:
/// adding two structurally identical instruments yields two distinct
/// handles and two distinct entries. This matters for hedge baskets built
/// from repeated legs, which must not collapse into one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstrumentId(usize);

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attributes of one instrument held in a [`Portfolio`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// Signed amount of the instrument held.
    pub position: f64,
    /// Price of 1.0 position of the instrument.
    pub unit_price: f64,
    /// True if the instrument hedges the priced one.
    pub is_hedge: bool,
}

/// Container of instruments exposing the [`ContingentClaim`] contract.
///
/// A portfolio can be priced exactly like a single instrument: its cashflow
/// and boundary value are the position-weighted sums over its constituents.
/// Entries keep insertion order.
///
/// # Examples
/// ```
/// use fdm_models::instruments::{
///     ContingentClaim, Direction, Instrument, Portfolio, VanillaOption,
/// };
///
/// let mut portfolio = Portfolio::new();
/// let call = VanillaOption::new(Direction::Call, 100.0, 1.0).unwrap();
/// let id = portfolio.add_priced(Instrument::Vanilla(call), 2.0);
///
/// assert_eq!(portfolio.cashflow(1.0, 0.01, 110.0), 20.0);
/// portfolio.invert_positions();
/// assert_eq!(portfolio.position(id), -2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    entries: Vec<(Instrument, Item)>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instrument with explicit attributes, returning its handle.
    pub fn add(&mut self, instrument: Instrument, item: Item) -> InstrumentId {
        self.entries.push((instrument, item));
        InstrumentId(self.entries.len() - 1)
    }

    /// Adds an instrument to be priced (not a hedge, zero cost basis).
    pub fn add_priced(&mut self, instrument: Instrument, position: f64) -> InstrumentId {
        self.add(
            instrument,
            Item {
                position,
                unit_price: 0.0,
                is_hedge: false,
            },
        )
    }

    /// Adds a hedge leg with its quoted or theoretical unit price.
    pub fn add_hedge(
        &mut self,
        instrument: Instrument,
        position: f64,
        unit_price: f64,
    ) -> InstrumentId {
        self.add(
            instrument,
            Item {
                position,
                unit_price,
                is_hedge: true,
            },
        )
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the portfolio holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The position of an entry.
    ///
    /// # Panics
    /// Panics if the handle does not belong to this portfolio.
    pub fn position(&self, id: InstrumentId) -> f64 {
        self.entries[id.0].1.position
    }

    /// Overwrites the position of an entry.
    ///
    /// # Panics
    /// Panics if the handle does not belong to this portfolio.
    pub fn set_position(&mut self, id: InstrumentId, position: f64) {
        self.entries[id.0].1.position = position;
    }

    /// Negates every position in place.
    ///
    /// Pricing, inverting, and repricing yields the worst-case valuation of
    /// the opposite side of the trade; under uncertain volatility the two
    /// results are not negations of each other.
    pub fn invert_positions(&mut self) {
        for (_, item) in &mut self.entries {
            item.position = -item.position;
        }
    }

    /// Iterates over all entries in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (InstrumentId, &Instrument, &Item)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (instrument, item))| (InstrumentId(i), instrument, item))
    }

    /// Iterates over the hedge entries in insertion order.
    pub fn hedge_items(&self) -> impl Iterator<Item = (InstrumentId, &Instrument, &Item)> {
        self.items().filter(|(_, _, item)| item.is_hedge)
    }

    /// Number of hedge entries.
    pub fn num_hedges(&self) -> usize {
        self.hedge_items().count()
    }

    /// The current hedge-position vector, in insertion order.
    pub fn hedge_positions(&self) -> Vec<f64> {
        self.hedge_items().map(|(_, _, item)| item.position).collect()
    }

    /// Overwrites the hedge positions, in insertion order.
    ///
    /// # Panics
    /// Panics if `positions.len()` differs from the number of hedge
    /// entries; callers validate the dimension first.
    pub fn set_hedge_positions(&mut self, positions: &[f64]) {
        let hedges: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, (_, item))| item.is_hedge)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hedges.len(), positions.len(), "hedge dimension mismatch");
        for (&i, &position) in hedges.iter().zip(positions) {
            self.entries[i].1.position = position;
        }
    }

    /// Total cash cost of establishing the hedge at its unit prices.
    pub fn hedge_cost_basis(&self) -> f64 {
        self.hedge_items()
            .map(|(_, _, item)| item.position * item.unit_price)
            .sum()
    }
}

impl CashflowSchedule for Portfolio {
    fn time_to_maturity(&self) -> f64 {
        self.entries
            .iter()
            .map(|(instrument, _)| instrument.time_to_maturity())
            .fold(0.0, f64::max)
    }

    fn time_to_nearest_cashflow(&self) -> f64 {
        self.entries
            .iter()
            .map(|(instrument, _)| instrument.time_to_maturity())
            .fold(f64::MAX, f64::min)
    }
}

impl ContingentClaim for Portfolio {
    fn cashflow(&self, t: f64, t_step: f64, s: f64) -> f64 {
        self.entries
            .iter()
            .map(|(instrument, item)| instrument.cashflow(t, t_step, s) * item.position)
            .sum()
    }

    fn boundary_value(&self, t: f64, t_step: f64, s: f64, r: f64) -> Result<f64, InstrumentError> {
        let mut value = 0.0;
        for (instrument, item) in &self.entries {
            value += instrument.boundary_value(t, t_step, s, r)? * item.position;
        }
        Ok(value)
    }

    fn boundary_value_extrapolated<G: Grid>(
        &self,
        it: usize,
        is: usize,
        grid: &G,
    ) -> Result<f64, InstrumentError> {
        let mut value = 0.0;
        for (instrument, item) in &self.entries {
            value += instrument.boundary_value_extrapolated(it, is, grid)? * item.position;
        }
        Ok(value)
    }
}
