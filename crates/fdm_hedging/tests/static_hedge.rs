//! Worst-case valuation of a binary option book under a volatility band,
//! naked and with a static vanilla hedge.
//!
//! The hedge reference values come from running the same book on the same
//! grid geometry by hand: a long binary call hedged with a tight call
//! spread is worth measurably more under worst-case dynamics than the
//! naked binary, and the long/short values are not negations of each
//! other.

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use fdm_core::grid::{FullGrid, GridSpec};
use fdm_models::analytical::BlackScholes;
use fdm_models::instruments::{BinaryOption, Direction, Instrument, Portfolio, VanillaOption};
use fdm_pricing::ExplicitScheme;
use fdm_hedging::{HedgeObjective, HedgingError, Maximum, Objective, Optimiser, OptimiserError, StaticHedgingStrategy};

const T_STEP: f64 = 0.0002;
const T_MAX: f64 = 1.0002;
const STRIKE: f64 = 100.0;
const STRIKE_LO: f64 = 90.0;
const STRIKE_HI: f64 = 110.0;
const SPOT: f64 = 100.0;
const MATURITY: f64 = 1.0;
const VOL_MIN: f64 = 0.1;
const VOL_MAX: f64 = 0.3;
const RATE: f64 = 0.04;
const TOLERANCE: f64 = 0.0001;

fn fine_grid() -> FullGrid {
    FullGrid::new(GridSpec::new(T_STEP, 0.0, T_MAX, 1.0, 0.0, 220.0).unwrap())
}

fn band() -> ExplicitScheme {
    ExplicitScheme::uncertain_volatility(VOL_MIN, VOL_MAX).unwrap()
}

fn mid_band_call_price(strike: f64) -> f64 {
    BlackScholes::new(SPOT, RATE, (VOL_MIN + VOL_MAX) / 2.0)
        .unwrap()
        .price_vanilla(strike, MATURITY, Direction::Call)
}

fn naked_binary_portfolio() -> Rc<RefCell<Portfolio>> {
    let mut portfolio = Portfolio::new();
    let binary = BinaryOption::new(Direction::Call, STRIKE, MATURITY).unwrap();
    portfolio.add_priced(Instrument::Binary(binary), 1.0);
    Rc::new(RefCell::new(portfolio))
}

fn hedged_binary_portfolio() -> Rc<RefCell<Portfolio>> {
    let portfolio = naked_binary_portfolio();
    {
        let mut p = portfolio.borrow_mut();
        let lo = VanillaOption::new(Direction::Call, STRIKE_LO, MATURITY).unwrap();
        let hi = VanillaOption::new(Direction::Call, STRIKE_HI, MATURITY).unwrap();
        p.add_hedge(Instrument::Vanilla(lo), -0.05, mid_band_call_price(STRIKE_LO));
        p.add_hedge(Instrument::Vanilla(hi), 0.05, mid_band_call_price(STRIKE_HI));
    }
    portfolio
}

#[test]
fn naked_binary_long_and_short_worst_case_values() {
    let portfolio = naked_binary_portfolio();
    let mut strategy =
        StaticHedgingStrategy::new(fine_grid(), Rc::clone(&portfolio), band(), RATE);

    assert!(strategy.run_pricing().unwrap().is_priced());
    assert_abs_diff_eq!(strategy.pnl_at(SPOT), 0.2886, epsilon = TOLERANCE);

    portfolio.borrow_mut().invert_positions();
    assert!(strategy.run_pricing().unwrap().is_priced());
    assert_abs_diff_eq!(strategy.pnl_at(SPOT), -0.7845, epsilon = TOLERANCE);
}

#[test]
fn call_spread_hedge_narrows_the_worst_case_band() {
    let portfolio = hedged_binary_portfolio();
    let mut strategy =
        StaticHedgingStrategy::new(fine_grid(), Rc::clone(&portfolio), band(), RATE);

    assert!(strategy.run_pricing().unwrap().is_priced());
    let long = strategy.pnl_at(SPOT);
    assert_abs_diff_eq!(long, 0.3666, epsilon = TOLERANCE);

    portfolio.borrow_mut().invert_positions();
    assert!(strategy.run_pricing().unwrap().is_priced());
    let short = strategy.pnl_at(SPOT);
    assert_abs_diff_eq!(short, -0.7112, epsilon = TOLERANCE);

    // the hedge tightens the bid/ask around the binary's worst case
    assert!(long > 0.2886);
    assert!(-short < 0.7845);
}

#[test]
fn dimension_mismatch_is_reported_before_any_pricing() {
    // a grid this coarse would be rejected, so reaching the march at all
    // would turn the error into a rejection instead
    let coarse = FullGrid::new(GridSpec::new(0.01, 0.0, 1.01, 1.0, 0.0, 220.0).unwrap());
    let mut strategy = StaticHedgingStrategy::new(coarse, hedged_binary_portfolio(), band(), RATE);
    let mut objective = HedgeObjective::new(&mut strategy, SPOT);

    assert_eq!(objective.dimension(), 2);
    let err = objective.evaluate(&[0.1]).unwrap_err();
    assert_eq!(
        err,
        HedgingError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn rejected_grid_surfaces_as_an_objective_error() {
    let coarse = FullGrid::new(GridSpec::new(0.01, 0.0, 1.01, 1.0, 0.0, 220.0).unwrap());
    let mut strategy = StaticHedgingStrategy::new(coarse, hedged_binary_portfolio(), band(), RATE);
    let mut objective = HedgeObjective::new(&mut strategy, SPOT);

    assert_eq!(objective.evaluate(&[-0.05, 0.05]), Err(HedgingError::GridRejected));
}

/// Evaluates the initial point plus a fixed candidate list, keeping the best.
struct BestOfCandidates {
    candidates: Vec<Vec<f64>>,
}

impl Optimiser for BestOfCandidates {
    fn maximise<O: Objective>(
        &mut self,
        objective: &mut O,
        initial: &[f64],
    ) -> Result<Maximum, OptimiserError> {
        let mut best = Maximum {
            point: initial.to_vec(),
            value: objective.evaluate(initial)?,
            iterations: 1,
        };
        for candidate in &self.candidates {
            let value = objective.evaluate(candidate)?;
            best.iterations += 1;
            if value > best.value {
                best.point = candidate.clone();
                best.value = value;
            }
        }
        Ok(best)
    }
}

#[test]
fn plugged_in_optimiser_improves_on_the_fixed_hedge() {
    let portfolio = hedged_binary_portfolio();
    let mut strategy =
        StaticHedgingStrategy::new(fine_grid(), Rc::clone(&portfolio), band(), RATE);
    let initial = strategy.hedge_positions();

    let mut objective = HedgeObjective::new(&mut strategy, SPOT);
    let mut optimiser = BestOfCandidates {
        candidates: vec![vec![-0.1, 0.1]],
    };
    let max = optimiser.maximise(&mut objective, &initial).unwrap();

    assert_eq!(max.iterations, 2);
    // the chosen allocation can only match or beat the starting one
    let fixed = 0.3666;
    assert!(max.value >= fixed - TOLERANCE);
    assert_eq!(max.point.len(), 2);
    // the strategy is left holding the last candidate evaluated
    assert_eq!(strategy.hedge_positions().len(), 2);
}
