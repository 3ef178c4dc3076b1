//! The explicit march on a fine grid must agree with the closed-form
//! Black-Scholes value for vanilla options, in both directions and both
//! in and out of the money.

use approx::assert_abs_diff_eq;
use fdm_core::grid::{Grid, GridSpec, TwoStepGrid};
use fdm_models::analytical::BlackScholes;
use fdm_models::instruments::{Direction, Instrument, Portfolio, VanillaOption};
use fdm_pricing::{evaluate, ExplicitScheme, PricingOutcome};

const T_STEP: f64 = 0.00025;
const MATURITY: f64 = 1.0;
const VOL: f64 = 0.22;
const RATE: f64 = 0.04;
const TOLERANCE: f64 = 0.005;

fn fine_spec() -> GridSpec {
    GridSpec::new(T_STEP, 0.0, MATURITY + T_STEP, 1.0, 0.0, 220.0).unwrap()
}

fn price_vanilla_on_grid(direction: Direction, strike: f64, spot: f64) -> f64 {
    let option = VanillaOption::new(direction, strike, MATURITY).unwrap();
    let mut portfolio = Portfolio::new();
    portfolio.add_priced(Instrument::Vanilla(option), 1.0);

    let mut grid = TwoStepGrid::new(fine_spec());
    let scheme = ExplicitScheme::constant_volatility(VOL).unwrap();
    let outcome = evaluate(&mut grid, &portfolio, scheme, RATE).unwrap();
    assert_eq!(outcome, PricingOutcome::Priced);

    grid.present_interpolated(spot)
}

fn closed_form(direction: Direction, strike: f64, spot: f64) -> f64 {
    BlackScholes::new(spot, RATE, VOL)
        .unwrap()
        .price_vanilla(strike, MATURITY, direction)
}

#[test]
fn at_the_money_call_matches_black_scholes() {
    let fdm = price_vanilla_on_grid(Direction::Call, 100.0, 100.0);
    let bs = closed_form(Direction::Call, 100.0, 100.0);
    assert_abs_diff_eq!(fdm, bs, epsilon = TOLERANCE);
}

#[test]
fn in_the_money_call_matches_black_scholes() {
    let fdm = price_vanilla_on_grid(Direction::Call, 80.0, 100.0);
    let bs = closed_form(Direction::Call, 80.0, 100.0);
    assert_abs_diff_eq!(fdm, bs, epsilon = TOLERANCE);
}

#[test]
fn in_the_money_put_matches_black_scholes() {
    let fdm = price_vanilla_on_grid(Direction::Put, 100.0, 90.0);
    let bs = closed_form(Direction::Put, 100.0, 90.0);
    assert_abs_diff_eq!(fdm, bs, epsilon = TOLERANCE);
}

#[test]
fn out_of_the_money_put_matches_black_scholes() {
    let fdm = price_vanilla_on_grid(Direction::Put, 110.0, 100.0);
    let bs = closed_form(Direction::Put, 110.0, 100.0);
    assert_abs_diff_eq!(fdm, bs, epsilon = TOLERANCE);
}

#[test]
fn uncertain_band_collapses_to_constant_when_degenerate() {
    // a single-width band must reproduce the constant-volatility price for
    // a convex payoff
    let option = VanillaOption::new(Direction::Call, 100.0, MATURITY).unwrap();
    let mut portfolio = Portfolio::new();
    portfolio.add_priced(Instrument::Vanilla(option), 1.0);

    let constant = price_vanilla_on_grid(Direction::Call, 100.0, 100.0);

    let mut grid = TwoStepGrid::new(fine_spec());
    let band = ExplicitScheme::uncertain_volatility(VOL, VOL).unwrap();
    assert!(evaluate(&mut grid, &portfolio, band, RATE).unwrap().is_priced());

    assert_abs_diff_eq!(grid.present_interpolated(100.0), constant, epsilon = 1e-9);
}
