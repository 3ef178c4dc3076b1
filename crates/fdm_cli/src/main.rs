//! fdm - Worst-case pricing of a single-underlying option book
//!
//! Prices one vanilla or binary option by explicit finite differences,
//! quotes a bid/ask from the long and short worst-case values, and
//! optionally reprices the book with a static hedge of further options.
//!
//! # Examples
//!
//! ```text
//! fdm --kind binary --direction call --strike 100 --maturity 1 \
//!     --spot 100 --vol-max 0.3 --vol-min 0.1 --rate 0.04 \
//!     --hedge vanilla:call:90:1:-0.05 --hedge vanilla:call:110:1:0.05
//! ```

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fdm_core::grid::{FullGrid, Grid, GridSpec, TwoStepGrid};
use fdm_hedging::StaticHedgingStrategy;
use fdm_models::analytical::BlackScholes;
use fdm_models::instruments::{
    BinaryOption, Direction, Instrument, Portfolio, VanillaOption,
};
use fdm_pricing::{evaluate, ExplicitScheme, PricingObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OptionKind {
    /// Vanilla call or put
    Vanilla,
    /// Cash-or-nothing binary
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    Call,
    Put,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Call => Direction::Call,
            DirectionArg::Put => Direction::Put,
        }
    }
}

/// One hedge leg, parsed from `TYPE:DIR:STRIKE:MATURITY:POSITION[:PRICE]`.
#[derive(Debug, Clone, PartialEq)]
struct HedgeSpec {
    kind: OptionKind,
    direction: Direction,
    strike: f64,
    maturity: f64,
    position: f64,
    /// Quoted price; when absent the Black-Scholes value at the hedge
    /// pricing volatility is used.
    price: Option<f64>,
}

fn parse_hedge(s: &str) -> Result<HedgeSpec, String> {
    let fields: Vec<&str> = s.split(':').collect();
    if fields.len() != 5 && fields.len() != 6 {
        return Err(format!(
            "expected TYPE:DIR:STRIKE:MATURITY:POSITION[:PRICE], got {} fields",
            fields.len()
        ));
    }
    let kind = match fields[0] {
        "vanilla" => OptionKind::Vanilla,
        "binary" => OptionKind::Binary,
        other => return Err(format!("unknown hedge type: {other}")),
    };
    let direction = match fields[1] {
        "call" => Direction::Call,
        "put" => Direction::Put,
        other => return Err(format!("unknown hedge direction: {other}")),
    };
    let number = |name: &str, raw: &str| -> Result<f64, String> {
        raw.parse::<f64>()
            .map_err(|_| format!("invalid hedge {name}: {raw}"))
    };
    Ok(HedgeSpec {
        kind,
        direction,
        strike: number("strike", fields[2])?,
        maturity: number("maturity", fields[3])?,
        position: number("position", fields[4])?,
        price: match fields.get(5) {
            Some(raw) => Some(number("price", raw)?),
            None => None,
        },
    })
}

/// Worst-case finite-difference pricing of a single-underlying option book
#[derive(Parser)]
#[command(name = "fdm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Type of the option to price
    #[arg(long, value_enum)]
    kind: OptionKind,

    /// Direction of the option to price
    #[arg(long, value_enum)]
    direction: DirectionArg,

    /// Strike of the option to price
    #[arg(long)]
    strike: f64,

    /// Maturity in years of the option to price
    #[arg(long)]
    maturity: f64,

    /// Signed number of contracts
    #[arg(long, default_value_t = 1.0)]
    position: f64,

    /// Spot value of the underlying
    #[arg(long)]
    spot: f64,

    /// Volatility (upper band edge when --vol-min is given)
    #[arg(long)]
    vol_max: f64,

    /// Lower band edge; switches to worst-case uncertain-volatility pricing
    #[arg(long)]
    vol_min: Option<f64>,

    /// Flat risk-free rate
    #[arg(long, default_value_t = 0.04)]
    rate: f64,

    /// Underlying step of the grid
    #[arg(long, default_value_t = 1.0)]
    s_step: f64,

    /// Time step of the grid
    #[arg(long, default_value_t = 0.0002)]
    t_step: f64,

    /// Hedge leg, TYPE:DIR:STRIKE:MATURITY:POSITION[:PRICE]; repeatable
    #[arg(long = "hedge", value_parser = parse_hedge)]
    hedges: Vec<HedgeSpec>,

    /// Write the long-book value surface of the final stage as CSV
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print a hash mark per percent of each pricing run
    #[arg(long)]
    progress: bool,
}

/// Prints one `#` per completed percent of a march.
struct HashMarks;

impl PricingObserver for HashMarks {
    fn on_progress(&mut self, _percent: u8) {
        print!("#");
        let _ = io::stdout().flush();
    }
}

fn build_instrument(
    kind: OptionKind,
    direction: Direction,
    strike: f64,
    maturity: f64,
) -> Result<Instrument> {
    let instrument = match kind {
        OptionKind::Vanilla => Instrument::Vanilla(VanillaOption::new(direction, strike, maturity)?),
        OptionKind::Binary => Instrument::Binary(BinaryOption::new(direction, strike, maturity)?),
    };
    Ok(instrument)
}

/// Grid geometry covering every strike and maturity in play: the
/// underlying spans twice the largest strike and the march starts one
/// year past the last cashflow.
fn grid_spec(cli: &Cli, max_strike: f64, max_maturity: f64) -> Result<GridSpec> {
    GridSpec::new(
        cli.t_step,
        0.0,
        max_maturity + 1.0,
        cli.s_step,
        0.0,
        max_strike * 2.0,
    )
    .context("invalid grid geometry")
}

fn price_once<G: Grid>(
    strategy: &mut StaticHedgingStrategy<G>,
    spot: f64,
    progress: bool,
) -> Result<f64> {
    let outcome = if progress {
        let mut marks = HashMarks;
        let outcome = strategy.run_pricing_observed(&mut marks)?;
        println!();
        outcome
    } else {
        strategy.run_pricing()?
    };
    if !outcome.is_priced() {
        let spec = strategy.grid().spec();
        bail!(
            "underlying step: {}, time step: {} will not converge; refine the time step",
            spec.s_step(),
            spec.t_step()
        );
    }
    Ok(strategy.pnl_at(spot))
}

/// Prices the book long, then short, leaving the positions as found.
fn run_stage<G: Grid>(
    grid: G,
    portfolio: Rc<RefCell<Portfolio>>,
    scheme: ExplicitScheme,
    cli: &Cli,
) -> Result<(f64, f64, StaticHedgingStrategy<G>)> {
    let mut strategy = StaticHedgingStrategy::new(grid, portfolio, scheme, cli.rate);
    let long = price_once(&mut strategy, cli.spot, cli.progress)?;
    strategy.portfolio().borrow_mut().invert_positions();
    let short = price_once(&mut strategy, cli.spot, cli.progress)?;
    strategy.portfolio().borrow_mut().invert_positions();
    Ok((long, short, strategy))
}

/// Reprices the long book on a dense grid and writes the whole surface.
fn export_surface(
    path: &Path,
    spec: GridSpec,
    portfolio: &Rc<RefCell<Portfolio>>,
    scheme: ExplicitScheme,
    rate: f64,
) -> Result<()> {
    let mut grid = FullGrid::new(spec);
    let book = portfolio.borrow();
    if !evaluate(&mut grid, &*book, scheme, rate)?.is_priced() {
        bail!("grid will not converge; nothing to export");
    }
    drop(book);

    let file = File::create(path)
        .with_context(|| format!("cannot create export file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let lines = grid.export_csv(&mut out)?;
    info!("exported {} time slices to {}", lines, path.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let (scheme, hedge_price_vol) = match cli.vol_min {
        Some(vol_min) => (
            ExplicitScheme::uncertain_volatility(vol_min, cli.vol_max)?,
            (vol_min + cli.vol_max) / 2.0,
        ),
        None => (ExplicitScheme::constant_volatility(cli.vol_max)?, cli.vol_max),
    };

    info!(
        spot = cli.spot,
        rate = cli.rate,
        s_step = cli.s_step,
        t_step = cli.t_step,
        "pricing {:?} {:?} strike {} maturity {}",
        cli.kind,
        Direction::from(cli.direction),
        cli.strike,
        cli.maturity
    );

    let priced = build_instrument(cli.kind, cli.direction.into(), cli.strike, cli.maturity)?;
    let portfolio = Rc::new(RefCell::new(Portfolio::new()));
    portfolio.borrow_mut().add_priced(priced, cli.position);

    // First stage: the naked book
    let spec = grid_spec(cli, cli.strike, cli.maturity)?;
    let (long, short, _) = run_stage(
        TwoStepGrid::new(spec.clone()),
        Rc::clone(&portfolio),
        scheme,
        cli,
    )?;
    println!("Long value (no hedge):  {long:.4}");
    println!("Short value (no hedge): {short:.4}");
    println!("Proposed bid: {:.4}, ask: {:.4}", long, -short);

    if cli.hedges.is_empty() {
        if let Some(path) = &cli.export {
            export_surface(path, spec, &portfolio, scheme, cli.rate)?;
        }
        return Ok(());
    }

    // Second stage: the same book carrying the static hedge
    let mut max_strike = cli.strike;
    let mut max_maturity = cli.maturity;
    let pricer = BlackScholes::new(cli.spot, cli.rate, hedge_price_vol)?;
    for hedge in &cli.hedges {
        let unit_price = hedge.price.unwrap_or_else(|| match hedge.kind {
            OptionKind::Vanilla => {
                pricer.price_vanilla(hedge.strike, hedge.maturity, hedge.direction)
            }
            OptionKind::Binary => {
                pricer.price_binary(hedge.strike, hedge.maturity, hedge.direction)
            }
        });
        info!(
            strike = hedge.strike,
            maturity = hedge.maturity,
            position = hedge.position,
            unit_price,
            "adding hedge leg"
        );
        let instrument =
            build_instrument(hedge.kind, hedge.direction, hedge.strike, hedge.maturity)?;
        portfolio
            .borrow_mut()
            .add_hedge(instrument, hedge.position, unit_price);
        max_strike = max_strike.max(hedge.strike);
        max_maturity = max_maturity.max(hedge.maturity);
    }

    let spec = grid_spec(cli, max_strike, max_maturity)?;
    let (long, short, strategy) = run_stage(
        TwoStepGrid::new(spec.clone()),
        Rc::clone(&portfolio),
        scheme,
        cli,
    )?;
    println!(
        "Long value, hedge {}:  {long:.4}",
        strategy.hedge_positions_description()
    );
    println!(
        "Short value, hedge {}: {short:.4}",
        strategy.hedge_positions_description()
    );
    println!("Proposed bid: {:.4}, ask: {:.4}", long, -short);

    if let Some(path) = &cli.export {
        export_surface(path, spec, &portfolio, scheme, cli.rate)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hedge_spec_parses_without_price() {
        let hedge = parse_hedge("vanilla:call:90:1:-0.05").unwrap();
        assert_eq!(
            hedge,
            HedgeSpec {
                kind: OptionKind::Vanilla,
                direction: Direction::Call,
                strike: 90.0,
                maturity: 1.0,
                position: -0.05,
                price: None,
            }
        );
    }

    #[test]
    fn hedge_spec_parses_with_explicit_price() {
        let hedge = parse_hedge("binary:put:50:0.5:2:0.31").unwrap();
        assert_eq!(hedge.kind, OptionKind::Binary);
        assert_eq!(hedge.direction, Direction::Put);
        assert_eq!(hedge.price, Some(0.31));
    }

    #[test]
    fn hedge_spec_rejects_malformed_input() {
        assert!(parse_hedge("vanilla:call:90:1").unwrap_err().contains("fields"));
        assert!(parse_hedge("swap:call:90:1:1").unwrap_err().contains("type"));
        assert!(parse_hedge("vanilla:up:90:1:1").unwrap_err().contains("direction"));
        assert!(parse_hedge("vanilla:call:x:1:1").unwrap_err().contains("strike"));
    }

    #[test]
    fn cli_arguments_are_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
