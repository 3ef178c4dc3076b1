//! Backward time march from maturity to the present.
//!
//! The grid is zeroed, then one explicit step runs per time index from the
//! far end of the time axis down to the present slice. Before any work the
//! grid is asked whether the step sizes converge for the scheme's worst-case
//! volatility; a rejected grid is an answer, not an error.

use fdm_core::grid::Grid;
use fdm_models::instruments::ContingentClaim;

use crate::error::PricingError;
use crate::scheme::ExplicitScheme;

/// Result of a pricing run.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingOutcome {
    /// The march completed; present values are readable from the grid.
    Priced,
    /// The grid's step sizes fail the convergence condition for the
    /// scheme's worst-case volatility. The grid is untouched.
    GridRejected,
}

impl PricingOutcome {
    /// Whether the march ran to completion.
    #[inline]
    pub fn is_priced(&self) -> bool {
        matches!(self, Self::Priced)
    }
}

/// Callbacks invoked as the march progresses.
///
/// The default implementations do nothing, so an observer only pays for
/// what it overrides. Slice streaming is additionally gated behind
/// [`wants_slices`](Self::wants_slices) so the per-step buffer fill is
/// skipped entirely for observers that only track progress.
pub trait PricingObserver {
    /// Called whenever the completed percentage increases.
    fn on_progress(&mut self, _percent: u8) {}

    /// Called with each completed time slice, oldest first.
    ///
    /// Only invoked when [`wants_slices`](Self::wants_slices) returns true.
    fn on_slice(&mut self, _it: usize, _t: f64, _values: &[f64]) {}

    /// Whether completed slices should be buffered and streamed.
    fn wants_slices(&self) -> bool {
        false
    }
}

/// Observer that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl PricingObserver for NullObserver {}

/// Prices `claim` on `grid` under `scheme` at the risk-free rate `r`.
///
/// On [`PricingOutcome::Priced`] the present slice sits at the last time
/// index and is read with [`Grid::present`] or
/// [`Grid::present_interpolated`].
///
/// # Errors
/// [`PricingError::Boundary`] if the claim cannot produce a boundary value
/// at either edge of the underlying axis.
pub fn evaluate<G, C>(
    grid: &mut G,
    claim: &C,
    scheme: ExplicitScheme,
    r: f64,
) -> Result<PricingOutcome, PricingError>
where
    G: Grid,
    C: ContingentClaim,
{
    evaluate_observed(grid, claim, scheme, r, &mut NullObserver)
}

/// [`evaluate`] with progress and slice callbacks.
pub fn evaluate_observed<G, C, O>(
    grid: &mut G,
    claim: &C,
    scheme: ExplicitScheme,
    r: f64,
    observer: &mut O,
) -> Result<PricingOutcome, PricingError>
where
    G: Grid,
    C: ContingentClaim,
    O: PricingObserver,
{
    if !grid.validate(scheme.max_vol(), claim) {
        return Ok(PricingOutcome::GridRejected);
    }

    let num_t = grid.spec().num_t();
    let num_s = grid.spec().num_s();
    grid.reset();

    let mut percent: u8 = 0;
    let mut slice = if observer.wants_slices() {
        vec![0.0; num_s]
    } else {
        Vec::new()
    };

    for it in 0..num_t - 1 {
        scheme.step(it, grid, claim, r)?;

        if observer.wants_slices() {
            for (is, v) in slice.iter_mut().enumerate() {
                *v = grid.get(it + 1, is);
            }
            observer.on_slice(it + 1, grid.spec().t(it + 1), &slice);
        }
        let done = ((it + 1) * 100 / (num_t - 1)) as u8;
        if done > percent {
            percent = done;
            observer.on_progress(percent);
        }
    }

    Ok(PricingOutcome::Priced)
}
