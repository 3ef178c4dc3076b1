//! Explicit time-stepping update rules.
//!
//! Per interior grid point, using central differences:
//!
//! ```text
//! delta(it, is) = (V(it, is+1) - V(it, is-1)) / (2·s_step)
//! gamma(it, is) = (V(it, is+1) - 2·V(it, is) + V(it, is-1)) / s_step²
//! ```
//!
//! The two scheme variants differ only in how theta is derived from those
//! quantities.

use fdm_core::grid::Grid;
use fdm_models::instruments::ContingentClaim;
use thiserror::Error;

use crate::error::PricingError;

/// Scheme construction errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemeError {
    /// Volatility is zero or negative.
    #[error("Non-positive volatility: σ = {vol}")]
    NonPositiveVolatility {
        /// The offending volatility.
        vol: f64,
    },

    /// Volatility band has `vol_min > vol_max`.
    #[error("Inverted volatility band: [{vol_min}, {vol_max}]")]
    InvertedBand {
        /// Lower band edge.
        vol_min: f64,
        /// Upper band edge.
        vol_max: f64,
    },
}

/// First derivative of the value surface with respect to the underlying,
/// by central difference.
#[inline]
pub fn delta<G: Grid>(grid: &G, it: usize, is: usize) -> f64 {
    (grid.get(it, is + 1) - grid.get(it, is - 1)) / (2.0 * grid.spec().s_step())
}

/// Second derivative of the value surface with respect to the underlying,
/// by central difference.
#[inline]
pub fn gamma<G: Grid>(grid: &G, it: usize, is: usize) -> f64 {
    let s_step = grid.spec().s_step();
    (grid.get(it, is + 1) - 2.0 * grid.get(it, is) + grid.get(it, is - 1)) / (s_step * s_step)
}

/// Explicit-scheme update rule for the backward march.
///
/// # Variants
/// - `ConstantVolatility`: classic Black-Scholes dynamics with one σ
/// - `UncertainVolatility`: Black-Scholes-Barenblatt worst-case dynamics
///   over a σ band; at every grid point independently the σ that minimises
///   the instantaneous value increment is selected (σ_min where gamma is
///   positive, σ_max elsewhere), producing the seller-conservative surface
///
/// # Examples
/// ```
/// use fdm_pricing::ExplicitScheme;
///
/// let scheme = ExplicitScheme::uncertain_volatility(0.1, 0.3).unwrap();
/// assert_eq!(scheme.max_vol(), 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplicitScheme {
    /// Single known volatility.
    ConstantVolatility {
        /// The volatility.
        vol: f64,
    },
    /// Volatility known only to lie within a band.
    UncertainVolatility {
        /// Lower band edge.
        vol_min: f64,
        /// Upper band edge.
        vol_max: f64,
    },
}

impl ExplicitScheme {
    /// Creates a constant-volatility scheme.
    ///
    /// # Errors
    /// [`SchemeError::NonPositiveVolatility`] if `vol <= 0`.
    pub fn constant_volatility(vol: f64) -> Result<Self, SchemeError> {
        if !(vol > 0.0) {
            return Err(SchemeError::NonPositiveVolatility { vol });
        }
        Ok(Self::ConstantVolatility { vol })
    }

    /// Creates an uncertain-volatility scheme over `[vol_min, vol_max]`.
    ///
    /// # Errors
    /// - [`SchemeError::NonPositiveVolatility`] if either edge is `<= 0`
    /// - [`SchemeError::InvertedBand`] if `vol_min > vol_max`
    pub fn uncertain_volatility(vol_min: f64, vol_max: f64) -> Result<Self, SchemeError> {
        if !(vol_min > 0.0) {
            return Err(SchemeError::NonPositiveVolatility { vol: vol_min });
        }
        if !(vol_max > 0.0) {
            return Err(SchemeError::NonPositiveVolatility { vol: vol_max });
        }
        if vol_min > vol_max {
            return Err(SchemeError::InvertedBand { vol_min, vol_max });
        }
        Ok(Self::UncertainVolatility { vol_min, vol_max })
    }

    /// The largest volatility the scheme can apply, for the grid's
    /// convergence gate.
    #[inline]
    pub fn max_vol(&self) -> f64 {
        match *self {
            Self::ConstantVolatility { vol } => vol,
            Self::UncertainVolatility { vol_max, .. } => vol_max,
        }
    }

    /// The time derivative of the value at one grid point.
    #[inline]
    pub fn theta(&self, s: f64, value: f64, delta: f64, gamma: f64, r: f64) -> f64 {
        match *self {
            Self::ConstantVolatility { vol } => {
                -0.5 * vol * vol * s * s * gamma - r * s * delta + r * value
            }
            Self::UncertainVolatility { vol_min, vol_max } => {
                let vol = if gamma > 0.0 { vol_min } else { vol_max };
                r * value - r * s * delta - 0.5 * vol * vol * s * s * gamma
            }
        }
    }

    /// Computes time slice `it + 1` from slice `it`.
    ///
    /// The extreme columns take the claim's boundary value; every interior
    /// point advances by `V - θ·t_step` plus any cashflow the claim pays in
    /// the new slice.
    ///
    /// # Errors
    /// [`PricingError::Boundary`] if the claim's boundary value is invalid
    /// at either grid edge.
    pub fn step<G: Grid, C: ContingentClaim>(
        &self,
        it: usize,
        grid: &mut G,
        claim: &C,
        r: f64,
    ) -> Result<(), PricingError> {
        let spec = grid.spec();
        let num_s = spec.num_s();
        let t_step = spec.t_step();
        let t_next = spec.t(it + 1);
        let s_min = spec.s_min();
        let s_max = spec.s_max();

        grid.set(it + 1, 0, claim.boundary_value(t_next, t_step, s_min, r)?);
        for is in 1..num_s - 1 {
            let s = grid.spec().s(is);
            let value = grid.get(it, is);
            let delta = delta(grid, it, is);
            let gamma = gamma(grid, it, is);
            let cashflow = claim.cashflow(t_next, t_step, s);
            let theta = self.theta(s, value, delta, gamma, r);
            grid.set(it + 1, is, value - theta * t_step + cashflow);
        }
        grid.set(
            it + 1,
            num_s - 1,
            claim.boundary_value(t_next, t_step, s_max, r)?,
        );
        Ok(())
    }
}
