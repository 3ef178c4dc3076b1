//! Error types for hedging strategies and objectives.

use fdm_pricing::PricingError;
use thiserror::Error;

/// Errors raised while evaluating a hedging strategy.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HedgingError {
    /// A candidate position vector does not match the number of hedge legs.
    #[error("wrong dimension: {actual} instead of: {expected}")]
    DimensionMismatch {
        /// Number of hedge legs in the portfolio.
        expected: usize,
        /// Length of the supplied position vector.
        actual: usize,
    },

    /// The strategy's grid fails the convergence condition for the scheme's
    /// worst-case volatility.
    #[error("grid rejected by convergence condition")]
    GridRejected,

    /// The pricing march failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl HedgingError {
    /// Whether this is a dimension mismatch.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}
