//! Error types for analytical pricing.

use thiserror::Error;

/// Analytical pricing errors.
///
/// # Examples
/// ```
/// use fdm_models::analytical::{AnalyticalError, BlackScholes};
///
/// let err = BlackScholes::new(-1.0_f64, 0.04, 0.2).unwrap_err();
/// assert_eq!(err, AnalyticalError::InvalidSpot { spot: -1.0 });
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Spot price is zero or negative.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The offending spot value.
        spot: f64,
    },

    /// Volatility is zero or negative.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The offending volatility value.
        volatility: f64,
    },
}
