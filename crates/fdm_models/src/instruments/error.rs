//! Error types for instrument definitions and boundary evaluation.

use thiserror::Error;

/// Instrument errors.
///
/// # Variants
/// - `InvalidStrike` / `InvalidMaturity`: rejected at construction
/// - `BoundaryNotValid`: a boundary value was requested at an underlying
///   level that does not satisfy the claim's far-from-strike predicate
///
/// # Examples
/// ```
/// use fdm_models::instruments::{Direction, InstrumentError, VanillaOption};
/// use fdm_models::instruments::ContingentClaim;
///
/// let call = VanillaOption::new(Direction::Call, 100.0, 1.0).unwrap();
/// // 150 is neither deep in nor deep out of the money
/// let err = call.boundary_value(0.5, 0.01, 150.0, 0.04).unwrap_err();
/// assert_eq!(err, InstrumentError::BoundaryNotValid { s: 150.0 });
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Strike is zero or negative.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The offending strike.
        strike: f64,
    },

    /// Maturity is zero or negative.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The offending maturity.
        maturity: f64,
    },

    /// Boundary value requested outside the claim's valid boundary region.
    #[error("Boundary not valid at s = {s}")]
    BoundaryNotValid {
        /// The underlying level of the invalid request.
        s: f64,
    },
}
