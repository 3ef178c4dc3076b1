//! Error types for the pricing march.

use fdm_models::instruments::InstrumentError;
use thiserror::Error;

/// Errors raised during a pricing march.
///
/// A failed convergence gate is *not* an error: the pricer reports it as
/// [`crate::PricingOutcome::GridRejected`] and leaves retry policy to the
/// caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A boundary value was requested outside its valid region; the march
    /// cannot continue.
    #[error("boundary evaluation failed: {0}")]
    Boundary(#[from] InstrumentError),
}
