//! # fdm_pricing: Explicit Finite-Difference Engine
//!
//! The backward time march over a value grid.
//!
//! This crate provides:
//! - [`scheme::ExplicitScheme`]: the per-step update rule, in constant and
//!   uncertain (Black-Scholes-Barenblatt) volatility variants
//! - [`pricer::evaluate`]: validation, reset, and the full march from
//!   maturity to the present
//! - [`pricer::PricingObserver`]: optional progress marks and completed-
//!   slice streaming
//!
//! Entirely synchronous and single-threaded: each step strictly depends on
//! the previous slice, so there is no parallelism to exploit inside one
//! march.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod pricer;
pub mod scheme;

mod error;

pub use error::PricingError;
pub use pricer::{evaluate, evaluate_observed, NullObserver, PricingObserver, PricingOutcome};
pub use scheme::{ExplicitScheme, SchemeError};
