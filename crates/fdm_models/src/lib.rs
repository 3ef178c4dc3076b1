//! # fdm_models: Instruments for Finite-Difference Pricing
//!
//! Contingent-claim definitions and analytical reference formulas.
//!
//! This crate provides:
//! - The [`instruments::ContingentClaim`] contract (cashflow + boundary
//!   value) that the pricing engine marches against
//! - Vanilla and binary cash-or-nothing options
//! - [`instruments::Portfolio`], a composite claim aggregating signed
//!   positions of other claims
//! - Closed-form Black-Scholes values (`analytical`) used to seed hedge
//!   prices and to validate the finite-difference results
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch
//! - **Instance-identity portfolio keys**: structurally identical legs are
//!   distinct entries, addressed by opaque handles
//! - Analytical formulas generic over `T: Float`; the engine itself runs
//!   in `f64`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
