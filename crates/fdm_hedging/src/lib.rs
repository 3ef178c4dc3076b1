//! # fdm_hedging: Static Hedging Strategies
//!
//! Mark-to-market valuation of a derivative plus a static hedge book, and
//! the adapter that exposes the hedge positions to a black-box maximiser.
//!
//! This crate sits above the pricing engine in the architecture: it owns a
//! grid, shares a portfolio, and reprices the whole book for every
//! candidate hedge allocation.
//!
//! ## Modules
//!
//! - [`strategy`]: [`StaticHedgingStrategy`], one grid plus one shared
//!   portfolio and a repriceable P&L
//! - [`objective`]: the [`Objective`] black-box function trait and the
//!   [`HedgeObjective`] adapter over a strategy
//! - [`optimiser`]: the [`Optimiser`] capability trait for externally
//!   supplied multivariate maximisers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod objective;
pub mod optimiser;
pub mod strategy;

mod error;

pub use error::HedgingError;
pub use objective::{HedgeObjective, Objective};
pub use optimiser::{Maximum, Optimiser, OptimiserError};
pub use strategy::StaticHedgingStrategy;
