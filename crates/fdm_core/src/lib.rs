//! # fdm_core: Grid Foundation for Finite-Difference Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! fdm_core serves as the bottom layer of the pricing stack, providing:
//! - Grid geometry and index/value conversions (`grid::GridSpec`)
//! - The shared grid contract (`grid::Grid`)
//! - Full-retention storage with CSV export (`grid::FullGrid`)
//! - Bounded rolling-window storage (`grid::TwoStepGrid`)
//! - Error types: `GridError` (`error`)
//!
//! ## Grid Orientation
//!
//! The time axis works backwards: index 0 is the maturity end of the
//! analysis and index `num_t - 1` is the present. A backward time march
//! therefore iterates *forwards* over the time index while real time
//! decreases towards today.
//!
//! ## Usage Examples
//!
//! ```rust
//! use fdm_core::grid::{FullGrid, Grid, GridSpec};
//!
//! let spec = GridSpec::new(0.25, 0.0, 1.0, 10.0, 0.0, 100.0).unwrap();
//! let mut grid = FullGrid::new(spec);
//!
//! grid.set(0, 5, 42.0);
//! assert_eq!(grid.get(0, 5), 42.0);
//!
//! // Index 0 on the time axis is the far end of the analysis
//! assert_eq!(grid.spec().t(0), 1.0);
//! assert_eq!(grid.spec().s(5), 50.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod grid;

pub use error::GridError;
