//! Closed-form reference values.
//!
//! Black-Scholes prices are used to seed hedge unit prices and to validate
//! finite-difference results in tests; the engine never marches with them.

mod black_scholes;
mod distributions;
mod error;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
