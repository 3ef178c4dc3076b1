//! Error types for grid construction.

use thiserror::Error;

/// Grid construction errors.
///
/// These errors occur when a [`crate::grid::GridSpec`] is created with
/// geometry that cannot describe a valid discretisation.
///
/// # Examples
/// ```
/// use fdm_core::grid::GridSpec;
/// use fdm_core::GridError;
///
/// let err = GridSpec::new(0.0, 0.0, 1.0, 1.0, 0.0, 100.0).unwrap_err();
/// assert_eq!(err, GridError::NonPositiveStep { axis: "time", step: 0.0 });
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// Step size is zero or negative.
    #[error("Non-positive {axis} step: {step}")]
    NonPositiveStep {
        /// Axis name ("time" or "underlying").
        axis: &'static str,
        /// The offending step value.
        step: f64,
    },

    /// Axis range is empty or inverted.
    #[error("Empty {axis} range: [{min}, {max}]")]
    EmptyRange {
        /// Axis name ("time" or "underlying").
        axis: &'static str,
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },

    /// Step is larger than the axis range, leaving a single node.
    #[error("Step {step} leaves a single node on the {axis} axis")]
    DegenerateAxis {
        /// Axis name ("time" or "underlying").
        axis: &'static str,
        /// The offending step value.
        step: f64,
    },
}
