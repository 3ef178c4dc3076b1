//! Grid geometry: axis ranges, steps, and index/value conversions.

use crate::error::GridError;

/// Immutable geometry of a (time × underlying) grid.
///
/// The time axis works backwards: `t(0) == t_max` is the maturity end of
/// the analysis and `t(num_t - 1)` is the present.
///
/// # Examples
/// ```
/// use fdm_core::grid::GridSpec;
///
/// let spec = GridSpec::new(0.25, 0.0, 1.0, 10.0, 0.0, 100.0).unwrap();
/// assert_eq!(spec.num_t(), 5);
/// assert_eq!(spec.num_s(), 11);
/// assert_eq!(spec.t(0), 1.0);
/// assert_eq!(spec.t(4), 0.0);
/// assert_eq!(spec.s(3), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    t_step: f64,
    t_min: f64,
    t_max: f64,
    s_step: f64,
    s_min: f64,
    s_max: f64,
    num_t: usize,
    num_s: usize,
}

impl GridSpec {
    /// Creates a grid geometry from axis ranges and steps.
    ///
    /// The number of nodes on each axis is `(max - min) / step + 1`,
    /// truncated, so ranges that are not an exact multiple of the step lose
    /// their fractional tail.
    ///
    /// # Errors
    /// - [`GridError::NonPositiveStep`] if either step is `<= 0`
    /// - [`GridError::EmptyRange`] if either range is empty or inverted
    /// - [`GridError::DegenerateAxis`] if a step exceeds its range, leaving
    ///   a single node on that axis
    pub fn new(
        t_step: f64,
        t_min: f64,
        t_max: f64,
        s_step: f64,
        s_min: f64,
        s_max: f64,
    ) -> Result<Self, GridError> {
        if !(t_step > 0.0) {
            return Err(GridError::NonPositiveStep {
                axis: "time",
                step: t_step,
            });
        }
        if !(s_step > 0.0) {
            return Err(GridError::NonPositiveStep {
                axis: "underlying",
                step: s_step,
            });
        }
        if !(t_max > t_min) {
            return Err(GridError::EmptyRange {
                axis: "time",
                min: t_min,
                max: t_max,
            });
        }
        if !(s_max > s_min) {
            return Err(GridError::EmptyRange {
                axis: "underlying",
                min: s_min,
                max: s_max,
            });
        }

        let num_t = ((t_max - t_min) / t_step) as usize + 1;
        let num_s = ((s_max - s_min) / s_step) as usize + 1;

        // a single-node axis has no interior and no bracketing pair
        if num_t < 2 {
            return Err(GridError::DegenerateAxis {
                axis: "time",
                step: t_step,
            });
        }
        if num_s < 2 {
            return Err(GridError::DegenerateAxis {
                axis: "underlying",
                step: s_step,
            });
        }

        Ok(Self {
            t_step,
            t_min,
            t_max,
            s_step,
            s_min,
            s_max,
            num_t,
            num_s,
        })
    }

    /// Number of nodes on the time axis.
    #[inline]
    pub fn num_t(&self) -> usize {
        self.num_t
    }

    /// Number of nodes on the underlying axis.
    #[inline]
    pub fn num_s(&self) -> usize {
        self.num_s
    }

    /// Step of the time axis.
    #[inline]
    pub fn t_step(&self) -> f64 {
        self.t_step
    }

    /// Step of the underlying axis.
    #[inline]
    pub fn s_step(&self) -> f64 {
        self.s_step
    }

    /// Lower bound of the underlying range.
    #[inline]
    pub fn s_min(&self) -> f64 {
        self.s_min
    }

    /// Upper bound of the underlying range.
    #[inline]
    pub fn s_max(&self) -> f64 {
        self.s_max
    }

    /// Converts an underlying index to its value: `s_min + is · s_step`.
    #[inline]
    pub fn s(&self, is: usize) -> f64 {
        self.s_min + is as f64 * self.s_step
    }

    /// Converts a time index to its value: `t_max - it · t_step`.
    ///
    /// Index 0 is the maturity end; index `num_t - 1` is the present.
    #[inline]
    pub fn t(&self, it: usize) -> f64 {
        self.t_max - it as f64 * self.t_step
    }

    /// Returns the index of the node at or directly below `s`.
    ///
    /// Callers must ensure `s_min < s < s_max`; the result is clamped so the
    /// bracketing pair `(is, is + 1)` always exists.
    #[inline]
    pub fn index_of_s(&self, s: f64) -> usize {
        let is = ((s - self.s_min) / self.s_step) as usize;
        is.min(self.num_s - 2)
    }
}
