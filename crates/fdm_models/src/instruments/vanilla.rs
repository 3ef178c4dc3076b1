//! Plain vanilla option.

use fdm_core::grid::{CashflowSchedule, Grid};

use super::{ContingentClaim, Direction, InstrumentError};

/// European vanilla option paying `max(±(S − K), 0)` at maturity.
///
/// Boundary values use deep in/out-of-the-money asymptotics. A call is deep
/// in the money at `s >= 2K` (value `s − K·e^{r(t − maturity)}`) and deep
/// out at `s <= K / 10` (value 0); the thresholds swap roles for a put.
/// Outside those regions the boundary is undefined.
///
/// # Examples
/// ```
/// use fdm_models::instruments::{ContingentClaim, Direction, VanillaOption};
///
/// let put = VanillaOption::new(Direction::Put, 100.0, 1.0).unwrap();
/// assert_eq!(put.cashflow(1.0, 0.01, 90.0), 10.0);
/// assert_eq!(put.cashflow(0.5, 0.01, 90.0), 0.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption {
    direction: Direction,
    strike: f64,
    maturity: f64,
}

impl VanillaOption {
    /// Creates a vanilla option.
    ///
    /// # Errors
    /// - [`InstrumentError::InvalidStrike`] if `strike <= 0`
    /// - [`InstrumentError::InvalidMaturity`] if `maturity <= 0`
    pub fn new(direction: Direction, strike: f64, maturity: f64) -> Result<Self, InstrumentError> {
        if !(strike > 0.0) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !(maturity > 0.0) {
            return Err(InstrumentError::InvalidMaturity { maturity });
        }
        Ok(Self {
            direction,
            strike,
            maturity,
        })
    }

    /// The option direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// The maturity as a year fraction.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }
}

impl CashflowSchedule for VanillaOption {
    fn time_to_maturity(&self) -> f64 {
        self.maturity
    }

    fn time_to_nearest_cashflow(&self) -> f64 {
        self.maturity
    }
}

impl ContingentClaim for VanillaOption {
    fn cashflow(&self, t: f64, t_step: f64, s: f64) -> f64 {
        if t > self.maturity - t_step / 2.0 && t < self.maturity + t_step / 2.0 {
            match self.direction {
                Direction::Call => (s - self.strike).max(0.0),
                Direction::Put => (self.strike - s).max(0.0),
            }
        } else {
            0.0
        }
    }

    fn boundary_value(&self, t: f64, t_step: f64, s: f64, r: f64) -> Result<f64, InstrumentError> {
        if t > self.maturity + t_step / 2.0 {
            return Ok(0.0);
        }
        let discount = (r * (t - self.maturity)).exp();
        match self.direction {
            Direction::Call if s >= self.strike * 2.0 => Ok(s - self.strike * discount),
            Direction::Put if s <= self.strike / 10.0 => Ok(self.strike - s * discount),
            Direction::Put if s >= self.strike * 2.0 => Ok(0.0),
            Direction::Call if s <= self.strike / 10.0 => Ok(0.0),
            _ => Err(InstrumentError::BoundaryNotValid { s }),
        }
    }

    fn boundary_value_extrapolated<G: Grid>(
        &self,
        it: usize,
        is: usize,
        grid: &G,
    ) -> Result<f64, InstrumentError> {
        let spec = grid.spec();
        if spec.t(it) > self.maturity + spec.t_step() / 2.0 {
            return Ok(0.0);
        }
        let s = spec.s(is);
        match self.direction {
            Direction::Call if s >= self.strike * 2.0 => {
                Ok(2.0 * grid.get(it, is - 1) - grid.get(it, is - 2))
            }
            Direction::Put if s <= self.strike / 10.0 => {
                Ok(2.0 * grid.get(it, is + 1) - grid.get(it, is + 2))
            }
            Direction::Put if s >= self.strike * 2.0 => Ok(0.0),
            Direction::Call if s <= self.strike / 10.0 => Ok(0.0),
            _ => Err(InstrumentError::BoundaryNotValid { s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            VanillaOption::new(Direction::Call, 0.0, 1.0),
            Err(InstrumentError::InvalidStrike { .. })
        ));
        assert!(matches!(
            VanillaOption::new(Direction::Call, 100.0, -1.0),
            Err(InstrumentError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn cashflow_is_localised_to_the_maturity_slice() {
        let call = VanillaOption::new(Direction::Call, 100.0, 1.0).unwrap();
        assert_eq!(call.cashflow(1.0, 0.01, 120.0), 20.0);
        assert_eq!(call.cashflow(1.004, 0.01, 120.0), 20.0);
        assert_eq!(call.cashflow(1.006, 0.01, 120.0), 0.0);
        assert_eq!(call.cashflow(0.9, 0.01, 120.0), 0.0);
        assert_eq!(call.cashflow(1.0, 0.01, 80.0), 0.0);
    }

    #[test]
    fn call_boundary_is_linear_deep_in_the_money() {
        let call = VanillaOption::new(Direction::Call, 100.0, 1.0).unwrap();
        let v = call.boundary_value(0.0, 0.01, 220.0, 0.04).unwrap();
        assert_relative_eq!(v, 220.0 - 100.0 * (-0.04f64).exp(), epsilon = 1e-12);
        assert_eq!(call.boundary_value(0.0, 0.01, 5.0, 0.04).unwrap(), 0.0);
    }

    #[test]
    fn put_boundary_discounts_the_underlying_leg() {
        let put = VanillaOption::new(Direction::Put, 100.0, 1.0).unwrap();
        let v = put.boundary_value(0.0, 0.01, 5.0, 0.04).unwrap();
        assert_relative_eq!(v, 100.0 - 5.0 * (-0.04f64).exp(), epsilon = 1e-12);
        assert_eq!(put.boundary_value(0.0, 0.01, 220.0, 0.04).unwrap(), 0.0);
    }

    #[test]
    fn boundary_is_zero_after_maturity() {
        let call = VanillaOption::new(Direction::Call, 100.0, 1.0).unwrap();
        assert_eq!(call.boundary_value(1.5, 0.01, 150.0, 0.04).unwrap(), 0.0);
    }

    #[test]
    fn boundary_outside_valid_region_is_an_error() {
        let call = VanillaOption::new(Direction::Call, 100.0, 1.0).unwrap();
        assert_eq!(
            call.boundary_value(0.5, 0.01, 150.0, 0.04),
            Err(InstrumentError::BoundaryNotValid { s: 150.0 })
        );
        let put = VanillaOption::new(Direction::Put, 100.0, 1.0).unwrap();
        assert!(put.boundary_value(0.5, 0.01, 50.0, 0.04).is_err());
    }

    #[test]
    fn extrapolated_boundary_continues_the_interior_slope() {
        use fdm_core::grid::{FullGrid, Grid, GridSpec};

        let spec = GridSpec::new(0.5, 0.0, 1.0, 10.0, 0.0, 220.0).unwrap();
        let mut grid = FullGrid::new(spec);
        let call = VanillaOption::new(Direction::Call, 100.0, 1.0).unwrap();

        let last = grid.spec().num_s() - 1;
        grid.set(1, last - 2, 100.0);
        grid.set(1, last - 1, 110.0);
        let v = call.boundary_value_extrapolated(1, last, &grid).unwrap();
        assert_relative_eq!(v, 120.0, epsilon = 1e-12);
    }
}
