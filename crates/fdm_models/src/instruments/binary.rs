//! Binary cash-or-nothing option.

use fdm_core::grid::{CashflowSchedule, Grid};

use super::{ContingentClaim, Direction, InstrumentError};

/// Binary cash-or-nothing option.
///
/// Pays 1 at maturity if the underlying finishes on the in-the-money side
/// of the strike (at or above for a call, below for a put), 0 otherwise.
/// Boundary values are either a pure discount factor (payment certain) or
/// zero (payment impossible); the far-from-strike thresholds are `1.5 K`
/// and `K / 2`.
///
/// # Examples
/// ```
/// use fdm_models::instruments::{BinaryOption, ContingentClaim, Direction};
///
/// let digital = BinaryOption::new(Direction::Call, 100.0, 1.0).unwrap();
/// assert_eq!(digital.cashflow(1.0, 0.01, 100.0), 1.0);
/// assert_eq!(digital.cashflow(1.0, 0.01, 99.0), 0.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOption {
    direction: Direction,
    strike: f64,
    maturity: f64,
}

impl BinaryOption {
    /// Creates a binary cash-or-nothing option.
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

    fn pays_at_boundary(&self, s: f64) -> Option<bool> {
        match self.direction {
            Direction::Call if s >= self.strike * 1.5 => Some(true),
            Direction::Put if s <= self.strike / 2.0 => Some(true),
            Direction::Put if s >= self.strike * 1.5 => Some(false),
            Direction::Call if s <= self.strike / 2.0 => Some(false),
            _ => None,
        }
    }
}

impl CashflowSchedule for BinaryOption {
    fn time_to_maturity(&self) -> f64 {
        self.maturity
    }

    fn time_to_nearest_cashflow(&self) -> f64 {
        self.maturity
    }
}

impl ContingentClaim for BinaryOption {
    fn cashflow(&self, t: f64, t_step: f64, s: f64) -> f64 {
        if t > self.maturity - t_step / 2.0 && t < self.maturity + t_step / 2.0 {
            let in_the_money = match self.direction {
                Direction::Call => s >= self.strike,
                Direction::Put => s < self.strike,
            };
            if in_the_money {
                1.0
            } else {
                0.0
            }
        } else {
            0.0
        }
    }

    fn boundary_value(&self, t: f64, t_step: f64, s: f64, r: f64) -> Result<f64, InstrumentError> {
        if t > self.maturity + t_step / 2.0 {
            return Ok(0.0);
        }
        match self.pays_at_boundary(s) {
            Some(true) => Ok((r * (t - self.maturity)).exp()),
            Some(false) => Ok(0.0),
            None => Err(InstrumentError::BoundaryNotValid { s }),
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
        match self.pays_at_boundary(s) {
            Some(true) => match self.direction {
                Direction::Call => Ok(2.0 * grid.get(it, is - 1) - grid.get(it, is - 2)),
                Direction::Put => Ok(2.0 * grid.get(it, is + 1) - grid.get(it, is + 2)),
            },
            Some(false) => Ok(0.0),
            None => Err(InstrumentError::BoundaryNotValid { s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn payoff_is_an_indicator_at_maturity() {
        let call = BinaryOption::new(Direction::Call, 100.0, 1.0).unwrap();
        assert_eq!(call.cashflow(1.0, 0.01, 150.0), 1.0);
        assert_eq!(call.cashflow(1.0, 0.01, 100.0), 1.0);
        assert_eq!(call.cashflow(1.0, 0.01, 99.9), 0.0);
        assert_eq!(call.cashflow(0.5, 0.01, 150.0), 0.0);

        let put = BinaryOption::new(Direction::Put, 100.0, 1.0).unwrap();
        assert_eq!(put.cashflow(1.0, 0.01, 99.9), 1.0);
        assert_eq!(put.cashflow(1.0, 0.01, 100.0), 0.0);
    }

    #[test]
    fn certain_payment_boundary_is_a_pure_discount_factor() {
        let call = BinaryOption::new(Direction::Call, 100.0, 1.0).unwrap();
        let v = call.boundary_value(0.0, 0.01, 200.0, 0.04).unwrap();
        assert_relative_eq!(v, (-0.04f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn impossible_payment_boundary_is_zero() {
        let call = BinaryOption::new(Direction::Call, 100.0, 1.0).unwrap();
        assert_eq!(call.boundary_value(0.0, 0.01, 40.0, 0.04).unwrap(), 0.0);
        let put = BinaryOption::new(Direction::Put, 100.0, 1.0).unwrap();
        assert_eq!(put.boundary_value(0.0, 0.01, 200.0, 0.04).unwrap(), 0.0);
    }

    #[test]
    fn boundary_thresholds_differ_from_the_vanilla_ones() {
        let call = BinaryOption::new(Direction::Call, 100.0, 1.0).unwrap();
        // 150 is a valid binary boundary but not a valid vanilla one
        assert!(call.boundary_value(0.5, 0.01, 150.0, 0.04).is_ok());
        assert_eq!(
            call.boundary_value(0.5, 0.01, 120.0, 0.04),
            Err(InstrumentError::BoundaryNotValid { s: 120.0 })
        );
    }
}
