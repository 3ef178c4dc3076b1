//! Black-Scholes closed-form prices.
//!
//! **Vanilla call**: C = S·N(d₁) − K·e^(−rT)·N(d₂)
//! **Vanilla put**:  P = K·e^(−rT)·N(−d₂) − S·N(−d₁)
//! **Binary call**:  e^(−rT)·N(d₂), put: e^(−rT)·N(−d₂)
//!
//! with d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T) and d₂ = d₁ − σ√T.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::Direction;

/// Black-Scholes model for European option values.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float`
///
/// # Examples
/// ```
/// use fdm_models::analytical::BlackScholes;
/// use fdm_models::instruments::Direction;
///
/// let bs = BlackScholes::new(100.0_f64, 0.04, 0.2).unwrap();
/// let call = bs.price_vanilla(100.0, 1.0, Direction::Call);
/// let put = bs.price_vanilla(100.0, 1.0, Direction::Put);
///
/// // Put-call parity: C - P = S - K·exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.04_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a Black-Scholes model for a given spot, rate, and
    /// volatility.
    ///
    /// # Errors
    /// - [`AnalyticalError::InvalidSpot`] if `spot <= 0`
    /// - [`AnalyticalError::InvalidVolatility`] if `volatility <= 0`
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }
        if volatility <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// The spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// The risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// The volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    fn d1(&self, strike: T, ttm: T) -> T {
        let half = T::from(0.5).unwrap();
        let var = self.volatility * self.volatility;
        ((self.spot / strike).ln() + (self.rate + half * var) * ttm)
            / (self.volatility * ttm.sqrt())
    }

    fn d2(&self, strike: T, ttm: T) -> T {
        self.d1(strike, ttm) - self.volatility * ttm.sqrt()
    }

    /// Value of a European vanilla option.
    pub fn price_vanilla(&self, strike: T, ttm: T, direction: Direction) -> T {
        let d1 = self.d1(strike, ttm);
        let d2 = self.d2(strike, ttm);
        let discounted_strike = strike * (-self.rate * ttm).exp();
        match direction {
            Direction::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            Direction::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Spot delta of a European vanilla option.
    pub fn vanilla_delta(&self, strike: T, ttm: T, direction: Direction) -> T {
        let d1 = self.d1(strike, ttm);
        match direction {
            Direction::Call => norm_cdf(d1),
            Direction::Put => norm_cdf(d1) - T::one(),
        }
    }

    /// Value of a European binary cash-or-nothing option paying 1.
    pub fn price_binary(&self, strike: T, ttm: T, direction: Direction) -> T {
        let d2 = self.d2(strike, ttm);
        let discount = (-self.rate * ttm).exp();
        match direction {
            Direction::Call => discount * norm_cdf(d2),
            Direction::Put => discount * norm_cdf(-d2),
        }
    }
}
