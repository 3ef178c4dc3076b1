//! Capability trait for externally supplied multivariate maximisers.
//!
//! No optimisation algorithm lives in this crate: callers plug in whatever
//! derivative-free maximiser they have and the strategy only sees the
//! [`Objective`] contract.

use thiserror::Error;

use crate::error::HedgingError;
use crate::objective::Objective;

/// The point and value an optimiser settled on.
#[derive(Debug, Clone, PartialEq)]
pub struct Maximum {
    /// The maximising position vector.
    pub point: Vec<f64>,
    /// The objective value there.
    pub value: f64,
    /// Objective evaluations spent.
    pub iterations: usize,
}

/// Errors raised by an optimiser run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptimiserError {
    /// The objective itself failed at some candidate.
    #[error("objective evaluation failed: {0}")]
    Objective(#[from] HedgingError),

    /// The algorithm gave up before settling on a maximum.
    #[error("optimiser did not converge after {iterations} iterations")]
    DidNotConverge {
        /// Evaluations spent before giving up.
        iterations: usize,
    },
}

/// A derivative-free maximiser of an [`Objective`].
///
/// An error leaves previously computed results intact: the caller decides
/// whether to fall back to the unoptimised allocation.
pub trait Optimiser {
    /// Maximises `objective` starting from `initial`.
    ///
    /// # Errors
    /// [`OptimiserError::Objective`] if an evaluation fails,
    /// [`OptimiserError::DidNotConverge`] if the algorithm gives up.
    fn maximise<O: Objective>(
        &mut self,
        objective: &mut O,
        initial: &[f64],
    ) -> Result<Maximum, OptimiserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Picks the best out of a fixed candidate list plus the initial point.
    struct BestOfCandidates {
        candidates: Vec<Vec<f64>>,
    }

    impl Optimiser for BestOfCandidates {
        fn maximise<O: Objective>(
            &mut self,
            objective: &mut O,
            initial: &[f64],
        ) -> Result<Maximum, OptimiserError> {
            let mut best = Maximum {
                point: initial.to_vec(),
                value: objective.evaluate(initial)?,
                iterations: 1,
            };
            for candidate in &self.candidates {
                let value = objective.evaluate(candidate)?;
                best.iterations += 1;
                if value > best.value {
                    best.point = candidate.clone();
                    best.value = value;
                }
            }
            Ok(best)
        }
    }

    struct ConcaveParabola;

    impl Objective for ConcaveParabola {
        fn dimension(&self) -> usize {
            1
        }
        fn evaluate(&mut self, point: &[f64]) -> Result<f64, HedgingError> {
            if point.len() != 1 {
                return Err(HedgingError::DimensionMismatch {
                    expected: 1,
                    actual: point.len(),
                });
            }
            Ok(-(point[0] - 2.0) * (point[0] - 2.0))
        }
    }

    #[test]
    fn candidate_search_finds_the_best_point() {
        let mut optimiser = BestOfCandidates {
            candidates: vec![vec![0.0], vec![2.0], vec![5.0]],
        };
        let max = optimiser.maximise(&mut ConcaveParabola, &[10.0]).unwrap();
        assert_eq!(max.point, vec![2.0]);
        assert_eq!(max.value, 0.0);
        assert_eq!(max.iterations, 4);
    }

    #[test]
    fn objective_failure_surfaces_through_the_optimiser() {
        let mut optimiser = BestOfCandidates {
            candidates: vec![vec![1.0, 1.0]],
        };
        let err = optimiser.maximise(&mut ConcaveParabola, &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            OptimiserError::Objective(HedgingError::DimensionMismatch { .. })
        ));
    }
}
