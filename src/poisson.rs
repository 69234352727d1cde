//! Goal distributions under the Poisson model.
//!
//! A team's goal count over a match is assumed to follow a Poisson distribution with rate λ. The
//! distribution is truncated at `k_max` goals; the mass of every count from `k_max` upward is
//! folded into the last entry, so the vector always sums to 1.

use std::ops::Index;

use tracing::trace;

use crate::display::DisplaySlice;
use crate::error::{check_non_negative, InvalidInput};
use crate::probs::SliceExt;

/// The probability mass function of the Poisson distribution, evaluated in closed form.
#[inline]
pub fn univariate(k: u8, lambda: f64) -> f64 {
    let factorial = (2..=k as u32).map(f64::from).product::<f64>();
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial
}

/// Tolerance on the total mass of a goal vector.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Longest goal vector, so that every index is addressable as a `u8` goal count.
pub const MAX_ENTRIES: usize = u8::MAX as usize + 1;

/// Probabilities of a team scoring 0 through `k_max` goals, where the last entry holds
/// P(goals ≥ `k_max`).
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProbs {
    probs: Vec<f64>,
}
impl GoalProbs {
    pub fn k_max(&self) -> u8 {
        (self.probs.len() - 1) as u8
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Expected goals implied by the truncated vector; the tail bucket counts as `k_max` goals.
    pub fn mean(&self) -> f64 {
        self.probs
            .iter()
            .enumerate()
            .map(|(goals, &prob)| goals as f64 * prob)
            .sum()
    }
}

impl Index<usize> for GoalProbs {
    type Output = f64;

    #[inline]
    fn index(&self, goals: usize) -> &Self::Output {
        &self.probs[goals]
    }
}

impl From<GoalProbs> for Vec<f64> {
    fn from(goal_probs: GoalProbs) -> Self {
        goal_probs.probs
    }
}

impl TryFrom<Vec<f64>> for GoalProbs {
    type Error = InvalidInput;

    /// Adopts an externally sourced goal vector. It must hold between 2 and [MAX_ENTRIES]
    /// probabilities whose total does not exceed 1.
    fn try_from(probs: Vec<f64>) -> Result<Self, Self::Error> {
        if probs.len() < 2 {
            return Err(InvalidInput::new(
                "goal_probs.len",
                probs.len() as f64,
                "must hold at least 2 entries",
            ));
        }
        if probs.len() > MAX_ENTRIES {
            return Err(InvalidInput::new(
                "goal_probs.len",
                probs.len() as f64,
                "must hold at most 256 entries",
            ));
        }
        for &prob in &probs {
            check_non_negative("goal_probs", prob)?;
            if prob > 1.0 {
                return Err(InvalidInput::new("goal_probs", prob, "must not exceed 1"));
            }
        }
        let sum = probs.sum();
        if sum > 1.0 + SUM_TOLERANCE {
            return Err(InvalidInput::new("goal_probs.sum", sum, "must not exceed 1"));
        }
        Ok(Self { probs })
    }
}

/// Derives the truncated goal distribution for a scoring rate `lambda`.
///
/// Masses are accumulated by the recurrence P(k) = P(k - 1) · λ / k, starting from P(0) = e^-λ.
pub fn distribution(lambda: f64, k_max: u8) -> Result<GoalProbs, InvalidInput> {
    check_non_negative("lambda", lambda)?;
    if k_max < 1 {
        return Err(InvalidInput::new("k_max", k_max as f64, "must be at least 1"));
    }

    let mut probs = Vec::with_capacity(k_max as usize + 1);
    let mut prob = f64::exp(-lambda);
    probs.push(prob);
    for k in 1..k_max {
        prob *= lambda / k as f64;
        probs.push(prob);
    }
    let tail = f64::max(0.0, 1.0 - probs.sum());
    probs.push(tail);
    trace!("lambda: {lambda}, k_max: {k_max}, probs: {}", DisplaySlice::from(&*probs));
    Ok(GoalProbs { probs })
}
