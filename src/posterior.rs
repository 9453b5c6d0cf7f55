//! Beta posterior state for one arm.

use rand::rngs::StdRng;
use rand_distr::{Beta, Distribution};

/// Beta(alpha, beta) belief about one arm's click probability.
///
/// Starts at the configured prior and is updated by exactly one pseudo-count
/// per observation: `alpha += 1` on a click, `beta += 1` otherwise. With the
/// default uniform prior both parameters stay `>= 1` for the lifetime of the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaPosterior {
    /// Success pseudo-count.
    pub alpha: f64,
    /// Failure pseudo-count.
    pub beta: f64,
}

impl BetaPosterior {
    /// Create a posterior at the given prior.
    pub fn new(alpha0: f64, beta0: f64) -> Self {
        Self {
            alpha: alpha0,
            beta: beta0,
        }
    }

    /// Posterior mean `alpha / (alpha + beta)`.
    pub fn mean(&self) -> f64 {
        let denom = self.alpha + self.beta;
        if denom <= 0.0 {
            0.5
        } else {
            self.alpha / denom
        }
    }

    /// Draw one sample from Beta(alpha, beta).
    ///
    /// Falls back to 0.5 if the distribution cannot be constructed; with
    /// validated priors and unit-increment updates this path is unreachable.
    pub fn sample(&self, rng: &mut StdRng) -> f64 {
        if !(self.alpha.is_finite() && self.beta.is_finite())
            || self.alpha <= 0.0
            || self.beta <= 0.0
        {
            return 0.5;
        }
        match Beta::new(self.alpha, self.beta) {
            Ok(dist) => dist.sample(rng),
            Err(_) => 0.5,
        }
    }

    /// Record one binary outcome: a click increments `alpha`, a miss
    /// increments `beta`.
    pub fn observe(&mut self, clicked: bool) {
        if clicked {
            self.alpha += 1.0;
        } else {
            self.beta += 1.0;
        }
    }
}
