//! Per-round result records and the read-only state export.
//!
//! Both types are owned snapshots: handing them out never aliases the
//! engine's internal state, so external reporting and plotting code cannot
//! corrupt a running simulation.

use crate::{BetaPosterior, LatentPoint};

/// Result of one simulation round, returned by value from
/// [`Bandit::step`][crate::Bandit::step].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRecord {
    /// 1-based round index; strictly increasing by 1 per step.
    pub t: u64,
    /// Index of the arm chosen this round.
    pub chosen_arm: usize,
    /// The chosen arm's latent coordinate.
    pub arm: LatentPoint,
    /// Continuous ground-truth reward of the chosen arm.
    pub reward: f64,
    /// Binary outcome: whether the round produced a click.
    pub clicked: bool,
}

/// Owned export of the full engine state at one point in time.
///
/// Two snapshots taken without an intervening step compare equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Arm coordinates; index = arm identity.
    pub arms: Vec<LatentPoint>,
    /// Current per-arm `alpha` parameters (same indexing as `arms`).
    pub alpha: Vec<f64>,
    /// Current per-arm `beta` parameters (same indexing as `arms`).
    pub beta: Vec<f64>,
    /// Chosen-arm index per round, in round order.
    pub chosen_arms: Vec<usize>,
    /// Continuous reward per round, in round order.
    pub rewards: Vec<f64>,
    /// Rewards partitioned by the arm that produced them.
    pub rewards_per_arm: Vec<Vec<f64>>,
    /// Mean of all rewards up to and including each round, in round order.
    pub cumulative_rewards: Vec<f64>,
    /// Number of rounds advanced so far.
    pub round: u64,
}

impl Snapshot {
    /// Per-arm posterior means, in arm order.
    pub fn posterior_means(&self) -> Vec<f64> {
        self.alpha
            .iter()
            .zip(&self.beta)
            .map(|(&a, &b)| BetaPosterior { alpha: a, beta: b }.mean())
            .collect()
    }

    /// How many times each arm has been pulled, in arm order.
    pub fn pulls_per_arm(&self) -> Vec<usize> {
        self.rewards_per_arm.iter().map(|b| b.len()).collect()
    }
}
