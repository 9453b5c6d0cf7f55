//! The bandit engine: arm state, the per-round decision loop, and the
//! snapshot export.
//!
//! One [`Bandit`] owns all state for one simulation run. It has exactly two
//! observable states, freshly constructed (round 0, empty history) and
//! advanced N times, and [`Bandit::step`] is the only transition, always
//! forward by one round. Rounds are strictly sequential: each one reads the
//! posteriors the previous round left behind, so there is nothing to overlap
//! or parallelize. If an instance is embedded in a concurrent host, guard the
//! whole engine behind one mutual-exclusion boundary.
//!
//! The engine is **seedable** and deterministic by default: [`Bandit::new`]
//! uses a fixed seed (0) so the same config reproduces the same trajectory,
//! and [`Bandit::with_seed`] makes the pseudorandom source an explicit
//! constructor-time dependency.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{BetaPosterior, Error, LatentPoint, RoundRecord, Snapshot};

/// Configuration for a [`Bandit`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BanditConfig {
    /// Number of arms to draw at construction (must be > 0).
    pub n_arms: usize,
    /// Prior alpha for every arm (must be finite and > 0).
    pub alpha0: f64,
    /// Prior beta for every arm (must be finite and > 0).
    pub beta0: f64,
}

impl Default for BanditConfig {
    fn default() -> Self {
        Self {
            n_arms: 10,
            alpha0: 1.0,
            beta0: 1.0,
        }
    }
}

impl BanditConfig {
    /// Config with `n_arms` arms and the uniform prior.
    pub fn with_arms(n_arms: usize) -> Self {
        Self {
            n_arms,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.n_arms == 0 {
            return Err(Error::InvalidArmCount(0));
        }
        if !(self.alpha0.is_finite() && self.alpha0 > 0.0)
            || !(self.beta0.is_finite() && self.beta0 > 0.0)
        {
            return Err(Error::InvalidPrior {
                alpha: self.alpha0,
                beta: self.beta0,
            });
        }
        Ok(())
    }
}

/// Seedable Thompson-sampling bandit over latent-space arms.
///
/// # Lifecycle
///
/// ```rust
/// use banditsim::{Bandit, BanditConfig};
///
/// let mut bandit = Bandit::with_seed(BanditConfig::with_arms(6), 42).unwrap();
///
/// for _ in 0..100 {
///     let rec = bandit.step();
///     // ... hand `rec` to reporting / rendering code ...
/// }
///
/// let snap = bandit.snapshot();
/// assert_eq!(snap.rewards.len(), 100);
/// ```
///
/// Recreating the engine (fresh arms) is explicit construction; to re-run on
/// the same arms, use [`Bandit::reset`].
#[derive(Debug, Clone)]
pub struct Bandit {
    cfg: BanditConfig,
    arms: Vec<LatentPoint>,
    posteriors: Vec<BetaPosterior>,

    // Append-only history, one entry per round.
    chosen_arms: Vec<usize>,
    rewards: Vec<f64>,
    rewards_per_arm: Vec<Vec<f64>>,
    cumulative_rewards: Vec<f64>,
    reward_sum: f64,

    t: u64,
    rng: StdRng,
}

impl Bandit {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Create a bandit with a deterministic fixed seed (0).
    pub fn new(cfg: BanditConfig) -> Result<Self, Error> {
        Self::with_seed(cfg, 0)
    }

    /// Create a bandit with an explicit seed (reproducible).
    ///
    /// Draws `cfg.n_arms` latent points, one per arm, each coordinate from
    /// the standard normal distribution.
    pub fn with_seed(cfg: BanditConfig, seed: u64) -> Result<Self, Error> {
        cfg.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let arms: Vec<LatentPoint> = (0..cfg.n_arms)
            .map(|_| LatentPoint::sample_standard(&mut rng))
            .collect();
        Ok(Self::from_parts(cfg, arms, rng))
    }

    /// Create a bandit over explicit arm coordinates.
    ///
    /// The seed only drives the decision loop (posterior samples and click
    /// draws); no arms are drawn. Returns [`Error::InvalidArmCount`] if
    /// `arms` is empty.
    pub fn from_arms(arms: Vec<LatentPoint>, cfg: BanditConfig, seed: u64) -> Result<Self, Error> {
        if arms.is_empty() {
            return Err(Error::InvalidArmCount(0));
        }
        let cfg = BanditConfig {
            n_arms: arms.len(),
            ..cfg
        };
        cfg.validate()?;
        Ok(Self::from_parts(cfg, arms, StdRng::seed_from_u64(seed)))
    }

    fn from_parts(cfg: BanditConfig, arms: Vec<LatentPoint>, rng: StdRng) -> Self {
        let n = arms.len();
        Self {
            cfg,
            arms,
            posteriors: vec![BetaPosterior::new(cfg.alpha0, cfg.beta0); n],
            chosen_arms: Vec::new(),
            rewards: Vec::new(),
            rewards_per_arm: vec![Vec::new(); n],
            cumulative_rewards: Vec::new(),
            reward_sum: 0.0,
            t: 0,
            rng,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Number of arms.
    pub fn n_arms(&self) -> usize {
        self.arms.len()
    }

    /// Number of rounds advanced so far.
    pub fn round(&self) -> u64 {
        self.t
    }

    /// Arm coordinates (index = arm identity).
    pub fn arms(&self) -> &[LatentPoint] {
        &self.arms
    }

    /// Current per-arm posteriors (same indexing as [`arms`][Self::arms]).
    pub fn posteriors(&self) -> &[BetaPosterior] {
        &self.posteriors
    }

    // -----------------------------------------------------------------------
    // Core interface
    // -----------------------------------------------------------------------

    /// Advance one round.
    ///
    /// 1. Sample each arm's Beta posterior.
    /// 2. Choose the arm with the maximum sample. Exact ties go to the
    ///    lowest index (first occurrence of the maximum).
    /// 3. Compute the chosen arm's ground-truth reward.
    /// 4. Draw `u` uniform in `[0, 1)`; the round clicks iff `u < reward`.
    /// 5. Add 1 to the chosen arm's `alpha` on a click, else to its `beta`.
    ///    No other arm's posterior changes.
    /// 6. Append to every history sequence, including the cumulative mean of
    ///    all rewards observed so far.
    ///
    /// Infallible: construction already guaranteed at least one arm.
    pub fn step(&mut self) -> RoundRecord {
        let chosen = self.sample_and_choose();
        let arm = self.arms[chosen];
        let reward = arm.reward();
        let clicked = self.rng.random::<f64>() < reward;

        self.posteriors[chosen].observe(clicked);

        self.t += 1;
        self.chosen_arms.push(chosen);
        self.rewards.push(reward);
        self.rewards_per_arm[chosen].push(reward);
        self.reward_sum += reward;
        self.cumulative_rewards.push(self.reward_sum / self.t as f64);

        RoundRecord {
            t: self.t,
            chosen_arm: chosen,
            arm,
            reward,
            clicked,
        }
    }

    /// Sample every posterior and return the argmax index.
    ///
    /// The strict `>` scan from index 0 makes exact ties resolve to the
    /// first occurrence of the maximum.
    fn sample_and_choose(&mut self) -> usize {
        let mut best = 0usize;
        let mut best_sample = f64::NEG_INFINITY;
        for i in 0..self.posteriors.len() {
            let p = self.posteriors[i];
            let s = p.sample(&mut self.rng);
            if s > best_sample {
                best_sample = s;
                best = i;
            }
        }
        best
    }

    /// Export an owned copy of the full engine state.
    ///
    /// Repeated calls without an intervening [`step`][Self::step] return
    /// equal snapshots.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arms: self.arms.clone(),
            alpha: self.posteriors.iter().map(|p| p.alpha).collect(),
            beta: self.posteriors.iter().map(|p| p.beta).collect(),
            chosen_arms: self.chosen_arms.clone(),
            rewards: self.rewards.clone(),
            rewards_per_arm: self.rewards_per_arm.clone(),
            cumulative_rewards: self.cumulative_rewards.clone(),
            round: self.t,
        }
    }

    /// Reset all learned state, keeping the arm coordinates.
    ///
    /// Posteriors return to the configured prior, the history empties, and
    /// the round counter returns to 0. The internal RNG is not rewound, so a
    /// reset run is a fresh trajectory over the same arms.
    pub fn reset(&mut self) {
        for p in &mut self.posteriors {
            *p = BetaPosterior::new(self.cfg.alpha0, self.cfg.beta0);
        }
        self.chosen_arms.clear();
        self.rewards.clear();
        for bucket in &mut self.rewards_per_arm {
            bucket.clear();
        }
        self.cumulative_rewards.clear();
        self.reward_sum = 0.0;
        self.t = 0;
    }
}
