//! `banditsim`: a seedable Thompson-sampling bandit simulation over
//! 2D latent-space arms.
//!
//! Each arm is a fixed point drawn from a standard normal in a 2D latent
//! space. The closer a point lies to the origin (the "ideal" point), the
//! higher its probability of producing a click: the ground truth is
//! `reward = 1 / (1 + euclidean_norm)`, which the sampler never observes
//! directly. Per round the engine:
//!
//! 1. samples each arm's Beta(alpha, beta) posterior,
//! 2. pulls the arm with the highest sample (lowest index on exact ties),
//! 3. draws a click with probability equal to the arm's ground-truth reward,
//! 4. adds one pseudo-count to the pulled arm's posterior,
//! 5. appends the round to an append-only history.
//!
//! Over many rounds the posterior mass concentrates on the arms nearest the
//! origin while the sampler keeps probing the alternatives.
//!
//! ```rust
//! use banditsim::{run_rounds, Bandit, BanditConfig, DEFAULT_ROUNDS};
//!
//! let mut bandit = Bandit::with_seed(BanditConfig::with_arms(6), 42)?;
//! let records = run_rounds(&mut bandit, DEFAULT_ROUNDS);
//! assert_eq!(records.len(), DEFAULT_ROUNDS);
//!
//! let snap = bandit.snapshot();
//! assert_eq!(snap.cumulative_rewards.len(), DEFAULT_ROUNDS);
//! # Ok::<(), banditsim::Error>(())
//! ```
//!
//! **Goals:**
//! - **Deterministic by default**: the RNG is an explicit, seedable
//!   constructor dependency; same config + same seed → same trajectory.
//! - **Exclusive ownership**: external code reads engine state only through
//!   owned [`Snapshot`]s and by-value [`RoundRecord`]s, never through
//!   mutable aliases.
//! - **Small K**: built for a handful of arms (the interactive UI uses
//!   2–10); `step()` is a bounded, synchronous pass over them.
//!
//! **Non-goals:**
//! - No persistence of simulation state across process restarts.
//! - No concurrent or distributed execution; each round depends on the
//!   posteriors the previous round left behind.
//! - No policy pluggability: Thompson sampling over Beta-Bernoulli arms is
//!   the only policy.
//! - No image synthesis or plotting; consumers map latent coordinates to
//!   visuals on their own.

#![forbid(unsafe_code)]

mod error;
pub use error::*;

mod latent;
pub use latent::*;

mod posterior;
pub use posterior::*;

mod record;
pub use record::*;

mod engine;
pub use engine::*;

mod driver;
pub use driver::*;
