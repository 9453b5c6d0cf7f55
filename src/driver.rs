//! Bounded simulation driver.
//!
//! The engine itself has no maximum round count; step limits and pacing
//! belong to whoever drives it. These helpers run a fixed number of rounds
//! and hand each [`RoundRecord`] to an observer, which is where presentation
//! layers (progress displays, renderers) attach without the engine knowing
//! about them.

use tracing::{debug, info};

use crate::{Bandit, RoundRecord};

/// Rounds in a full simulation run, matching the interactive front end's
/// step limit.
pub const DEFAULT_ROUNDS: usize = 500;

/// Advance the bandit `rounds` times and collect the records.
pub fn run_rounds(bandit: &mut Bandit, rounds: usize) -> Vec<RoundRecord> {
    run_rounds_with(bandit, rounds, |_| {})
}

/// Advance the bandit `rounds` times, invoking `on_round` after each step.
///
/// The observer receives each record after the engine has fully committed
/// the round, so a snapshot taken inside the callback reflects it.
pub fn run_rounds_with<F>(bandit: &mut Bandit, rounds: usize, mut on_round: F) -> Vec<RoundRecord>
where
    F: FnMut(&RoundRecord),
{
    let mut records = Vec::with_capacity(rounds);
    for _ in 0..rounds {
        let rec = bandit.step();
        debug!(
            t = rec.t,
            chosen_arm = rec.chosen_arm,
            reward = rec.reward,
            clicked = rec.clicked,
            "round"
        );
        on_round(&rec);
        records.push(rec);
    }
    info!(
        rounds = records.len(),
        total_rounds = bandit.round(),
        "run complete"
    );
    records
}
