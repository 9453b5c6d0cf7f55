//! Scenario tests: whole runs with known setups and observable outcomes.

use banditsim::{
    run_rounds, run_rounds_with, Bandit, BanditConfig, BetaPosterior, LatentPoint,
};

#[test]
fn four_arms_one_step() {
    let mut b = Bandit::with_seed(BanditConfig::with_arms(4), 123).unwrap();
    let rec = b.step();
    assert_eq!(rec.t, 1);

    // Exactly one arm has gained one pseudo-count; the rest sit at the prior.
    let touched: Vec<usize> = b
        .posteriors()
        .iter()
        .enumerate()
        .filter(|(_, p)| **p != BetaPosterior::new(1.0, 1.0))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(touched, vec![rec.chosen_arm]);
    let p = b.posteriors()[rec.chosen_arm];
    assert!(p.alpha == 2.0 || p.beta == 2.0);
    assert_eq!(p.alpha + p.beta, 3.0);

    let snap = b.snapshot();
    assert_eq!(snap.chosen_arms.len(), 1);
    assert_eq!(snap.cumulative_rewards, vec![rec.reward]);
}

#[test]
fn one_arm_five_steps() {
    let mut b = Bandit::with_seed(BanditConfig::with_arms(1), 7).unwrap();
    for _ in 0..5 {
        b.step();
    }
    let snap = b.snapshot();
    assert_eq!(snap.chosen_arms, vec![0, 0, 0, 0, 0]);
    assert_eq!(snap.alpha[0] + snap.beta[0], 7.0);
}

#[test]
fn sampler_concentrates_on_the_near_origin_arm() {
    // Arm 0 clicks on every pull (reward 1.0); arm 1 clicks about one pull
    // in six. Any 500-round trajectory ends up pulling arm 0 far more.
    let arms = vec![LatentPoint::ORIGIN, LatentPoint::new(3.0, 4.0)];
    let mut b = Bandit::from_arms(arms, BanditConfig::default(), 99).unwrap();
    run_rounds(&mut b, 500);

    let snap = b.snapshot();
    let pulls = snap.pulls_per_arm();
    assert_eq!(pulls[0] + pulls[1], 500);
    assert!(
        pulls[0] > pulls[1],
        "expected the ideal arm to dominate, pulls={pulls:?}"
    );

    let means = snap.posterior_means();
    assert!(means[0] > means[1], "posterior means={means:?}");
}

#[test]
fn driver_records_mirror_snapshot_history() {
    let mut b = Bandit::with_seed(BanditConfig::with_arms(6), 31).unwrap();
    let mut cumulative_seen = Vec::new();
    let records = run_rounds_with(&mut b, 120, |rec| {
        cumulative_seen.push(rec.t);
    });
    assert_eq!(records.len(), 120);
    assert_eq!(cumulative_seen, (1..=120).collect::<Vec<u64>>());

    let snap = b.snapshot();
    assert_eq!(
        snap.chosen_arms,
        records.iter().map(|r| r.chosen_arm).collect::<Vec<_>>()
    );
    assert_eq!(
        snap.rewards,
        records.iter().map(|r| r.reward).collect::<Vec<_>>()
    );
}

#[test]
fn reset_then_rerun_produces_a_full_fresh_history() {
    let mut b = Bandit::with_seed(BanditConfig::with_arms(4), 55).unwrap();
    run_rounds(&mut b, 200);
    b.reset();
    assert_eq!(b.round(), 0);
    run_rounds(&mut b, 50);
    let snap = b.snapshot();
    assert_eq!(snap.round, 50);
    assert_eq!(snap.rewards.len(), 50);
}

#[test]
fn distinct_seeds_draw_distinct_arms() {
    let a = Bandit::with_seed(BanditConfig::with_arms(5), 1).unwrap();
    let b = Bandit::with_seed(BanditConfig::with_arms(5), 2).unwrap();
    assert_ne!(a.arms(), b.arms());
}
