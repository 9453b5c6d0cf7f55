use banditsim::{run_rounds_with, Bandit, BanditConfig, DEFAULT_ROUNDS};

fn main() {
    tracing_subscriber::fmt::init();

    let mut bandit = Bandit::with_seed(BanditConfig::with_arms(6), 42).expect("valid config");

    run_rounds_with(&mut bandit, DEFAULT_ROUNDS, |rec| {
        if rec.t % 50 == 0 {
            eprintln!(
                "t={:3} chosen={} reward={:.3} clicked={}",
                rec.t, rec.chosen_arm, rec.reward, rec.clicked
            );
        }
    });

    let snap = bandit.snapshot();
    eprintln!(
        "final cumulative mean reward: {:.4}",
        snap.cumulative_rewards.last().copied().unwrap_or(0.0)
    );
}
