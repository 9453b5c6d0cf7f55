use banditsim::{run_rounds, Bandit, BanditConfig};

fn main() {
    let mut bandit = Bandit::with_seed(BanditConfig::with_arms(8), 7).expect("valid config");
    run_rounds(&mut bandit, 2_000);

    let snap = bandit.snapshot();
    let means = snap.posterior_means();
    let pulls = snap.pulls_per_arm();

    eprintln!("arm  coords             reward  pulls  posterior-mean");
    for (i, arm) in snap.arms.iter().enumerate() {
        eprintln!(
            "{:3}  ({:+.2}, {:+.2})     {:.3}   {:5}  {:.3}",
            i, arm.z1, arm.z2, arm.reward(), pulls[i], means[i]
        );
    }

    // The most-pulled arm should be among the closest to the origin.
    if let Some((best, _)) = pulls.iter().enumerate().max_by_key(|(_, &p)| p) {
        eprintln!(
            "most pulled: arm {} (distance {:.3} from the ideal point)",
            best,
            snap.arms[best].norm()
        );
    }
}
