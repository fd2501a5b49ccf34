//! Plays seeded episodes with a uniformly random agent.

use bjenv::{BlackjackEnv, EnvOptions, Outcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const EPISODES: u32 = 10_000;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);

    let mut env = BlackjackEnv::new(EnvOptions::default(), seed);
    let mut agent = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let (mut wins, mut losses, mut pushes) = (0_u32, 0_u32, 0_u32);
    let mut total_reward: i64 = 0;

    for _ in 0..EPISODES {
        env.reset();
        loop {
            let action = env.action_space()[agent.random_range(0..2)];
            let step = match env.step(action) {
                Ok(step) => step,
                Err(err) => {
                    eprintln!("Step error: {err}");
                    return;
                }
            };

            if step.terminal {
                total_reward += i64::from(step.reward);
                match step.outcome {
                    Some(Outcome::Win) => wins += 1,
                    Some(Outcome::Lose) => losses += 1,
                    Some(Outcome::Push) | None => pushes += 1,
                }
                break;
            }
        }
    }

    println!("Episodes: {EPISODES} (seed {seed})");
    println!("Wins: {wins}  Losses: {losses}  Pushes: {pushes}");
    println!(
        "Average reward: {:.4}",
        f64::from(i32::try_from(total_reward).unwrap_or(0)) / f64::from(EPISODES)
    );
}
