//! Play 2048 episodes with a uniformly random policy and report statistics.
//!
//! Mirrors the random-policy baseline an RL trainer evaluates against: every
//! step picks one of the four actions uniformly, rewards are score deltas,
//! and the terminal step pays the penalty.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rust_2048::core::{GameConfig, GameRng, RandomSource};
use rust_2048::env::{Env2048, EnvConfig, ACTION_COUNT};

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Run random-policy 2048 episodes and summarize returns.")]
struct Args {
    /// Number of episodes to play.
    #[arg(long, default_value_t = 10)]
    episodes: usize,

    /// Board width.
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Board height.
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Probability that a spawned tile is a 4.
    #[arg(long, default_value_t = 0.1)]
    prob_4: f64,

    /// Terminal penalty subtracted on the last step.
    #[arg(long, default_value_t = 1000.0)]
    penalty: f64,

    /// Seed for both the environment and the policy.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop an episode after this many steps.
    #[arg(long, default_value_t = 100_000)]
    max_steps: usize,
}

#[derive(Debug, Default)]
struct Summary {
    total_return: f64,
    total_score: u64,
    total_steps: usize,
    best_tile: u64,
}

/// Policy draws come from their own stream. Forking the root instead would
/// replay the first episode's spawn sequence as actions.
fn policy_rng(seed: u64) -> GameRng {
    GameRng::new(seed).for_context("policy")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = EnvConfig::default()
        .with_game(GameConfig::new(args.width, args.height, args.prob_4))
        .with_penalty(args.penalty);
    let mut env = Env2048::new(config, args.seed).context("invalid environment configuration")?;
    let mut policy = policy_rng(args.seed);
    let mut summary = Summary::default();

    for episode in 0..args.episodes {
        if episode > 0 {
            env.reset();
        }
        for _ in 0..args.max_steps {
            let action = policy.next_index(ACTION_COUNT) as i64;
            let step = env.step(action)?;
            if step.step_type.is_last() {
                break;
            }
        }

        let game = env.game();
        info!(
            "episode {:>4}: return {:>9.1}  score {:>7}  max tile {:>5}  steps {}",
            episode + 1,
            env.episode_return(),
            game.score(),
            game.board().max_tile(),
            env.episode_length()
        );
        summary.total_return += env.episode_return();
        summary.total_score = summary.total_score.saturating_add(game.score());
        summary.total_steps += env.episode_length();
        summary.best_tile = summary.best_tile.max(game.board().max_tile());
    }

    if args.episodes > 0 {
        let n = args.episodes as f64;
        info!(
            "average return {:.1}, average score {:.1}, average length {:.1}, best tile {}",
            summary.total_return / n,
            summary.total_score as f64 / n,
            summary.total_steps as f64 / n,
            summary.best_tile
        );
    }
    Ok(())
}
