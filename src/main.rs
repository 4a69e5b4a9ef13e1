//! Jetpack Runner entry point
//!
//! Runs episodes headlessly with a built-in policy and reports the best runs.
//!
//! Usage: `jetpack-runner [--config FILE] [--episodes N] [--policy dodge|random] [--render]`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jetpack_runner::env::{Env, JetpackEnv};
use jetpack_runner::highscores::{HighScoreEntry, HighScores};
use jetpack_runner::policy::{DodgePolicy, Policy, RandomPolicy};
use jetpack_runner::{SimConfig, SimResult};

/// Built-in policies the runner can play with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    /// Steer away from the nearest obstacles
    Dodge,
    /// Pick Up or Down uniformly
    Random,
}

/// Play headless jetpack runner episodes and print the best runs
#[derive(Debug, Parser)]
#[command(name = "jetpack-runner", version, about)]
struct Cli {
    /// JSON simulation config (defaults apply when omitted)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of episodes to play
    #[arg(long, default_value_t = 5)]
    episodes: u32,
    /// Policy choosing each action
    #[arg(long, value_enum, default_value_t = PolicyKind::Dodge)]
    policy: PolicyKind,
    /// Print an ASCII frame after every step
    #[arg(long)]
    render: bool,
}

fn run(cli: &Cli) -> SimResult<()> {
    let config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let mut env = JetpackEnv::new(&config)?;
    let mut policy: Box<dyn Policy> = match cli.policy {
        PolicyKind::Random => Box::new(RandomPolicy::new(env.state().seed)),
        PolicyKind::Dodge => Box::new(DodgePolicy),
    };
    let mut scores = HighScores::new();

    for episode in 0..cli.episodes {
        let mut obs = env.reset(None);
        loop {
            let step = env.step(policy.act(&obs))?;
            obs = step.observation;
            if cli.render {
                if let Some(frame) = env.render() {
                    println!("{frame}");
                }
            }
            if step.terminated || step.truncated {
                break;
            }
        }

        let entry = HighScoreEntry::from_state(env.state());
        log::info!(
            "Episode {}: score {}, distance {}",
            episode + 1,
            entry.score,
            entry.distance
        );
        if let Some(rank) = scores.add(entry) {
            log::debug!("Episode {} ranked #{}", episode + 1, rank);
        }
    }
    env.close();

    for (rank, entry) in scores.entries.iter().enumerate() {
        println!(
            "#{:<2} score {:>4}  distance {:>5}  {:?}",
            rank + 1,
            entry.score,
            entry.distance,
            entry.ended_by
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Jetpack Runner starting...");
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
