//! Influence Draft simulator
//!
//! Plays many AI-vs-AI matches over the bundled roster and reports how the
//! strategist fares against itself under a given set of weights.

mod report;
mod runner;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

use infl_game::StrategyWeights;

use crate::report::Report;
use crate::runner::{play_match, Seats};

#[derive(Parser)]
#[command(name = "infl-sim")]
#[command(about = "Run AI-vs-AI Influence Draft matches and report aggregate results", long_about = None)]
struct Cli {
    /// Number of matches to play
    #[arg(long, default_value_t = 1000)]
    matches: u64,

    /// Seed of the first match; match i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// JSON file with StrategyWeights for the AI seat
    #[arg(long)]
    weights: Option<PathBuf>,

    /// JSON file with StrategyWeights for the player seat (defaults to --weights)
    #[arg(long)]
    player_weights: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn load_weights(path: &Path) -> Result<StrategyWeights> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading weights from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing weights in {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let ai = match &cli.weights {
        Some(path) => load_weights(path)?,
        None => StrategyWeights::default(),
    };
    let player = match &cli.player_weights {
        Some(path) => load_weights(path)?,
        None => ai.clone(),
    };
    let seats = Seats { player, ai };

    let roster = infl_assets::get_all_personas();
    log::info!(
        "simulating {} matches from seed {} over {} personas",
        cli.matches,
        cli.seed,
        roster.len()
    );

    let outcomes = (0..cli.matches)
        .into_par_iter()
        .map(|i| play_match(cli.seed.wrapping_add(i), &roster, &seats))
        .collect::<Result<Vec<_>>>()?;

    let report = Report::from_outcomes(&outcomes);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
