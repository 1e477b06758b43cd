//! Command-line interface for playing or simulating rounds

use crate::algorithm::evaluator::RoundEvaluator;
use crate::analysis::simulation::simulate;
use crate::io::error::Result;
use crate::io::progress::SimulationProgress;
use crate::io::report::{RoundReport, to_pretty_json};
use crate::math::probability::RandomSelector;
use crate::model::GameConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scratchgrid")]
#[command(
    author,
    version,
    about = "Generate a scratch card grid and compute its payout"
)]
/// Command-line arguments for the scratch card tool
pub struct Cli {
    /// JSON game configuration
    #[arg(short, long, value_name = "PATH")]
    pub config: PathBuf,

    /// Wager for each round
    #[arg(short, long = "betting-amount", allow_negative_numbers = true)]
    pub betting_amount: i64,

    /// Random seed for reproducible rounds (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Simulate this many rounds and report aggregate statistics
    #[arg(short, long)]
    pub rounds: Option<usize>,

    /// Suppress progress output and non-error logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Loads the configuration and plays the requested rounds
pub struct RoundRunner {
    cli: Cli,
}

impl RoundRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Play one round, or a simulation when `--rounds` is given
    ///
    /// Returns the pretty-printed JSON result.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, the wager is
    /// negative, or a round fails
    pub fn run(&self) -> Result<String> {
        let config = GameConfig::from_path(&self.cli.config)?;
        let evaluator = RoundEvaluator::new(&config);
        let mut source = self.random_source();

        match self.cli.rounds {
            Some(rounds) => {
                let mut progress = self
                    .cli
                    .should_show_progress()
                    .then(|| SimulationProgress::new(rounds));
                let report = simulate(
                    &evaluator,
                    self.cli.betting_amount,
                    rounds,
                    &mut source,
                    progress.as_mut(),
                )?;
                to_pretty_json(&report)
            }
            None => {
                let result = evaluator.evaluate(self.cli.betting_amount, &mut source)?;
                to_pretty_json(&RoundReport::from(&result))
            }
        }
    }

    fn random_source(&self) -> RandomSelector {
        self.cli
            .seed
            .map_or_else(RandomSelector::from_entropy, RandomSelector::new)
    }
}
