//! One-round orchestration: generate, match, pay

use tracing::info;

use crate::algorithm::generation::generate_board;
use crate::algorithm::matching::{WinCombinationMap, find_win_combinations};
use crate::algorithm::payout::{AppliedCombinations, compute_payout};
use crate::io::error::{Result, invalid_wager};
use crate::math::probability::RandomSource;
use crate::model::GameConfig;
use crate::spatial::Grid;

/// Outcome of one evaluated round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Generated grid
    pub grid: Grid,
    /// Wager the round was played with
    pub bet: u64,
    /// Total payout
    pub total_payout: f64,
    /// Every pattern each symbol matched, before payout filtering
    pub matched: WinCombinationMap,
    /// Combinations that contributed to the payout
    pub applied: AppliedCombinations,
}

/// Evaluates rounds against a fixed configuration
///
/// Holds no per-round state; independent rounds may run on separate threads
/// as long as each has its own random source.
#[derive(Debug, Clone, Copy)]
pub struct RoundEvaluator<'a> {
    config: &'a GameConfig,
}

impl<'a> RoundEvaluator<'a> {
    /// Create an evaluator for a configuration
    pub const fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Configuration rounds are evaluated against
    pub const fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Play one round: generate a grid, match patterns, compute the payout
    ///
    /// # Errors
    ///
    /// Returns an input error for a negative wager, and propagates generation
    /// and configuration errors. Nothing is returned on failure.
    pub fn evaluate<R: RandomSource + ?Sized>(
        &self,
        bet: i64,
        source: &mut R,
    ) -> Result<RoundResult> {
        if bet < 0 {
            return Err(invalid_wager(&bet, &"must not be negative"));
        }
        let bet = bet.unsigned_abs();

        let grid = generate_board(self.config, source)?;
        let matched = find_win_combinations(&grid, self.config);
        let outcome = compute_payout(bet, &matched, self.config)?;

        info!(
            bet,
            payout = outcome.total,
            winning_symbols = outcome.applied.standard.len(),
            bonus = %outcome.applied.bonus_label(),
            "round evaluated"
        );

        Ok(RoundResult {
            grid,
            bet,
            total_payout: outcome.total,
            matched,
            applied: outcome.applied,
        })
    }
}
