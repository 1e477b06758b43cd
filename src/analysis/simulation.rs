//! Repeated round evaluation for estimating return to player
//!
//! Rounds are independent: each draws a fresh grid from the same source and
//! shares nothing else, so the aggregate is a plain running tally.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::algorithm::evaluator::{RoundEvaluator, RoundResult};
use crate::io::error::{Result, invalid_wager};
use crate::io::progress::SimulationProgress;
use crate::math::probability::RandomSource;
use crate::math::rounding::round_payout;
use crate::model::symbols::SymbolId;

/// Aggregate outcome of a simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Rounds evaluated
    pub rounds: usize,
    /// Wager per round
    pub bet: u64,
    /// Sum of all wagers
    pub total_wagered: f64,
    /// Sum of all payouts
    pub total_paid: f64,
    /// `total_paid / total_wagered`, zero when nothing was wagered
    pub return_to_player: f64,
    /// Rounds with a positive payout
    pub winning_rounds: usize,
    /// `winning_rounds / rounds`
    pub hit_rate: f64,
    /// Largest single-round payout
    pub largest_payout: f64,
    /// Applications of each win pattern across all rounds
    pub pattern_hits: IndexMap<String, usize>,
    /// Applications of each bonus symbol across all rounds
    pub bonus_hits: IndexMap<SymbolId, usize>,
}

impl SimulationReport {
    fn record(&mut self, round: &RoundResult) {
        self.rounds += 1;
        self.total_wagered += round.bet as f64;
        self.total_paid = round_payout(self.total_paid + round.total_payout);
        if round.total_payout > 0.0 {
            self.winning_rounds += 1;
        }
        self.largest_payout = self.largest_payout.max(round.total_payout);

        for pattern in round.applied.standard.values().flatten() {
            *self.pattern_hits.entry(pattern.clone()).or_insert(0) += 1;
        }
        for symbol in &round.applied.bonus {
            *self.bonus_hits.entry(symbol.clone()).or_insert(0) += 1;
        }
    }

    fn finalize(&mut self) {
        if self.total_wagered > 0.0 {
            self.return_to_player = self.total_paid / self.total_wagered;
        }
        if self.rounds > 0 {
            self.hit_rate = self.winning_rounds as f64 / self.rounds as f64;
        }
    }
}

/// Evaluate `rounds` independent rounds and aggregate the results
///
/// # Errors
///
/// Stops at and returns the first round error; no partial report is produced
pub fn simulate<R: RandomSource + ?Sized>(
    evaluator: &RoundEvaluator<'_>,
    bet: i64,
    rounds: usize,
    source: &mut R,
    mut progress: Option<&mut SimulationProgress>,
) -> Result<SimulationReport> {
    if bet < 0 {
        return Err(invalid_wager(&bet, &"must not be negative"));
    }
    let mut report = SimulationReport {
        bet: bet.unsigned_abs(),
        ..SimulationReport::default()
    };

    for _ in 0..rounds {
        let round = evaluator.evaluate(bet, source)?;
        report.record(&round);

        if let Some(progress) = progress.as_deref_mut()
            && progress.advance()
            && report.total_wagered > 0.0
        {
            progress.set_return_to_player(report.total_paid / report.total_wagered);
        }
    }

    if let Some(progress) = progress {
        progress.finish();
    }

    report.finalize();
    info!(
        rounds = report.rounds,
        return_to_player = report.return_to_player,
        hit_rate = report.hit_rate,
        "simulation finished"
    );
    Ok(report)
}
