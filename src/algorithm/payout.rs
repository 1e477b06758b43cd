//! Payout computation from matched win combinations
//!
//! Standard symbols pay `bet x symbol multiplier x every matched pattern
//! multiplier`. A total that lands exactly on the wager is treated as no win.
//! Bonus symbols then act on the running total by their mere presence.

use indexmap::IndexSet;
use tracing::debug;

use crate::algorithm::matching::WinCombinationMap;
use crate::io::error::{GameError, Result, unknown_symbol};
use crate::math::rounding::{exceeds, round_payout, same_amount, scaled};
use crate::model::GameConfig;
use crate::model::symbols::{BonusImpact, SymbolDefinition, SymbolId};

/// Combinations that actually contributed to the payout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedCombinations {
    /// Standard symbols with at least one match, and all of their matches
    pub standard: WinCombinationMap,
    /// Bonus symbols whose impact fired, empty when the payout ended at zero
    pub bonus: IndexSet<SymbolId>,
}

impl AppliedCombinations {
    /// Contributing bonus symbols joined with commas, or an empty string
    pub fn bonus_label(&self) -> String {
        self.bonus
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Total payout of a round and the combinations behind it
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutOutcome {
    /// Total payout, rounded to payout precision
    pub total: f64,
    /// Contributing combinations
    pub applied: AppliedCombinations,
}

/// Compute the payout for a wager and the matched combinations of a grid
///
/// # Errors
///
/// Returns a configuration error if a symbol in the map has no definition or
/// a recorded pattern name is not configured
pub fn compute_payout(
    bet: u64,
    combinations: &WinCombinationMap,
    config: &GameConfig,
) -> Result<PayoutOutcome> {
    let entries = combinations
        .iter()
        .map(|(symbol, patterns)| {
            config
                .symbol(symbol)
                .map(|definition| (symbol, patterns, definition))
                .ok_or_else(|| unknown_symbol(symbol, "the win combination map"))
        })
        .collect::<Result<Vec<_>>>()?;

    let wager = bet as f64;
    let mut applied = AppliedCombinations::default();
    let mut total = 0.0;

    for &(symbol, patterns, definition) in &entries {
        let SymbolDefinition::Standard { reward_multiplier } = *definition else {
            continue;
        };
        if patterns.is_empty() {
            continue;
        }

        let reward = standard_reward(wager, reward_multiplier, symbol, patterns, config)?;
        debug!(symbol = symbol.as_str(), reward, "standard symbol reward");
        total = round_payout(total + reward);
        applied.standard.insert(symbol.clone(), patterns.clone());
    }

    if same_amount(total, wager) {
        debug!(total, "payout equals wager, no real win");
        total = 0.0;
    }

    let mut contributing = IndexSet::new();
    for &(symbol, _, definition) in &entries {
        let SymbolDefinition::Bonus { impact } = *definition else {
            continue;
        };
        match impact {
            BonusImpact::MultiplyReward { multiplier } => {
                total = scaled(total, f64::from(multiplier));
                contributing.insert(symbol.clone());
            }
            BonusImpact::ExtraBonus { extra } if exceeds(total, wager) => {
                total = round_payout(total + extra as f64);
                contributing.insert(symbol.clone());
            }
            BonusImpact::ExtraBonus { .. } | BonusImpact::Miss => {}
        }
        debug!(symbol = symbol.as_str(), ?impact, total, "bonus symbol evaluated");
    }

    if !contributing.is_empty() && exceeds(total, 0.0) {
        applied.bonus = contributing;
    }

    Ok(PayoutOutcome { total, applied })
}

fn standard_reward(
    wager: f64,
    symbol_multiplier: f64,
    symbol: &str,
    patterns: &IndexSet<String>,
    config: &GameConfig,
) -> Result<f64> {
    // Rounded once by the caller so the product keeps full precision
    let mut reward = wager * symbol_multiplier;
    for name in patterns {
        let pattern = config
            .win_pattern(name)
            .ok_or_else(|| GameError::UnknownPattern {
                pattern: name.clone(),
                symbol: symbol.to_string(),
            })?;
        reward *= pattern.reward_multiplier;
    }
    Ok(reward)
}
