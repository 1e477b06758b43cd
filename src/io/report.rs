//! JSON rendering of round and simulation results
//!
//! The round shape is `matrix`, `reward`, `applied_winning_combinations` and
//! `applied_bonus_symbol`. Unassigned cells render as `null`.

use indexmap::IndexMap;
use serde::Serialize;

use crate::algorithm::evaluator::RoundResult;
use crate::io::error::{GameError, Result};
use crate::model::symbols::SymbolId;

/// Serializable view of a [`RoundResult`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport {
    /// Grid rows
    pub matrix: Vec<Vec<Option<SymbolId>>>,
    /// Total payout
    pub reward: f64,
    /// Contributing pattern names per standard symbol
    pub applied_winning_combinations: IndexMap<SymbolId, Vec<String>>,
    /// Contributing bonus symbols joined with commas, or empty
    pub applied_bonus_symbol: String,
}

impl From<&RoundResult> for RoundReport {
    fn from(result: &RoundResult) -> Self {
        Self {
            matrix: result.grid.to_rows(),
            reward: result.total_payout,
            applied_winning_combinations: result
                .applied
                .standard
                .iter()
                .map(|(symbol, patterns)| (symbol.clone(), patterns.iter().cloned().collect()))
                .collect(),
            applied_bonus_symbol: result.applied.bonus_label(),
        }
    }
}

/// Pretty-print any report as JSON
///
/// # Errors
///
/// Returns [`GameError::Serialization`] if the value cannot be encoded
pub fn to_pretty_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|source| GameError::Serialization { source })
}
