//! Serde model of the JSON configuration document
//!
//! Fields the game requires are still `Option` here so that a missing field is
//! reported by name during [`GameConfig`](crate::model::config::GameConfig)
//! construction instead of as a generic decoding failure.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::io::error::{GameError, Result};

/// Top-level configuration document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigDocument {
    /// Grid width
    pub columns: Option<i64>,
    /// Grid height
    pub rows: Option<i64>,
    /// Symbol definitions keyed by identifier, in document order
    #[serde(default)]
    pub symbols: IndexMap<String, SymbolDocument>,
    /// Cell and bonus probability rules
    pub probabilities: Option<ProbabilitiesDocument>,
    /// Win pattern definitions keyed by name, in document order
    #[serde(default)]
    pub win_combinations: IndexMap<String, WinCombinationDocument>,
}

/// Raw symbol definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbolDocument {
    /// `standard` or `bonus`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Payout multiplier (standard) or total multiplier (`multiply_reward` bonus)
    pub reward_multiplier: Option<f64>,
    /// Bonus effect: `multiply_reward`, `extra_bonus` or `miss`
    pub impact: Option<String>,
    /// Amount added by an `extra_bonus` symbol
    pub extra: Option<f64>,
}

/// Probability section of the document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbabilitiesDocument {
    /// Per-cell standard symbol weights
    #[serde(default)]
    pub standard_symbols: Vec<CellProbabilityDocument>,
    /// Optional bonus symbol weights
    pub bonus_symbols: Option<BonusProbabilityDocument>,
}

/// Weights for one grid cell
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CellProbabilityDocument {
    /// Row index of the cell
    pub row: Option<i64>,
    /// Column index of the cell
    pub column: Option<i64>,
    /// Symbol identifier to weight
    #[serde(default)]
    pub symbols: IndexMap<String, f64>,
}

/// Weights for the single bonus symbol draw
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BonusProbabilityDocument {
    /// Bonus symbol identifier to weight
    #[serde(default)]
    pub symbols: IndexMap<String, f64>,
}

/// Raw win pattern definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WinCombinationDocument {
    /// Multiplier applied when the pattern matches
    pub reward_multiplier: Option<f64>,
    /// `same_symbols` or `linear_symbols`
    pub when: Option<String>,
    /// Explicit occurrence count for `same_symbols` patterns
    pub count: Option<i64>,
    /// Pattern group, which names the direction of linear patterns
    pub group: Option<String>,
    /// Candidate areas as lists of `"row:column"` cells
    pub covered_areas: Option<Vec<Vec<String>>>,
}

impl ConfigDocument {
    /// Decode a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MalformedConfiguration`] if the text is not valid
    /// JSON or a field has the wrong type
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and decode a document from a file
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FileSystem`] if the file cannot be read, or
    /// [`GameError::MalformedConfiguration`] if it does not decode
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::FileSystem {
            path: path.to_path_buf(),
            operation: "read configuration",
            source,
        })?;
        Self::from_json_str(&text)
    }
}
