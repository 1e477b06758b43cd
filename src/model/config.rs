use indexmap::IndexMap;
use std::path::Path;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::document::{BonusProbabilityDocument, CellProbabilityDocument, ConfigDocument};
use crate::io::error::{Result, configuration_error, unknown_symbol};
use crate::math::probability::{RandomSource, weighted_choice};
use crate::model::patterns::WinPattern;
use crate::model::symbols::{SymbolDefinition, SymbolId, SymbolKind};
use crate::spatial::Coordinate;

/// Ordered symbol weights for one random draw
///
/// Weights are finite, non-negative and have a positive total; they are
/// normalized at selection time.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolWeights {
    symbols: Vec<SymbolId>,
    weights: Vec<f64>,
}

impl SymbolWeights {
    fn from_entries(entries: &IndexMap<String, f64>, field: &str) -> Result<Self> {
        let mut symbols = Vec::with_capacity(entries.len());
        let mut weights = Vec::with_capacity(entries.len());
        for (symbol, &weight) in entries {
            if !weight.is_finite() || weight < 0.0 {
                return Err(configuration_error(
                    format!("{field}.{symbol}"),
                    &format!("weight must be a non-negative number, got {weight}"),
                ));
            }
            symbols.push(symbol.clone());
            weights.push(weight);
        }
        let rule = Self { symbols, weights };
        if rule.total() <= 0.0 {
            return Err(configuration_error(field, &"weights must have a positive total"));
        }
        Ok(rule)
    }

    /// Symbols in configured order
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    /// Weights aligned with [`Self::symbols`]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Draw one symbol with probability proportional to its weight
    pub fn choose<R: RandomSource + ?Sized>(&self, source: &mut R) -> Option<&str> {
        weighted_choice(&self.weights, source)
            .and_then(|index| self.symbols.get(index))
            .map(String::as_str)
    }
}

/// Symbol weights for a single grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellProbabilityRule {
    /// Cell the rule fills
    pub position: Coordinate,
    /// Candidate symbols for the cell
    pub weights: SymbolWeights,
}

/// Symbol weights for the single bonus symbol placed per round
#[derive(Debug, Clone, PartialEq)]
pub struct BonusProbabilityRule {
    /// Candidate bonus symbols
    pub weights: SymbolWeights,
}

/// Immutable, validated game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    rows: usize,
    columns: usize,
    symbols: IndexMap<SymbolId, SymbolDefinition>,
    cell_rules: Vec<CellProbabilityRule>,
    bonus_rule: Option<BonusProbabilityRule>,
    win_patterns: Vec<WinPattern>,
}

impl GameConfig {
    /// Decode and validate a configuration from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not decode or fails validation
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_document(ConfigDocument::from_json_str(text)?)
    }

    /// Read, decode and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not decode, or fails
    /// validation
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_document(ConfigDocument::from_path(path)?)
    }

    /// Validate a decoded document
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a required field is missing, a
    /// dimension is out of range, a rule targets a cell outside the grid, a
    /// weight is invalid, or a referenced symbol has no definition
    pub fn from_document(document: ConfigDocument) -> Result<Self> {
        let rows = dimension(document.rows, "rows")?;
        let columns = dimension(document.columns, "columns")?;

        let symbols = document
            .symbols
            .iter()
            .map(|(id, symbol)| {
                SymbolDefinition::from_document(id, symbol)
                    .map(|definition| (id.clone(), definition))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        let probabilities = document
            .probabilities
            .ok_or_else(|| configuration_error("probabilities", &"missing"))?;

        let cell_rules = probabilities
            .standard_symbols
            .iter()
            .enumerate()
            .map(|(index, rule)| cell_rule(index, rule, rows, columns, &symbols))
            .collect::<Result<Vec<_>>>()?;

        let bonus_rule = probabilities
            .bonus_symbols
            .map(|rule| build_bonus_rule(&rule, &symbols))
            .transpose()?;

        let win_patterns = document
            .win_combinations
            .iter()
            .map(|(name, pattern)| WinPattern::from_document(name, pattern, rows, columns))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            rows,
            columns,
            symbols = symbols.len(),
            cell_rules = cell_rules.len(),
            win_patterns = win_patterns.len(),
            has_bonus_rule = bonus_rule.is_some(),
            "configuration loaded"
        );

        Ok(Self {
            rows,
            columns,
            symbols,
            cell_rules,
            bonus_rule,
            win_patterns,
        })
    }

    /// Get the number of grid rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of grid columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Per-cell probability rules in configured order
    pub fn cell_rules(&self) -> &[CellProbabilityRule] {
        &self.cell_rules
    }

    /// Bonus probability rule, if configured
    pub const fn bonus_rule(&self) -> Option<&BonusProbabilityRule> {
        self.bonus_rule.as_ref()
    }

    /// Win patterns in configured order
    pub fn win_patterns(&self) -> &[WinPattern] {
        &self.win_patterns
    }

    /// All symbol definitions in configured order
    pub const fn symbols(&self) -> &IndexMap<SymbolId, SymbolDefinition> {
        &self.symbols
    }

    /// Look up a symbol definition
    pub fn symbol(&self, id: &str) -> Option<&SymbolDefinition> {
        self.symbols.get(id)
    }

    /// Look up a win pattern by name
    pub fn win_pattern(&self, name: &str) -> Option<&WinPattern> {
        self.win_patterns.iter().find(|pattern| pattern.name == name)
    }
}

fn dimension(value: Option<i64>, field: &'static str) -> Result<usize> {
    let value = value.ok_or_else(|| configuration_error(field, &"missing"))?;
    usize::try_from(value)
        .ok()
        .filter(|size| (1..=MAX_GRID_DIMENSION).contains(size))
        .ok_or_else(|| {
            configuration_error(
                field,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}, got {value}"),
            )
        })
}

fn cell_rule(
    index: usize,
    rule: &CellProbabilityDocument,
    rows: usize,
    columns: usize,
    symbols: &IndexMap<SymbolId, SymbolDefinition>,
) -> Result<CellProbabilityRule> {
    let field = format!("probabilities.standard_symbols[{index}]");

    let row = rule
        .row
        .ok_or_else(|| configuration_error(format!("{field}.row"), &"missing"))?;
    let column = rule
        .column
        .ok_or_else(|| configuration_error(format!("{field}.column"), &"missing"))?;
    let position = match (usize::try_from(row), usize::try_from(column)) {
        (Ok(r), Ok(c)) if r < rows && c < columns => Coordinate::new(r, c),
        _ => {
            return Err(configuration_error(
                field,
                &format!("cell {row}:{column} is outside the {rows}x{columns} grid"),
            ));
        }
    };

    let weights = SymbolWeights::from_entries(&rule.symbols, &format!("{field}.symbols"))?;
    if let Some(missing) = weights
        .symbols()
        .iter()
        .find(|symbol| !symbols.contains_key(symbol.as_str()))
    {
        return Err(unknown_symbol(missing, format!("cell rule {position}")));
    }

    Ok(CellProbabilityRule { position, weights })
}

fn build_bonus_rule(
    rule: &BonusProbabilityDocument,
    symbols: &IndexMap<SymbolId, SymbolDefinition>,
) -> Result<BonusProbabilityRule> {
    let field = "probabilities.bonus_symbols.symbols";
    let weights = SymbolWeights::from_entries(&rule.symbols, field)?;
    for symbol in weights.symbols() {
        match symbols.get(symbol).map(SymbolDefinition::kind) {
            Some(SymbolKind::Bonus) => {}
            Some(SymbolKind::Standard) => {
                return Err(configuration_error(
                    format!("{field}.{symbol}"),
                    &"bonus rule references a standard symbol",
                ));
            }
            None => return Err(unknown_symbol(symbol, "the bonus probability rule")),
        }
    }
    Ok(BonusProbabilityRule { weights })
}
