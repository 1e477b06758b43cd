//! Win pattern definitions
//!
//! Count patterns carry their required occurrence count, parsed once from
//! names such as `same_symbol_5_times`. Linear patterns carry a direction and
//! the candidate areas that satisfy them.

use crate::io::configuration::{COUNT_PATTERN_PREFIX, COUNT_PATTERN_SUFFIX};
use crate::io::document::WinCombinationDocument;
use crate::io::error::{Result, configuration_error};
use crate::spatial::Coordinate;

/// Direction a linear pattern runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearDirection {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// From top-left to bottom-right
    DiagonalLeftToRight,
    /// From top-right to bottom-left
    DiagonalRightToLeft,
}

impl LinearDirection {
    /// Resolve a direction from a pattern `group` value
    pub fn from_group(group: &str) -> Option<Self> {
        match group {
            "horizontally_linear_symbols" => Some(Self::Horizontal),
            "vertically_linear_symbols" => Some(Self::Vertical),
            "ltr_diagonally_linear_symbols" => Some(Self::DiagonalLeftToRight),
            "rtl_diagonally_linear_symbols" => Some(Self::DiagonalRightToLeft),
            _ => None,
        }
    }

    /// Resolve a direction from a conventional pattern name
    pub fn from_pattern_name(name: &str) -> Option<Self> {
        match name {
            "same_symbols_horizontally" => Some(Self::Horizontal),
            "same_symbols_vertically" => Some(Self::Vertical),
            "same_symbols_diagonally_left_to_right" => Some(Self::DiagonalLeftToRight),
            "same_symbols_diagonally_right_to_left" => Some(Self::DiagonalRightToLeft),
            _ => None,
        }
    }
}

/// How a pattern is satisfied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// The symbol occurs exactly `required` times on the grid
    Count {
        /// Exact occurrence count
        required: usize,
    },
    /// The symbol fills at least one covered area completely
    Linear {
        /// Direction of the areas
        direction: LinearDirection,
        /// Candidate areas, each a set of cells
        covered_areas: Vec<Vec<Coordinate>>,
    },
}

/// A named win pattern with its payout multiplier
#[derive(Debug, Clone, PartialEq)]
pub struct WinPattern {
    /// Pattern name as configured
    pub name: String,
    /// Multiplier applied when the pattern matches
    pub reward_multiplier: f64,
    /// Matching rule
    pub kind: PatternKind,
}

/// Extract N from a `same_symbol_<N>_times` pattern name
pub fn parse_count_pattern_name(name: &str) -> Option<usize> {
    let digits = name
        .strip_prefix(COUNT_PATTERN_PREFIX)?
        .strip_suffix(COUNT_PATTERN_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl WinPattern {
    /// Build a pattern, checking covered areas against the grid bounds
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the multiplier is missing or invalid,
    /// the count is not positive, a cell is malformed or out of bounds, the
    /// direction cannot be resolved, or the pattern is neither count nor linear
    pub fn from_document(
        name: &str,
        document: &WinCombinationDocument,
        rows: usize,
        columns: usize,
    ) -> Result<Self> {
        let field = |key: &str| format!("win_combinations.{name}.{key}");

        let reward_multiplier = document
            .reward_multiplier
            .ok_or_else(|| configuration_error(field("reward_multiplier"), &"missing"))?;
        if !reward_multiplier.is_finite() || reward_multiplier < 0.0 {
            return Err(configuration_error(
                field("reward_multiplier"),
                &format!("must be a non-negative number, got {reward_multiplier}"),
            ));
        }

        let kind = if let Some(required) = parse_count_pattern_name(name) {
            if let Some(count) = document.count
                && usize::try_from(count).ok() != Some(required)
            {
                return Err(configuration_error(
                    field("count"),
                    &format!("pattern name requires {required} occurrences but count is {count}"),
                ));
            }
            count_kind(required, &field("name"))?
        } else if let (Some("same_symbols"), Some(count)) = (document.when.as_deref(), document.count)
        {
            let required = usize::try_from(count).unwrap_or(0);
            count_kind(required, &field("count"))?
        } else if let Some(areas) = &document.covered_areas {
            let direction = document
                .group
                .as_deref()
                .and_then(LinearDirection::from_group)
                .or_else(|| LinearDirection::from_pattern_name(name))
                .ok_or_else(|| {
                    configuration_error(field("group"), &"cannot determine linear direction")
                })?;
            let covered_areas = areas
                .iter()
                .map(|area| parse_area(area, rows, columns, &field("covered_areas")))
                .collect::<Result<Vec<_>>>()?;
            PatternKind::Linear {
                direction,
                covered_areas,
            }
        } else {
            return Err(configuration_error(
                field("when"),
                &"pattern is neither a same-symbol count nor a linear pattern",
            ));
        };

        Ok(Self {
            name: name.to_string(),
            reward_multiplier,
            kind,
        })
    }
}

fn count_kind(required: usize, field: &str) -> Result<PatternKind> {
    if required == 0 {
        return Err(configuration_error(field, &"required count must be positive"));
    }
    Ok(PatternKind::Count { required })
}

fn parse_area(
    area: &[String],
    rows: usize,
    columns: usize,
    field: &str,
) -> Result<Vec<Coordinate>> {
    if area.is_empty() {
        return Err(configuration_error(field, &"covered area is empty"));
    }
    area.iter()
        .map(|cell| {
            let position: Coordinate = cell
                .parse()
                .map_err(|reason: String| configuration_error(field, &reason))?;
            if position.row >= rows || position.column >= columns {
                return Err(configuration_error(
                    field,
                    &format!("cell {position} is outside the {rows}x{columns} grid"),
                ));
            }
            Ok(position)
        })
        .collect()
}
