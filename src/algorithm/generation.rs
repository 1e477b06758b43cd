//! Random board synthesis from per-cell probability rules
//!
//! Each cell rule draws one symbol independently. When a bonus rule is
//! configured, one bonus symbol is drawn and placed on a cell no rule covered;
//! if every cell is already assigned, a uniformly chosen cell is overwritten.

use tracing::{debug, trace, warn};

use crate::io::configuration::BONUS_PLACEMENT_ATTEMPTS_PER_CELL;
use crate::io::error::{GameError, Result, configuration_error};
use crate::math::probability::RandomSource;
use crate::model::GameConfig;
use crate::spatial::{Coordinate, Grid};

/// Generate one randomized grid
///
/// Cells not covered by any rule and not chosen for the bonus symbol stay
/// unassigned.
///
/// # Errors
///
/// Returns [`GameError::BonusPlacement`] if no free cell is found for the
/// bonus symbol within the retry budget, or a configuration error if a rule
/// has nothing to choose from
pub fn generate_board<R: RandomSource + ?Sized>(
    config: &GameConfig,
    source: &mut R,
) -> Result<Grid> {
    let mut grid = Grid::new(config.rows(), config.columns());

    for rule in config.cell_rules() {
        let symbol = rule.weights.choose(source).ok_or_else(|| {
            configuration_error(
                format!("probabilities.standard_symbols[{}]", rule.position),
                &"no symbol with positive weight",
            )
        })?;
        trace!(cell = %rule.position, symbol, "cell assigned");
        grid.assign(rule.position, symbol);
    }

    if let Some(rule) = config.bonus_rule() {
        let symbol = rule.weights.choose(source).ok_or_else(|| {
            configuration_error("probabilities.bonus_symbols", &"no symbol with positive weight")
        })?;
        let position = bonus_position(&grid, symbol, source)?;
        debug!(cell = %position, symbol, "bonus symbol placed");
        grid.assign(position, symbol);
    }

    let unassigned = grid.unassigned_count();
    if unassigned > 0 {
        warn!(unassigned, "grid has cells no rule assigned");
    }

    Ok(grid)
}

/// Pick the cell that receives the bonus symbol
///
/// Rejection-samples uniform cells until one is unassigned. With no
/// unassigned cell left, any uniformly drawn cell is used.
///
/// # Errors
///
/// Returns [`GameError::BonusPlacement`] if the draw budget is exhausted
pub fn bonus_position<R: RandomSource + ?Sized>(
    grid: &Grid,
    symbol: &str,
    source: &mut R,
) -> Result<Coordinate> {
    let (rows, columns) = grid.dimensions();

    if grid.unassigned_count() == 0 {
        debug!(symbol, "grid fully covered, bonus symbol overwrites a random cell");
        return Ok(random_cell(rows, columns, source));
    }

    let attempts = grid.cell_count() * BONUS_PLACEMENT_ATTEMPTS_PER_CELL;
    for _ in 0..attempts {
        let position = random_cell(rows, columns, source);
        if grid.is_unassigned(position) {
            return Ok(position);
        }
    }

    Err(GameError::BonusPlacement {
        symbol: symbol.to_string(),
        attempts,
        grid_dimensions: (rows, columns),
    })
}

fn random_cell<R: RandomSource + ?Sized>(
    rows: usize,
    columns: usize,
    source: &mut R,
) -> Coordinate {
    let row = source.next_index(rows);
    let column = source.next_index(columns);
    Coordinate::new(row, column)
}
