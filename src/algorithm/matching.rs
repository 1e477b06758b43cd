//! Win pattern detection for every symbol on a grid

use bitvec::vec::BitVec;
use indexmap::{IndexMap, IndexSet};

use crate::model::GameConfig;
use crate::model::patterns::PatternKind;
use crate::model::symbols::SymbolId;
use crate::spatial::{Coordinate, Grid};

/// Matched pattern names per symbol, both in encounter order
pub type WinCombinationMap = IndexMap<SymbolId, IndexSet<String>>;

/// Cells occupied by one symbol, indexed row-major
struct Occupancy<'a> {
    grid: &'a Grid,
    cells: BitVec,
}

impl<'a> Occupancy<'a> {
    fn new(grid: &'a Grid, symbol: &str) -> Self {
        let cells = grid.iter().map(|(_, cell)| cell == Some(symbol)).collect();
        Self { grid, cells }
    }

    fn covers(&self, area: &[Coordinate]) -> bool {
        area.iter().all(|&position| {
            self.grid
                .linear_index(position)
                .and_then(|index| self.cells.get(index))
                .is_some_and(|bit| *bit)
        })
    }
}

/// Determine which win patterns each distinct symbol on the grid satisfies
///
/// Symbols are visited in row-major first-appearance order and every symbol
/// gets an entry, even with no match. A count pattern matches when the symbol
/// occurs exactly the required number of times; a linear pattern matches when
/// any one of its covered areas holds only that symbol.
pub fn find_win_combinations(grid: &Grid, config: &GameConfig) -> WinCombinationMap {
    grid.symbol_counts()
        .into_iter()
        .map(|(symbol, occurrences)| {
            let occupancy = Occupancy::new(grid, &symbol);
            let matched: IndexSet<String> = config
                .win_patterns()
                .iter()
                .filter(|pattern| match &pattern.kind {
                    PatternKind::Count { required } => *required == occurrences,
                    PatternKind::Linear { covered_areas, .. } => {
                        covered_areas.iter().any(|area| occupancy.covers(area))
                    }
                })
                .map(|pattern| pattern.name.clone())
                .collect();
            (symbol, matched)
        })
        .collect()
}
