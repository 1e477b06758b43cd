//! Symbol grid storage with explicit unassigned cells
//!
//! Cells hold `Option<SymbolId>`: `None` marks a cell no rule has assigned,
//! which can never be confused with a legitimate symbol identifier.

use indexmap::IndexMap;
use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

use crate::model::symbols::SymbolId;

/// Rendering of an unassigned cell in [`Grid`]'s `Display` output
pub const UNASSIGNED_DISPLAY: &str = "*";

/// Zero-based grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

impl Coordinate {
    /// Create a coordinate from row and column indices
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    /// Parse the `"row:column"` cell encoding used by covered areas
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s
            .split_once(':')
            .ok_or_else(|| format!("expected 'row:column', got '{s}'"))?;
        let row: usize = row
            .trim()
            .parse()
            .map_err(|e| format!("invalid row in '{s}': {e}"))?;
        let column: usize = column
            .trim()
            .parse()
            .map_err(|e| format!("invalid column in '{s}': {e}"))?;
        Ok(Self { row, column })
    }
}

/// Rows x columns matrix of symbol identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Option<SymbolId>>,
}

impl Grid {
    /// Create a grid with every cell unassigned
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, columns), None),
        }
    }

    /// Build a fully assigned grid from row slices
    ///
    /// Returns `None` for an empty or ragged input.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Option<Self> {
        let columns = rows.first()?.len();
        if columns == 0 || rows.iter().any(|row| row.len() != columns) {
            return None;
        }

        let flat = rows
            .iter()
            .flat_map(|row| row.iter().map(|symbol| Some(symbol.as_ref().to_string())))
            .collect();
        Array2::from_shape_vec((rows.len(), columns), flat)
            .ok()
            .map(|cells| Self { cells })
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the coordinate lies inside the grid
    pub fn contains(&self, position: Coordinate) -> bool {
        position.row < self.rows() && position.column < self.columns()
    }

    /// Symbol at a position, `None` when unassigned or out of bounds
    pub fn get(&self, position: Coordinate) -> Option<&str> {
        self.cells
            .get([position.row, position.column])
            .and_then(Option::as_deref)
    }

    /// Whether an in-bounds cell has not been assigned a symbol
    pub fn is_unassigned(&self, position: Coordinate) -> bool {
        self.cells
            .get([position.row, position.column])
            .is_some_and(Option::is_none)
    }

    /// Place a symbol, replacing whatever the cell held
    ///
    /// Returns `false` if the position is out of bounds.
    pub fn assign(&mut self, position: Coordinate, symbol: &str) -> bool {
        match self.cells.get_mut([position.row, position.column]) {
            Some(cell) => {
                *cell = Some(symbol.to_string());
                true
            }
            None => false,
        }
    }

    /// Number of cells still unassigned
    pub fn unassigned_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Row-major index of a coordinate, used for occupancy masks
    pub fn linear_index(&self, position: Coordinate) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.columns() + position.column)
    }

    /// Iterate cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Option<&str>)> {
        self.cells
            .indexed_iter()
            .map(|((row, column), cell)| (Coordinate::new(row, column), cell.as_deref()))
    }

    /// Occurrence count of every symbol, in row-major first-appearance order
    ///
    /// Unassigned cells are not symbols and are not counted.
    pub fn symbol_counts(&self) -> IndexMap<SymbolId, usize> {
        let mut counts: IndexMap<SymbolId, usize> = IndexMap::new();
        for symbol in self.cells.iter().flatten() {
            *counts.entry(symbol.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Option<SymbolId>>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let rendered: Vec<&str> = row
                .iter()
                .map(|cell| cell.as_deref().unwrap_or(UNASSIGNED_DISPLAY))
                .collect();
            write!(f, "{}", rendered.join(" "))?;
        }
        Ok(())
    }
}
