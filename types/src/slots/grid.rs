//! The per-spin symbol matrix.
//!
//! Grids are addressed by `(column, row)` and stored column-major. A grid is
//! produced fresh for every spin and, apart from the generator's scatter
//! repair pass, never mutated after fill.

use serde::{Deserialize, Serialize};

use super::Symbol;

/// Rectangular symbol matrix, `columns x rows`, column-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Symbol>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`.
    pub fn filled(columns: usize, rows: usize, fill: Symbol) -> Self {
        Self {
            columns,
            rows,
            cells: vec![fill; columns * rows],
        }
    }

    /// Build a grid from column-major cell data.
    ///
    /// Panics if `cells.len() != columns * rows`; grids are only built by the
    /// generator and tests, both of which control the dimensions.
    pub fn from_cells(columns: usize, rows: usize, cells: Vec<Symbol>) -> Self {
        assert_eq!(cells.len(), columns * rows, "cell count must match dimensions");
        Self { columns, rows, cells }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, column: usize, row: usize) -> Symbol {
        self.cells[column * self.rows + row]
    }

    pub fn set(&mut self, column: usize, row: usize, symbol: Symbol) {
        self.cells[column * self.rows + row] = symbol;
    }

    /// Iterate all cells as `(column, row, symbol)`, column-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Symbol)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &symbol)| {
            let column = idx / self.rows;
            let row = idx % self.rows;
            (column, row, symbol)
        })
    }

    /// The symbols of one row, left to right.
    pub fn row(&self, row: usize) -> Vec<Symbol> {
        (0..self.columns).map(|c| self.get(c, row)).collect()
    }
}
