//! Payline masks.
//!
//! A payline mask selects exactly one cell per column; the set of masks is
//! static configuration, loaded once and read-only afterwards. Masks are
//! built from a boolean matrix (the authoring format) and stored compactly
//! as the active row per column.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaylineError {
    #[error("payline matrix has {got} columns, expected {expected}")]
    ColumnCountMismatch { got: usize, expected: usize },
    #[error("payline column {column} has {got} rows, expected {expected}")]
    RowCountMismatch {
        column: usize,
        got: usize,
        expected: usize,
    },
    #[error("payline column {column} has {active} active cells, expected exactly 1")]
    ActiveCellCount { column: usize, active: usize },
}

/// One cell per column through the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaylineMask {
    rows: Vec<u8>,
}

impl PaylineMask {
    /// Build from a boolean matrix (`matrix[column][row]`), validating that
    /// every column activates exactly one row.
    pub fn from_matrix(
        matrix: &[Vec<bool>],
        columns: usize,
        rows: usize,
    ) -> Result<Self, PaylineError> {
        if matrix.len() != columns {
            return Err(PaylineError::ColumnCountMismatch {
                got: matrix.len(),
                expected: columns,
            });
        }

        let mut active_rows = Vec::with_capacity(columns);
        for (column, column_cells) in matrix.iter().enumerate() {
            if column_cells.len() != rows {
                return Err(PaylineError::RowCountMismatch {
                    column,
                    got: column_cells.len(),
                    expected: rows,
                });
            }
            let active: Vec<usize> = column_cells
                .iter()
                .enumerate()
                .filter(|(_, &on)| on)
                .map(|(row, _)| row)
                .collect();
            if active.len() != 1 {
                return Err(PaylineError::ActiveCellCount {
                    column,
                    active: active.len(),
                });
            }
            active_rows.push(active[0] as u8);
        }

        Ok(Self { rows: active_rows })
    }

    /// Shorthand for authoring: one row index per column.
    ///
    /// The row indices are not range-checked here; `SlotsConfig::validate`
    /// rejects masks that fall outside the grid.
    pub fn from_rows(rows: Vec<u8>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> usize {
        self.rows.len()
    }

    /// The single active row for `column`.
    pub fn active_row(&self, column: usize) -> usize {
        self.rows[column] as usize
    }

    pub fn row_indices(&self) -> &[u8] {
        &self.rows
    }
}
