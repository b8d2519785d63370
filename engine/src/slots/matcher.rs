//! Payline matching.
//!
//! Pure functions: select the cells a mask picks out of a grid, reduce them
//! to the maximal left-anchored run, and scan the whole grid for scatters.
//! No state is kept between calls.

use reelhouse_types::slots::{Grid, PaylineMask, SlotsConfig, Symbol};

/// One cell of a matched run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunCell {
    pub column: usize,
    pub row: usize,
    pub symbol: Symbol,
}

/// The cells a payline selects, one per column, left to right.
pub fn select_cells(mask: &PaylineMask, grid: &Grid) -> Vec<RunCell> {
    (0..grid.columns())
        .map(|column| {
            let row = mask.active_row(column);
            RunCell {
                column,
                row,
                symbol: grid.get(column, row),
            }
        })
        .collect()
}

/// Maximal left-anchored run of matching/wildcard cells.
///
/// Wildcards always continue the run and never fix its target; the first
/// non-wildcard cell establishes what later cells must match. Cells keep
/// their own symbol in the output (wildcards are not rewritten to the
/// established symbol). The run is returned whatever its length; callers
/// apply the minimum-length rule.
pub fn match_run(cells: &[RunCell], config: &SlotsConfig) -> Vec<RunCell> {
    let mut run = Vec::with_capacity(cells.len());
    let mut established: Option<Symbol> = None;

    for &cell in cells {
        if config.is_wildcard(cell.symbol) {
            run.push(cell);
            continue;
        }
        match established {
            None => {
                established = Some(cell.symbol);
                run.push(cell);
            }
            Some(target) if cell.symbol == target => run.push(cell),
            Some(_) => break,
        }
    }

    run
}

/// Mask-independent scatter scan over the whole grid.
pub fn scatter_cells(grid: &Grid, config: &SlotsConfig) -> Vec<RunCell> {
    grid.iter_cells()
        .filter(|&(_, _, symbol)| config.is_scatter(symbol))
        .map(|(column, row, symbol)| RunCell { column, row, symbol })
        .collect()
}
