//! Grid generation.
//!
//! Each cell draws uniformly from its candidate pool: normals always,
//! scatters only on scatter-eligible rows, wildcards only on
//! wildcard-eligible rows. The draw is flat per symbol ID, not per class, so
//! a class with more member IDs is proportionally more likely. After the
//! fill, one repair pass removes duplicate scatters per row.

use reelhouse_types::slots::{Grid, SlotsConfig, Symbol};

use super::SpinRng;

/// Generate a fresh grid for one spin.
pub fn generate(config: &SlotsConfig, rng: &mut SpinRng) -> Grid {
    let mut grid = Grid::filled(config.columns, config.rows, 0);
    for column in 0..config.columns {
        for row in 0..config.rows {
            grid.set(column, row, draw_symbol(config, rng, row, false));
        }
    }
    dedup_scatters(config, rng, &mut grid);
    grid
}

/// Draw one symbol for a cell on `row`.
///
/// `exclude_scatter` is set by the repair pass so a replacement can never
/// reintroduce a scatter.
fn draw_symbol(
    config: &SlotsConfig,
    rng: &mut SpinRng,
    row: usize,
    exclude_scatter: bool,
) -> Symbol {
    let pool = candidate_pool(config, row, exclude_scatter);
    if pool.is_empty() {
        // Validated configs always leave the normal class in the pool.
        return config.normal_symbols.first().copied().unwrap_or(0);
    }
    rng.pick(&pool)
}

/// Candidate pool for one cell.
fn candidate_pool(config: &SlotsConfig, row: usize, exclude_scatter: bool) -> Vec<Symbol> {
    let mut pool = Vec::with_capacity(
        config.scatter_symbols.len() + config.normal_symbols.len() + config.wildcard_symbols.len(),
    );
    if !exclude_scatter && config.is_scatter_row(row) {
        pool.extend_from_slice(&config.scatter_symbols);
    }
    pool.extend_from_slice(&config.normal_symbols);
    if config.is_wildcard_row(row) {
        pool.extend_from_slice(&config.wildcard_symbols);
    }
    pool
}

/// Repair pass: at most one scatter cell per row.
///
/// Scans each row left to right once; every scatter beyond the first is
/// redrawn with the scatter class excluded. Runs exactly once, not to a
/// fixpoint, which suffices because replacements cannot be scatters.
fn dedup_scatters(config: &SlotsConfig, rng: &mut SpinRng, grid: &mut Grid) {
    for row in 0..config.rows {
        let mut seen = false;
        for column in 0..config.columns {
            if !config.is_scatter(grid.get(column, row)) {
                continue;
            }
            if seen {
                grid.set(column, row, draw_symbol(config, rng, row, true));
            } else {
                seen = true;
            }
        }
    }
}
