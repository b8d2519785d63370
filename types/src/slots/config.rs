//! Engine configuration.
//!
//! Everything the engine consumes is collected here: grid dimensions, symbol
//! classes, row eligibility, the payline library, the payout table and bet
//! limits. Configurations are validated once at load; after that the engine
//! assumes well-formed input and never re-checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    PaylineMask, PayoutTable, Symbol, DEFAULT_COLUMNS, DEFAULT_MAX_BET, DEFAULT_MIN_BET,
    DEFAULT_NORMAL_SYMBOLS, DEFAULT_ROWS, DEFAULT_SCATTER_SYMBOL, DEFAULT_WILDCARD_SYMBOL,
    MIN_RUN_LENGTH, SCATTER_TRIGGER_COUNT,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {columns}x{rows})")]
    EmptyGrid { columns: usize, rows: usize },
    #[error("normal symbol class is empty")]
    NoNormalSymbols,
    #[error("symbol {symbol} appears in more than one class")]
    OverlappingClasses { symbol: Symbol },
    #[error("{class} row {row} is outside the grid (rows: {rows})")]
    EligibleRowOutOfRange {
        class: &'static str,
        row: usize,
        rows: usize,
    },
    #[error("payline {index} spans {got} columns, expected {expected}")]
    PaylineColumnMismatch {
        index: usize,
        got: usize,
        expected: usize,
    },
    #[error("payline {index} selects row {row} in column {column}, outside the grid (rows: {rows})")]
    PaylineRowOutOfRange {
        index: usize,
        column: usize,
        row: usize,
        rows: usize,
    },
    #[error("no paylines configured")]
    NoPaylines,
    #[error("wildcard {symbol} has no payout table entry")]
    MissingWildcardPayout { symbol: Symbol },
    #[error("minimum run length {min_run_length} exceeds column count {columns}")]
    MinRunTooLong {
        min_run_length: usize,
        columns: usize,
    },
    #[error(
        "scatter trigger {trigger} can never fire: only {eligible_rows} scatter-eligible rows \
         and at most one scatter per row"
    )]
    ScatterTriggerUnreachable {
        trigger: usize,
        eligible_rows: usize,
    },
    #[error("bet limits inverted (min {min_bet} > max {max_bet})")]
    InvertedBetLimits { min_bet: u64, max_bet: u64 },
}

/// Static configuration for one slot game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotsConfig {
    /// Grid width (reel count).
    pub columns: usize,
    /// Grid height (visible symbols per reel).
    pub rows: usize,
    /// Symbols that pay on paylines and match only themselves.
    pub normal_symbols: Vec<Symbol>,
    /// Symbols evaluated off-payline for the bonus signal.
    pub scatter_symbols: Vec<Symbol>,
    /// Symbols that substitute for any normal symbol in a run.
    pub wildcard_symbols: Vec<Symbol>,
    /// Rows on which scatter symbols may be generated.
    pub scatter_rows: Vec<usize>,
    /// Rows on which wildcard symbols may be generated.
    pub wildcard_rows: Vec<usize>,
    /// The payline library, evaluated in order every spin.
    pub paylines: Vec<PaylineMask>,
    /// Symbol payouts by run length, in basis points.
    pub paytable: PayoutTable,
    /// Shortest run that counts as a win.
    pub min_run_length: usize,
    /// Scatter cells anywhere on the grid that raise the bonus signal.
    pub scatter_trigger_count: usize,
    /// Bet limits in fixed-point units.
    pub min_bet: u64,
    pub max_bet: u64,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl SlotsConfig {
    /// The standard 5x3 game: nine normal symbols, one scatter allowed on
    /// any row, one wildcard restricted to the middle row, nine paylines.
    pub fn classic() -> Self {
        let mut paytable = PayoutTable::new();
        // Normals, low-pay to high-pay, for runs of 3/4/5 columns.
        paytable.set(1, vec![25_000, 75_000, 375_000]); // 2.5 / 7.5 / 37.5
        paytable.set(2, vec![1_000, 4_000, 20_000]); // 0.1 / 0.4 / 2.0
        paytable.set(3, vec![2_000, 8_000, 40_000]); // 0.2 / 0.8 / 4.0
        paytable.set(4, vec![2_500, 10_000, 50_000]); // 0.25 / 1.0 / 5.0
        paytable.set(5, vec![4_000, 16_000, 80_000]); // 0.4 / 1.6 / 8.0
        paytable.set(6, vec![5_000, 20_000, 100_000]); // 0.5 / 2.0 / 10.0
        paytable.set(7, vec![7_500, 30_000, 150_000]); // 0.75 / 3.0 / 15.0
        paytable.set(8, vec![10_000, 50_000, 250_000]); // 1.0 / 5.0 / 25.0
        paytable.set(9, vec![12_500, 62_500, 312_500]); // 1.25 / 6.25 / 31.25
        // Wildcard: standalone stacking multiplier only.
        paytable.set(DEFAULT_WILDCARD_SYMBOL, vec![20_000]); // 2.0

        let paylines = vec![
            PaylineMask::from_rows(vec![1, 1, 1, 1, 1]), // middle
            PaylineMask::from_rows(vec![0, 0, 0, 0, 0]), // top
            PaylineMask::from_rows(vec![2, 2, 2, 2, 2]), // bottom
            PaylineMask::from_rows(vec![0, 1, 2, 1, 0]), // v
            PaylineMask::from_rows(vec![2, 1, 0, 1, 2]), // inverted v
            PaylineMask::from_rows(vec![0, 0, 1, 2, 2]), // stairs down
            PaylineMask::from_rows(vec![2, 2, 1, 0, 0]), // stairs up
            PaylineMask::from_rows(vec![1, 0, 0, 0, 1]), // crown
            PaylineMask::from_rows(vec![1, 2, 2, 2, 1]), // cradle
        ];

        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            normal_symbols: DEFAULT_NORMAL_SYMBOLS.to_vec(),
            scatter_symbols: vec![DEFAULT_SCATTER_SYMBOL],
            wildcard_symbols: vec![DEFAULT_WILDCARD_SYMBOL],
            scatter_rows: vec![0, 1, 2],
            wildcard_rows: vec![1],
            paylines,
            paytable,
            min_run_length: MIN_RUN_LENGTH,
            scatter_trigger_count: SCATTER_TRIGGER_COUNT,
            min_bet: DEFAULT_MIN_BET,
            max_bet: DEFAULT_MAX_BET,
        }
    }

    /// Variant with wildcards allowed on every row.
    pub fn wildcard_any_row() -> Self {
        let mut config = Self::classic();
        config.wildcard_rows = (0..config.rows).collect();
        config
    }

    pub fn is_normal(&self, symbol: Symbol) -> bool {
        self.normal_symbols.contains(&symbol)
    }

    pub fn is_scatter(&self, symbol: Symbol) -> bool {
        self.scatter_symbols.contains(&symbol)
    }

    pub fn is_wildcard(&self, symbol: Symbol) -> bool {
        self.wildcard_symbols.contains(&symbol)
    }

    pub fn is_scatter_row(&self, row: usize) -> bool {
        self.scatter_rows.contains(&row)
    }

    pub fn is_wildcard_row(&self, row: usize) -> bool {
        self.wildcard_rows.contains(&row)
    }

    /// Validate the configuration. Call once at load; the engine trusts the
    /// result afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.normal_symbols.is_empty() {
            return Err(ConfigError::NoNormalSymbols);
        }
        if self.min_run_length > self.columns {
            return Err(ConfigError::MinRunTooLong {
                min_run_length: self.min_run_length,
                columns: self.columns,
            });
        }
        if self.min_bet > self.max_bet {
            return Err(ConfigError::InvertedBetLimits {
                min_bet: self.min_bet,
                max_bet: self.max_bet,
            });
        }

        // Classes must be disjoint.
        for &symbol in &self.scatter_symbols {
            if self.is_normal(symbol) || self.is_wildcard(symbol) {
                return Err(ConfigError::OverlappingClasses { symbol });
            }
        }
        for &symbol in &self.wildcard_symbols {
            if self.is_normal(symbol) {
                return Err(ConfigError::OverlappingClasses { symbol });
            }
        }

        for &row in &self.scatter_rows {
            if row >= self.rows {
                return Err(ConfigError::EligibleRowOutOfRange {
                    class: "scatter",
                    row,
                    rows: self.rows,
                });
            }
        }
        for &row in &self.wildcard_rows {
            if row >= self.rows {
                return Err(ConfigError::EligibleRowOutOfRange {
                    class: "wildcard",
                    row,
                    rows: self.rows,
                });
            }
        }

        if self.paylines.is_empty() {
            return Err(ConfigError::NoPaylines);
        }
        for (index, mask) in self.paylines.iter().enumerate() {
            if mask.columns() != self.columns {
                return Err(ConfigError::PaylineColumnMismatch {
                    index,
                    got: mask.columns(),
                    expected: self.columns,
                });
            }
            for column in 0..mask.columns() {
                let row = mask.active_row(column);
                if row >= self.rows {
                    return Err(ConfigError::PaylineRowOutOfRange {
                        index,
                        column,
                        row,
                        rows: self.rows,
                    });
                }
            }
        }

        // Every wildcard needs its standalone multiplier; without it the
        // stacking rule in the payout calculator has nothing to apply.
        for &symbol in &self.wildcard_symbols {
            if !self.paytable.contains(symbol) {
                return Err(ConfigError::MissingWildcardPayout { symbol });
            }
        }

        // The repair pass caps scatters at one per row, so a trigger count
        // above the eligible-row count could never fire.
        if !self.scatter_symbols.is_empty() && self.scatter_trigger_count > self.scatter_rows.len()
        {
            return Err(ConfigError::ScatterTriggerUnreachable {
                trigger: self.scatter_trigger_count,
                eligible_rows: self.scatter_rows.len(),
            });
        }

        Ok(())
    }
}
