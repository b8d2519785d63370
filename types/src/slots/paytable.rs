//! Symbol payout table.
//!
//! Maps a symbol to its multipliers by run length, in basis points
//! (1.0x = 10_000). The list is indexed by `run_len - min_run_length`:
//! entry 0 pays a minimum-length run, entry 1 a run one column longer, and
//! so on. Wildcards carry a single entry: their standalone multiplier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Symbol;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTable {
    entries: HashMap<Symbol, Vec<u64>>,
}

impl PayoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multiplier list for a symbol, replacing any existing entry.
    pub fn set(&mut self, symbol: Symbol, multipliers_bps: Vec<u64>) {
        self.entries.insert(symbol, multipliers_bps);
    }

    /// The full multiplier list for a symbol, if it pays at all.
    pub fn multipliers(&self, symbol: Symbol) -> Option<&[u64]> {
        self.entries.get(&symbol).map(Vec::as_slice)
    }

    /// Base multiplier for a run of `run_len` starting with `symbol`.
    ///
    /// Missing symbols and run lengths beyond the table both resolve to 0:
    /// a non-paying combination, never an error.
    pub fn multiplier_bps(&self, symbol: Symbol, run_len: usize, min_run_length: usize) -> u64 {
        if run_len < min_run_length {
            return 0;
        }
        self.entries
            .get(&symbol)
            .and_then(|list| list.get(run_len - min_run_length))
            .copied()
            .unwrap_or(0)
    }

    /// The standalone multiplier of a wildcard (its first table entry).
    pub fn standalone_bps(&self, symbol: Symbol) -> u64 {
        self.entries
            .get(&symbol)
            .and_then(|list| list.first())
            .copied()
            .unwrap_or(0)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.entries.contains_key(&symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::MIN_RUN_LENGTH;

    #[test]
    fn test_multiplier_lookup() {
        let mut table = PayoutTable::new();
        table.set(1, vec![25_000, 75_000, 375_000]);

        assert_eq!(table.multiplier_bps(1, 3, MIN_RUN_LENGTH), 25_000);
        assert_eq!(table.multiplier_bps(1, 4, MIN_RUN_LENGTH), 75_000);
        assert_eq!(table.multiplier_bps(1, 5, MIN_RUN_LENGTH), 375_000);
    }

    #[test]
    fn test_short_run_pays_nothing() {
        let mut table = PayoutTable::new();
        table.set(1, vec![25_000]);

        assert_eq!(table.multiplier_bps(1, 0, MIN_RUN_LENGTH), 0);
        assert_eq!(table.multiplier_bps(1, 2, MIN_RUN_LENGTH), 0);
    }

    #[test]
    fn test_missing_symbol_and_overlong_run_pay_nothing() {
        let mut table = PayoutTable::new();
        table.set(1, vec![25_000]);

        // Symbol absent from the table
        assert_eq!(table.multiplier_bps(99, 3, MIN_RUN_LENGTH), 0);
        // Run length past the end of the list
        assert_eq!(table.multiplier_bps(1, 4, MIN_RUN_LENGTH), 0);
    }

    #[test]
    fn test_standalone_multiplier() {
        let mut table = PayoutTable::new();
        table.set(12, vec![20_000]);

        assert_eq!(table.standalone_bps(12), 20_000);
        assert_eq!(table.standalone_bps(13), 0);
    }
}
