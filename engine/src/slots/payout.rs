//! Payout calculation.
//!
//! A winning run pays its base multiplier (paytable entry for the run's
//! first symbol at the run's length) compounded by one wildcard factor per
//! wildcard cell in the run. All arithmetic is fixed-point basis points;
//! anything that cannot pay resolves to zero rather than an error.

use reelhouse_types::slots::{SlotsConfig, BASE_MULTIPLIER};

use super::matcher::RunCell;

/// Final multiplier for one run, in basis points.
///
/// Runs shorter than the minimum length, runs led by symbols without a
/// paytable entry, and run lengths beyond the table all yield zero. The
/// base lookup uses the first cell's symbol even when that cell is itself a
/// wildcard, so an all-wildcard run pays from the wildcard's own entry.
pub fn run_multiplier_bps(run: &[RunCell], config: &SlotsConfig) -> u64 {
    if run.len() < config.min_run_length {
        return 0;
    }
    let Some(first) = run.first() else {
        return 0;
    };

    let mut multiplier =
        config
            .paytable
            .multiplier_bps(first.symbol, run.len(), config.min_run_length);

    // One factor per wildcard cell: stacking is multiplicative.
    for cell in run {
        if config.is_wildcard(cell.symbol) {
            let factor = config.paytable.standalone_bps(cell.symbol);
            multiplier = multiplier.saturating_mul(factor) / BASE_MULTIPLIER;
        }
    }

    multiplier
}

/// Convert a basis-point multiplier into an amount for `bet`.
pub fn payout_amount(multiplier_bps: u64, bet: u64) -> u64 {
    bet.saturating_mul(multiplier_bps) / BASE_MULTIPLIER
}

/// A run's contribution to the spin payout, in fixed-point units.
pub fn run_payout(run: &[RunCell], config: &SlotsConfig, bet: u64) -> u64 {
    payout_amount(run_multiplier_bps(run, config), bet)
}
