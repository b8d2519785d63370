//! The spin pipeline.
//!
//! One spin: validate the bet, debit it, generate the grid, match every
//! payline, price the winning runs, credit the payout back. The table holds
//! only validated static configuration; every call brings its own session
//! and random source, so concurrent sessions need no locking.

use reelhouse_types::slots::{ConfigError, Grid, SlotSession, SlotsConfig, Symbol};
use tracing::{debug, info};

use super::logging;
use super::matcher::{self, RunCell};
use super::{generator, payout, SpinError, SpinRng};

/// A winning payline within a spin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaylineWin {
    pub payline: usize,
    pub cells: Vec<RunCell>,
    /// Symbol the payout was looked up under (the run's first cell).
    pub base_symbol: Symbol,
    /// Final multiplier including wildcard stacking, in basis points.
    pub multiplier_bps: u64,
    /// Contribution to the spin payout, in fixed-point units.
    pub payout: u64,
}

/// Scatter evaluation, independent of paylines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScatterReport {
    pub cells: Vec<RunCell>,
    /// Bonus signal: enough scatters landed anywhere on the grid.
    pub triggered: bool,
}

/// Outcome of pricing one grid. Produced by [`SlotTable::evaluate_grid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridEvaluation {
    pub wins: Vec<PaylineWin>,
    pub scatter: ScatterReport,
    pub total_payout: u64,
    pub logs: Vec<String>,
}

/// Everything one spin produced. Immutable once returned; the caller owns
/// its lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinResult {
    pub grid: Grid,
    pub bet: u64,
    pub wins: Vec<PaylineWin>,
    pub scatter: ScatterReport,
    pub total_payout: u64,
    pub balance_after: u64,
    pub logs: Vec<String>,
}

impl SpinResult {
    /// Per-payline `(base symbol, final multiplier)` for winning lines.
    pub fn multiplier_matrix(&self) -> Vec<(usize, Symbol, u64)> {
        self.wins
            .iter()
            .map(|w| (w.payline, w.base_symbol, w.multiplier_bps))
            .collect()
    }
}

/// A configured slot game.
pub struct SlotTable {
    config: SlotsConfig,
}

impl SlotTable {
    /// Validate the configuration and build a table.
    ///
    /// Config errors surface here, once; spins never re-validate.
    pub fn new(config: SlotsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SlotsConfig {
        &self.config
    }

    /// Run one spin against `session`.
    ///
    /// The bet is debited before generation; the computed payout is credited
    /// back before returning. Only bet validation can fail.
    pub fn spin(
        &self,
        session: &mut SlotSession,
        bet: u64,
        rng: &mut SpinRng,
    ) -> Result<SpinResult, SpinError> {
        if bet < self.config.min_bet || bet > self.config.max_bet {
            return Err(SpinError::InvalidBet {
                bet,
                min: self.config.min_bet,
                max: self.config.max_bet,
            });
        }
        if !session.can_afford(bet) {
            return Err(SpinError::InsufficientFunds {
                bet,
                credits: session.credits,
            });
        }

        session.credits -= bet;
        session.total_spins = session.total_spins.saturating_add(1);
        session.total_wagered = session.total_wagered.saturating_add(bet);

        let grid = generator::generate(&self.config, rng);
        let evaluation = self.evaluate_grid(&grid, bet);

        session.credits = session.credits.saturating_add(evaluation.total_payout);
        session.total_won = session.total_won.saturating_add(evaluation.total_payout);

        info!(
            session = session.id,
            bet,
            payout = evaluation.total_payout,
            lines = evaluation.wins.len(),
            scatter_triggered = evaluation.scatter.triggered,
            "spin settled"
        );

        Ok(SpinResult {
            grid,
            bet,
            wins: evaluation.wins,
            scatter: evaluation.scatter,
            total_payout: evaluation.total_payout,
            balance_after: session.credits,
            logs: evaluation.logs,
        })
    }

    /// Price a grid: match every payline, keep winning runs, scan scatters.
    ///
    /// Pure with respect to the table; calling it twice on the same grid
    /// yields identical results. Never fails: combinations that cannot pay
    /// are zero, not errors.
    pub fn evaluate_grid(&self, grid: &Grid, bet: u64) -> GridEvaluation {
        let mut wins = Vec::new();
        let mut logs = Vec::new();
        let mut total_payout = 0u64;

        for (index, mask) in self.config.paylines.iter().enumerate() {
            let cells = matcher::select_cells(mask, grid);
            let run = matcher::match_run(&cells, &self.config);
            if run.len() < self.config.min_run_length {
                continue;
            }

            let multiplier_bps = payout::run_multiplier_bps(&run, &self.config);
            if multiplier_bps == 0 {
                continue;
            }

            let line_payout = payout::payout_amount(multiplier_bps, bet);
            let base_symbol = run[0].symbol;
            debug!(
                payline = index,
                symbol = base_symbol,
                length = run.len(),
                multiplier_bps,
                payout = line_payout,
                "payline win"
            );
            logs.push(logging::win_entry(
                index,
                base_symbol,
                run.len(),
                multiplier_bps,
                line_payout,
            ));
            total_payout = total_payout.saturating_add(line_payout);
            wins.push(PaylineWin {
                payline: index,
                cells: run,
                base_symbol,
                multiplier_bps,
                payout: line_payout,
            });
        }

        let scatter_cells = matcher::scatter_cells(grid, &self.config);
        let triggered = !self.config.scatter_symbols.is_empty()
            && scatter_cells.len() >= self.config.scatter_trigger_count;
        if triggered {
            debug!(scatters = scatter_cells.len(), "scatter bonus signal");
            logs.push(logging::scatter_entry(
                scatter_cells.len(),
                triggered,
                &scatter_cells,
            ));
        }

        GridEvaluation {
            wins,
            scatter: ScatterReport {
                cells: scatter_cells,
                triggered,
            },
            total_payout,
            logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::SEED_LENGTH;
    use reelhouse_types::slots::{CREDIT, DEFAULT_SCATTER_SYMBOL, DEFAULT_WILDCARD_SYMBOL};

    fn test_table() -> SlotTable {
        SlotTable::new(SlotsConfig::classic()).unwrap()
    }

    fn test_rng(spin_id: u64) -> SpinRng {
        SpinRng::new(&[23u8; SEED_LENGTH], spin_id)
    }

    /// Grid with every row holding the same symbols left to right.
    fn uniform_rows_grid(symbols: [&[Symbol]; 3]) -> Grid {
        let mut grid = Grid::filled(5, 3, 0);
        for (row, row_symbols) in symbols.iter().enumerate() {
            for (column, &symbol) in row_symbols.iter().enumerate() {
                grid.set(column, row, symbol);
            }
        }
        grid
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = SlotsConfig::classic();
        config.normal_symbols.clear();
        assert!(SlotTable::new(config).is_err());
    }

    #[test]
    fn test_spin_rejects_out_of_range_bets() {
        let table = test_table();
        let mut session = SlotSession::new(1);

        let err = table
            .spin(&mut session, 0, &mut test_rng(0))
            .unwrap_err();
        assert!(matches!(err, SpinError::InvalidBet { .. }));

        let over = table.config().max_bet + 1;
        let err = table
            .spin(&mut session, over, &mut test_rng(0))
            .unwrap_err();
        assert!(matches!(err, SpinError::InvalidBet { .. }));

        // Rejected spins leave the session untouched.
        assert_eq!(session.total_spins, 0);
        assert_eq!(session.credits, SlotSession::new(1).credits);
    }

    #[test]
    fn test_spin_rejects_unaffordable_bet() {
        let table = test_table();
        let mut session = SlotSession::with_credits(1, CREDIT / 2);

        let err = table
            .spin(&mut session, CREDIT, &mut test_rng(0))
            .unwrap_err();
        assert_eq!(
            err,
            SpinError::InsufficientFunds { bet: CREDIT, credits: CREDIT / 2 }
        );
    }

    #[test]
    fn test_spin_settles_balance_and_counters() {
        let table = test_table();
        let mut session = SlotSession::new(1);
        let start = session.credits;

        let result = table.spin(&mut session, CREDIT, &mut test_rng(5)).unwrap();

        assert_eq!(session.total_spins, 1);
        assert_eq!(session.total_wagered, CREDIT);
        assert_eq!(session.total_won, result.total_payout);
        assert_eq!(session.credits, start - CREDIT + result.total_payout);
        assert_eq!(result.balance_after, session.credits);
        assert_eq!(result.bet, CREDIT);
    }

    #[test]
    fn test_no_win_grid_pays_zero() {
        // No payline can find three column-consistent symbols: each column
        // repeats one symbol, neighbours never match and nothing is wild.
        let table = test_table();
        let grid = uniform_rows_grid([
            &[1, 2, 3, 4, 5],
            &[1, 2, 3, 4, 5],
            &[1, 2, 3, 4, 5],
        ]);

        let evaluation = table.evaluate_grid(&grid, CREDIT);
        assert!(evaluation.wins.is_empty());
        assert_eq!(evaluation.total_payout, 0);
        assert!(!evaluation.scatter.triggered);
        assert!(evaluation.logs.is_empty());
    }

    #[test]
    fn test_single_line_win_on_middle_row() {
        let table = test_table();
        let grid = uniform_rows_grid([
            &[2, 3, 2, 3, 2],
            &[1, 1, 1, 3, 5],
            &[3, 2, 3, 2, 3],
        ]);

        let evaluation = table.evaluate_grid(&grid, CREDIT);
        assert_eq!(evaluation.wins.len(), 1);
        let win = &evaluation.wins[0];
        assert_eq!(win.payline, 0);
        assert_eq!(win.base_symbol, 1);
        assert_eq!(win.cells.len(), 3);
        assert_eq!(win.multiplier_bps, 25_000);
        assert_eq!(win.payout, 25_000);
        assert_eq!(evaluation.total_payout, 25_000);
    }

    #[test]
    fn test_multiple_lines_sum() {
        // Middle row pays 2.5 (symbol 1 x3), top row pays 0.1 (symbol 2 x3).
        let table = test_table();
        let grid = uniform_rows_grid([
            &[2, 2, 2, 3, 5],
            &[1, 1, 1, 3, 5],
            &[4, 5, 6, 7, 8],
        ]);

        let evaluation = table.evaluate_grid(&grid, CREDIT);
        assert_eq!(evaluation.wins.len(), 2);
        assert_eq!(evaluation.total_payout, 25_000 + 1_000);

        let matrix = SpinResult {
            grid: grid.clone(),
            bet: CREDIT,
            wins: evaluation.wins.clone(),
            scatter: evaluation.scatter.clone(),
            total_payout: evaluation.total_payout,
            balance_after: 0,
            logs: evaluation.logs.clone(),
        }
        .multiplier_matrix();
        assert!(matrix.contains(&(0, 1, 25_000)));
        assert!(matrix.contains(&(1, 2, 1_000)));
    }

    #[test]
    fn test_wildcard_line_pays_stacked() {
        let w = DEFAULT_WILDCARD_SYMBOL;
        let table = test_table();
        let grid = uniform_rows_grid([
            &[2, 3, 2, 3, 2],
            &[1, w, 1, 3, 5],
            &[3, 2, 3, 2, 3],
        ]);

        let evaluation = table.evaluate_grid(&grid, CREDIT);
        assert_eq!(evaluation.wins.len(), 1);
        // 2.5 x 2 = 5.0
        assert_eq!(evaluation.wins[0].multiplier_bps, 50_000);
        assert_eq!(evaluation.total_payout, 5 * CREDIT);
    }

    #[test]
    fn test_scatter_signal_reported_alongside_wins() {
        let s = DEFAULT_SCATTER_SYMBOL;
        let table = test_table();
        // Three scatters on three different rows; middle row still wins.
        let grid = uniform_rows_grid([
            &[s, 2, 3, 2, 3],
            &[1, 1, 1, s, 5],
            &[3, 2, s, 2, 3],
        ]);

        let evaluation = table.evaluate_grid(&grid, CREDIT);
        assert!(evaluation.scatter.triggered);
        assert_eq!(evaluation.scatter.cells.len(), 3);
        assert_eq!(evaluation.wins.len(), 1);
        // The scatter signal is reported, never paid by the engine.
        assert_eq!(evaluation.total_payout, 25_000);
    }

    #[test]
    fn test_two_scatters_do_not_trigger() {
        let s = DEFAULT_SCATTER_SYMBOL;
        let table = test_table();
        let grid = uniform_rows_grid([
            &[s, 2, 3, 2, 3],
            &[4, 5, 4, s, 5],
            &[3, 2, 3, 2, 3],
        ]);

        let evaluation = table.evaluate_grid(&grid, CREDIT);
        assert_eq!(evaluation.scatter.cells.len(), 2);
        assert!(!evaluation.scatter.triggered);
    }

    #[test]
    fn test_evaluate_grid_is_pure() {
        let table = test_table();
        let grid = generator::generate(table.config(), &mut test_rng(77));

        let first = table.evaluate_grid(&grid, CREDIT);
        let second = table.evaluate_grid(&grid, CREDIT);
        assert_eq!(first, second);
    }
}
