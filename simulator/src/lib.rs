//! Monte Carlo measurement of a slot configuration.
//!
//! The engine specifies mechanism, not odds; tuning a paytable needs
//! numbers. This crate runs large seeded spin batches against a
//! configuration and aggregates return-to-player and hit statistics so a
//! paytable change can be judged before it ships.

use rayon::prelude::*;
use reelhouse_engine::slots::{SlotTable, SpinError, SpinRng, SEED_LENGTH};
use reelhouse_types::slots::{ConfigError, SlotSession, SlotsConfig, BASE_MULTIPLIER};
use serde::Serialize;

/// Errors a simulation run can return.
#[derive(Debug)]
pub enum SimulationError {
    Config(ConfigError),
    Bet(SpinError),
    NoSpins,
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::Bet(err) => write!(f, "invalid bet: {}", err),
            Self::NoSpins => write!(f, "spin count must be non-zero"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Aggregated results of one simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub spins: u64,
    /// Bet per spin, fixed-point units.
    pub bet: u64,
    pub total_wagered: u64,
    pub total_won: u64,
    /// Return to player, basis points of the wagered amount.
    pub rtp_bps: u64,
    /// Spins with at least one winning line.
    pub hits: u64,
    /// Hit rate, basis points of all spins.
    pub hit_rate_bps: u64,
    /// Spins that raised the scatter bonus signal.
    pub scatter_triggers: u64,
    /// Largest single-line multiplier observed, basis points.
    pub max_line_multiplier_bps: u64,
    /// Winning-line count per payline index.
    pub wins_by_payline: Vec<u64>,
}

#[derive(Clone)]
struct Totals {
    won: u64,
    hits: u64,
    scatter_triggers: u64,
    max_line_multiplier_bps: u64,
    wins_by_payline: Vec<u64>,
}

impl Totals {
    fn new(paylines: usize) -> Self {
        Self {
            won: 0,
            hits: 0,
            scatter_triggers: 0,
            max_line_multiplier_bps: 0,
            wins_by_payline: vec![0; paylines],
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.won = self.won.saturating_add(other.won);
        self.hits += other.hits;
        self.scatter_triggers += other.scatter_triggers;
        self.max_line_multiplier_bps = self.max_line_multiplier_bps.max(other.max_line_multiplier_bps);
        for (into, from) in self.wins_by_payline.iter_mut().zip(&other.wins_by_payline) {
            *into += from;
        }
        self
    }
}

/// Run `spins` seeded spins at `bet` and aggregate the outcome.
///
/// Spin `i` uses the ChaCha stream `i` of `seed`, so reports are fully
/// reproducible and independent of worker count or scheduling.
pub fn run(
    config: SlotsConfig,
    seed: [u8; SEED_LENGTH],
    spins: u64,
    bet: u64,
) -> Result<SimulationReport, SimulationError> {
    if spins == 0 {
        return Err(SimulationError::NoSpins);
    }
    let table = SlotTable::new(config)?;
    if bet < table.config().min_bet || bet > table.config().max_bet {
        return Err(SimulationError::Bet(SpinError::InvalidBet {
            bet,
            min: table.config().min_bet,
            max: table.config().max_bet,
        }));
    }

    let paylines = table.config().paylines.len();
    let totals = (0..spins)
        .into_par_iter()
        .fold(
            || Totals::new(paylines),
            |mut acc, spin_id| {
                // Each spin gets a fresh, exactly-funded session; the bet
                // was validated above so this cannot fail.
                let mut session = SlotSession::with_credits(spin_id, bet);
                let mut rng = SpinRng::new(&seed, spin_id);
                let result = table
                    .spin(&mut session, bet, &mut rng)
                    .expect("validated bet against funded session");

                acc.won = acc.won.saturating_add(result.total_payout);
                if !result.wins.is_empty() {
                    acc.hits += 1;
                }
                if result.scatter.triggered {
                    acc.scatter_triggers += 1;
                }
                for win in &result.wins {
                    acc.wins_by_payline[win.payline] += 1;
                    acc.max_line_multiplier_bps =
                        acc.max_line_multiplier_bps.max(win.multiplier_bps);
                }
                acc
            },
        )
        .reduce(|| Totals::new(paylines), Totals::merge);

    let total_wagered = spins.saturating_mul(bet);
    Ok(SimulationReport {
        spins,
        bet,
        total_wagered,
        total_won: totals.won,
        rtp_bps: ratio_bps(totals.won, total_wagered),
        hits: totals.hits,
        hit_rate_bps: ratio_bps(totals.hits, spins),
        scatter_triggers: totals.scatter_triggers,
        max_line_multiplier_bps: totals.max_line_multiplier_bps,
        wins_by_payline: totals.wins_by_payline,
    })
}

/// `numerator / denominator` in basis points, zero when undefined.
fn ratio_bps(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    ((numerator as u128).saturating_mul(BASE_MULTIPLIER as u128) / denominator as u128) as u64
}
