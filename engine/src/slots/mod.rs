//! The slot outcome engine.
//!
//! Three components composed in a straight pipeline: the grid generator
//! fills a fresh symbol matrix under row-eligibility rules, the matcher
//! reduces each payline to its maximal left-anchored run, and the payout
//! calculator converts winning runs into credit amounts. [`SlotTable`] ties
//! them together behind a single `spin` call that also owns the bet
//! debit/credit for the session it is handed.

pub mod generator;
pub mod logging;
pub mod matcher;
pub mod payout;
mod rng;
mod table;


pub use matcher::RunCell;
pub use rng::{SpinRng, SEED_LENGTH};
pub use table::{GridEvaluation, PaylineWin, ScatterReport, SlotTable, SpinResult};

/// Errors a spin request can return.
///
/// Only bet validation can fail; outcome evaluation itself never errors
/// under a validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    /// Bet outside the configured limits.
    InvalidBet { bet: u64, min: u64, max: u64 },
    /// Session balance cannot cover the bet.
    InsufficientFunds { bet: u64, credits: u64 },
}

impl std::fmt::Display for SpinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBet { bet, min, max } => {
                write!(f, "bet {} outside limits ({}-{})", bet, min, max)
            }
            Self::InsufficientFunds { bet, credits } => {
                write!(f, "insufficient funds: bet {} exceeds balance {}", bet, credits)
            }
        }
    }
}

impl std::error::Error for SpinError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_error_display() {
        assert_eq!(
            SpinError::InvalidBet { bet: 5, min: 10, max: 100 }.to_string(),
            "bet 5 outside limits (10-100)"
        );
        assert_eq!(
            SpinError::InsufficientFunds { bet: 50, credits: 10 }.to_string(),
            "insufficient funds: bet 50 exceeds balance 10"
        );
    }
}
