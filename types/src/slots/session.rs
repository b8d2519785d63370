//! Per-player session bookkeeping.
//!
//! The engine is stateless about money beyond one spin; the session is the
//! caller-owned record it debits and credits. Counters track lifetime
//! volume for reporting.

use serde::{Deserialize, Serialize};

use super::STARTING_CREDITS;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSession {
    pub id: u64,
    /// Current balance in fixed-point units.
    pub credits: u64,
    pub total_spins: u64,
    pub total_wagered: u64,
    pub total_won: u64,
}

impl SlotSession {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            credits: STARTING_CREDITS,
            total_spins: 0,
            total_wagered: 0,
            total_won: 0,
        }
    }

    pub fn with_credits(id: u64, credits: u64) -> Self {
        Self {
            id,
            credits,
            ..Self::new(id)
        }
    }

    pub fn can_afford(&self, bet: u64) -> bool {
        self.credits >= bet
    }
}
