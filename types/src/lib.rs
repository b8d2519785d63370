//! Common types used throughout reelhouse.
//!
//! Everything here is static configuration or plain data: symbol classes,
//! grids, payline masks, payout tables, and per-player session bookkeeping.
//! The types carry no behavior beyond construction-time validation; the
//! outcome logic lives in `reelhouse-engine`.

pub mod slots;

pub use slots::{
    ConfigError, Grid, PaylineError, PaylineMask, PayoutTable, SlotSession, SlotsConfig, Symbol,
};
