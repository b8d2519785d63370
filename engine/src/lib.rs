//! Reelhouse outcome engine.
//!
//! This crate contains the deterministic spin pipeline: grid generation,
//! payline matching and payout calculation.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside the engine.
//! - Do not use non-deterministic randomness; only derive randomness from the
//!   provided seed/spin id.
//!
//! ## Shape of a spin
//! Control flows strictly generator -> matcher -> calculator, once per spin,
//! with no feedback loop. The table holds only validated static
//! configuration; every call brings its own session and random source, so
//! concurrent sessions need no locking.
//!
//! ```rust,ignore
//! use reelhouse_engine::slots::{SlotTable, SpinRng};
//! use reelhouse_types::slots::{SlotSession, SlotsConfig, CREDIT};
//!
//! let table = SlotTable::new(SlotsConfig::classic())?;
//! let mut session = SlotSession::new(1);
//! let mut rng = SpinRng::new(&[7u8; 32], session.total_spins);
//! let result = table.spin(&mut session, CREDIT, &mut rng)?;
//! println!("payout: {}", result.total_payout);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod slots;

pub use slots::{
    GridEvaluation, PaylineWin, ScatterReport, SlotTable, SpinError, SpinResult, SpinRng,
};
