//! Bet slip and wager history store.
//!
//! This module handles:
//! - Slip/history bet types and statuses
//! - The pluggable settlement strategy (random default, scripted double)
//! - The betting store itself (slip upserts, confirmation, simulation, stats)

pub mod settlement;
pub mod stats;
pub mod store;
pub mod types;

pub use settlement::{BetOutcome, RandomSettlement, ScriptedSettlement, Settlement};
pub use stats::UserStats;
pub use store::{BettingSnapshot, BettingStore};
pub use types::{Bet, BetStatus};
