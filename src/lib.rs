//! Client-side state stores for a sports-betting demo.
//!
//! Three stores share one pattern: in-memory state mirrored to durable
//! key/value storage on every mutation, with subscribers notified
//! synchronously in registration order.
//!
//! - [`auth::AuthStore`]: session cache over an external auth backend
//! - [`betting::BettingStore`]: bet slip, wager history and stats
//! - [`wallet::WalletStore`]: balance, deposits and wallet bet ledger
//!
//! Odds are static mock data and settlement is a pluggable stub; there is no
//! pricing, no real money movement and no cross-tab synchronization.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`subscribe`]: Typed observer contract shared by the stores
//! - [`storage`]: Durable key/value storage (memory and file backends)
//! - [`catalog`]: Static sports/events/odds catalog
//! - [`auth`]: Auth backend contract, mock backend and session store
//! - [`betting`]: Slip/history store and settlement strategies
//! - [`wallet`]: Wallet store and ledgers
//! - [`utils`]: Utility functions

pub mod auth;
pub mod betting;
pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;
pub mod subscribe;
pub mod utils;
pub mod wallet;

pub use config::Config;
pub use error::{BetsimError, Result};
