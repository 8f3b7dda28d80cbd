//! User wallet store.
//!
//! This module handles:
//! - The wallet state record and its transaction/bet ledgers
//! - Deposits and balance-checked bet placement

pub mod store;
pub mod types;

pub use store::WalletStore;
pub use types::{Transaction, TransactionKind, TransactionStatus, WalletBet, WalletBetData, WalletState};
