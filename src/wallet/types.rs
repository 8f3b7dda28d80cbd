//! Wallet state and ledger types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use crate::betting::BetStatus;

/// The whole wallet record, persisted under one storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletState {
    /// Spendable balance.
    pub balance: Decimal,
    /// Display name.
    pub username: String,
    /// Tier label.
    pub level: String,
    /// Avatar image path.
    pub avatar: String,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            balance: Decimal::new(10_000, 0),
            username: "Usuario Demo".to_string(),
            level: "Novato".to_string(),
            avatar: "/images/avatar-default.png".to_string(),
        }
    }
}

/// Direction of a wallet transaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionKind {
    /// Money in.
    Deposit,
    /// Money out.
    Withdrawal,
}

/// Settlement state of a wallet transaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionStatus {
    /// Finished successfully.
    Completed,
    /// Still in flight.
    Pending,
    /// Did not go through.
    Failed,
}

/// A deposit/withdrawal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Generated unique id.
    pub id: String,
    /// Direction.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Amount moved.
    pub amount: Decimal,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Settlement state.
    pub status: TransactionStatus,
}

/// Input for placing a bet through the wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletBetData {
    /// Display name of the event.
    pub event_name: String,
    /// Chosen option label.
    pub option: String,
    /// Decimal odds quoted for the option.
    pub odds: Decimal,
    /// Stake amount to debit.
    pub amount: Decimal,
}

/// A bet recorded in the wallet ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBet {
    /// Generated unique id.
    pub id: String,
    /// Display name of the event.
    pub event_name: String,
    /// Chosen option label.
    pub option: String,
    /// Decimal odds quoted for the option.
    pub odds: Decimal,
    /// Stake debited from the balance.
    pub amount: Decimal,
    /// Always `active` at placement.
    pub status: BetStatus,
    /// When the bet was placed.
    #[serde(with = "time::serde::rfc3339")]
    pub placed_at: OffsetDateTime,
}
