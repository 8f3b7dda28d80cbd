//! Wallet store.
//!
//! The record is read from storage on every access and written back whole on
//! every change, so the storage copy is always the source of truth. Change
//! notifications use the same subscription contract as the other stores.

use std::sync::Arc;

use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::WalletError;
use crate::storage::{self, keys, Storage};
use crate::subscribe::{Listeners, Subscription};
use crate::utils::generate_id;

use super::types::{
    Transaction, TransactionKind, TransactionStatus, WalletBet, WalletBetData, WalletState,
};
use crate::betting::BetStatus;

/// Wallet store over durable storage.
pub struct WalletStore {
    storage: Arc<dyn Storage>,
    defaults: WalletState,
    listeners: Listeners<WalletState>,
}

impl WalletStore {
    /// Create a store; the config supplies the pre-deposit default record.
    pub fn new(storage: Arc<dyn Storage>, config: &Config) -> Self {
        Self {
            storage,
            defaults: WalletState {
                balance: config.wallet_balance,
                username: config.wallet_username.clone(),
                level: config.starting_level.clone(),
                avatar: config.default_avatar.clone(),
            },
            listeners: Listeners::new(),
        }
    }

    /// Subscribe to wallet state changes.
    pub fn subscribe(
        &self,
        listener: impl Fn(&WalletState) + Send + Sync + 'static,
    ) -> Subscription<WalletState> {
        self.listeners.subscribe(listener)
    }

    /// Read the whole record, falling back to the defaults.
    pub fn get(&self) -> WalletState {
        storage::load_or(
            self.storage.as_ref(),
            keys::USER_STORE,
            self.defaults.clone(),
        )
    }

    /// Replace the whole record.
    pub fn set(&self, state: WalletState) {
        storage::save(self.storage.as_ref(), keys::USER_STORE, &state);
        self.listeners.notify(&state);
    }

    /// Overwrite a single field of the record.
    pub fn set_balance(&self, balance: Decimal) {
        let mut state = self.get();
        state.balance = balance;
        self.set(state);
    }

    /// Overwrite the display name.
    pub fn set_username(&self, username: &str) {
        let mut state = self.get();
        state.username = username.to_string();
        self.set(state);
    }

    /// Increase the balance and record a completed deposit.
    ///
    /// Returns the new balance.
    pub fn deposit_money(&self, amount: Decimal) -> Decimal {
        let new_balance = self.get().balance + amount;
        self.set_balance(new_balance);

        let mut transactions: Vec<Transaction> =
            storage::load_or_default(self.storage.as_ref(), keys::TRANSACTIONS);
        transactions.push(Transaction {
            id: generate_id("txn"),
            kind: TransactionKind::Deposit,
            amount,
            date: OffsetDateTime::now_utc(),
            status: TransactionStatus::Completed,
        });
        storage::save(self.storage.as_ref(), keys::TRANSACTIONS, &transactions);

        info!("deposited {amount}, new balance {new_balance}");
        new_balance
    }

    /// Debit the stake and record an active bet.
    ///
    /// Returns `false` without mutating anything when the balance does not
    /// cover the stake.
    pub fn place_bet(&self, data: WalletBetData) -> bool {
        match self.try_place_bet(data) {
            Ok(()) => true,
            Err(e) => {
                warn!("bet rejected: {e}");
                false
            }
        }
    }

    fn try_place_bet(&self, data: WalletBetData) -> Result<(), WalletError> {
        let state = self.get();
        if state.balance < data.amount {
            return Err(WalletError::InsufficientBalance {
                required: data.amount,
                available: state.balance,
            });
        }

        self.set_balance(state.balance - data.amount);

        let mut bets: Vec<WalletBet> =
            storage::load_or_default(self.storage.as_ref(), keys::BETS);
        bets.push(WalletBet {
            id: generate_id("bet"),
            event_name: data.event_name,
            option: data.option,
            odds: data.odds,
            amount: data.amount,
            status: BetStatus::Active,
            placed_at: OffsetDateTime::now_utc(),
        });
        storage::save(self.storage.as_ref(), keys::BETS, &bets);

        Ok(())
    }

    /// All recorded transactions.
    pub fn transactions(&self) -> Vec<Transaction> {
        storage::load_or_default(self.storage.as_ref(), keys::TRANSACTIONS)
    }

    /// All recorded wallet bets.
    pub fn bets(&self) -> Vec<WalletBet> {
        storage::load_or_default(self.storage.as_ref(), keys::BETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn wallet() -> WalletStore {
        WalletStore::new(Arc::new(MemoryStorage::new()), &Config::default())
    }

    fn bet_data(amount: Decimal) -> WalletBetData {
        WalletBetData {
            event_name: "Barcelona vs Real Madrid".to_string(),
            option: "Barcelona".to_string(),
            odds: dec!(2.10),
            amount,
        }
    }

    #[test]
    fn fresh_wallet_reads_defaults() {
        let store = wallet();
        let state = store.get();
        assert_eq!(state.balance, dec!(10_000));
        assert_eq!(state.username, "Usuario Demo");
    }

    #[test]
    fn deposit_increases_balance_and_records_transaction() {
        let store = wallet();

        let new_balance = store.deposit_money(dec!(500));

        assert_eq!(new_balance, dec!(10_500));
        assert_eq!(store.get().balance, dec!(10_500));

        let transactions = store.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].kind, TransactionKind::Deposit);
        assert_eq!(transactions[0].amount, dec!(500));
        assert_eq!(transactions[0].status, TransactionStatus::Completed);
    }

    #[test]
    fn place_bet_debits_balance_and_records_bet() {
        let store = wallet();

        assert!(store.place_bet(bet_data(dec!(1_000))));

        assert_eq!(store.get().balance, dec!(9_000));
        let bets = store.bets();
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].amount, dec!(1_000));
        assert_eq!(bets[0].status, BetStatus::Active);
    }

    #[test]
    fn place_bet_with_insufficient_balance_mutates_nothing() {
        let store = wallet();

        assert!(!store.place_bet(bet_data(dec!(20_000))));

        assert_eq!(store.get().balance, dec!(10_000));
        assert!(store.bets().is_empty());
    }

    #[test]
    fn exact_balance_bet_is_allowed() {
        let store = wallet();
        assert!(store.place_bet(bet_data(dec!(10_000))));
        assert_eq!(store.get().balance, Decimal::ZERO);
    }

    #[test]
    fn subscribers_receive_the_new_state() {
        let store = wallet();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |state| sink.lock().unwrap().push(state.balance));

        store.deposit_money(dec!(100));
        store.place_bet(bet_data(dec!(50)));

        assert_eq!(*seen.lock().unwrap(), vec![dec!(10_100), dec!(10_050)]);
    }

    #[test]
    fn rejected_bet_does_not_notify() {
        let store = wallet();
        let notified = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&notified);
        let _sub = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.place_bet(bet_data(dec!(99_999)));
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn state_survives_a_reload() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = WalletStore::new(Arc::clone(&storage), &Config::default());
        store.deposit_money(dec!(1_234));

        let reloaded = WalletStore::new(storage, &Config::default());
        assert_eq!(reloaded.get().balance, dec!(11_234));
        assert_eq!(reloaded.transactions().len(), 1);
    }
}
