//! Bet slip and history store.
//!
//! Slip and history are mirrored to durable storage on every mutation and
//! every mutation synchronously notifies subscribers with the new
//! `{active_bets, bet_history}` snapshot.

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{error, info};

use crate::auth::AuthStore;
use crate::catalog::{Catalog, Event, MarketKind, Sport};
use crate::error::BettingError;
use crate::storage::{self, keys, Storage};
use crate::subscribe::{Listeners, Subscription};
use crate::utils::generate_id;

use super::settlement::{BetOutcome, Settlement};
use super::stats::{self, UserStats};
use super::types::{Bet, BetStatus};

/// Snapshot delivered to subscribers on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct BettingSnapshot {
    /// Current slip entries.
    pub active_bets: Vec<Bet>,
    /// Confirmed/resolved wagers.
    pub bet_history: Vec<Bet>,
}

#[derive(Default)]
struct BetLists {
    active: Vec<Bet>,
    history: Vec<Bet>,
}

/// Betting store: static catalog reads plus slip/history mutations.
pub struct BettingStore {
    catalog: Catalog,
    storage: Arc<dyn Storage>,
    auth: Arc<AuthStore>,
    settlement: Box<dyn Settlement>,
    state: Mutex<BetLists>,
    listeners: Listeners<BettingSnapshot>,
}

impl BettingStore {
    /// Create a store, hydrating slip and history from storage.
    pub fn new(
        catalog: Catalog,
        storage: Arc<dyn Storage>,
        auth: Arc<AuthStore>,
        settlement: Box<dyn Settlement>,
    ) -> Self {
        let active = storage::load_or_default(storage.as_ref(), keys::ACTIVE_BETS);
        let history = storage::load_or_default(storage.as_ref(), keys::BET_HISTORY);

        Self {
            catalog,
            storage,
            auth,
            settlement,
            state: Mutex::new(BetLists { active, history }),
            listeners: Listeners::new(),
        }
    }

    /// Subscribe to slip/history changes.
    pub fn subscribe(
        &self,
        listener: impl Fn(&BettingSnapshot) + Send + Sync + 'static,
    ) -> Subscription<BettingSnapshot> {
        self.listeners.subscribe(listener)
    }

    /// Events offered for one sport.
    pub fn events(&self, sport: Sport) -> Vec<Event> {
        self.catalog
            .events_for(sport)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Sports present in the catalog.
    pub fn sports(&self) -> Vec<Sport> {
        self.catalog.sports()
    }

    /// Current slip entries.
    pub fn active_bets(&self) -> Vec<Bet> {
        self.state
            .lock()
            .expect("betting state poisoned")
            .active
            .clone()
    }

    /// Confirmed/resolved wagers.
    pub fn bet_history(&self) -> Vec<Bet> {
        self.state
            .lock()
            .expect("betting state poisoned")
            .history
            .clone()
    }

    /// Upsert a slip entry for an (event, market, option) triple.
    ///
    /// Lookup misses are logged and reported as `false`; the slip is left
    /// unchanged. Re-adding an existing triple overwrites its stake and
    /// recomputes the payout instead of duplicating the entry.
    pub fn add_to_bet_slip(
        &self,
        event_id: &str,
        market_type: MarketKind,
        option: &str,
        stake: Decimal,
    ) -> bool {
        let Some(event) = self.catalog.find_event(event_id) else {
            error!("event not found: {event_id}");
            return false;
        };

        let Some(market) = event.market(market_type) else {
            error!("market not found on {event_id}: {market_type}");
            return false;
        };

        let Some(entry) = market.odds_for(option) else {
            error!("option not found on {event_id}/{market_type}: {option}");
            return false;
        };

        let potential_win = stake * entry.odds;

        let snapshot = {
            let mut state = self.state.lock().expect("betting state poisoned");

            match state
                .active
                .iter_mut()
                .find(|bet| bet.same_selection(event_id, market_type, option))
            {
                Some(existing) => {
                    existing.stake = stake;
                    existing.potential_win = potential_win;
                }
                None => {
                    state.active.push(Bet {
                        id: generate_id("bet"),
                        event_id: event_id.to_string(),
                        sport: event.sport,
                        event_name: event.display_name(),
                        market_type,
                        market_name: market.name.clone(),
                        option: option.to_string(),
                        odds: entry.odds,
                        stake,
                        potential_win,
                        status: BetStatus::Pending,
                        placed_at: OffsetDateTime::now_utc(),
                        confirmed_at: None,
                        result_at: None,
                    });
                }
            }

            self.persist(&state)
        };

        self.listeners.notify(&snapshot);
        true
    }

    /// Delete a slip entry by id.
    pub fn remove_from_bet_slip(&self, bet_id: &str) {
        let snapshot = {
            let mut state = self.state.lock().expect("betting state poisoned");
            state.active.retain(|bet| bet.id != bet_id);
            self.persist(&state)
        };

        self.listeners.notify(&snapshot);
    }

    /// Confirm every slip entry against the current user's balance.
    ///
    /// Moves all entries into history with status `active` and a confirmation
    /// timestamp, then clears the slip. The balance itself is checked but not
    /// debited here.
    pub fn confirm_bets(&self) -> Result<Vec<Bet>, BettingError> {
        let user = self
            .auth
            .current_user()
            .ok_or(BettingError::NotAuthenticated)?;

        let (confirmed, snapshot) = {
            let mut state = self.state.lock().expect("betting state poisoned");

            let total: Decimal = state.active.iter().map(|bet| bet.stake).sum();
            if total > user.balance {
                return Err(BettingError::InsufficientBalance {
                    required: total,
                    available: user.balance,
                });
            }

            if state.active.is_empty() {
                return Err(BettingError::EmptySlip);
            }

            let now = OffsetDateTime::now_utc();
            let confirmed: Vec<Bet> = state
                .active
                .drain(..)
                .map(|mut bet| {
                    bet.status = BetStatus::Active;
                    bet.confirmed_at = Some(now);
                    bet
                })
                .collect();

            state.history.extend(confirmed.iter().cloned());
            (confirmed, self.persist(&state))
        };

        info!("confirmed {} bets", confirmed.len());
        self.listeners.notify(&snapshot);
        Ok(confirmed)
    }

    /// Resolve every active history entry through the settlement strategy.
    ///
    /// Entries in any other status are untouched.
    pub fn simulate_results(&self) {
        let snapshot = {
            let mut state = self.state.lock().expect("betting state poisoned");
            let now = OffsetDateTime::now_utc();

            for bet in state
                .history
                .iter_mut()
                .filter(|bet| bet.status == BetStatus::Active)
            {
                bet.status = match self.settlement.resolve(bet) {
                    BetOutcome::Won => BetStatus::Won,
                    BetOutcome::Lost => BetStatus::Lost,
                };
                bet.result_at = Some(now);
            }

            self.persist(&state)
        };

        self.listeners.notify(&snapshot);
    }

    /// Aggregate stats over non-pending history entries.
    pub fn user_stats(&self) -> UserStats {
        let state = self.state.lock().expect("betting state poisoned");
        stats::compute(&state.history)
    }

    /// Mirror both lists to storage and build the notification snapshot.
    fn persist(&self, state: &BetLists) -> BettingSnapshot {
        storage::save(self.storage.as_ref(), keys::ACTIVE_BETS, &state.active);
        storage::save(self.storage.as_ref(), keys::BET_HISTORY, &state.history);

        BettingSnapshot {
            active_bets: state.active.clone(),
            bet_history: state.history.clone(),
        }
    }
}
