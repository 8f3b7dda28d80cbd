//! Pluggable bet resolution.
//!
//! `simulate_results` is a testing stub, not a settlement oracle. The default
//! strategy flips a fair coin per bet; tests plug in a scripted strategy for
//! deterministic outcomes.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

use super::types::Bet;

/// Terminal outcome of a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetOutcome {
    /// The wager won.
    Won,
    /// The wager lost.
    Lost,
}

/// Strategy deciding how an active wager resolves.
pub trait Settlement: Send + Sync {
    /// Resolve one wager. Called once per active history entry.
    fn resolve(&self, bet: &Bet) -> BetOutcome;
}

/// Default strategy: independent 50% win probability per bet.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSettlement;

impl Settlement for RandomSettlement {
    fn resolve(&self, _bet: &Bet) -> BetOutcome {
        if rand::thread_rng().gen_bool(0.5) {
            BetOutcome::Won
        } else {
            BetOutcome::Lost
        }
    }
}

/// Deterministic strategy consuming a fixed script of outcomes.
///
/// Once the script runs out, every further bet resolves to the fallback.
pub struct ScriptedSettlement {
    script: Mutex<VecDeque<BetOutcome>>,
    fallback: BetOutcome,
}

impl ScriptedSettlement {
    /// Play back the given outcomes in order, then fall back to `Lost`.
    pub fn new(outcomes: impl IntoIterator<Item = BetOutcome>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
            fallback: BetOutcome::Lost,
        }
    }

    /// Resolve every bet to the same outcome.
    pub fn always(outcome: BetOutcome) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: outcome,
        }
    }
}

impl Settlement for ScriptedSettlement {
    fn resolve(&self, _bet: &Bet) -> BetOutcome {
        self.script
            .lock()
            .expect("settlement script poisoned")
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::betting::types::BetStatus;
    use crate::catalog::{MarketKind, Sport};
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    fn dummy_bet() -> Bet {
        Bet {
            id: "bet-1-abc".to_string(),
            event_id: "ftb-1".to_string(),
            sport: Sport::Futbol,
            event_name: "Barcelona vs Real Madrid".to_string(),
            market_type: MarketKind::Ganador,
            market_name: "Ganador del Partido".to_string(),
            option: "Barcelona".to_string(),
            odds: dec!(2.10),
            stake: dec!(100),
            potential_win: dec!(210),
            status: BetStatus::Active,
            placed_at: datetime!(2024-01-15 12:00 UTC),
            confirmed_at: None,
            result_at: None,
        }
    }

    #[test]
    fn scripted_settlement_plays_outcomes_in_order() {
        let settlement =
            ScriptedSettlement::new([BetOutcome::Won, BetOutcome::Lost, BetOutcome::Won]);
        let bet = dummy_bet();

        assert_eq!(settlement.resolve(&bet), BetOutcome::Won);
        assert_eq!(settlement.resolve(&bet), BetOutcome::Lost);
        assert_eq!(settlement.resolve(&bet), BetOutcome::Won);
        // Script exhausted, fallback applies.
        assert_eq!(settlement.resolve(&bet), BetOutcome::Lost);
    }

    #[test]
    fn always_resolves_to_fixed_outcome() {
        let settlement = ScriptedSettlement::always(BetOutcome::Won);
        let bet = dummy_bet();

        for _ in 0..5 {
            assert_eq!(settlement.resolve(&bet), BetOutcome::Won);
        }
    }

    #[test]
    fn random_settlement_returns_both_outcomes_eventually() {
        let settlement = RandomSettlement;
        let bet = dummy_bet();

        let outcomes: Vec<BetOutcome> = (0..100).map(|_| settlement.resolve(&bet)).collect();
        assert!(outcomes.contains(&BetOutcome::Won));
        assert!(outcomes.contains(&BetOutcome::Lost));
    }
}
