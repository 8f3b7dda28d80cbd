//! Slip and history bet types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use crate::catalog::{MarketKind, Sport};

/// Lifecycle of a wager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BetStatus {
    /// On the slip, not yet confirmed against the balance.
    #[default]
    Pending,
    /// Confirmed, awaiting a result.
    Active,
    /// Resolved in the user's favour.
    Won,
    /// Resolved against the user.
    Lost,
}

/// A wager: a slip entry while pending, a history entry once confirmed.
///
/// `potential_win` is stake × odds as quoted at placement time; it is never
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    /// Generated unique id (`bet-{ms}-{suffix}`).
    pub id: String,
    /// Catalog event id.
    pub event_id: String,
    /// Sport of the event, denormalised for display.
    pub sport: Sport,
    /// "TeamA vs TeamB", denormalised for display.
    pub event_name: String,
    /// Market type tag.
    pub market_type: MarketKind,
    /// Market display name.
    pub market_name: String,
    /// Chosen option label.
    pub option: String,
    /// Decimal odds quoted at placement time.
    pub odds: Decimal,
    /// Stake amount.
    pub stake: Decimal,
    /// stake × odds at placement time.
    pub potential_win: Decimal,
    /// Lifecycle status.
    pub status: BetStatus,
    /// When the entry was added to the slip.
    #[serde(with = "time::serde::rfc3339")]
    pub placed_at: OffsetDateTime,
    /// When the entry was confirmed into history.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub confirmed_at: Option<OffsetDateTime>,
    /// When the entry was resolved to won/lost.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub result_at: Option<OffsetDateTime>,
}

impl Bet {
    /// Whether this entry wagers the same (event, market, option) triple.
    pub fn same_selection(&self, event_id: &str, market_type: MarketKind, option: &str) -> bool {
        self.event_id == event_id && self.market_type == market_type && self.option == option
    }

    /// Whether the bet has been resolved either way.
    pub fn is_resolved(&self) -> bool {
        matches!(self.status, BetStatus::Won | BetStatus::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    fn sample_bet() -> Bet {
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
            status: BetStatus::Pending,
            placed_at: datetime!(2024-01-15 12:00 UTC),
            confirmed_at: None,
            result_at: None,
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BetStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(BetStatus::Won.to_string(), "won");
    }

    #[test]
    fn bet_round_trips_through_json() {
        let bet = sample_bet();
        let raw = serde_json::to_string(&bet).unwrap();
        let back: Bet = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, bet);
    }

    #[test]
    fn same_selection_matches_full_triple_only() {
        let bet = sample_bet();
        assert!(bet.same_selection("ftb-1", MarketKind::Ganador, "Barcelona"));
        assert!(!bet.same_selection("ftb-1", MarketKind::Ganador, "Empate"));
        assert!(!bet.same_selection("ftb-1", MarketKind::MasMenos, "Barcelona"));
        assert!(!bet.same_selection("ftb-2", MarketKind::Ganador, "Barcelona"));
    }
}
