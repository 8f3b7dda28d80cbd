//! Static sports catalog.
//!
//! This module handles:
//! - Sport and market-kind tags
//! - Event, market and odds types
//! - The built-in mock catalog and lookup helpers
//!
//! Odds are static mock data; nothing here reprices anything.

pub mod data;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

pub use data::mock_catalog;

/// Sport a catalog event belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Sport {
    /// Association football.
    #[strum(serialize = "fútbol", serialize = "futbol")]
    #[serde(rename = "fútbol")]
    Futbol,
    /// Basketball.
    #[strum(serialize = "baloncesto")]
    #[serde(rename = "baloncesto")]
    Baloncesto,
    /// Tennis.
    #[strum(serialize = "tenis")]
    #[serde(rename = "tenis")]
    Tenis,
}

/// Type tag identifying a betting question on an event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
pub enum MarketKind {
    /// Match winner.
    #[strum(serialize = "ganador")]
    Ganador,
    /// Both teams score.
    #[strum(serialize = "ambos_marcan")]
    AmbosMarcan,
    /// Over/under line.
    #[strum(serialize = "mas_menos")]
    MasMenos,
}

/// One quotable option within a market.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsEntry {
    /// Option label (e.g. "Barcelona", "Empate").
    pub option: String,
    /// Decimal multiplier applied to the stake.
    pub odds: Decimal,
}

/// A betting question on an event with its quoted options.
#[derive(Debug, Clone)]
pub struct Market {
    /// Market type tag.
    pub kind: MarketKind,
    /// Display name (e.g. "Ganador del Partido").
    pub name: String,
    /// Quoted options.
    pub odds: Vec<OddsEntry>,
}

impl Market {
    /// Find the odds entry for an option label, by exact match.
    pub fn odds_for(&self, option: &str) -> Option<&OddsEntry> {
        self.odds.iter().find(|entry| entry.option == option)
    }
}

/// A scheduled sporting event with its markets.
#[derive(Debug, Clone)]
pub struct Event {
    /// Unique event id (e.g. "ftb-1").
    pub id: String,
    /// Sport this event belongs to.
    pub sport: Sport,
    /// League or tour name.
    pub league: String,
    /// First participant.
    pub team_a: String,
    /// Second participant.
    pub team_b: String,
    /// Scheduled start.
    pub start_at: OffsetDateTime,
    /// Markets offered on this event.
    pub markets: Vec<Market>,
}

impl Event {
    /// Display name "TeamA vs TeamB".
    pub fn display_name(&self) -> String {
        format!("{} vs {}", self.team_a, self.team_b)
    }

    /// Find a market by its type tag.
    pub fn market(&self, kind: MarketKind) -> Option<&Market> {
        self.markets.iter().find(|market| market.kind == kind)
    }

    /// Kick-off time as "HH:MM".
    pub fn start_time_str(&self) -> String {
        format!("{:02}:{:02}", self.start_at.hour(), self.start_at.minute())
    }
}

/// The full event catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Build a catalog from a list of events.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Events for one sport.
    pub fn events_for(&self, sport: Sport) -> Vec<&Event> {
        self.events.iter().filter(|e| e.sport == sport).collect()
    }

    /// Sports present in the catalog, in catalog order, deduplicated.
    pub fn sports(&self) -> Vec<Sport> {
        let mut sports = Vec::new();
        for event in &self.events {
            if !sports.contains(&event.sport) {
                sports.push(event.sport);
            }
        }
        sports
    }

    /// Find an event by id across all sports.
    pub fn find_event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// All events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn sport_from_string_works() {
        assert_eq!(Sport::from_str("fútbol").unwrap(), Sport::Futbol);
        assert_eq!(Sport::from_str("futbol").unwrap(), Sport::Futbol);
        assert_eq!(Sport::from_str("tenis").unwrap(), Sport::Tenis);
        assert!(Sport::from_str("curling").is_err());
    }

    #[test]
    fn market_kind_display_round_trips() {
        assert_eq!(MarketKind::AmbosMarcan.to_string(), "ambos_marcan");
        assert_eq!(
            MarketKind::from_str("ambos_marcan").unwrap(),
            MarketKind::AmbosMarcan
        );
    }

    #[test]
    fn catalog_lookups_resolve_known_triple() {
        let catalog = mock_catalog();
        let event = catalog.find_event("ftb-1").expect("ftb-1 exists");
        assert_eq!(event.display_name(), "Barcelona vs Real Madrid");

        let market = event.market(MarketKind::Ganador).expect("ganador market");
        let entry = market.odds_for("Empate").expect("empate option");
        assert_eq!(entry.odds, dec!(3.25));
    }

    #[test]
    fn catalog_lookups_miss_unknown_ids() {
        let catalog = mock_catalog();
        assert!(catalog.find_event("ftb-999").is_none());

        let event = catalog.find_event("tns-1").unwrap();
        assert!(event.market(MarketKind::MasMenos).is_none());
        let market = event.market(MarketKind::Ganador).unwrap();
        assert!(market.odds_for("Alcaraz").is_none());
    }

    #[test]
    fn sports_are_listed_once_in_catalog_order() {
        let catalog = mock_catalog();
        assert_eq!(
            catalog.sports(),
            vec![Sport::Futbol, Sport::Baloncesto, Sport::Tenis]
        );
    }
}
