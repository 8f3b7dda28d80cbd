//! Built-in mock event data.

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use time::macros::datetime;

use super::{Catalog, Event, Market, MarketKind, OddsEntry, Sport};

static CATALOG: Lazy<Catalog> = Lazy::new(build_catalog);

/// The shared mock catalog.
pub fn mock_catalog() -> &'static Catalog {
    &CATALOG
}

fn entry(option: &str, odds: rust_decimal::Decimal) -> OddsEntry {
    OddsEntry {
        option: option.to_string(),
        odds,
    }
}

fn build_catalog() -> Catalog {
    Catalog::new(vec![
        Event {
            id: "ftb-1".to_string(),
            sport: Sport::Futbol,
            league: "Liga BetSimulator".to_string(),
            team_a: "Barcelona".to_string(),
            team_b: "Real Madrid".to_string(),
            start_at: datetime!(2024-01-15 20:00 UTC),
            markets: vec![
                Market {
                    kind: MarketKind::Ganador,
                    name: "Ganador del Partido".to_string(),
                    odds: vec![
                        entry("Barcelona", dec!(2.10)),
                        entry("Empate", dec!(3.25)),
                        entry("Real Madrid", dec!(3.00)),
                    ],
                },
                Market {
                    kind: MarketKind::AmbosMarcan,
                    name: "Ambos equipos marcan".to_string(),
                    odds: vec![entry("Sí", dec!(1.80)), entry("No", dec!(1.90))],
                },
                Market {
                    kind: MarketKind::MasMenos,
                    name: "Más/Menos 2.5 goles".to_string(),
                    odds: vec![
                        entry("Más de 2.5", dec!(2.05)),
                        entry("Menos de 2.5", dec!(1.75)),
                    ],
                },
            ],
        },
        Event {
            id: "ftb-2".to_string(),
            sport: Sport::Futbol,
            league: "Premier League".to_string(),
            team_a: "Manchester United".to_string(),
            team_b: "Liverpool".to_string(),
            start_at: datetime!(2024-01-16 18:30 UTC),
            markets: vec![Market {
                kind: MarketKind::Ganador,
                name: "Ganador del Partido".to_string(),
                odds: vec![
                    entry("Manchester Utd", dec!(2.80)),
                    entry("Empate", dec!(3.40)),
                    entry("Liverpool", dec!(2.30)),
                ],
            }],
        },
        Event {
            id: "bkt-1".to_string(),
            sport: Sport::Baloncesto,
            league: "NBA".to_string(),
            team_a: "Lakers".to_string(),
            team_b: "Warriors".to_string(),
            start_at: datetime!(2024-01-15 22:00 UTC),
            markets: vec![
                Market {
                    kind: MarketKind::Ganador,
                    name: "Ganador del Partido".to_string(),
                    odds: vec![entry("Lakers", dec!(1.95)), entry("Warriors", dec!(1.85))],
                },
                Market {
                    kind: MarketKind::MasMenos,
                    name: "Más/Menos 220.5 puntos".to_string(),
                    odds: vec![
                        entry("Más de 220.5", dec!(1.90)),
                        entry("Menos de 220.5", dec!(1.90)),
                    ],
                },
            ],
        },
        Event {
            id: "tns-1".to_string(),
            sport: Sport::Tenis,
            league: "ATP Tour".to_string(),
            team_a: "Novak Djokovic".to_string(),
            team_b: "Rafael Nadal".to_string(),
            start_at: datetime!(2024-01-17 16:00 UTC),
            markets: vec![Market {
                kind: MarketKind::Ganador,
                name: "Ganador del Partido".to_string(),
                odds: vec![entry("Djokovic", dec!(1.65)), entry("Nadal", dec!(2.20))],
            }],
        },
    ])
}
