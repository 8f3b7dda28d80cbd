//! Aggregate statistics over the wager history.

use rust_decimal::Decimal;

use super::types::{Bet, BetStatus};

/// Totals over resolved and active history entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserStats {
    /// History entries that left the pending state.
    pub total_bets: usize,
    /// Entries resolved as won.
    pub won_bets: usize,
    /// Entries resolved as lost.
    pub lost_bets: usize,
    /// won / total × 100, rounded to one decimal. Zero with no entries.
    pub win_rate: Decimal,
    /// Consecutive most-recent wins before the first loss.
    pub current_streak: usize,
}

/// Compute stats over history entries with status ≠ pending.
pub fn compute(history: &[Bet]) -> UserStats {
    let entries: Vec<&Bet> = history
        .iter()
        .filter(|bet| bet.status != BetStatus::Pending)
        .collect();

    let total_bets = entries.len();
    let won_bets = entries
        .iter()
        .filter(|bet| bet.status == BetStatus::Won)
        .count();
    let lost_bets = entries
        .iter()
        .filter(|bet| bet.status == BetStatus::Lost)
        .count();

    let win_rate = if total_bets > 0 {
        (Decimal::from(won_bets as u64) * Decimal::ONE_HUNDRED / Decimal::from(total_bets as u64))
            .round_dp(1)
    } else {
        Decimal::ZERO
    };

    UserStats {
        total_bets,
        won_bets,
        lost_bets,
        win_rate,
        current_streak: current_streak(&entries),
    }
}

/// Count consecutive wins from the most recent result backwards, stopping at
/// the first loss. Unresolved entries neither extend nor break the streak.
fn current_streak(entries: &[&Bet]) -> usize {
    let mut sorted: Vec<&&Bet> = entries.iter().collect();
    sorted.sort_by(|a, b| b.result_at.cmp(&a.result_at));

    let mut streak = 0;
    for bet in sorted {
        match bet.status {
            BetStatus::Won => streak += 1,
            BetStatus::Lost => break,
            _ => {}
        }
    }
    streak
}
