//! Utility functions.

use rand::distributions::Alphanumeric;
use rand::Rng;
use time::OffsetDateTime;

/// Generate a unique id of the form `{prefix}-{unix_ms}-{9 alnum chars}`.
///
/// Matches the original bet-id shape; the random suffix keeps ids unique
/// within a single millisecond.
pub fn generate_id(prefix: &str) -> String {
    let millis = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();

    format!("{prefix}-{millis}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix() {
        let id = generate_id("bet");
        assert!(id.starts_with("bet-"));
        assert_eq!(id.split('-').count(), 3);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = generate_id("txn");
        let b = generate_id("txn");
        assert_ne!(a, b);
    }
}
