//! Application configuration loaded from environment variables.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Registration ===
    /// Balance credited to newly registered users.
    #[serde(default = "default_starting_balance")]
    pub starting_balance: Decimal,

    /// Tier label assigned to newly registered users.
    #[serde(default = "default_level")]
    pub starting_level: String,

    // === Wallet Defaults ===
    /// Wallet balance before any deposit.
    #[serde(default = "default_wallet_balance")]
    pub wallet_balance: Decimal,

    /// Display name shown before login.
    #[serde(default = "default_username")]
    pub wallet_username: String,

    /// Default avatar image path.
    #[serde(default = "default_avatar")]
    pub default_avatar: String,

    // === Storage ===
    /// Directory for file-backed storage. Unset means in-memory only.
    #[serde(default)]
    pub storage_dir: Option<String>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_starting_balance() -> Decimal {
    Decimal::new(1_000_000, 0)
}

fn default_level() -> String {
    "Novato".to_string()
}

fn default_wallet_balance() -> Decimal {
    Decimal::new(10_000, 0)
}

fn default_username() -> String {
    "Usuario Demo".to_string()
}

fn default_avatar() -> String {
    "/images/avatar-default.png".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.starting_balance < Decimal::ZERO {
            return Err("STARTING_BALANCE must not be negative".to_string());
        }

        if self.wallet_balance < Decimal::ZERO {
            return Err("WALLET_BALANCE must not be negative".to_string());
        }

        if self.starting_level.is_empty() {
            return Err("STARTING_LEVEL must not be empty".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            starting_level: default_level(),
            wallet_balance: default_wallet_balance(),
            wallet_username: default_username(),
            default_avatar: default_avatar(),
            storage_dir: None,
            rust_log: default_log_level(),
        }
    }
}
