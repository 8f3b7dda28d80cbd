//! Unified error types for the betting stores.

use rust_decimal::Decimal;
use thiserror::Error;

/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum BetsimError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Authentication/session error.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Bet-slip or history error.
    #[error("betting error: {0}")]
    Betting(#[from] BettingError),

    /// Wallet error.
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Durable storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Authentication and backend-collaborator errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user is signed in.
    #[error("user is not authenticated")]
    NotAuthenticated,

    /// No active session exists on the backend.
    #[error("no active session")]
    NoActiveSession,

    /// Credential verification failed.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An account already exists for this email.
    #[error("email {email} is already registered")]
    EmailTaken {
        /// The email that is already in use.
        email: String,
    },

    /// The user row backing a session could not be found.
    #[error("user row {user_id} not found")]
    UserNotFound {
        /// The missing user id.
        user_id: String,
    },

    /// The backend collaborator rejected a call.
    #[error("backend call failed: {0}")]
    Backend(String),
}

/// Bet-slip and history errors.
#[derive(Error, Debug)]
pub enum BettingError {
    /// Confirming bets requires a signed-in user.
    #[error("user is not authenticated")]
    NotAuthenticated,

    /// Slip total exceeds the user's balance.
    #[error("insufficient balance: need {required}, have {available}")]
    InsufficientBalance {
        /// Sum of slip stakes.
        required: Decimal,
        /// Current user balance.
        available: Decimal,
    },

    /// The slip has no entries to confirm.
    #[error("no bets to confirm")]
    EmptySlip,
}

/// Wallet errors.
#[derive(Error, Debug)]
pub enum WalletError {
    /// Not enough balance to place the bet.
    #[error("insufficient balance: need {required}, have {available}")]
    InsufficientBalance {
        /// Stake of the rejected bet.
        required: Decimal,
        /// Current wallet balance.
        available: Decimal,
    },
}

/// Durable storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying IO failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, BetsimError>;
