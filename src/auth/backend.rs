//! Authentication/database collaborator contract.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AuthError;

/// A row in the backend's user table, cached locally as the session user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned user id.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Balance in integer currency units.
    pub balance: Decimal,
    /// Tier label (e.g. "Novato").
    pub level: String,
    /// Last successful login, if any.
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_login: Option<OffsetDateTime>,
}

/// External collaborator owning identity and user-row persistence.
///
/// Calls are awaited sequentially; there is no retry and no timeout here.
/// Every method can reject, surfaced as [`AuthError`].
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Id of the user behind the current session, if one exists.
    async fn session_user_id(&self) -> Result<Option<String>, AuthError>;

    /// Create a credential for a new account. Returns the new user id and
    /// opens a session for it.
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, AuthError>;

    /// Verify a credential and open a session. Returns the user id.
    async fn sign_in(&self, email: &str, password: &str) -> Result<String, AuthError>;

    /// Invalidate the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Read a user row by id.
    async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, AuthError>;

    /// Insert a user row, returning it as stored.
    async fn insert_user(&self, user: User) -> Result<User, AuthError>;

    /// Stamp a user's last-login column.
    async fn update_last_login(
        &self,
        user_id: &str,
        at: OffsetDateTime,
    ) -> Result<(), AuthError>;
}
