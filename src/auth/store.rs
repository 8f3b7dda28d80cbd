//! Session store: at most one current user plus an authenticated flag.
//!
//! Every state change synchronously notifies subscribers with the new
//! `{user, is_authenticated}` snapshot. Backend failures never panic the
//! caller; they come back as [`AuthError`] values.

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AuthError;
use crate::subscribe::{Listeners, Subscription};

use super::backend::{AuthBackend, User};

/// Avatar shown for authenticated users without a custom one.
const DEFAULT_AVATAR: &str = "/images/default-avatar.png";

/// Snapshot delivered to subscribers on every auth state change.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    /// Current session user, if any.
    pub user: Option<User>,
    /// Whether a user is signed in.
    pub is_authenticated: bool,
}

/// Header-friendly view of the current user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDisplayInfo {
    /// Name, falling back to the email local part, then "Usuario".
    pub username: String,
    /// Current balance.
    pub balance: Decimal,
    /// Tier label.
    pub level: String,
    /// Avatar image path.
    pub avatar: String,
}

#[derive(Default)]
struct AuthState {
    current_user: Option<User>,
    is_authenticated: bool,
}

/// Authentication store backed by an external collaborator.
pub struct AuthStore {
    backend: Arc<dyn AuthBackend>,
    starting_balance: Decimal,
    starting_level: String,
    state: Mutex<AuthState>,
    listeners: Listeners<AuthSnapshot>,
}

impl AuthStore {
    /// Create a store over a backend, using the config's registration defaults.
    pub fn new(backend: Arc<dyn AuthBackend>, config: &Config) -> Self {
        Self {
            backend,
            starting_balance: config.starting_balance,
            starting_level: config.starting_level.clone(),
            state: Mutex::new(AuthState::default()),
            listeners: Listeners::new(),
        }
    }

    /// Subscribe to auth state changes.
    pub fn subscribe(
        &self,
        listener: impl Fn(&AuthSnapshot) + Send + Sync + 'static,
    ) -> Subscription<AuthSnapshot> {
        self.listeners.subscribe(listener)
    }

    /// The cached session user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state
            .lock()
            .expect("auth state poisoned")
            .current_user
            .clone()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state
            .lock()
            .expect("auth state poisoned")
            .is_authenticated
    }

    /// Whether the UI should offer login/register buttons.
    pub fn should_show_auth_buttons(&self) -> bool {
        self.current_user().is_none()
    }

    /// Display info for the current user, or `None` when signed out.
    pub fn user_display_info(&self) -> Option<UserDisplayInfo> {
        let user = self.current_user()?;

        let username = if !user.name.is_empty() {
            user.name.clone()
        } else if let Some(local) = user.email.split('@').next().filter(|s| !s.is_empty()) {
            local.to_string()
        } else {
            "Usuario".to_string()
        };

        Some(UserDisplayInfo {
            username,
            balance: user.balance,
            level: if user.level.is_empty() {
                "Novato".to_string()
            } else {
                user.level.clone()
            },
            avatar: DEFAULT_AVATAR.to_string(),
        })
    }

    /// Hydrate the store from an existing backend session, if one survives.
    ///
    /// Returns the hydrated user, or `None` when there is no session or the
    /// session's user row is missing.
    pub async fn initialize(&self) -> Result<Option<User>, AuthError> {
        let Some(user_id) = self.backend.session_user_id().await? else {
            debug!("no active session");
            return Ok(None);
        };

        match self.backend.fetch_user(&user_id).await? {
            Some(user) => {
                info!("restored session for {}", user.email);
                self.set_current(Some(user.clone()));
                Ok(Some(user))
            }
            None => {
                warn!("session user {user_id} has no user row");
                Ok(None)
            }
        }
    }

    /// Create a credential and user row, and sign the new user in.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, AuthError> {
        info!("registering user {email}");

        let user_id = self.backend.sign_up(email, password).await?;
        let user = self
            .backend
            .insert_user(User {
                id: user_id,
                email: email.to_string(),
                name: name.to_string(),
                balance: self.starting_balance,
                level: self.starting_level.clone(),
                last_login: None,
            })
            .await?;

        self.set_current(Some(user.clone()));
        Ok(user)
    }

    /// Verify a credential, load the user row and stamp last-login.
    ///
    /// A failed last-login stamp is logged but does not undo the login.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user_id = self.backend.sign_in(email, password).await?;

        let user = self
            .backend
            .fetch_user(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound {
                user_id: user_id.clone(),
            })?;

        if let Err(e) = self
            .backend
            .update_last_login(&user_id, OffsetDateTime::now_utc())
            .await
        {
            warn!("failed to stamp last login for {user_id}: {e}");
        }

        info!("user {} logged in", user.email);
        self.set_current(Some(user.clone()));
        Ok(user)
    }

    /// Invalidate the backend session and clear local state.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.backend.sign_out().await?;
        self.set_current(None);
        info!("user logged out");
        Ok(())
    }

    fn set_current(&self, user: Option<User>) {
        let snapshot = {
            let mut state = self.state.lock().expect("auth state poisoned");
            state.is_authenticated = user.is_some();
            state.current_user = user;
            AuthSnapshot {
                user: state.current_user.clone(),
                is_authenticated: state.is_authenticated,
            }
        };
        self.listeners.notify(&snapshot);
    }
}
