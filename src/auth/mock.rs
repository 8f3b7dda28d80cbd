//! Mock authentication backend for demos and unit testing.
//!
//! Keeps credentials, user rows and the session in process memory, with
//! optional failure injection, so store behaviour can be exercised without a
//! real backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::error::AuthError;
use crate::utils::generate_id;

use super::backend::{AuthBackend, User};

/// Configuration for mock backend behavior.
#[derive(Debug, Clone, Default)]
pub struct MockAuthConfig {
    /// Whether to fail sign-up requests.
    pub fail_sign_up: bool,
    /// Whether to fail sign-in requests.
    pub fail_sign_in: bool,
    /// Whether to fail user-row reads and writes.
    pub fail_user_table: bool,
    /// Whether to fail only the last-login stamp.
    pub fail_last_login: bool,
    /// Whether to fail sign-out requests.
    pub fail_sign_out: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

#[derive(Default)]
struct MockState {
    /// email -> (password, user id)
    credentials: HashMap<String, (String, String)>,
    /// user id -> row
    users: HashMap<String, User>,
    session: Option<String>,
}

/// In-memory [`AuthBackend`] implementation.
#[derive(Clone, Default)]
pub struct MockAuthBackend {
    config: MockAuthConfig,
    state: Arc<Mutex<MockState>>,
}

impl MockAuthBackend {
    /// Create a mock backend with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock backend with custom configuration.
    pub fn with_config(config: MockAuthConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Seed a user row together with its credential, without opening a session.
    pub fn seed_user(&self, user: User, password: &str) {
        let mut state = self.state.lock().expect("mock auth state poisoned");
        state
            .credentials
            .insert(user.email.clone(), (password.to_string(), user.id.clone()));
        state.users.insert(user.id.clone(), user);
    }

    /// Open a session for a user id, as if a previous login survived a reload.
    pub fn seed_session(&self, user_id: &str) {
        let mut state = self.state.lock().expect("mock auth state poisoned");
        state.session = Some(user_id.to_string());
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn session_user_id(&self) -> Result<Option<String>, AuthError> {
        self.simulate_latency().await;
        let state = self.state.lock().expect("mock auth state poisoned");
        Ok(state.session.clone())
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<String, AuthError> {
        self.simulate_latency().await;

        if self.config.fail_sign_up {
            return Err(AuthError::Backend("mock sign-up failure".to_string()));
        }

        let mut state = self.state.lock().expect("mock auth state poisoned");
        if state.credentials.contains_key(email) {
            return Err(AuthError::EmailTaken {
                email: email.to_string(),
            });
        }

        let user_id = generate_id("user");
        state
            .credentials
            .insert(email.to_string(), (password.to_string(), user_id.clone()));
        state.session = Some(user_id.clone());

        Ok(user_id)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<String, AuthError> {
        self.simulate_latency().await;

        if self.config.fail_sign_in {
            return Err(AuthError::Backend("mock sign-in failure".to_string()));
        }

        let mut state = self.state.lock().expect("mock auth state poisoned");
        let user_id = match state.credentials.get(email) {
            Some((stored, user_id)) if stored == password => user_id.clone(),
            _ => return Err(AuthError::InvalidCredentials),
        };

        state.session = Some(user_id.clone());
        Ok(user_id)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.simulate_latency().await;

        if self.config.fail_sign_out {
            return Err(AuthError::Backend("mock sign-out failure".to_string()));
        }

        let mut state = self.state.lock().expect("mock auth state poisoned");
        state.session = None;
        Ok(())
    }

    async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, AuthError> {
        self.simulate_latency().await;

        if self.config.fail_user_table {
            return Err(AuthError::Backend("mock user-table failure".to_string()));
        }

        let state = self.state.lock().expect("mock auth state poisoned");
        Ok(state.users.get(user_id).cloned())
    }

    async fn insert_user(&self, user: User) -> Result<User, AuthError> {
        self.simulate_latency().await;

        if self.config.fail_user_table {
            return Err(AuthError::Backend("mock user-table failure".to_string()));
        }

        let mut state = self.state.lock().expect("mock auth state poisoned");
        state.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_last_login(
        &self,
        user_id: &str,
        at: OffsetDateTime,
    ) -> Result<(), AuthError> {
        self.simulate_latency().await;

        if self.config.fail_user_table || self.config.fail_last_login {
            return Err(AuthError::Backend("mock user-table failure".to_string()));
        }

        let mut state = self.state.lock().expect("mock auth state poisoned");
        if let Some(user) = state.users.get_mut(user_id) {
            user.last_login = Some(at);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            name: "Test".to_string(),
            balance: dec!(100),
            level: "Novato".to_string(),
            last_login: None,
        }
    }

    #[tokio::test]
    async fn sign_up_opens_session() {
        let backend = MockAuthBackend::new();

        let user_id = backend.sign_up("a@x.com", "pw").await.unwrap();
        assert_eq!(backend.session_user_id().await.unwrap(), Some(user_id));
    }

    #[tokio::test]
    async fn sign_up_rejects_duplicate_email() {
        let backend = MockAuthBackend::new();
        backend.sign_up("a@x.com", "pw").await.unwrap();

        let result = backend.sign_up("a@x.com", "other").await;
        assert!(matches!(result, Err(AuthError::EmailTaken { .. })));
    }

    #[tokio::test]
    async fn sign_in_rejects_wrong_password() {
        let backend = MockAuthBackend::new();
        backend.seed_user(test_user("u1", "a@x.com"), "pw");

        let result = backend.sign_in("a@x.com", "wrong").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(backend.session_user_id().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sign_out_clears_session() {
        let backend = MockAuthBackend::new();
        backend.seed_user(test_user("u1", "a@x.com"), "pw");
        backend.sign_in("a@x.com", "pw").await.unwrap();

        backend.sign_out().await.unwrap();
        assert!(backend.session_user_id().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_last_login_stamps_row() {
        let backend = MockAuthBackend::new();
        backend.seed_user(test_user("u1", "a@x.com"), "pw");

        let now = OffsetDateTime::now_utc();
        backend.update_last_login("u1", now).await.unwrap();

        let user = backend.fetch_user("u1").await.unwrap().unwrap();
        assert_eq!(user.last_login, Some(now));
    }

    #[tokio::test]
    async fn failure_modes_reject_calls() {
        let backend = MockAuthBackend::with_config(MockAuthConfig {
            fail_sign_in: true,
            ..Default::default()
        });
        backend.seed_user(test_user("u1", "a@x.com"), "pw");

        let result = backend.sign_in("a@x.com", "pw").await;
        assert!(matches!(result, Err(AuthError::Backend(_))));
    }
}
