//! Authentication session store.
//!
//! This module handles:
//! - The backend collaborator contract (sessions, credentials, user rows)
//! - A mock backend for demos and testing
//! - The session store itself (initialize/register/login/logout)

pub mod backend;
pub mod mock;
pub mod store;

pub use backend::{AuthBackend, User};
pub use mock::{MockAuthBackend, MockAuthConfig};
pub use store::{AuthSnapshot, AuthStore, UserDisplayInfo};
