//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard, menu bar, and user-aware components (like button,
//! post form) to coordinate redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! Transitions are plain functions over a `TokenStore` that return the next
//! `AuthState`. `AuthContext` is the single owner of the reactive cell and
//! applies those transitions; it is passed through Leptos context rather than
//! living in a global.
//!
//! Expiry is only checked when the session is restored at startup. A token
//! that expires mid-session keeps the UI authenticated until the next reload
//! or until the server rejects a request.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::session::{decode_claims, is_expired};
use crate::util::token_store::{SharedTokenStore, TokenStore};

/// Authentication state: `None` is anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Compute the startup state from whatever token is stored.
///
/// Expired or undecodable tokens are removed from the store.
pub fn restore_session(store: &dyn TokenStore, now_ms: i64) -> AuthState {
    let Some(token) = store.get() else {
        return AuthState::anonymous();
    };
    match decode_claims(&token) {
        Ok(claims) if is_expired(&claims, now_ms) => {
            leptos::logging::log!("stored session expired; discarding token");
            store.clear();
            AuthState::anonymous()
        }
        Ok(claims) => AuthState::authenticated(User::from_claims(claims, &token)),
        Err(e) => {
            leptos::logging::log!("stored session unreadable ({e}); discarding token");
            store.clear();
            AuthState::anonymous()
        }
    }
}

/// Persist `user.token` and return the authenticated state.
pub fn login(store: &dyn TokenStore, user: User) -> AuthState {
    store.set(&user.token);
    AuthState::authenticated(user)
}

/// Clear the stored token and return the anonymous state.
pub fn logout(store: &dyn TokenStore) -> AuthState {
    store.clear();
    AuthState::anonymous()
}

/// Owner of the session signal and its backing token store.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: StoredValue<SharedTokenStore>,
}

impl AuthContext {
    /// Restore the session from `store` as of `now_ms`.
    pub fn new(store: SharedTokenStore, now_ms: i64) -> Self {
        let initial = restore_session(store.as_ref(), now_ms);
        Self {
            state: RwSignal::new(initial),
            store: StoredValue::new(store),
        }
    }

    /// Read-only view of the session signal.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current user (tracked).
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Current user, read without subscribing (for event handlers).
    pub fn user_untracked(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    /// Whether a user is signed in (tracked).
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn login(&self, user: User) {
        let next = self.store.with_value(|store| login(store.as_ref(), user));
        self.state.set(next);
    }

    pub fn logout(&self) {
        let next = self.store.with_value(|store| logout(store.as_ref()));
        self.state.set(next);
    }
}
