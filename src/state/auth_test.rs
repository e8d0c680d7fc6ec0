use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::util::token_store::MemoryTokenStore;

// =============================================================
// Helpers
// =============================================================

const NOW_MS: i64 = 1_700_000_000_000;

fn make_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = serde_json::json!({
        "id": "u-1",
        "username": "bob",
        "email": "bob@example.com",
        "iat": exp - 3600,
        "exp": exp,
    });
    let claims = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
    format!("{header}.{claims}.sig")
}

fn make_user(token: &str) -> User {
    User {
        id: "u-2".to_owned(),
        username: "amy".to_owned(),
        email: "amy@example.com".to_owned(),
        created_at: Some("2024-01-01T00:00:00Z".to_owned()),
        token: token.to_owned(),
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_authenticated_holds_user() {
    let state = AuthState::authenticated(make_user("t"));
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().username, "amy");
}

// =============================================================
// restore_session
// =============================================================

#[test]
fn restore_without_token_is_anonymous() {
    let store = MemoryTokenStore::new();
    assert_eq!(restore_session(&store, NOW_MS), AuthState::anonymous());
}

#[test]
fn restore_with_expired_token_is_anonymous_and_clears_store() {
    let store = MemoryTokenStore::with_token(&make_token(NOW_MS / 1000 - 1));
    let state = restore_session(&store, NOW_MS);
    assert_eq!(state, AuthState::anonymous());
    assert_eq!(store.get(), None);
}

#[test]
fn restore_with_valid_token_is_authenticated_with_claims() {
    let token = make_token(NOW_MS / 1000 + 3600);
    let store = MemoryTokenStore::with_token(&token);
    let state = restore_session(&store, NOW_MS);
    let user = state.user.expect("authenticated");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "bob");
    assert_eq!(user.email, "bob@example.com");
    assert_eq!(user.token, token);
    assert_eq!(store.get(), Some(token));
}

#[test]
fn restore_with_malformed_token_is_anonymous_and_clears_store() {
    let store = MemoryTokenStore::with_token("not-a-jwt");
    assert_eq!(restore_session(&store, NOW_MS), AuthState::anonymous());
    assert_eq!(store.get(), None);
}

// =============================================================
// login / logout transitions
// =============================================================

#[test]
fn login_writes_token_and_authenticates() {
    let store = MemoryTokenStore::new();
    let user = make_user("fresh.token.value");
    let state = login(&store, user.clone());
    assert_eq!(store.get().as_deref(), Some("fresh.token.value"));
    assert_eq!(state, AuthState::authenticated(user));
}

#[test]
fn login_replaces_previous_identity() {
    let store = MemoryTokenStore::with_token("old");
    let state = login(&store, make_user("new"));
    assert_eq!(store.get().as_deref(), Some("new"));
    assert_eq!(state.user.unwrap().token, "new");
}

#[test]
fn login_is_idempotent() {
    let store = MemoryTokenStore::new();
    let first = login(&store, make_user("t"));
    let second = login(&store, make_user("t"));
    assert_eq!(first, second);
    assert_eq!(store.get().as_deref(), Some("t"));
}

#[test]
fn logout_clears_token_and_state() {
    let store = MemoryTokenStore::with_token("t");
    assert_eq!(logout(&store), AuthState::anonymous());
    assert_eq!(store.get(), None);
}

#[test]
fn logout_when_anonymous_is_noop() {
    let store = MemoryTokenStore::new();
    assert_eq!(logout(&store), AuthState::anonymous());
    assert_eq!(logout(&store), AuthState::anonymous());
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn context_restores_then_transitions() {
    let store = MemoryTokenStore::with_token(&make_token(NOW_MS / 1000 + 60));
    let ctx = AuthContext::new(Arc::new(store.clone()), NOW_MS);
    assert_eq!(ctx.state().get_untracked().user.map(|u| u.username), Some("bob".to_owned()));

    ctx.logout();
    assert!(ctx.state().get_untracked().user.is_none());
    assert_eq!(store.get(), None);

    ctx.login(make_user("next"));
    assert_eq!(ctx.state().get_untracked().user.map(|u| u.username), Some("amy".to_owned()));
    assert_eq!(store.get().as_deref(), Some("next"));
}
