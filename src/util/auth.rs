//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and register routes are for anonymous visitors only; a signed-in
//! user landing on them is sent home. This is a UX gate, not a security
//! boundary: the server rejects unauthorized operations on its own.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::{AuthContext, AuthState};

/// Whether an anonymous-only route should redirect to `/`.
pub fn should_redirect_authenticated(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Render `children` for anonymous visitors; redirect signed-in users home.
#[component]
pub fn AuthRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state();

    view! {
        <Show
            when=move || !state.with(should_redirect_authenticated)
            fallback=|| view! { <Redirect path="/"/> }
        >
            {children()}
        </Show>
    }
}
