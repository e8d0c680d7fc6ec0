//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::menu_bar::MenuBar;
use crate::config::ClientConfig;
use crate::net::graphql::GraphqlClient;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthContext;
use crate::util::auth::AuthRoute;
use crate::util::clock::now_ms;
use crate::util::token_store::{LocalTokenStore, SharedTokenStore};

/// Root application component.
///
/// Restores any persisted session before the first render, provides the auth
/// context and the GraphQL client, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store: SharedTokenStore = Arc::new(LocalTokenStore::new(config.token_key.clone()));

    provide_context(AuthContext::new(store.clone(), now_ms()));
    provide_context(GraphqlClient::new(config, store));

    view! {
        <Title text="Postwall"/>

        <Router>
            <MenuBar/>
            <main class="ui container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <AuthRoute><LoginPage/></AuthRoute> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <AuthRoute><RegisterPage/></AuthRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
