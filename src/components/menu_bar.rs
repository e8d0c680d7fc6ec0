//! Top navigation: Home/Login/Register for visitors, username and Logout for
//! signed-in users.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthContext;

#[component]
pub fn MenuBar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let pathname = use_location().pathname;
    let is_active = move |path: &'static str| pathname.with(|p| p == path);

    let on_logout = move |_: leptos::ev::MouseEvent| auth.logout();

    view! {
        <nav class="ui pointing secondary massive teal menu">
            {move || match auth.user() {
                Some(user) => {
                    view! {
                        <a href="/" class="item active">{user.username}</a>
                        <div class="right menu">
                            <a class="item" on:click=on_logout>"Logout"</a>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <a href="/" class="item" class:active=move || is_active("/")>"Home"</a>
                        <div class="right menu">
                            <a href="/login" class="item" class:active=move || is_active("/login")>
                                "Login"
                            </a>
                            <a href="/register" class="item" class:active=move || is_active("/register")>
                                "Register"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
