//! Like toggle with count label for a post card.
//!
//! DESIGN
//! ======
//! The filled/outline state is derived only from the post's `likes` list as
//! currently cached; a like mutation patches that list through the cache, so
//! there is no local "liked" flag to drift. Like failures are non-critical
//! and never surface in the UI.

#[cfg(test)]
#[path = "like_button_test.rs"]
mod like_button_test;

use leptos::prelude::*;

use crate::components::popup::Popup;
use crate::net::error::ClientError;
use crate::net::graphql::GraphqlClient;
use crate::net::types::{Like, Post, User};
use crate::state::auth::AuthContext;

/// Whether `user` appears among `likes`. Anonymous visitors never have.
pub fn is_liked(user: Option<&User>, likes: &[Like]) -> bool {
    user.is_some_and(|user| likes.iter().any(|like| like.username == user.username))
}

/// Tooltip text for the current state.
pub fn like_tooltip(liked: bool) -> &'static str {
    if liked { "Unlike" } else { "Like" }
}

/// Settle a finished like request. Failures are logged only; the button
/// keeps following the cached `likes`, which a failed request never touched.
pub fn settle_like(post_id: &str, result: Result<Post, ClientError>) {
    if let Err(e) = result {
        leptos::logging::log!("like on {post_id} ignored: {e}");
    }
}

#[component]
pub fn LikeButton(post: Post) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let client = expect_context::<GraphqlClient>();
    let Post { id, likes, like_count, .. } = post;

    let liked = Memo::new(move |_| is_liked(auth.user().as_ref(), &likes));

    let on_like = move |_: leptos::ev::MouseEvent| {
        // Anonymous clicks follow the inner link to /login instead.
        if auth.user_untracked().is_none() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let post_id = id.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::like_post(&client, &post_id).await;
                settle_like(&post_id, result);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, &id);
        }
    };

    view! {
        <div class="ui labeled button" tabindex="0" on:click=on_like>
            <Popup content=Signal::derive(move || like_tooltip(liked.get()).to_owned())>
                {move || {
                    if auth.is_authenticated() {
                        view! {
                            <button class="ui teal button" class:basic=move || !liked.get()>
                                <i class="heart icon"></i>
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a href="/login" class="ui teal basic button">
                                <i class="heart icon"></i>
                            </a>
                        }
                            .into_any()
                    }
                }}
            </Popup>
            <span class="ui basic teal left pointing label">{like_count}</span>
        </div>
    }
}
