//! Home page: the post feed, with a post form for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! The feed is fetched once on mount and then rendered from the normalized
//! cache, so post creation (prepend rule) and likes (entity merge) show up
//! without a refetch.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::post_form::PostForm;
use crate::net::api::cached_posts;
use crate::net::graphql::GraphqlClient;
use crate::state::auth::AuthContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let client = expect_context::<GraphqlClient>();
    let load_error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_posts(&client).await {
                Ok(posts) => leptos::logging::log!("loaded {} posts", posts.len()),
                Err(e) => load_error.set(Some(e.first_message())),
            }
        });
    }

    let posts = move || cached_posts(&client);
    let feed = posts.clone();

    view! {
        <div class="ui three column grid">
            <div class="row page-title">
                <h1>"Recent Posts"</h1>
            </div>
            <div class="row">
                <Show when=move || auth.is_authenticated()>
                    <div class="column">
                        <PostForm/>
                    </div>
                </Show>
                <Show when=move || load_error.with(Option::is_some)>
                    <p class="feed-error">{move || load_error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || posts().is_some()
                    fallback=|| view! { <h2>"Loading posts..."</h2> }
                >
                    {
                        let feed = feed.clone();
                        move || {
                            feed()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|post| {
                                    view! {
                                        <div class="column post-column">
                                            <PostCard post=post/>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }
                    }
                </Show>
            </div>
        </div>
    }
}
