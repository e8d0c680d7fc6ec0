//! Post-creation form shown above the feed for signed-in users.
//!
//! On success the new post is prepended to the cached feed by the
//! `createPost` cache rule and the form is cleared through its signal. On
//! failure the first GraphQL error message is shown under the input.

use leptos::prelude::*;

use crate::components::error_list::ErrorList;
use crate::components::form_input::FormInput;
use crate::net::graphql::GraphqlClient;
use crate::state::forms::{PostField, post_form};
use crate::util::form::{Form, use_form};

#[component]
pub fn PostForm() -> impl IntoView {
    let client = expect_context::<GraphqlClient>();
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let form = use_form(post_form(), move |form: Form<PostField>| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let values = form.snapshot();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_post(&client, &values).await {
                    Ok(_) => {
                        error.set(None);
                        form.reset();
                    }
                    Err(e) => error.set(Some(e.first_message())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, form);
            pending.set(false);
        }
    });

    view! {
        <form class="ui form" class:loading=move || pending.get() on:submit=move |ev| form.on_submit(ev)>
            <h2>"Create a post:"</h2>
            <FormInput
                form=form
                field=PostField::Body
                placeholder="Hi World!"
                invalid=Signal::derive(move || error.with(Option::is_some))
            />
            <button type="submit" class="ui teal button">
                "Submit"
            </button>
        </form>
        <ErrorList messages=Signal::derive(move || error.get().into_iter().collect::<Vec<_>>())/>
    }
}
