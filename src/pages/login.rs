//! Login page: username + password against the `login` mutation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_list::{ErrorList, field_messages, has_field_error};
use crate::components::form_input::FormInput;
use crate::net::error::FieldErrors;
use crate::net::graphql::GraphqlClient;
use crate::state::auth::AuthContext;
use crate::state::forms::{LoginField, login_form};
use crate::util::form::{Form, use_form};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let client = expect_context::<GraphqlClient>();
    let navigate = use_navigate();

    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let form = use_form(login_form(), move |form: Form<LoginField>| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let values = form.snapshot();
            leptos::task::spawn_local(async move {
                match crate::net::api::login_user(&client, &values).await {
                    Ok(user) => {
                        errors.set(FieldErrors::new());
                        auth.login(user);
                        signed_in.set(true);
                    }
                    Err(e) => errors.set(e.field_errors()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, form, auth, signed_in);
            pending.set(false);
        }
    });

    let invalid = move |field: LoginField| Signal::derive(move || errors.with(|e| has_field_error(e, field)));

    view! {
        <div class="form-container">
            <form
                class="ui form"
                class:loading=move || pending.get()
                novalidate=true
                on:submit=move |ev| form.on_submit(ev)
            >
                <h1>"Login"</h1>
                <FormInput
                    form=form
                    field=LoginField::Username
                    label="Username"
                    placeholder="Username..."
                    invalid=invalid(LoginField::Username)
                />
                <FormInput
                    form=form
                    field=LoginField::Password
                    label="Password"
                    placeholder="Password..."
                    input_type="password"
                    invalid=invalid(LoginField::Password)
                />
                <button type="submit" class="ui primary button">
                    "Login"
                </button>
            </form>
            <ErrorList messages=Signal::derive(move || errors.with(field_messages))/>
        </div>
    }
}
