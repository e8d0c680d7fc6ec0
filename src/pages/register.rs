//! Registration page: creates an account and signs it in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_list::{ErrorList, field_messages, has_field_error};
use crate::components::form_input::FormInput;
use crate::net::error::FieldErrors;
use crate::net::graphql::GraphqlClient;
use crate::state::auth::AuthContext;
use crate::state::forms::{RegisterField, register_form};
use crate::util::form::{Form, use_form};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let client = expect_context::<GraphqlClient>();
    let navigate = use_navigate();

    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let form = use_form(register_form(), move |form: Form<RegisterField>| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let values = form.snapshot();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_user(&client, &values).await {
                    Ok(user) => {
                        errors.set(FieldErrors::new());
                        auth.login(user);
                        registered.set(true);
                    }
                    Err(e) => errors.set(e.field_errors()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, form, auth, registered);
            pending.set(false);
        }
    });

    let invalid = move |field: RegisterField| Signal::derive(move || errors.with(|e| has_field_error(e, field)));

    view! {
        <div class="form-container">
            <form
                class="ui form"
                class:loading=move || pending.get()
                novalidate=true
                on:submit=move |ev| form.on_submit(ev)
            >
                <h1>"Register"</h1>
                <FormInput
                    form=form
                    field=RegisterField::Username
                    label="Username"
                    placeholder="Username..."
                    invalid=invalid(RegisterField::Username)
                />
                <FormInput
                    form=form
                    field=RegisterField::Email
                    label="Email"
                    placeholder="Email..."
                    input_type="email"
                    invalid=invalid(RegisterField::Email)
                />
                <FormInput
                    form=form
                    field=RegisterField::Password
                    label="Password"
                    placeholder="Password..."
                    input_type="password"
                    invalid=invalid(RegisterField::Password)
                />
                <FormInput
                    form=form
                    field=RegisterField::ConfirmPassword
                    label="Confirm Password"
                    placeholder="Confirm Password..."
                    input_type="password"
                    invalid=invalid(RegisterField::ConfirmPassword)
                />
                <button type="submit" class="ui primary button">
                    "Register"
                </button>
            </form>
            <ErrorList messages=Signal::derive(move || errors.with(field_messages))/>
        </div>
    }
}
