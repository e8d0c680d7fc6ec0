//! Error message box listing one item per message.

#[cfg(test)]
#[path = "error_list_test.rs"]
mod error_list_test;

use leptos::prelude::*;

use crate::net::error::FieldErrors;
use crate::util::form::FormField;

/// One message per erroring field.
pub fn field_messages(errors: &FieldErrors) -> Vec<String> {
    errors.values().cloned().collect()
}

/// Whether the server flagged `field`.
pub fn has_field_error<F: FormField>(errors: &FieldErrors, field: F) -> bool {
    errors.contains_key(field.name())
}

/// Renders nothing while `messages` is empty.
#[component]
pub fn ErrorList(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || messages.with(|m| !m.is_empty())>
            <div class="ui error message">
                <ul class="list">
                    {move || {
                        messages
                            .get()
                            .into_iter()
                            .map(|message| view! { <li>{message}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </Show>
    }
}
