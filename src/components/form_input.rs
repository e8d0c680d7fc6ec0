//! Labeled text input bound to one field of a `Form`.

use leptos::prelude::*;

use crate::util::form::{Form, FormField};

/// Input whose value and change events go through `form`.
#[component]
pub fn FormInput<F>(
    form: Form<F>,
    field: F,
    placeholder: &'static str,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] invalid: Signal<bool>,
) -> impl IntoView
where
    F: FormField,
{
    view! {
        <div class="field" class:error=move || invalid.get()>
            {label.map(|text| view! { <label>{text}</label> })}
            <div class="ui input">
                <input
                    type=input_type
                    name=field.name()
                    placeholder=placeholder
                    prop:value=move || form.value(field)
                    on:input=move |ev| form.on_change(field.name(), event_target_value(&ev))
                />
            </div>
        </div>
    }
}
