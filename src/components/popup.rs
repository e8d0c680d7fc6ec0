//! Inverted tooltip wrapper shared by small icon buttons.

use leptos::prelude::*;

#[component]
pub fn Popup(#[prop(into)] content: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <span class="popup-trigger" data-tooltip=move || content.get() data-inverted="">
            {children()}
        </span>
    }
}
