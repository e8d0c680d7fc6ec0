//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feed and form chrome while reading shared state
//! (`AuthContext`, `GraphqlClient`) from Leptos context providers.

pub mod error_list;
pub mod form_input;
pub mod like_button;
pub mod menu_bar;
pub mod popup;
pub mod post_card;
pub mod post_form;
