//! Controlled-form state shared by every form in the app.
//!
//! DESIGN
//! ======
//! Each form declares a closed enum of fields (`FormField`), so a typo in a
//! field name is a compile error instead of a silently ignored key. Values
//! only change through the signal, which keeps inputs and state in sync
//! (including clearing a form after a successful submit).
//!
//! No validation or dirty tracking is built in; the server reports field
//! errors.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

/// A field identifier for one form.
pub trait FormField: Copy + Ord + Send + Sync + std::fmt::Debug + 'static {
    /// Every field of the form, in display order.
    const ALL: &'static [Self];

    /// Wire/input name, e.g. `"confirmPassword"`.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Current string values of a form, keyed by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormValues<F: FormField> {
    values: BTreeMap<F, String>,
}

impl<F: FormField> Default for FormValues<F> {
    fn default() -> Self {
        Self { values: F::ALL.iter().map(|&field| (field, String::new())).collect() }
    }
}

impl<F: FormField> FormValues<F> {
    /// All fields blank.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Merge one field; the others keep their values.
    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style `set`.
    #[must_use]
    pub fn with(mut self, field: F, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Apply a change event addressed by input name.
    ///
    /// Returns `false` if `name` is not a field of this form.
    pub fn apply_change(&mut self, name: &str, value: impl Into<String>) -> bool {
        match F::from_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    /// `(name, value)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(field, value)| (field.name(), value.as_str()))
    }

    /// Values as a JSON object keyed by field name, ready to use as GraphQL
    /// variables.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|(name, value)| (name.to_owned(), serde_json::Value::String(value.to_owned())))
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Reactive form handle returned by `use_form`.
pub struct Form<F: FormField> {
    pub values: RwSignal<FormValues<F>>,
    initial: StoredValue<FormValues<F>>,
    callback: Callback<Form<F>>,
}

impl<F: FormField> Clone for Form<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormField> Copy for Form<F> {}

/// Create form state seeded with `initial`; `callback` runs on submit and
/// reads the values (or resets the form) through the handle it is given.
pub fn use_form<F, C>(initial: FormValues<F>, callback: C) -> Form<F>
where
    F: FormField,
    C: Fn(Form<F>) + Send + Sync + 'static,
{
    Form {
        values: RwSignal::new(initial.clone()),
        initial: StoredValue::new(initial),
        callback: Callback::new(callback),
    }
}

impl<F: FormField> Form<F> {
    /// Current value of `field` (tracked).
    pub fn value(&self, field: F) -> String {
        self.values.with(|v| v.get(field).to_owned())
    }

    /// Merge one field. No-op once the owning component is gone.
    pub fn set(&self, field: F, value: String) {
        self.values.try_update(|v| v.set(field, value));
    }

    /// Change handler keyed by input name. Unknown names are ignored.
    pub fn on_change(&self, name: &str, value: String) {
        let mut applied = false;
        self.values.update(|v| applied = v.apply_change(name, value));
        if !applied {
            leptos::logging::warn!("ignoring change for unknown form field `{name}`");
        }
    }

    /// Submit handler: prevents browser navigation, then submits.
    pub fn on_submit(&self, ev: leptos::ev::SubmitEvent) {
        ev.prevent_default();
        self.submit();
    }

    /// Invoke the submit callback.
    pub fn submit(&self) {
        self.callback.run(*self);
    }

    /// Snapshot of the current values (untracked).
    pub fn snapshot(&self) -> FormValues<F> {
        self.values.get_untracked()
    }

    /// Restore the initial values.
    ///
    /// Submit callbacks may finish after the form was unmounted (e.g. logout
    /// while a post is pending); resetting a disposed form does nothing.
    pub fn reset(&self) {
        if let Some(initial) = self.initial.try_get_value() {
            self.values.try_set(initial);
        }
    }
}
