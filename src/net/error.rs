//! GraphQL error payloads and the client error type.
//!
//! ERROR HANDLING
//! ==============
//! Field-level validation errors arrive as
//! `errors[0].extensions.exception.errors`, a map from field name to message.
//! Forms render that map as a list. Errors without such a map (transport
//! failures, auth errors) collapse to a single `general` entry so they still
//! show up in the same list.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::Deserialize;

/// Field name to message, as rendered under a form.
pub type FieldErrors = BTreeMap<String, String>;

/// Key used when an error is not tied to a form field.
pub const GENERAL_ERROR_KEY: &str = "general";

/// One entry of a GraphQL response's `errors` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub exception: Option<ErrorException>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorException {
    #[serde(default)]
    pub errors: FieldErrors,
}

impl GraphqlError {
    /// Server-reported field errors, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.extensions
            .as_ref()?
            .exception
            .as_ref()
            .map(|e| &e.errors)
            .filter(|errors| !errors.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("{}", .0.first().map_or("unknown GraphQL error", |e| e.message.as_str()))]
    GraphQl(Vec<GraphqlError>),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ClientError {
    /// Message of the first GraphQL error, or the error's display text.
    pub fn first_message(&self) -> String {
        match self {
            Self::GraphQl(errors) => errors
                .first()
                .map_or_else(|| self.to_string(), |e| e.message.clone()),
            other => other.to_string(),
        }
    }

    /// Errors keyed by form field, taken from the first GraphQL error.
    ///
    /// Falls back to `{"general": first_message}` when no field map exists.
    pub fn field_errors(&self) -> FieldErrors {
        if let Self::GraphQl(errors) = self {
            if let Some(fields) = errors.first().and_then(GraphqlError::field_errors) {
                return fields.clone();
            }
        }
        FieldErrors::from([(GENERAL_ERROR_KEY.to_owned(), self.first_message())])
    }
}
