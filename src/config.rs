//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so the endpoint and
//! storage key are baked in from the build environment and fall back to the
//! development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// GraphQL endpoint used when none is configured.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:5000";

/// `localStorage` key holding the raw session token.
pub const DEFAULT_TOKEN_KEY: &str = "jwtToken";

/// Endpoint and storage settings shared by the network client and token store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub graphql_endpoint: String,
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load from `POSTWALL_GRAPHQL_ENDPOINT` and `POSTWALL_TOKEN_KEY` as seen
    /// by the compiler.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("POSTWALL_GRAPHQL_ENDPOINT"), option_env!("POSTWALL_TOKEN_KEY"))
    }

    /// Build a config from optional overrides. Blank values use the defaults.
    #[must_use]
    pub fn from_values(endpoint: Option<&str>, token_key: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_owned()
        };
        Self {
            graphql_endpoint: pick(endpoint, DEFAULT_GRAPHQL_ENDPOINT),
            token_key: pick(token_key, DEFAULT_TOKEN_KEY),
        }
    }
}
