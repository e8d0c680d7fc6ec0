//! GraphQL transport over HTTP with per-request auth and a normalized cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every operation is POSTed to one endpoint. The `Authorization` header is
//! recomputed from the token store on each request, so a login or logout
//! takes effect on the very next call without rebuilding the client.
//!
//! Browser builds send requests with `gloo-net`; other builds return
//! `ClientError::Unavailable` so pages and tests can link against the same
//! API.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::cache::{CacheUpdate, NormalizedCache};
use super::error::{ClientError, GraphqlError};
use super::operations::Operation;
use crate::config::ClientConfig;
use crate::util::token_store::SharedTokenStore;

/// JSON body of a GraphQL HTTP request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest<'a> {
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: Value,
}

impl<'a> GraphqlRequest<'a> {
    pub fn new(operation: &'a Operation, variables: Value) -> Self {
        Self {
            operation_name: operation.name,
            query: operation.document,
            variables,
        }
    }
}

/// JSON body of a GraphQL HTTP response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// `Authorization` header value for an optional token.
pub fn authorization_header(token: Option<&str>) -> String {
    match token {
        Some(token) if !token.is_empty() => format!("Bearer {token}"),
        _ => String::new(),
    }
}

/// Map an HTTP status and body to the operation's `data` or an error.
///
/// GraphQL errors win over the HTTP status: servers report validation
/// failures with either 200 or 400.
///
/// # Errors
///
/// Returns `GraphQl` when the body lists errors, `Status` for other non-2xx
/// responses, and `Decode` when the body is not a GraphQL response.
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ClientError> {
    let parsed = serde_json::from_str::<GraphqlResponse>(body);
    let ok = (200..300).contains(&status);
    match parsed {
        Ok(response) if !response.errors.is_empty() => Err(ClientError::GraphQl(response.errors)),
        _ if !ok => Err(ClientError::Status(status)),
        Ok(GraphqlResponse { data: Some(data), .. }) if !data.is_null() => Ok(data),
        Ok(_) => Err(ClientError::Decode("response has no data".to_owned())),
        Err(e) => Err(ClientError::Decode(e.to_string())),
    }
}

/// Shared GraphQL client provided through Leptos context.
#[derive(Clone)]
pub struct GraphqlClient {
    config: Arc<ClientConfig>,
    store: SharedTokenStore,
    cache: RwSignal<NormalizedCache>,
}

impl GraphqlClient {
    pub fn new(config: ClientConfig, store: SharedTokenStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
            cache: RwSignal::new(NormalizedCache::new()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.graphql_endpoint
    }

    /// Reactive cache; views read query results from here.
    pub fn cache(&self) -> RwSignal<NormalizedCache> {
        self.cache
    }

    /// Header value for the next request, read fresh from the token store.
    pub fn authorization(&self) -> String {
        authorization_header(self.store.get().as_deref())
    }

    /// Run a query and record its result in the cache.
    ///
    /// # Errors
    ///
    /// Returns the transport or GraphQL error; the cache is left untouched.
    pub async fn query(&self, operation: &Operation, variables: Value) -> Result<Value, ClientError> {
        let data = self.send(operation, variables).await?;
        self.cache.update(|cache| cache.write_query(&data));
        Ok(data)
    }

    /// Run a mutation, merge its entities into the cache, then apply
    /// `update` in the same cache write.
    ///
    /// # Errors
    ///
    /// Returns the transport or GraphQL error; the cache is left untouched.
    pub async fn mutate(
        &self,
        operation: &Operation,
        variables: Value,
        update: Option<CacheUpdate>,
    ) -> Result<Value, ClientError> {
        let data = self.send(operation, variables).await?;
        self.cache
            .update(|cache| *cache = std::mem::take(cache).apply_mutation(&data, update));
        Ok(data)
    }

    async fn send(&self, operation: &Operation, variables: Value) -> Result<Value, ClientError> {
        let request = GraphqlRequest::new(operation, variables);
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::post(self.endpoint())
                .header("Authorization", &self.authorization())
                .json(&request)
                .map_err(|e| ClientError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            let result = interpret_response(status, &body);
            if let Err(e) = &result {
                leptos::logging::warn!("{} failed: {e}", request.operation_name);
            }
            result
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ClientError::Unavailable)
        }
    }
}
