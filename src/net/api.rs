//! Typed operations on top of `GraphqlClient`.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; pages decide whether an
//! error is shown (login, register, post creation) or only logged (likes).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::cache::prepend_created_post;
use super::error::ClientError;
use super::graphql::GraphqlClient;
use super::operations::{CREATE_POST, FETCH_POSTS, LIKE_POST, LOGIN_USER, Operation, REGISTER_USER};
use super::types::{Post, User};
use crate::state::forms::{LoginField, PostField, RegisterField};
use crate::util::form::FormValues;

fn login_variables(values: &FormValues<LoginField>) -> Value {
    values.to_json()
}

fn register_variables(values: &FormValues<RegisterField>) -> Value {
    values.to_json()
}

fn create_post_variables(values: &FormValues<PostField>) -> Value {
    values.to_json()
}

fn like_post_variables(post_id: &str) -> Value {
    serde_json::json!({ "postId": post_id })
}

/// Pull `operation.root_field` out of `data` and deserialize it.
fn take_root<T: DeserializeOwned>(mut data: Value, operation: &Operation) -> Result<T, ClientError> {
    let field = data
        .get_mut(operation.root_field)
        .map(Value::take)
        .ok_or_else(|| ClientError::Decode(format!("missing `{}` in response", operation.root_field)))?;
    serde_json::from_value(field).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Fetch the feed and store it in the cache.
///
/// # Errors
///
/// Returns an error if the request fails or the result cannot be decoded.
pub async fn fetch_posts(client: &GraphqlClient) -> Result<Vec<Post>, ClientError> {
    let data = client.query(&FETCH_POSTS, Value::Object(serde_json::Map::new())).await?;
    take_root(data, &FETCH_POSTS)
}

/// Posts currently cached for the feed (tracked), or `None` before the first
/// fetch completes.
pub fn cached_posts(client: &GraphqlClient) -> Option<Vec<Post>> {
    let listing = client.cache().with(|cache| cache.read_root(FETCH_POSTS.root_field))?;
    match serde_json::from_value(listing) {
        Ok(posts) => Some(posts),
        Err(e) => {
            leptos::logging::warn!("cached posts unreadable: {e}");
            None
        }
    }
}

/// Log in with a username and password.
///
/// # Errors
///
/// Returns `ClientError::GraphQl` carrying field errors on bad credentials.
pub async fn login_user(client: &GraphqlClient, values: &FormValues<LoginField>) -> Result<User, ClientError> {
    let data = client.mutate(&LOGIN_USER, login_variables(values), None).await?;
    take_root(data, &LOGIN_USER)
}

/// Register a new account.
///
/// # Errors
///
/// Returns `ClientError::GraphQl` carrying field errors on invalid input.
pub async fn register_user(
    client: &GraphqlClient,
    values: &FormValues<RegisterField>,
) -> Result<User, ClientError> {
    let data = client.mutate(&REGISTER_USER, register_variables(values), None).await?;
    take_root(data, &REGISTER_USER)
}

/// Create a post and prepend it to the cached feed.
///
/// # Errors
///
/// Returns an error if the request fails (e.g. empty body or no session).
pub async fn create_post(client: &GraphqlClient, values: &FormValues<PostField>) -> Result<Post, ClientError> {
    let data = client
        .mutate(&CREATE_POST, create_post_variables(values), Some(prepend_created_post))
        .await?;
    take_root(data, &CREATE_POST)
}

/// Toggle the current user's like on a post. The cached post is patched from
/// the result.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn like_post(client: &GraphqlClient, post_id: &str) -> Result<Post, ClientError> {
    let data = client.mutate(&LIKE_POST, like_post_variables(post_id), None).await?;
    let patch: LikeResult = take_root(data, &LIKE_POST)?;
    cached_post(client, &patch.id).ok_or_else(|| ClientError::Decode(format!("post {} not cached", patch.id)))
}

#[derive(serde::Deserialize)]
struct LikeResult {
    id: String,
}

fn cached_post(client: &GraphqlClient, post_id: &str) -> Option<Post> {
    let entity = client.cache().with_untracked(|cache| cache.entity(&format!("Post:{post_id}")))?;
    serde_json::from_value(entity).ok()
}
