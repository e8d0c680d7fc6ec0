//! GraphQL schema DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names follow the server schema (camelCase) so cached JSON can be
//! deserialized directly. Unknown fields such as `__typename` are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::session::Claims;

/// An authenticated user as returned by `login`/`register` or restored from
/// a stored session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Account creation timestamp; absent when restored from token claims.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Raw session token backing this identity.
    #[serde(default)]
    pub token: String,
}

impl User {
    /// Identity seeded from decoded claims and the raw stored token.
    pub fn from_claims(claims: Claims, token: &str) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            email: claims.email,
            created_at: None,
            token: token.to_owned(),
        }
    }
}

/// A like on a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub username: String,
    /// Missing when only returned by `likePost`, which selects `id`/`username`.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub username: String,
    pub created_at: String,
}

/// A post with its likes and comments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub body: String,
    pub created_at: String,
    pub username: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub comment_count: u32,
}
