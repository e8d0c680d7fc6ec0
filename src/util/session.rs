//! Session token (JWT) claim decoding.
//!
//! TRUST BOUNDARY
//! ==============
//! The signature segment is never verified here. A syntactically valid token
//! is treated as authentic; the server rejects forged or expired tokens on
//! the next request. Only `exp` is inspected client-side.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Identity and expiry claims carried in the token's middle segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Expiry in seconds since the Unix epoch.
    pub exp: i64,
    /// Issued-at in seconds since the Unix epoch.
    #[serde(default)]
    pub iat: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("token has {0} segments, expected 3")]
    Segments(usize),
    #[error("claims segment is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("claims segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the claims segment of `token` without checking its signature.
///
/// # Errors
///
/// Returns an error if the token does not have exactly three segments or the
/// claims segment is not base64url-encoded JSON with the expected fields.
pub fn decode_claims(token: &str) -> Result<Claims, SessionError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(SessionError::Segments(segments.len()));
    }
    let raw = URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    Ok(serde_json::from_slice(&raw)?)
}

/// Whether `claims` expired strictly before `now_ms`.
pub fn is_expired(claims: &Claims, now_ms: i64) -> bool {
    claims.exp.saturating_mul(1000) < now_ms
}
