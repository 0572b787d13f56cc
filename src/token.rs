//! Compact token payload decoding
//!
//! Only the payload segment is inspected. The signature is never checked on
//! the client: the backend re-validates the token on every API call, so the
//! client only needs the `exp` claim to decide whether a session is stale.

use base64::{engine::general_purpose, Engine as _};
use serde_json::Value;

use crate::error::TokenError;

/// Claims read from a token payload
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    /// Expiry, Unix seconds
    pub exp: f64,
    pub sub: Option<String>,
    pub role: Option<String>,
}

impl TokenClaims {
    /// True iff the expiry lies strictly after `now` (Unix seconds)
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.exp > now as f64
    }
}

/// Decode the claims carried by the payload (second) segment of `token`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    let bytes = decode_segment(payload)?;

    let value: Value = serde_json::from_slice(&bytes)?;
    let object = value.as_object().ok_or(TokenError::NotAnObject)?;

    let exp = object
        .get("exp")
        .and_then(Value::as_f64)
        .ok_or(TokenError::MissingExpiry)?;

    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);

    Ok(TokenClaims {
        exp,
        sub: text("sub"),
        role: text("role"),
    })
}

// Accepts both alphabets, with or without padding.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let trimmed = segment.trim_end_matches('=');
    general_purpose::URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(trimmed))
}
