//! Integration tests for the session guard

mod cli_tests;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    role: &'a str,
    exp: i64,
}

/// Signed token for `role` expiring `offset` seconds from now
pub fn token_expiring_in(role: &str, offset: i64) -> String {
    let claims = Claims {
        sub: "alice",
        role,
        exp: Utc::now().timestamp() + offset,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("Failed to sign token")
}
