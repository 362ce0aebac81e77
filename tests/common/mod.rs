use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use reservapp_gate::reservapp_auth::{TokenPayload, encode_unsigned};

#[allow(dead_code)]
pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

#[allow(dead_code)]
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Payload for a user with `role` expiring `exp_offset` seconds from now.
#[allow(dead_code)]
pub fn payload(role: &str, exp_offset: i64) -> TokenPayload {
    TokenPayload {
        sub: Some("42".to_string()),
        email: Some("maria@reservapp.test".to_string()),
        role: Some(role.to_string()),
        exp: Some(now() + exp_offset),
        iat: Some(now()),
        ..Default::default()
    }
}

/// Unsigned token, as read by the default codec.
#[allow(dead_code)]
pub fn unsigned_token(role: &str, exp_offset: i64) -> String {
    encode_unsigned(&payload(role, exp_offset))
}

/// HS256 token signed with `secret`.
#[allow(dead_code)]
pub fn signed_token(role: &str, exp_offset: i64, secret: &str) -> String {
    encode(
        &Header::default(),
        &payload(role, exp_offset),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// HS256 token over arbitrary JSON claims, for payload shapes `TokenPayload`
/// cannot express.
#[allow(dead_code)]
pub fn token_from_claims(claims: &serde_json::Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}
