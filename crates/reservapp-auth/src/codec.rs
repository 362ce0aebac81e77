//! Session token decoding.
//!
//! Tokens are compact JWS strings: `header.payload.signature`, each segment
//! base64url encoded. The gate only needs the payload, so decoding is a pure
//! parse: split, base64url-decode the middle segment, read it as JSON.
//!
//! Every failure (wrong segment count, bad base64, bad JSON, bad signature
//! when verification is on) collapses into `None`. Callers treat a malformed
//! token exactly like a missing one, and [`TokenCodec::is_expired`] treats it
//! as expired.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use crate::claims::TokenPayload;
use crate::identity::Identity;
use crate::role::Role;

const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Whether token signatures are checked before the payload is trusted.
#[derive(Clone)]
pub enum SignaturePolicy {
    /// Read the payload without checking the signature.
    Unverified,
    /// Require a valid HS256 signature under the shared secret.
    Hs256(DecodingKey),
}

impl std::fmt::Debug for SignaturePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignaturePolicy::Unverified => f.write_str("Unverified"),
            SignaturePolicy::Hs256(_) => f.write_str("Hs256(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenCodec {
    policy: SignaturePolicy,
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::unverified()
    }
}

impl TokenCodec {
    pub fn unverified() -> Self {
        Self {
            policy: SignaturePolicy::Unverified,
        }
    }

    pub fn verified(secret: &str) -> Self {
        Self {
            policy: SignaturePolicy::Hs256(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    /// Verifying codec when a secret is configured, unverified otherwise.
    pub fn from_secret(secret: Option<&str>) -> Self {
        match secret {
            Some(secret) => Self::verified(secret),
            None => Self::unverified(),
        }
    }

    pub fn policy(&self) -> &SignaturePolicy {
        &self.policy
    }

    /// Decodes the payload segment. Returns `None` for any malformed token.
    pub fn decode(&self, token: &str) -> Option<TokenPayload> {
        match &self.policy {
            SignaturePolicy::Unverified => decode_payload(token),
            SignaturePolicy::Hs256(key) => decode_verified(token, key),
        }
    }

    /// Expired when `exp <= now`, or when the token has no readable `exp`.
    pub fn is_expired(&self, token: &str, now: i64) -> bool {
        match self.decode(token).and_then(|payload| payload.exp) {
            Some(exp) => exp <= now,
            None => true,
        }
    }

    /// [`TokenCodec::is_expired`] against the current wall clock.
    pub fn is_expired_now(&self, token: &str) -> bool {
        self.is_expired(token, Utc::now().timestamp())
    }

    /// Maps the payload to an [`Identity`]. `None` when the role claim is
    /// missing or names no known role.
    pub fn extract_identity(&self, token: &str) -> Option<Identity> {
        let payload = self.decode(token)?;
        let role = payload.role.as_deref().and_then(Role::parse_authorities)?;

        Some(Identity {
            id: payload.subject().unwrap_or_default().to_string(),
            email: payload.email.unwrap_or_default(),
            role,
        })
    }
}

fn decode_payload(token: &str) -> Option<TokenPayload> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        debug!("token rejected: expected three segments");
        return None;
    };

    // Tolerate the standard alphabet as well as the url-safe one.
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    let bytes = match SEGMENT_ENGINE.decode(normalized.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "token rejected: payload is not base64url");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(payload) => Some(payload),
        Err(e) => {
            debug!(error = %e, "token rejected: payload is not a JSON claims object");
            None
        }
    }
}

fn decode_verified(token: &str, key: &DecodingKey) -> Option<TokenPayload> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is judged by the gate with its own clock and `exp <= now` rule.
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match decode::<TokenPayload>(token, key, &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            debug!(error = %e, "token rejected: signature verification failed");
            None
        }
    }
}

/// Encodes a payload as an unsigned (`alg: none`) compact token.
///
/// Produces `header.payload.` with an empty signature segment; the gate's
/// unverified codec reads it back unchanged.
pub fn encode_unsigned(payload: &TokenPayload) -> String {
    let header = SEGMENT_ENGINE.encode(br#"{"alg":"none","typ":"JWT"}"#);
    // Serializing a plain struct of strings, integers and a JSON map cannot fail.
    let body = serde_json::to_vec(payload).unwrap_or_default();
    format!("{}.{}.", header, SEGMENT_ENGINE.encode(body))
}
