//! Payload carried in the middle segment of a session token.
//!
//! The backend issues tokens with `sub`, `role`, `exp` and `iat`; older
//! tokens carry `userId` instead of `sub`. Unknown claims are preserved in
//! [`TokenPayload::extra`] so a decode/encode round trip is lossless.
//!
//! Known claims are read leniently: a claim of an unexpected JSON type is
//! dropped (or converted, for numeric ids) instead of failing the whole
//! payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject claim (user id or email, depending on the issuer)
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub: Option<String>,
    /// Legacy subject claim
    #[serde(
        default,
        rename = "userId",
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    /// Role or comma-separated authority list, e.g. `ROLE_ADMIN`. A JSON
    /// array of authorities is joined into the same comma form.
    #[serde(
        default,
        deserialize_with = "deserialize_authorities",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
    /// Expiration time (seconds since the Unix epoch)
    #[serde(
        default,
        deserialize_with = "deserialize_numeric_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub exp: Option<i64>,
    /// Issued-at time (seconds since the Unix epoch)
    #[serde(
        default,
        deserialize_with = "deserialize_numeric_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub iat: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenPayload {
    /// Subject with the legacy `userId` claim as fallback. Empty values are
    /// skipped.
    pub fn subject(&self) -> Option<&str> {
        self.sub
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.user_id.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Strings as-is, numbers in their decimal form, anything else `None`.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_string(Value::deserialize(deserializer)?))
}

fn deserialize_authorities<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            let joined: Vec<String> = items.into_iter().filter_map(scalar_string).collect();
            Ok((!joined.is_empty()).then(|| joined.join(",")))
        }
        other => Ok(scalar_string(other)),
    }
}

fn scalar_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// NumericDate from a JSON number (fractions truncated) or a numeric string.
/// Any other shape reads as absent.
fn deserialize_numeric_date<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let date = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(date)
}
