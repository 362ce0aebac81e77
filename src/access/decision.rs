use std::fmt;

use reservapp_auth::Identity;
use serde::Serialize;

/// Why a request was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    Unauthorized,
    /// Reserved; no default rule produces it.
    Forbidden,
    TokenExpired,
    InvalidRole,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::Unauthorized => "unauthorized",
            DenyReason::Forbidden => "forbidden",
            DenyReason::TokenExpired => "token_expired",
            DenyReason::InvalidRole => "invalid_role",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one request.
///
/// A denial always carries both a redirect target and a reason; the fields
/// are private so no other shape can be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<DenyReason>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            redirect_to: None,
            reason: None,
        }
    }

    pub fn deny(redirect_to: impl Into<String>, reason: DenyReason) -> Self {
        Self {
            allowed: false,
            redirect_to: Some(redirect_to.into()),
            reason: Some(reason),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn redirect_to(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }

    pub fn reason(&self) -> Option<DenyReason> {
        self.reason
    }
}

/// Per-request working set handed to the guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiddlewareContext {
    pub pathname: String,
    pub token: Option<String>,
    pub identity: Option<Identity>,
}
