//! The closed set of ReservApp roles.
//!
//! Role strings arrive in several spellings (`ADMIN`, `admin`, `ROLE_ADMIN`).
//! [`Role::parse`] is the single place they are normalized; everything past
//! the token codec compares the typed enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal prefix the backend puts on authority names.
pub const AUTHORITY_PREFIX: &str = "ROLE_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Provider,
    Customer,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Provider, Role::Customer];

    /// Parses a role claim, ignoring case, surrounding whitespace and the
    /// `ROLE_` authority prefix.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let name = match trimmed.get(..AUTHORITY_PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(AUTHORITY_PREFIX) => {
                &trimmed[AUTHORITY_PREFIX.len()..]
            }
            _ => trimmed,
        };

        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name))
    }

    /// Parses a comma-separated authority list and returns the first entry
    /// naming a known role.
    pub fn parse_authorities(raw: &str) -> Option<Self> {
        raw.split(',').find_map(Self::parse)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Provider => "PROVIDER",
            Role::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseRoleError(s.to_string()))
    }
}
