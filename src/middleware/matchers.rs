//! Path matchers deciding which requests pass through the gate at all.
//!
//! Patterns use the `path-to-regexp` style familiar from web frameworks:
//! literal segments, `:name` for exactly one non-empty segment, and a final
//! `:name*` for zero or more segments.

use thiserror::Error;

/// Paths under this prefix answer denials with 401 JSON instead of a redirect.
pub const API_PREFIX: &str = "/api/protected";

pub const DEFAULT_MATCHERS: &[&str] = &[
    "/dashboard/:path*",
    "/login",
    "/register",
    "/profile",
    "/settings",
    "/api/protected/:path*",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    #[error("matcher `{0}` must start with `/`")]
    NotAbsolute(String),

    #[error("matcher `{0}` has an unnamed parameter")]
    UnnamedParam(String),

    #[error("matcher `{0}` may only use a `*` parameter as its last segment")]
    MisplacedCatchAll(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
    CatchAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    source: String,
    segments: Vec<Segment>,
}

impl PathMatcher {
    pub fn parse(raw: &str) -> Result<Self, MatcherError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(MatcherError::NotAbsolute(raw.to_string()));
        };

        let parts: Vec<&str> = if rest.is_empty() { Vec::new() } else { rest.split('/').collect() };
        let last = parts.len().saturating_sub(1);

        let mut segments = Vec::with_capacity(parts.len());
        for (idx, part) in parts.iter().enumerate() {
            let segment = match part.strip_prefix(':') {
                None => Segment::Literal(part.to_string()),
                Some(name) => match name.strip_suffix('*') {
                    Some("") => return Err(MatcherError::UnnamedParam(raw.to_string())),
                    Some(_) if idx != last => {
                        return Err(MatcherError::MisplacedCatchAll(raw.to_string()));
                    }
                    Some(_) => Segment::CatchAll,
                    None if name.is_empty() => {
                        return Err(MatcherError::UnnamedParam(raw.to_string()));
                    }
                    None => Segment::Param,
                },
            };
            segments.push(segment);
        }

        Ok(Self {
            source: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// A single trailing slash on `path` is ignored.
    pub fn matches(&self, path: &str) -> bool {
        let Some(rest) = path.strip_prefix('/') else {
            return false;
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        let parts: Vec<&str> = if rest.is_empty() { Vec::new() } else { rest.split('/').collect() };

        let mut parts = parts.into_iter();
        for segment in &self.segments {
            match segment {
                Segment::CatchAll => return parts.all(|part| !part.is_empty()),
                Segment::Param => match parts.next() {
                    Some(part) if !part.is_empty() => {}
                    _ => return false,
                },
                Segment::Literal(literal) => {
                    if parts.next() != Some(literal.as_str()) {
                        return false;
                    }
                }
            }
        }
        parts.next().is_none()
    }
}

/// The set of paths the gate intercepts. Anything else passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptMatchers {
    matchers: Vec<PathMatcher>,
}

impl InterceptMatchers {
    pub fn new(patterns: &[&str]) -> Result<Self, MatcherError> {
        let matchers = patterns
            .iter()
            .map(|raw| PathMatcher::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers })
    }

    pub fn reservapp() -> Result<Self, MatcherError> {
        Self::new(DEFAULT_MATCHERS)
    }

    pub fn should_intercept(&self, path: &str) -> bool {
        self.matchers.iter().any(|matcher| matcher.matches(path))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(PathMatcher::as_str)
    }
}

pub fn is_api_path(path: &str) -> bool {
    path.strip_prefix(API_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
