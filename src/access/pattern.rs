use std::fmt;

use super::RouteTableError;

/// Marker that turns a pattern into a prefix match.
pub const WILDCARD: char = '*';

/// A route table pattern.
///
/// `"/a/b"` matches only `"/a/b"`. `"/a/b/*"` matches every path that starts
/// with `"/a/b/"`; the bare `"/a/b"` is not covered by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePattern {
    Exact(String),
    /// Stores the pattern with the wildcard stripped.
    Prefix(String),
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        if raw.is_empty() {
            return Err(RouteTableError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(RouteTableError::NotAbsolute(raw.to_string()));
        }

        match raw.find(WILDCARD) {
            None => Ok(RoutePattern::Exact(raw.to_string())),
            Some(idx) if idx == raw.len() - 1 => Ok(RoutePattern::Prefix(raw[..idx].to_string())),
            Some(_) => Err(RouteTableError::MisplacedWildcard(raw.to_string())),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(exact) => exact == path,
            RoutePattern::Prefix(base) => path.starts_with(base.as_str()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, RoutePattern::Prefix(_))
    }

    /// True when every path this pattern matches is also matched by `other`.
    pub fn is_covered_by(&self, other: &RoutePattern) -> bool {
        match (self, other) {
            (_, RoutePattern::Exact(theirs)) => {
                matches!(self, RoutePattern::Exact(ours) if ours == theirs)
            }
            (RoutePattern::Exact(ours), RoutePattern::Prefix(base)) => ours.starts_with(base.as_str()),
            (RoutePattern::Prefix(ours), RoutePattern::Prefix(base)) => ours.starts_with(base.as_str()),
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutePattern::Exact(exact) => f.write_str(exact),
            RoutePattern::Prefix(base) => write!(f, "{}{}", base, WILDCARD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_and_prefix() {
        assert_eq!(
            RoutePattern::parse("/profile").unwrap(),
            RoutePattern::Exact("/profile".to_string())
        );
        assert_eq!(
            RoutePattern::parse("/dashboard/admin/*").unwrap(),
            RoutePattern::Prefix("/dashboard/admin/".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(RoutePattern::parse(""), Err(RouteTableError::Empty));
        assert_eq!(
            RoutePattern::parse("dashboard"),
            Err(RouteTableError::NotAbsolute("dashboard".to_string()))
        );
        assert_eq!(
            RoutePattern::parse("/a/*/b"),
            Err(RouteTableError::MisplacedWildcard("/a/*/b".to_string()))
        );
        assert_eq!(
            RoutePattern::parse("/a/**"),
            Err(RouteTableError::MisplacedWildcard("/a/**".to_string()))
        );
    }

    #[test]
    fn test_exact_requires_full_equality() {
        let pattern = RoutePattern::parse("/dashboard").unwrap();
        assert!(pattern.matches("/dashboard"));
        assert!(!pattern.matches("/dashboard/"));
        assert!(!pattern.matches("/dashboard/admin"));
        assert!(!pattern.matches("/dash"));
    }

    #[test]
    fn test_prefix_matches_subtree_only() {
        let pattern = RoutePattern::parse("/dashboard/admin/*").unwrap();
        assert!(pattern.matches("/dashboard/admin/"));
        assert!(pattern.matches("/dashboard/admin/reports"));
        assert!(pattern.matches("/dashboard/admin/users/edit"));
        assert!(!pattern.matches("/dashboard/admin"));
        assert!(!pattern.matches("/dashboard/administrator"));
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["/", "/about", "/dashboard/provider/*", "/*"] {
            assert_eq!(RoutePattern::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_is_covered_by() {
        let admin_tree = RoutePattern::parse("/dashboard/admin/*").unwrap();
        let users = RoutePattern::parse("/dashboard/admin/users").unwrap();
        let users_tree = RoutePattern::parse("/dashboard/admin/users/*").unwrap();
        let admin_root = RoutePattern::parse("/dashboard/admin").unwrap();

        assert!(users.is_covered_by(&admin_tree));
        assert!(users_tree.is_covered_by(&admin_tree));
        assert!(!admin_root.is_covered_by(&admin_tree));
        assert!(!admin_tree.is_covered_by(&users_tree));
        assert!(users.is_covered_by(&users));
        assert!(!admin_tree.is_covered_by(&users));
    }
}
