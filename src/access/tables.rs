//! Static route tables and the classifier queries over them.
//!
//! Precedence contract: when several protected rules could match a path,
//! the earliest rule in table order wins. Later rules that an earlier
//! wildcard fully covers can never fire; [`RouteTables::shadowed_rules`]
//! reports them so they can be logged at startup.

use reservapp_auth::Role;

use super::RouteTableError;
use super::pattern::RoutePattern;
use super::rules::RouteRule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTables {
    public: Vec<RoutePattern>,
    auth: Vec<String>,
    protected: Vec<RouteRule>,
}

/// A protected rule that can never match because an earlier rule covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedRule {
    pub index: usize,
    pub pattern: String,
    pub shadowed_by: String,
}

impl RouteTables {
    pub fn new(
        public: &[&str],
        auth: &[&str],
        protected: Vec<RouteRule>,
    ) -> Result<Self, RouteTableError> {
        let public = public
            .iter()
            .map(|raw| RoutePattern::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let auth = auth
            .iter()
            .map(|raw| match RoutePattern::parse(raw)? {
                RoutePattern::Exact(path) => Ok(path),
                RoutePattern::Prefix(_) => Err(RouteTableError::WildcardAuthRoute(raw.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            public,
            auth,
            protected,
        })
    }

    /// The ReservApp frontend's route tables.
    ///
    /// `/login` and `/register` live only in the auth table so that signed-in
    /// users are bounced to their dashboard instead of seeing the forms again.
    pub fn reservapp() -> Result<Self, RouteTableError> {
        use Role::{Admin, Customer, Provider};
        let everyone = [Admin, Provider, Customer];

        Self::new(
            &["/", "/about", "/contact", "/unauthorized"],
            &["/login", "/register"],
            vec![
                RouteRule::protected("/dashboard/admin", &[Admin])?,
                RouteRule::protected("/dashboard/admin/users", &[Admin])?,
                RouteRule::protected("/dashboard/admin/users/new", &[Admin])?,
                RouteRule::protected("/dashboard/admin/users/edit", &[Admin])?,
                RouteRule::protected("/dashboard/admin/*", &[Admin])?,
                RouteRule::protected("/dashboard/provider", &[Provider])?,
                RouteRule::protected("/dashboard/provider/*", &[Provider])?,
                RouteRule::protected("/dashboard/provider/services", &[Provider])?,
                RouteRule::protected("/dashboard/customer", &[Customer])?,
                RouteRule::protected("/dashboard/customer/*", &[Customer])?,
                RouteRule::protected("/dashboard/customer/reservations", &[Customer])?,
                RouteRule::protected("/dashboard", &everyone)?.redirect_to_landing(),
                RouteRule::protected("/profile", &everyone)?,
            ],
        )
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public.iter().any(|pattern| pattern.matches(path))
    }

    /// Exact match only.
    pub fn is_auth_route(&self, path: &str) -> bool {
        self.auth.iter().any(|route| route == path)
    }

    /// First rule in table order whose pattern matches `path`.
    pub fn find_protected_rule(&self, path: &str) -> Option<&RouteRule> {
        self.protected.iter().find(|rule| rule.matches(path))
    }

    pub fn public_routes(&self) -> &[RoutePattern] {
        &self.public
    }

    pub fn auth_routes(&self) -> &[String] {
        &self.auth
    }

    pub fn protected_rules(&self) -> &[RouteRule] {
        &self.protected
    }

    pub fn shadowed_rules(&self) -> Vec<ShadowedRule> {
        self.protected
            .iter()
            .enumerate()
            .filter_map(|(index, rule)| {
                self.protected[..index]
                    .iter()
                    .find(|earlier| rule.pattern.is_covered_by(&earlier.pattern))
                    .map(|earlier| ShadowedRule {
                        index,
                        pattern: rule.pattern.to_string(),
                        shadowed_by: earlier.pattern.to_string(),
                    })
            })
            .collect()
    }
}
