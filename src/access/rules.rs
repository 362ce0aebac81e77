use reservapp_auth::Role;

use super::RouteTableError;
use super::pattern::RoutePattern;

/// Where a matching rule sends an authorized user instead of serving the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleRedirect {
    /// The landing route of the user's own role.
    RoleLanding,
    /// A fixed path.
    Path(String),
}

/// One entry of the protected route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub pattern: RoutePattern,
    /// Roles allowed through. Empty means any authenticated role.
    pub roles: Vec<Role>,
    pub requires_auth: bool,
    pub is_public: bool,
    pub redirect: Option<RuleRedirect>,
}

impl RouteRule {
    /// A rule requiring a session whose role is one of `roles`.
    pub fn protected(pattern: &str, roles: &[Role]) -> Result<Self, RouteTableError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            roles: roles.to_vec(),
            requires_auth: true,
            is_public: false,
            redirect: None,
        })
    }

    /// A rule requiring any live session.
    pub fn authenticated(pattern: &str) -> Result<Self, RouteTableError> {
        Self::protected(pattern, &[])
    }

    pub fn redirect_to_landing(mut self) -> Self {
        self.redirect = Some(RuleRedirect::RoleLanding);
        self
    }

    pub fn redirect_to(mut self, path: &str) -> Result<Self, RouteTableError> {
        if !path.starts_with('/') {
            return Err(RouteTableError::InvalidRedirect(path.to_string()));
        }
        self.redirect = Some(RuleRedirect::Path(path.to_string()));
        Ok(self)
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }

    /// Whether `role` may pass this rule's role check.
    pub fn admits(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }

    /// Rules that skip the session checks entirely.
    pub fn is_open(&self) -> bool {
        self.is_public || !self.requires_auth
    }
}
