use chrono::Utc;
use reservapp_auth::TokenCodec;

use super::decision::{Decision, DenyReason, MiddlewareContext};
use super::redirect::{LOGIN_ROUTE, UNAUTHORIZED_ROUTE, landing_route};
use super::rules::RuleRedirect;
use super::tables::RouteTables;

/// Evaluates requests against the route tables.
///
/// Holds no per-request state; one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    tables: RouteTables,
    codec: TokenCodec,
}

impl RouteGuard {
    pub fn new(tables: RouteTables, codec: TokenCodec) -> Self {
        Self { tables, codec }
    }

    pub fn tables(&self) -> &RouteTables {
        &self.tables
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Builds the request context, decoding the identity once.
    ///
    /// One trailing slash is dropped from `pathname` so `/dashboard/` is
    /// classified like `/dashboard`, matching the interception matchers.
    pub fn context(&self, pathname: &str, token: Option<&str>) -> MiddlewareContext {
        let token = token.filter(|t| !t.is_empty());
        let pathname = match pathname.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => pathname,
        };
        MiddlewareContext {
            pathname: pathname.to_string(),
            identity: token.and_then(|t| self.codec.extract_identity(t)),
            token: token.map(str::to_string),
        }
    }

    /// Decides whether the request in `ctx` may proceed. `now` is seconds
    /// since the epoch.
    pub fn check(&self, ctx: &MiddlewareContext, now: i64) -> Decision {
        let path = ctx.pathname.as_str();
        let token = ctx.token.as_deref();
        let expired = |t: &str| self.codec.is_expired(t, now);

        if self.tables.is_public(path) {
            return Decision::allow();
        }

        if self.tables.is_auth_route(path) {
            return match (token, &ctx.identity) {
                (Some(t), Some(identity)) if !expired(t) => {
                    Decision::deny(landing_route(identity.role), DenyReason::Unauthorized)
                }
                _ => Decision::allow(),
            };
        }

        if let Some(rule) = self.tables.find_protected_rule(path) {
            if rule.is_open() {
                return Decision::allow();
            }

            let Some(token) = token else {
                return Decision::deny(LOGIN_ROUTE, DenyReason::Unauthorized);
            };
            if expired(token) {
                return Decision::deny(LOGIN_ROUTE, DenyReason::TokenExpired);
            }
            let Some(identity) = &ctx.identity else {
                return Decision::deny(LOGIN_ROUTE, DenyReason::Unauthorized);
            };
            if !rule.admits(identity.role) {
                return Decision::deny(UNAUTHORIZED_ROUTE, DenyReason::InvalidRole);
            }

            return match &rule.redirect {
                Some(RuleRedirect::RoleLanding) => {
                    Decision::deny(landing_route(identity.role), DenyReason::Unauthorized)
                }
                Some(RuleRedirect::Path(target)) => {
                    Decision::deny(target.as_str(), DenyReason::Unauthorized)
                }
                None => Decision::allow(),
            };
        }

        match token {
            None => Decision::deny(LOGIN_ROUTE, DenyReason::Unauthorized),
            Some(t) if expired(t) => Decision::deny(LOGIN_ROUTE, DenyReason::TokenExpired),
            Some(_) => Decision::allow(),
        }
    }

    /// [`RouteGuard::check`] against the current wall clock.
    pub fn check_now(&self, ctx: &MiddlewareContext) -> Decision {
        self.check(ctx, Utc::now().timestamp())
    }
}
