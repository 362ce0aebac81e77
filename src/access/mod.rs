//! Route authorization: tables, classification, and the protection decision.
//!
//! # Pieces
//!
//! - [`pattern`]: exact and prefix-wildcard route patterns
//! - [`rules`]: [`RouteRule`], one entry of the protected table
//! - [`tables`]: the public, auth-only and protected tables plus the
//!   classifier queries over them
//! - [`redirect`]: role landing routes and the fixed redirect targets
//! - [`decision`]: [`Decision`], [`DenyReason`] and [`MiddlewareContext`]
//! - [`guard`]: [`RouteGuard`], the ordered decision procedure
//!
//! # Decision order
//!
//! 1. Public path: allow.
//! 2. Auth-only path (`/login`, `/register`): a signed-in user is sent to
//!    their landing route; everyone else is allowed.
//! 3. Protected path: the first matching rule (table order) decides. Missing
//!    token, expired token, undecodable identity and role mismatch each
//!    produce their own redirect and reason.
//! 4. Unlisted path: any live session is enough.

use thiserror::Error;

pub mod decision;
pub mod guard;
pub mod pattern;
pub mod redirect;
pub mod rules;
pub mod tables;

pub use decision::{Decision, DenyReason, MiddlewareContext};
pub use guard::RouteGuard;
pub use pattern::RoutePattern;
pub use redirect::{LOGIN_ROUTE, UNAUTHORIZED_ROUTE, landing_route};
pub use rules::{RouteRule, RuleRedirect};
pub use tables::RouteTables;

/// Invalid route table entry. Raised while building tables, never per request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route pattern must not be empty")]
    Empty,

    #[error("route pattern `{0}` must start with `/`")]
    NotAbsolute(String),

    #[error("route pattern `{0}` may only use `*` as its last character")]
    MisplacedWildcard(String),

    #[error("auth route `{0}` must be an exact path")]
    WildcardAuthRoute(String),

    #[error("redirect target `{0}` must start with `/`")]
    InvalidRedirect(String),
}
