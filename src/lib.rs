//! # ReservApp Gate
//!
//! Role-based route authorization for the ReservApp web frontend, served as
//! an axum middleware in front of the page routes.
//!
//! ## Overview
//!
//! Every intercepted request goes through the same pipeline:
//!
//! ```text
//! request ─► token lookup ─► TokenCodec ─► RouteGuard ─► continue
//!            (header/cookie)  (identity)   (tables)     or redirect / 401
//! ```
//!
//! - **Token Codec** ([`reservapp_auth::TokenCodec`]): reads the session
//!   token payload and the role it carries
//! - **Route Classifier** ([`access::RouteTables`]): public, auth-only and
//!   protected route tables
//! - **Decision Engine** ([`access::RouteGuard`]): the ordered allow/deny
//!   procedure
//! - **Redirect Resolver** ([`access::landing_route`]): role landing pages
//! - **Request Interceptor** ([`middleware::gate::route_gate`]): the axum
//!   boundary
//!
//! ## Roles
//!
//! | Role | Landing route |
//! |------|---------------|
//! | ADMIN | `/dashboard/admin` |
//! | PROVIDER | `/dashboard/provider` |
//! | CUSTOMER | `/dashboard/customer` |
//!
//! ## Environment Variables
//!
//! ```bash
//! GATE_BIND_ADDR=0.0.0.0:3000
//! GATE_AUTH_COOKIE=authToken
//! GATE_LEGACY_COOKIE=token
//! GATE_JWT_SECRET=            # optional; enables HS256 verification
//! ALLOWED_ORIGINS=http://localhost:3000
//! OBSERVABILITY_ENABLED=true
//! METRICS_BIND_ADDR=0.0.0.0:9090
//! LOG_LEVEL=info
//! LOG_DIR=                    # optional; daily rolling JSON logs
//! ```
//!
//! ## Modules
//!
//! - [`access`]: Route tables, decisions and the guard
//! - [`cli`]: Command-line interface
//! - [`middleware`]: Request interception
//! - [`pages`]: Placeholder page handlers
//! - [`router`]: Main application router
//! - [`state`]: Shared application state

pub mod access;
pub mod cli;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use reservapp_auth;
pub use reservapp_config;
pub use reservapp_core;
pub use reservapp_observability;
