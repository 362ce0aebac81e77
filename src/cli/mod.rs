use clap::{Parser, Subcommand};
use reservapp_auth::{Permission, TokenCodec};
use serde::Serialize;

use crate::access::{Decision, MiddlewareContext, RouteGuard, RouteTables};
use crate::middleware::matchers::InterceptMatchers;

#[derive(Parser, Debug)]
#[command(name = "reservapp-gate")]
#[command(about = "Role-based route gate for the ReservApp web frontend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the gate server (default)
    Serve,
    /// Evaluate one path and token offline and print the decision as JSON
    Check {
        /// Request path, e.g. /dashboard/admin
        #[arg(short = 'p', long)]
        path: String,

        /// Session token; omit to evaluate an anonymous request
        #[arg(short = 't', long)]
        token: Option<String>,

        /// Clock override in seconds since the epoch
        #[arg(long)]
        now: Option<i64>,

        /// HS256 secret; overrides GATE_JWT_SECRET
        #[arg(long)]
        secret: Option<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub path: String,
    pub intercepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Grants of the token's role; empty without an identity.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<&'static str>,
    pub decision: Decision,
}

/// Runs the `check` subcommand against the default tables.
pub fn run_check(
    path: &str,
    token: Option<&str>,
    now: Option<i64>,
    secret: Option<&str>,
) -> anyhow::Result<CheckReport> {
    let guard = RouteGuard::new(RouteTables::reservapp()?, TokenCodec::from_secret(secret));
    let matchers = InterceptMatchers::reservapp()?;

    let ctx: MiddlewareContext = guard.context(path, token);
    let decision = match now {
        Some(now) => guard.check(&ctx, now),
        None => guard.check_now(&ctx),
    };

    let role = ctx.identity.map(|identity| identity.role);
    let permissions = role
        .map(|role| role.permissions().iter().map(Permission::as_str).collect())
        .unwrap_or_default();

    Ok(CheckReport {
        path: path.to_string(),
        intercepted: matchers.should_intercept(path),
        role: role.map(|role| role.to_string()),
        permissions,
        decision,
    })
}
