use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use reservapp_config::GateConfig;
use reservapp_core::AppError;
use reservapp_observability::track_gate_decision;
use tracing::{debug, info};

use crate::access::{Decision, DenyReason};
use crate::middleware::matchers::is_api_path;
use crate::state::AppState;

const REASON_PARAM: &str = "reason";

/// Middleware placing the route guard in front of every intercepted path.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/dashboard", get(page))
///     .layer(middleware::from_fn_with_state(state.clone(), route_gate));
/// ```
pub async fn route_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if !state.matchers.should_intercept(&path) {
        return next.run(req).await;
    }

    let token = extract_token(req.headers(), &state.gate_config);
    let ctx = state.guard.context(&path, token.as_deref());
    let decision = state.guard.check_now(&ctx);

    let outcome = outcome_label(&decision, &path);
    track_gate_decision(outcome, decision.reason().map_or("none", |r| r.as_str()));

    let (Some(target), Some(reason)) = (decision.redirect_to(), decision.reason()) else {
        debug!(path = %path, role = ?ctx.identity.as_ref().map(|i| i.role), "Request allowed");
        return next.run(req).await;
    };

    if is_api_path(&path) {
        info!(path = %path, reason = %reason, "API request rejected");
        return unauthorized_json(reason);
    }

    let location = redirect_location(target, reason, req.uri().query());
    info!(path = %path, redirect_to = %location, reason = %reason, "Request redirected");
    Redirect::temporary(&location).into_response()
}

/// Reads the session token: `Authorization: Bearer` first, then the
/// configured cookies in order. Empty values are skipped.
pub fn extract_token(headers: &HeaderMap, config: &GateConfig) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    let jar = CookieJar::from_headers(headers);
    config
        .cookie_names()
        .filter_map(|name| jar.get(name))
        .map(|cookie| cookie.value())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// `target?reason=<code>`, keeping the request's other query parameters and
/// dropping a previous `reason`.
pub fn redirect_location(target: &str, reason: DenyReason, query: Option<&str>) -> String {
    let mut params: Vec<&str> = query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(REASON_PARAM))
        .collect();
    let reason_param = format!("{}={}", REASON_PARAM, reason.as_str());
    params.push(&reason_param);

    format!("{}?{}", target, params.join("&"))
}

fn unauthorized_json(reason: DenyReason) -> Response {
    AppError::unauthorized(anyhow!("Unauthorized"))
        .with_reason(reason.as_str())
        .into_response()
}

/// Decision outcome label used in logs and metrics.
pub fn outcome_label(decision: &Decision, path: &str) -> &'static str {
    match (decision.is_allowed(), is_api_path(path)) {
        (true, _) => "allow",
        (false, true) => "reject",
        (false, false) => "redirect",
    }
}
