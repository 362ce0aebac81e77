use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use reservapp_observability::{logging_middleware, metrics_middleware};
use tower_http::cors::CorsLayer;

use crate::middleware::gate::route_gate;
use crate::pages::{health, not_found, page};
use crate::state::AppState;

const PAGE_ROUTES: &[&str] = &[
    "/",
    "/about",
    "/contact",
    "/unauthorized",
    "/login",
    "/register",
    "/dashboard",
    "/dashboard/{*rest}",
    "/profile",
    "/settings",
    "/api/protected/{*rest}",
];

pub fn init_router(state: AppState) -> Router {
    let pages = PAGE_ROUTES
        .iter()
        .fold(Router::<AppState>::new(), |router, path| router.route(path, get(page)));

    Router::new()
        .route("/health", get(health))
        .merge(pages)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), route_gate))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
