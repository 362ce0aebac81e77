//! Placeholder handlers for the frontend pages behind the gate.
//!
//! The real pages are rendered elsewhere; these echo which page was reached
//! so the gate can run and be exercised on its own.

use axum::{Json, http::Uri, response::IntoResponse};
use reservapp_core::AppError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub page: String,
}

pub async fn page(uri: Uri) -> impl IntoResponse {
    Json(PageResponse {
        page: uri.path().to_string(),
    })
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(anyhow::anyhow!("No page at {}", uri.path()))
}
