use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Keeps the background log writer alive. Drop it last, at shutdown.
#[must_use]
pub struct LogGuard(Option<WorkerGuard>);

/// Installs the global subscriber.
///
/// - Console: compact format, filtered by `RUST_LOG` (default level from
///   `LOG_LEVEL`, `info` when unset)
/// - File: daily rolling JSON logs under `LOG_DIR`, only when that is set
///
/// Calling this twice leaves the first subscriber in place.
pub fn init_tracing() -> LogGuard {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "reservapp_gate={0},reservapp_auth={0},reservapp_observability={0},tower_http=warn,hyper=warn",
            log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let (json_layer, guard) = match std::env::var("LOG_DIR") {
        Ok(dir) if !dir.is_empty() => match RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("reservapp-gate")
            .filename_suffix("json")
            .build(&dir)
        {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info"));
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Failed to open log directory {}: {}. File logging disabled.", dir, e);
                (None, None)
            }
        },
        _ => (None, None),
    };

    let file_logging = json_layer.is_some();
    if tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .is_ok()
    {
        info!(file_logging, "Tracing initialized");
    }

    LogGuard(guard)
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    match status {
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Server error"
        ),
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Client error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Request completed"
        ),
    }

    response
}
