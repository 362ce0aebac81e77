//! ReservApp Observability Module
//!
//! Provides:
//! - Console and rolling-file logging via `tracing`
//! - HTTP request/response logging middleware
//! - Prometheus metrics, including per-decision counters for the route gate
//!
//! Observability can be switched off at runtime with `OBSERVABILITY_ENABLED=false`;
//! logging stays on, metrics recording becomes a no-op.
//!
//! # Examples
//!
//! ```no_run
//! use reservapp_observability::{init_tracing, init_metrics};
//!
//! #[tokio::main]
//! async fn main() {
//!     let _guard = init_tracing();
//!     let _metrics = init_metrics();
//!     // ... application code ...
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{LogGuard, init_tracing, logging_middleware};
pub use metrics::{
    PrometheusHandle, init_metrics, is_observability_enabled, metrics_app, metrics_middleware,
    track_gate_decision,
};
