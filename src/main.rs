use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use reservapp_gate::cli::{Cli, Commands, run_check};
use reservapp_gate::reservapp_config::GateConfig;
use reservapp_gate::reservapp_observability::{init_metrics, init_tracing, metrics_app};
use reservapp_gate::router::init_router;
use reservapp_gate::state::init_app_state;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Check {
            path,
            token,
            now,
            secret,
        } => {
            let secret = match secret {
                Some(secret) => Some(secret),
                None => GateConfig::from_env()?.jwt_secret,
            };
            let report = run_check(&path, token.as_deref(), now, secret.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let _log_guard = init_tracing();

    let state = init_app_state()?;
    let bind_addr = state.gate_config.bind_addr;
    let metrics_bind_addr = state.gate_config.metrics_bind_addr;

    if let Some(handle) = init_metrics()? {
        let metrics_listener = tokio::net::TcpListener::bind(metrics_bind_addr)
            .await
            .with_context(|| format!("binding metrics listener on {}", metrics_bind_addr))?;
        info!(addr = %metrics_bind_addr, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding gate listener on {}", bind_addr))?;
    info!(addr = %bind_addr, "Route gate listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Route gate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
