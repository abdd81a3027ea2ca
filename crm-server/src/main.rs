use crm_server::config::ServerConfig;
use crm_server::email;
use crm_server::store::SubscriberLog;
use crm_server::subscribe::{subscribe_router, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        tracing::error!("crm-server failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env()?;
    let subscribers = SubscriberLog::open(&config.db_path)
        .map_err(|e| format!("open {}: {e}", config.db_path))?;

    let state = AppState {
        subscribers,
        mailer: Arc::from(email::sender_from_config(config.email.clone())),
    };

    let app = subscribe_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| format!("bind {}: {e}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, email = config.email.is_some(), "crm-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("could not listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
