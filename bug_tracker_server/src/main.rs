//! Bug tracker server: one in-memory store, served over HTTP until Ctrl-C / SIGTERM.
//!
//! Run from repo root: `cargo run -p bug_tracker_server`

use bug_tracker::{app, AppState, BugStore, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bug_tracker=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::load()?;
    let state = AppState::new(BugStore::new(), config.update_policy);
    let router = app(state.clone(), &config);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(
        update_policy = ?config.update_policy,
        "Bug tracker listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let remaining = state.store.read().map(|s| s.len()).unwrap_or(0);
    tracing::info!(discarded = remaining, "shut down; in-memory bugs discarded");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
