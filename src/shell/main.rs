use std::sync::Arc;

use bank_accounts::shared::infrastructure::event_store::EventStore;
use bank_accounts::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use bank_accounts::shared::infrastructure::event_store::postgres::PostgresEventStore;
use bank_accounts::shell::{config::AppConfig, http::router, state::AppState};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let event_store: Arc<dyn EventStore> = match &config.database_url {
        Some(database_url) => {
            let store = PostgresEventStore::connect(database_url).await?;
            store.bootstrap().await?;
            info!("event store: postgres");
            Arc::new(store)
        }
        None => {
            info!("event store: in memory, events are lost on exit");
            Arc::new(InMemoryEventStore::new())
        }
    };
    let app = router(AppState::new(event_store)).layer(TraceLayer::new_for_http());

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                warn!(%error, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("ctrl-c received, shutting down"),
        () = terminate => info!("SIGTERM received, shutting down"),
    }
}
