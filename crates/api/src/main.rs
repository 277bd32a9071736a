//! API server entry point.

use api::config::Config;
use guest_store::{GuestlistStore, InMemoryGuestStore, PostgresGuestStore};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Builds the application around `store` and serves it until shutdown.
async fn serve<S: GuestlistStore + 'static>(config: &Config, store: S, metrics: PrometheusHandle) {
    let state = api::create_default_state(store);
    let app = api::create_app(state, metrics);

    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}

#[tokio::main]
async fn main() {
    // 1. Load configuration
    let config = Config::from_env().expect("invalid configuration");

    // 2. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 3. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 4. Open the store, seed tables and serve
    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(url)
                .await
                .expect("failed to connect to database");
            let store = PostgresGuestStore::new(pool);
            store.run_migrations().await.expect("migrations failed");
            for table in &config.tables {
                store
                    .seed_table(*table)
                    .await
                    .expect("failed to seed table");
            }
            tracing::info!(seeded = config.tables.len(), "using PostgreSQL store");

            serve(&config, store, metrics_handle).await;
        }
        None => {
            let store = InMemoryGuestStore::with_tables(config.tables.iter().copied());
            tracing::warn!(
                seeded = config.tables.len(),
                "DATABASE_URL not set, using in-memory store"
            );

            serve(&config, store, metrics_handle).await;
        }
    }
}
