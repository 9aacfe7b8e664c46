//! Medical Profiles server binary.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use medical_profiles::adapters::http::{build_app, ProfileAppState};
use medical_profiles::adapters::postgres::{
    connect_pool, ensure_schema, PostgresProfileReader, PostgresProfileRepository,
};
use medical_profiles::config::AppConfig;
use medical_profiles::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.server).map_err(|e| anyhow::anyhow!(e))?;

    // Deliberate exit: a missing or malformed connection target stops startup
    // here. Database outages after this point are only logged.
    if let Err(e) = config.validate() {
        tracing::error!("Refusing to start without valid configuration: {}", e);
        return Err(anyhow::Error::new(e).context("Invalid configuration"));
    }

    let display_url = config.profiles.display_url()?;
    let addr = config.server.socket_addr()?;

    let pool = connect_pool(&config.database).context("Invalid database connection settings")?;

    // Schema creation must not hold up startup; an unreachable database
    // only fails individual requests.
    let schema_pool = pool.clone();
    tokio::spawn(async move {
        match ensure_schema(&schema_pool).await {
            Ok(()) => tracing::info!("medical_profiles table verified or created"),
            Err(e) => tracing::error!("Could not prepare medical_profiles table: {}", e),
        }
    });

    let state = ProfileAppState::new(
        Arc::new(PostgresProfileRepository::new(pool.clone())),
        Arc::new(PostgresProfileReader::new(pool.clone())),
        display_url,
    );
    let app = build_app(state, &config.server);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
