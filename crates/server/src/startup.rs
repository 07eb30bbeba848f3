use std::{future::Future, sync::Arc};

use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use service::{student::repo::seaorm::SeaOrmStudentRepository, StudentRepository};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect to the configured database, apply migrations when enabled, and
/// wire the record service on top of it.
pub async fn build_state(db_cfg: &DatabaseConfig) -> anyhow::Result<AppState> {
    if db_cfg.is_sqlite() {
        common::env::ensure_sqlite_dir(&db_cfg.url)
            .await
            .map_err(|e| StartupError::Runtime(e.to_string()))?;
    }

    let db = models::db::connect_with_config(db_cfg).await?;
    if db_cfg.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Runtime(format!("migration failed: {e}")))?;
        info!(event = "migrated", "database schema up to date");
    }

    let repo: Arc<dyn StudentRepository> = Arc::new(SeaOrmStudentRepository::new(db));
    Ok(AppState::new(repo))
}

/// Build the app and serve it until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg.database).await?;
    let app = routes::build_router(state, build_cors());

    let bind = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {bind}: {e}")))?;
    info!(addr = %listener.local_addr()?, "student records server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server drained");
    Ok(())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}
