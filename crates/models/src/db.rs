use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Connect with explicit pool settings.
///
/// In-memory SQLite lives inside a single connection, so the pool is pinned
/// to one connection that is never reaped.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    if is_memory_sqlite(&cfg.url) {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }

    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

fn is_memory_sqlite(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.starts_with("sqlite:") && (lower.contains(":memory:") || lower.contains("mode=memory"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, Statement};

    #[test]
    fn memory_sqlite_detection() {
        assert!(is_memory_sqlite("sqlite::memory:"));
        assert!(is_memory_sqlite("sqlite://file:students?mode=memory&cache=shared"));
        assert!(!is_memory_sqlite("sqlite://data/students.db?mode=rwc"));
        assert!(!is_memory_sqlite("postgres://localhost/:memory:"));
    }

    #[tokio::test]
    async fn connects_to_memory_sqlite() -> anyhow::Result<()> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let db = connect_with_config(&cfg).await?;
        assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

        let row = db
            .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test"))
            .await?
            .expect("one row");
        let v: i32 = row.try_get("", "test")?;
        assert_eq!(v, 1);
        Ok(())
    }
}
