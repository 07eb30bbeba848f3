//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::info;

/// Ensure the parent directory of a SQLite database file exists.
///
/// Accepts urls such as `sqlite://data/students.db?mode=rwc`; in-memory
/// databases and urls without a directory component are left alone.
pub async fn ensure_sqlite_dir(url: &str) -> anyhow::Result<()> {
    let Some(dir) = sqlite_parent_dir(url) else { return Ok(()) };
    if tokio::fs::metadata(&dir).await.is_err() {
        info!(data_dir = %dir, "creating data directory");
    }
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {dir}: {e}"))?;
    Ok(())
}

fn sqlite_parent_dir(url: &str) -> Option<String> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    let parent = Path::new(path).parent()?;
    let parent = parent.to_str()?;
    if parent.is_empty() { None } else { Some(parent.to_string()) }
}
