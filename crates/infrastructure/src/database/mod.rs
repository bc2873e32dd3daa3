use fdns_sqlite_domain::config::{DatabaseConfig, SynchronousMode};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::time::Duration;

/// Open (creating if missing) the store file at `path`.
///
/// The pool holds a single connection: the converter is the only writer and
/// per-connection PRAGMAs below must apply to every statement it runs.
pub async fn create_store_pool(
    path: &Path,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        // Rollback journal keeps the output a single self-contained file
        .journal_mode(SqliteJournalMode::Delete)
        .synchronous(synchronous_mode(cfg.synchronous))
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    // Negative value = size in KiB
    sqlx::query(&format!("PRAGMA cache_size = -{}", cfg.cache_size_kib))
        .execute(&pool)
        .await?;
    // Store temp tables and indices in memory
    sqlx::query("PRAGMA temp_store = MEMORY")
        .execute(&pool)
        .await?;

    Ok(pool)
}

fn synchronous_mode(mode: SynchronousMode) -> SqliteSynchronous {
    match mode {
        SynchronousMode::Off => SqliteSynchronous::Off,
        SynchronousMode::Normal => SqliteSynchronous::Normal,
        SynchronousMode::Full => SqliteSynchronous::Full,
    }
}
