use fdns_sqlite_application::ports::RecordStore;
use fdns_sqlite_domain::config::DatabaseConfig;
use fdns_sqlite_domain::DomainError;
use fdns_sqlite_infrastructure::database::create_store_pool;
use fdns_sqlite_infrastructure::repositories::SqliteRecordRepository;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

pub async fn init_store(
    path: &Path,
    cfg: &DatabaseConfig,
) -> anyhow::Result<Arc<SqliteRecordRepository>> {
    info!("Initializing store: {}", path.display());

    let pool = create_store_pool(path, cfg).await.map_err(|e| {
        error!("Failed to open store: {}", e);
        DomainError::StoreOpen(format!("{}: {}", path.display(), e))
    })?;

    let repository = SqliteRecordRepository::new(pool);
    repository.declare_schema().await?;

    info!(
        synchronous = ?cfg.synchronous,
        cache_size_kib = cfg.cache_size_kib,
        "Store initialized"
    );

    Ok(Arc::new(repository))
}
