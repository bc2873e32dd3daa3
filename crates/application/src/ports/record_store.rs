use async_trait::async_trait;
use fdns_sqlite_domain::{DomainError, FdnsRecord};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Ensure the records table exists. Safe to call more than once.
    async fn declare_schema(&self) -> Result<(), DomainError>;

    /// Insert every record of `batch` as one unit, returning the rows written.
    async fn insert_batch(&self, batch: &[FdnsRecord]) -> Result<u64, DomainError>;

    /// Number of rows currently stored
    async fn row_count(&self) -> Result<u64, DomainError>;
}
