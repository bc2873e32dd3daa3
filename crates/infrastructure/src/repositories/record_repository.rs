use async_trait::async_trait;
use fdns_sqlite_application::ports::RecordStore;
use fdns_sqlite_domain::{DomainError, FdnsRecord};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

const CREATE_RECORDS_TABLE: &str = "CREATE TABLE IF NOT EXISTS records (
    timestamp DATETIME,
    name TEXT,
    type TEXT,
    value TEXT
)";

const INSERT_PREFIX: &str = "INSERT INTO records (timestamp, name, type, value) VALUES ";

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn insert_sql(rows: usize) -> String {
        let mut sql = String::with_capacity(INSERT_PREFIX.len() + rows * 14);
        sql.push_str(INSERT_PREFIX);

        for i in 0..rows {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str("(?, ?, ?, ?)");
        }

        sql
    }
}

#[async_trait]
impl RecordStore for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn declare_schema(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_RECORDS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to create records table");
                DomainError::Schema(e.to_string())
            })?;

        debug!("Records table ready");
        Ok(())
    }

    #[instrument(skip(self, batch), fields(count = batch.len()))]
    async fn insert_batch(&self, batch: &[FdnsRecord]) -> Result<u64, DomainError> {
        let count = batch.len();
        if count == 0 {
            return Ok(0);
        }

        let sql = Self::insert_sql(count);
        let mut query = sqlx::query(&sql);
        for record in batch {
            query = query
                .bind(record.timestamp_text())
                .bind(&record.name)
                .bind(&record.record_type)
                .bind(&record.value);
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, count, "Failed to begin batch transaction");
            DomainError::Insert(e.to_string())
        })?;

        let result = query.execute(&mut *tx).await.map_err(|e| {
            error!(error = %e, count, "Failed to insert record batch");
            DomainError::Insert(e.to_string())
        })?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, count, "Failed to commit record batch");
            DomainError::Insert(e.to_string())
        })?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn row_count(&self) -> Result<u64, DomainError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM records")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count records");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count.0 as u64)
    }
}
