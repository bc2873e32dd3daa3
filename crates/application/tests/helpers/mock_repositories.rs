#![allow(dead_code)]

use async_trait::async_trait;
use fdns_sqlite_application::ports::{RecordDecoder, RecordStore};
use fdns_sqlite_domain::{DecodeError, DomainError, FdnsRecord};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock RecordDecoder
// ============================================================================

/// Decodes whitespace-separated `name type value` lines.
///
/// Anything without exactly three fields is rejected.
pub struct MockRecordDecoder;

impl RecordDecoder for MockRecordDecoder {
    fn decode(&self, line: &str) -> Result<FdnsRecord, DecodeError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [name, record_type, value] => Ok(FdnsRecord::new(
                None,
                name.to_string(),
                record_type.to_string(),
                value.to_string(),
            )),
            _ => Err(DecodeError::Json(format!(
                "expected 3 fields, got {}",
                fields.len()
            ))),
        }
    }
}

// ============================================================================
// Mock RecordStore
// ============================================================================

#[derive(Clone)]
pub struct MockRecordStore {
    batches: Arc<RwLock<Vec<Vec<FdnsRecord>>>>,
    insert_calls: Arc<AtomicU64>,
    failing_calls: Arc<RwLock<HashSet<u64>>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            batches: Arc::new(RwLock::new(Vec::new())),
            insert_calls: Arc::new(AtomicU64::new(0)),
            failing_calls: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Make the n-th `insert_batch` call (1-based) fail.
    pub async fn fail_on_call(&self, call: u64) {
        self.failing_calls.write().await.insert(call);
    }

    pub fn insert_calls(&self) -> u64 {
        self.insert_calls.load(Ordering::Relaxed)
    }

    pub async fn batch_sizes(&self) -> Vec<usize> {
        self.batches.read().await.iter().map(Vec::len).collect()
    }

    pub async fn rows(&self) -> Vec<FdnsRecord> {
        self.batches.read().await.iter().flatten().cloned().collect()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn declare_schema(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn insert_batch(&self, batch: &[FdnsRecord]) -> Result<u64, DomainError> {
        let call = self.insert_calls.fetch_add(1, Ordering::Relaxed) + 1;

        if self.failing_calls.read().await.contains(&call) {
            return Err(DomainError::Insert("mock insert failure".to_string()));
        }

        self.batches.write().await.push(batch.to_vec());
        Ok(batch.len() as u64)
    }

    async fn row_count(&self) -> Result<u64, DomainError> {
        Ok(self.rows().await.len() as u64)
    }
}
