use crate::ports::{RecordDecoder, RecordStore};
use fdns_sqlite_domain::{
    DecodeError, DomainError, FdnsRecord, IngestSummary, MalformedLinePolicy, DEFAULT_BATCH_SIZE,
    MAX_BATCH_SIZE,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, warn};

/// Use case: stream newline-delimited records into the store in fixed-size batches.
///
/// Lines are read one at a time, so memory is bounded by the batch size
/// regardless of input length. A line that fails to decode never aborts the
/// run; it is handled according to the configured [`MalformedLinePolicy`].
/// A batch whose insert fails is reported and counted, and ingestion moves on
/// to the next batch.
pub struct IngestRecordsUseCase {
    decoder: Arc<dyn RecordDecoder>,
    store: Arc<dyn RecordStore>,
    batch_size: usize,
    policy: MalformedLinePolicy,
}

impl IngestRecordsUseCase {
    pub fn new(decoder: Arc<dyn RecordDecoder>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            decoder,
            store,
            batch_size: DEFAULT_BATCH_SIZE,
            policy: MalformedLinePolicy::default(),
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.clamp(1, MAX_BATCH_SIZE);
        self
    }

    pub fn with_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub async fn execute<R>(&self, mut reader: R) -> Result<IngestSummary, DomainError>
    where
        R: AsyncBufRead + Unpin + Send,
    {
        let mut summary = IngestSummary::default();
        let mut batch: Vec<FdnsRecord> = Vec::with_capacity(self.batch_size);
        let mut buf: Vec<u8> = Vec::new();
        let mut line_number: u64 = 0;

        debug!(
            batch_size = self.batch_size,
            policy = self.policy.as_str(),
            "Starting ingestion"
        );

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).await.map_err(|e| {
                error!(error = %e, line = line_number + 1, "Failed to read input");
                DomainError::InputRead(format!("line {}: {}", line_number + 1, e))
            })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let Some(decoded) = self.decode_line(&buf) else {
                continue;
            };
            summary.lines_read += 1;

            match decoded {
                Ok(record) => {
                    summary.records_parsed += 1;
                    batch.push(record);
                }
                Err(e) => {
                    summary.lines_malformed += 1;
                    debug!(line = line_number, error = %e, "Malformed line");

                    if self.policy == MalformedLinePolicy::Placeholder {
                        summary.placeholder_rows += 1;
                        batch.push(FdnsRecord::default());
                    }
                }
            }

            if batch.len() >= self.batch_size {
                self.flush_batch(&mut batch, &mut summary).await;
            }
        }

        // Remainder; a no-op when the input divides evenly
        self.flush_batch(&mut batch, &mut summary).await;

        if summary.lines_malformed > 0 {
            warn!(
                malformed = summary.lines_malformed,
                policy = self.policy.as_str(),
                "Input contained malformed lines"
            );
        }

        info!(
            lines = summary.lines_read,
            parsed = summary.records_parsed,
            malformed = summary.lines_malformed,
            rows_inserted = summary.rows_inserted,
            batches = summary.batches_written,
            failed_batches = summary.batches_failed,
            "Ingestion finished"
        );

        Ok(summary)
    }

    /// `None` for blank lines, which are ignored entirely.
    fn decode_line(&self, raw: &[u8]) -> Option<Result<FdnsRecord, DecodeError>> {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(_) => return Some(Err(DecodeError::InvalidUtf8)),
        };

        if line.is_empty() {
            return None;
        }

        Some(self.decoder.decode(line))
    }

    async fn flush_batch(&self, batch: &mut Vec<FdnsRecord>, summary: &mut IngestSummary) {
        let count = batch.len() as u64;
        if count == 0 {
            return;
        }

        match self.store.insert_batch(batch.as_slice()).await {
            Ok(rows) => {
                summary.record_batch_written(rows);
                debug!(rows, batch = summary.batches_written, "Record batch inserted");
            }
            Err(e) => {
                summary.record_batch_failed(count);
                error!(error = %e, count, "Failed to insert record batch");
            }
        }

        batch.clear();
    }
}
