use serde::{Deserialize, Serialize};

pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Upper bound on rows per INSERT statement.
///
/// Each row binds 4 parameters; SQLite caps a statement at 32766.
pub const MAX_BATCH_SIZE: usize = 8_000;

/// What happens to a line the codec rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Drop the line; the store only contains decoded records
    #[default]
    Skip,
    /// Write a zero-value row in the line's slot
    Placeholder,
}

impl MalformedLinePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedLinePolicy::Skip => "skip",
            MalformedLinePolicy::Placeholder => "placeholder",
        }
    }
}

/// Counters gathered over one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Non-blank lines seen
    pub lines_read: u64,
    pub records_parsed: u64,
    pub lines_malformed: u64,
    pub placeholder_rows: u64,
    pub batches_written: u64,
    pub batches_failed: u64,
    pub rows_inserted: u64,
    pub rows_failed: u64,
}

impl IngestSummary {
    pub fn has_failures(&self) -> bool {
        self.batches_failed > 0
    }

    pub fn record_batch_written(&mut self, rows: u64) {
        self.batches_written += 1;
        self.rows_inserted += rows;
    }

    pub fn record_batch_failed(&mut self, rows: u64) {
        self.batches_failed += 1;
        self.rows_failed += rows;
    }
}
