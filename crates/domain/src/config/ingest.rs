use crate::ingest::{MalformedLinePolicy, DEFAULT_BATCH_SIZE};
use serde::{Deserialize, Serialize};

/// Ingestion settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Records per INSERT transaction (default: 100)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Handling of lines that fail to decode (default: "skip")
    /// Options: "skip", "placeholder"
    #[serde(default)]
    pub malformed_lines: MalformedLinePolicy,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            malformed_lines: MalformedLinePolicy::default(),
        }
    }
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}
