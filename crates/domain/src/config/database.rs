use serde::{Deserialize, Serialize};

/// SQLite `synchronous` pragma value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SynchronousMode {
    Off,
    #[default]
    Normal,
    Full,
}

/// Connection settings for the output store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Durability of each commit (default: "normal")
    #[serde(default)]
    pub synchronous: SynchronousMode,

    /// Seconds to wait on a locked database (default: 5)
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_secs: u64,

    /// Page cache size in KiB (default: 65536)
    #[serde(default = "default_cache_size")]
    pub cache_size_kib: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            synchronous: SynchronousMode::default(),
            busy_timeout_secs: default_busy_timeout(),
            cache_size_kib: default_cache_size(),
        }
    }
}

fn default_busy_timeout() -> u64 {
    5
}

fn default_cache_size() -> u32 {
    65_536
}
