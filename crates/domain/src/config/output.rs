use crate::output_name::DEFAULT_STORE_EXTENSION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the store file is created
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory for the store file (default: current directory)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Store file extension without the dot (default: "sqlite3")
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    DEFAULT_STORE_EXTENSION.to_string()
}
