//! fdns-sqlite Domain Layer
pub mod config;
pub mod errors;
pub mod ingest;
pub mod output_name;
pub mod record;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{DecodeError, DomainError};
pub use ingest::{IngestSummary, MalformedLinePolicy, DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE};
pub use output_name::{output_file_name, output_stem, DEFAULT_STORE_EXTENSION};
pub use record::FdnsRecord;
