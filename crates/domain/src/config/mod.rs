//! Configuration module for fdns-sqlite
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `ingest`: Batch size and malformed-line policy
//! - `output`: Destination directory and store file extension
//! - `database`: SQLite connection settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod root;

pub use database::{DatabaseConfig, SynchronousMode};
pub use errors::ConfigError;
pub use ingest::IngestConfig;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use root::{CliOverrides, Config};
