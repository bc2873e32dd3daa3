//! fdns-sqlite Infrastructure Layer
//!
//! Adapters for the application ports: the JSON line codec, the SQLite
//! record store, and filesystem probing for the output path.
pub mod codec;
pub mod database;
pub mod output;
pub mod repositories;
