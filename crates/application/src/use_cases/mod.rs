pub mod ingest;

// Re-export use cases
pub use ingest::IngestRecordsUseCase;
