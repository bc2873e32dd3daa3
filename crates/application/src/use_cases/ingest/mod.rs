pub mod ingest_records;

pub use ingest_records::IngestRecordsUseCase;
