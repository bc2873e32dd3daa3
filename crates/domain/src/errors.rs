use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read input: {0}")]
    InputRead(String),

    #[error("Failed to probe output path: {0}")]
    OutputProbe(String),

    #[error("Failed to open store: {0}")]
    StoreOpen(String),

    #[error("Failed to declare schema: {0}")]
    Schema(String),

    #[error("Batch insert failed: {0}")]
    Insert(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// A single input line that could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}
