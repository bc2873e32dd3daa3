use fdns_sqlite_domain::{DecodeError, FdnsRecord};

/// Turns one input line into a record.
///
/// Decoding is pure and synchronous; a failure only affects the line
/// being decoded.
pub trait RecordDecoder: Send + Sync {
    fn decode(&self, line: &str) -> Result<FdnsRecord, DecodeError>;
}
