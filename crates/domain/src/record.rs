use chrono::{DateTime, NaiveDateTime, Utc};

/// Storage format for timestamps, compatible with SQLite's `datetime()`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One forward-DNS observation.
///
/// `Default` is the zero-value record used as a placeholder for lines that
/// failed to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FdnsRecord {
    /// Observation time, `None` when absent or unparseable
    pub timestamp: Option<DateTime<Utc>>,
    /// Queried domain name
    pub name: String,
    /// Short record-type code ("a", "cname", ...)
    pub record_type: String,
    /// Resolved value
    pub value: String,
}

impl FdnsRecord {
    pub fn new(
        timestamp: Option<DateTime<Utc>>,
        name: String,
        record_type: String,
        value: String,
    ) -> Self {
        Self {
            timestamp,
            name,
            record_type,
            value,
        }
    }

    /// Parse the textual timestamp forms found in forward-DNS dumps.
    ///
    /// Accepts Unix epoch seconds ("1621036800"), RFC 3339
    /// ("2020-01-01T00:00:00Z") and the storage format itself.
    pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(secs) = raw.parse::<i64>() {
            return DateTime::from_timestamp(secs, 0);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Timestamp rendered for storage, `None` maps to SQL NULL.
    pub fn timestamp_text(&self) -> Option<String> {
        self.timestamp
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }
}
