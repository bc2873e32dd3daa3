use fdns_sqlite_application::ports::RecordDecoder;
use fdns_sqlite_domain::{DecodeError, FdnsRecord};
use serde::{Deserialize, Deserializer};

/// Wire shape of one forward-DNS line.
///
/// Missing keys and explicit `null`s fall back to empty values; a key with
/// the wrong JSON type is a decode error.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    timestamp: RawTimestamp,
    #[serde(default, deserialize_with = "null_as_empty")]
    name: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    record_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Epoch(i64),
    #[default]
    Missing,
}

impl RawTimestamp {
    fn into_text(self) -> Option<String> {
        match self {
            RawTimestamp::Text(text) => Some(text),
            RawTimestamp::Epoch(secs) => Some(secs.to_string()),
            RawTimestamp::Missing => None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `RecordDecoder` for newline-delimited JSON objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRecordDecoder;

impl JsonRecordDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonRecordDecoder {
    fn decode(&self, line: &str) -> Result<FdnsRecord, DecodeError> {
        let line = line.trim();

        // serde would otherwise accept a positional JSON array for the struct
        if !line.starts_with('{') {
            return Err(DecodeError::Json("expected a JSON object".to_string()));
        }

        let raw: RawRecord =
            serde_json::from_str(line).map_err(|e| DecodeError::Json(e.to_string()))?;

        let timestamp = raw
            .timestamp
            .into_text()
            .and_then(|text| FdnsRecord::parse_timestamp(&text));

        Ok(FdnsRecord::new(
            timestamp,
            raw.name,
            raw.record_type,
            raw.value,
        ))
    }
}
