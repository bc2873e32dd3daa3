pub mod json_record_decoder;

pub use json_record_decoder::JsonRecordDecoder;
