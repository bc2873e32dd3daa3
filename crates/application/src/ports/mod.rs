pub mod record_decoder;
pub mod record_store;

pub use record_decoder::RecordDecoder;
pub use record_store::RecordStore;
