pub mod config;
pub mod database;
pub mod logging;

pub use config::load_config;
pub use database::init_store;
pub use logging::init_logging;
