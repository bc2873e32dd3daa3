pub mod namer;

pub use namer::resolve_output_path;
