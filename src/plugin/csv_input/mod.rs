//! CSV input plugin

pub mod factory;
pub mod reader;


/// Registry name of the CSV plugin
pub const PLUGIN_NAME: &str = "CsvInput";

// Re-export main types for convenience
pub use factory::CsvReaderFactory;
pub use reader::{CsvOptions, CsvReader};
