//! JSON input plugin

pub mod factory;
pub mod reader;


/// Registry name of the JSON plugin
pub const PLUGIN_NAME: &str = "JsonInput";

// Re-export main types for convenience
pub use factory::JsonReaderFactory;
pub use reader::{JsonOptions, JsonReader};
