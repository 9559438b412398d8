//! Input plugins and the registry that dispatches to them

pub mod csv_input;
pub mod json_input;
pub mod registry;

pub use csv_input::{CsvReader, CsvReaderFactory};
pub use helm_plugin::*;
pub use json_input::{JsonReader, JsonReaderFactory};
pub use registry::{PluginEntry, PluginRegistry, RegistryError};

/// Constructor for a built-in plugin factory
pub type FactoryConstructor = fn() -> Box<dyn InputReaderFactory>;

/// Built-in input plugins, in default registration order
pub const BUILTIN_PLUGINS: &[(&str, FactoryConstructor)] = &[
    (csv_input::PLUGIN_NAME, csv_input_factory),
    (json_input::PLUGIN_NAME, json_input_factory),
];

fn csv_input_factory() -> Box<dyn InputReaderFactory> {
    Box::new(CsvReaderFactory)
}

fn json_input_factory() -> Box<dyn InputReaderFactory> {
    Box::new(JsonReaderFactory)
}

/// Names of the built-in plugins
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_PLUGINS.iter().map(|(name, _)| *name)
}
