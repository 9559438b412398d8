//! JSON plugin factory

use super::reader::{JsonOptions, JsonReader};
use super::PLUGIN_NAME;
use crate::plugin::*;

/// JSON plugin factory
pub struct JsonReaderFactory;

impl InputReaderFactory for JsonReaderFactory {
    fn create_reader(&self, config: &PluginConfig) -> Result<Box<dyn InputReader>, PluginError> {
        let options: JsonOptions = config.options(PLUGIN_NAME)?;
        options.validate()?;
        Ok(Box::new(JsonReader::new(options)))
    }

    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: PLUGIN_NAME.to_string(),
            description: "Reads a JSON array of objects, one record per object".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            extensions: vec!["json".to_string()],
        }
    }
}
