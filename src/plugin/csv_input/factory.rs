//! CSV plugin factory

use super::reader::{CsvOptions, CsvReader};
use super::PLUGIN_NAME;
use crate::plugin::*;

/// CSV plugin factory
pub struct CsvReaderFactory;

impl InputReaderFactory for CsvReaderFactory {
    fn create_reader(&self, config: &PluginConfig) -> Result<Box<dyn InputReader>, PluginError> {
        let options: CsvOptions = config.options(PLUGIN_NAME)?;
        Ok(Box::new(CsvReader::new(options)?))
    }

    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: PLUGIN_NAME.to_string(),
            description: "Reads delimited text; the first row names the fields".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            extensions: vec!["csv".to_string(), "tsv".to_string()],
        }
    }
}
