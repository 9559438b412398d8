//! Reader factory trait and plugin metadata

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::InputReader;
use crate::PluginError;

/// Plugin metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginMetadata {
    /// Plugin name, also the registry key
    pub name: String,

    /// Plugin description
    pub description: String,

    /// Plugin version
    pub version: String,

    /// File extensions this plugin usually reads
    pub extensions: Vec<String>,
}

/// Per-plugin options, kept as raw YAML until a reader asks for them
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PluginConfig {
    #[serde(default)]
    pub options: serde_yaml::Value,
}

impl PluginConfig {
    pub fn new(options: serde_yaml::Value) -> Self {
        Self { options }
    }

    /// Deserialize the options into a reader's typed options.
    ///
    /// Missing options yield `T::default()`.
    pub fn options<T>(&self, plugin: &str) -> Result<T, PluginError>
    where
        T: DeserializeOwned + Default,
    {
        if self.options.is_null() {
            return Ok(T::default());
        }

        serde_yaml::from_value(self.options.clone()).map_err(|e| PluginError::InvalidConfig {
            plugin: plugin.to_string(),
            message: e.to_string(),
        })
    }
}

/// Capability that produces a fresh [`InputReader`]
pub trait InputReaderFactory: Send + Sync {
    /// Create a new reader instance
    fn create_reader(&self, config: &PluginConfig) -> Result<Box<dyn InputReader>, PluginError>;

    /// Get plugin metadata
    fn metadata(&self) -> PluginMetadata;
}

/// Factory backed by a closure, for registrants that don't need their own type
pub struct FnFactory<F> {
    metadata: PluginMetadata,
    create: F,
}

impl<F> FnFactory<F>
where
    F: Fn(&PluginConfig) -> Result<Box<dyn InputReader>, PluginError> + Send + Sync,
{
    pub fn new(metadata: PluginMetadata, create: F) -> Self {
        Self { metadata, create }
    }
}

impl<F> InputReaderFactory for FnFactory<F>
where
    F: Fn(&PluginConfig) -> Result<Box<dyn InputReader>, PluginError> + Send + Sync,
{
    fn create_reader(&self, config: &PluginConfig) -> Result<Box<dyn InputReader>, PluginError> {
        (self.create)(config)
    }

    fn metadata(&self) -> PluginMetadata {
        self.metadata.clone()
    }
}
