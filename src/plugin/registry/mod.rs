//! Plugin registry for name-based dispatch to input readers

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};

use helm_plugin::*;

use super::{builtin_names, BUILTIN_PLUGINS};
use crate::config::PluginsConfig;


/// Registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Input plugin '{0}' is already registered")]
    DuplicateName(String),

    #[error("Unknown input format '{name}' (available: {})", .available.join(", "))]
    UnknownFormat { name: String, available: Vec<String> },

    #[error("Failed to create reader for '{name}': {source}")]
    Factory {
        name: String,
        #[source]
        source: PluginError,
    },
}

/// Plugin registry entry
pub struct PluginEntry {
    /// Registry key
    pub name: String,

    /// Options handed to the factory on every resolve
    pub config: PluginConfig,

    factory: Box<dyn InputReaderFactory>,
}

impl PluginEntry {
    /// Plugin metadata as reported by its factory
    pub fn metadata(&self) -> PluginMetadata {
        self.factory.metadata()
    }
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Registry of input plugins, in registration order.
///
/// Populated once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    entries: IndexMap<String, PluginEntry>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated from the built-in plugin table.
    ///
    /// `config.enabled` picks and orders the builtins; when it is unset every
    /// builtin is registered in table order.
    pub fn with_builtins(config: &PluginsConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        let names: Vec<&str> = match &config.enabled {
            Some(enabled) => enabled.iter().map(String::as_str).collect(),
            None => builtin_names().collect(),
        };

        for name in names {
            let (_, make_factory) = BUILTIN_PLUGINS
                .iter()
                .find(|(builtin, _)| *builtin == name)
                .ok_or_else(|| RegistryError::UnknownFormat {
                    name: name.to_string(),
                    available: builtin_names().map(str::to_string).collect(),
                })?;

            registry.register_with_config(name, make_factory(), config.plugin_config(name))?;
        }

        info!("Registered {} input plugins", registry.len());
        Ok(registry)
    }

    /// Register a factory under `name` with default options
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: Box<dyn InputReaderFactory>,
    ) -> Result<(), RegistryError> {
        self.register_with_config(name, factory, PluginConfig::default())
    }

    /// Register a factory under `name` with the given options.
    ///
    /// Fails if `name` is taken; the existing entry is left untouched.
    pub fn register_with_config(
        &mut self,
        name: impl Into<String>,
        factory: Box<dyn InputReaderFactory>,
        config: PluginConfig,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        debug!("Registering input plugin: {}", name);
        self.entries.insert(
            name.clone(),
            PluginEntry {
                name,
                config,
                factory,
            },
        );
        Ok(())
    }

    /// Build a fresh reader for `name`
    pub fn resolve(&self, name: &str) -> Result<Box<dyn InputReader>, RegistryError> {
        let entry = self.entry(name)?;

        debug!("Resolving input plugin: {}", name);
        entry
            .factory
            .create_reader(&entry.config)
            .map_err(|source| RegistryError::Factory {
                name: name.to_string(),
                source,
            })
    }

    /// Registered names in registration order.
    ///
    /// Each call starts a new pass over the names.
    pub fn list_available(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Metadata for a registered plugin
    pub fn metadata(&self, name: &str) -> Result<PluginMetadata, RegistryError> {
        self.entry(name).map(PluginEntry::metadata)
    }

    /// All entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = &PluginEntry> {
        self.entries.values()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> Result<&PluginEntry, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownFormat {
                name: name.to_string(),
                available: self.list_available().map(str::to_string).collect(),
            })
    }
}
