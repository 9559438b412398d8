//! Input plugin configuration and validation

use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::plugin::{builtin_names, PluginConfig};

/// Input plugin configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Built-in plugins to register, in order. All builtins when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Vec<String>>,

    /// Per-plugin options keyed by plugin name
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, serde_yaml::Value>,
}

impl PluginsConfig {
    /// Whether `name` will be registered
    pub fn is_enabled(&self, name: &str) -> bool {
        match &self.enabled {
            Some(enabled) => enabled.iter().any(|n| n == name),
            None => builtin_names().any(|n| n == name),
        }
    }

    /// Options for one plugin
    pub fn plugin_config(&self, name: &str) -> PluginConfig {
        self.options
            .get(name)
            .cloned()
            .map(PluginConfig::new)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        let known: Vec<&str> = builtin_names().collect();

        if let Some(enabled) = &self.enabled {
            let mut seen = HashSet::new();
            for name in enabled {
                if !known.contains(&name.as_str()) {
                    return Err(anyhow!(
                        "Unknown input plugin '{}' in plugins.enabled (available: {})",
                        name,
                        known.join(", ")
                    ));
                }
                if !seen.insert(name.as_str()) {
                    return Err(anyhow!("Input plugin '{}' is enabled twice", name));
                }
            }
        }

        for name in self.options.keys() {
            if !known.contains(&name.as_str()) {
                return Err(anyhow!(
                    "Options given for unknown input plugin '{}' (available: {})",
                    name,
                    known.join(", ")
                ));
            }
        }

        Ok(())
    }
}
