//! Main configuration structure and implementation

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{PluginsConfig, RenderConfig};

/// Supported configuration file version
pub const CONFIG_VERSION: &str = "1.0";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Input plugin selection and options
    #[serde(default)]
    pub plugins: PluginsConfig,

    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
        config.render.expand_paths()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        self.plugins.validate()?;

        if let Some(format) = &self.render.default_format {
            if !self.plugins.is_enabled(format) {
                return Err(anyhow!(
                    "Default format '{}' is not an enabled input plugin",
                    format
                ));
            }
        }

        self.render.validate()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            plugins: PluginsConfig::default(),
            render: RenderConfig::default(),
        }
    }
}
