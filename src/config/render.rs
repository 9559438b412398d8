//! Render configuration

use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils;

/// Render configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Input format used when `--format` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Directories of templates available to `include`, `import` and `extends`
    pub template_dirs: Vec<PathBuf>,

    /// File extensions loaded from template directories
    pub template_extensions: Vec<String>,

    /// Variables exposed to every template under `vars`
    pub variables: IndexMap<String, String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_format: None,
            template_dirs: Vec::new(),
            template_extensions: ["html", "md", "txt", "tera", "j2"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            variables: IndexMap::new(),
        }
    }
}

impl RenderConfig {
    /// Expand `~` and environment variables in template directories
    pub fn expand_paths(&mut self) -> Result<()> {
        for dir in &mut self.template_dirs {
            *dir = utils::expand_path(dir)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.template_extensions.is_empty() {
            return Err(anyhow!("render.template_extensions cannot be empty"));
        }

        if let Some(ext) = self
            .template_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(anyhow!(
                "Invalid template extension '{}': use the bare extension, e.g. 'html'",
                ext
            ));
        }

        Ok(())
    }
}
