//! Helm Library
//!
//! A template as a service utility: input plugins read CSV or JSON into a
//! uniform record sequence, and a template renders those records into a report.

pub mod cli;
pub mod config;
pub mod plugin;
pub mod render;
pub mod utils;

pub use config::{Config, PluginsConfig, RenderConfig};
pub use plugin::{
    InputReader, InputReaderFactory, InputSource, PluginConfig, PluginError, PluginMetadata,
    PluginRegistry, Record, RegistryError,
};
pub use render::{RenderContext, RenderError, TemplateRenderer};

use indexmap::IndexMap;
use std::time::Instant;
use tracing::info;

/// Main application context: configuration plus the input plugin registry
pub struct Helm {
    config: Config,
    registry: PluginRegistry,
}

impl Helm {
    /// Create a new Helm instance, registering the configured built-in plugins
    pub fn new(config: Config) -> HelmResult<Self> {
        config
            .validate()
            .map_err(|e| HelmError::Config(e.to_string()))?;
        let registry = PluginRegistry::with_builtins(&config.plugins)?;
        Ok(Self { config, registry })
    }

    /// Create a Helm instance around an already populated registry
    pub fn with_registry(config: Config, registry: PluginRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Pick the input format: the explicit one, else the configured default
    pub fn select_format<'a>(&'a self, format: Option<&'a str>) -> HelmResult<&'a str> {
        format
            .or(self.config.render.default_format.as_deref())
            .ok_or_else(|| {
                HelmError::Config(format!(
                    "No input format given and no render.default_format configured (available: {})",
                    self.registry.list_available().collect::<Vec<_>>().join(", ")
                ))
            })
    }

    /// Resolve `format` and read every record from `source`
    pub fn load_records(&self, format: &str, source: InputSource) -> HelmResult<Vec<Record>> {
        let start_time = Instant::now();
        let origin = source.to_string();

        let reader = self.registry.resolve(format)?;
        let records = reader.read_all(source)?;

        info!(
            "Read {} records from {} with {} in {:?}",
            records.len(),
            origin,
            format,
            start_time.elapsed()
        );
        Ok(records)
    }

    /// Read records from the request's input and render its template over them
    pub fn render(&self, request: &RenderRequest) -> HelmResult<RenderOutput> {
        let start_time = Instant::now();
        let format = self.select_format(request.format.as_deref())?;
        let records = self.load_records(format, request.input.clone())?;

        let renderer = TemplateRenderer::with_template_dirs(
            &self.config.render.template_dirs,
            &self.config.render.template_extensions,
        )?;

        let mut variables = self.config.render.variables.clone();
        variables.extend(request.variables.clone());

        let context = RenderContext {
            format: format.to_string(),
            source: request.input.to_string(),
            variables,
        };

        let content = renderer.render(
            &request.template_name,
            &request.template,
            &records,
            &context,
        )?;

        info!(
            "Rendered {} with {} records in {:?}",
            request.template_name,
            records.len(),
            start_time.elapsed()
        );

        Ok(RenderOutput {
            content,
            record_count: records.len(),
            format: format.to_string(),
        })
    }

    /// Metadata for every registered plugin, in registration order
    pub fn plugin_info(&self) -> Vec<PluginMetadata> {
        self.registry.entries().map(|entry| entry.metadata()).collect()
    }
}

/// A single render job
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Input format; falls back to `render.default_format`
    pub format: Option<String>,

    /// Where to read records from
    pub input: InputSource,

    /// Template name, used in errors and to decide autoescaping
    pub template_name: String,

    /// Template source text
    pub template: String,

    /// Variables layered over `render.variables`
    pub variables: IndexMap<String, String>,
}

/// Result of a render job
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub content: String,
    pub record_count: usize,
    pub format: String,
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum HelmError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Input error: {0}")]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

/// Result type for the main application
pub type HelmResult<T> = Result<T, HelmError>;
