//! Tera-based report rendering over input records

use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

use crate::plugin::{field_names, Record};
use crate::utils;

/// Render errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template load error: {0}")]
    Load(String),

    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },
}

/// Everything a template sees besides the records themselves
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Input format the records came from
    pub format: String,

    /// Human readable description of the input source
    pub source: String,

    /// User variables, exposed under `vars`
    pub variables: IndexMap<String, String>,
}

/// Template renderer wrapping Tera with helm's record context
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Renderer with no shared templates
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Load every template with a matching extension from `dirs`.
    ///
    /// Templates are named by their path relative to their directory, so
    /// `{% include "partials/row.html" %}` works from the main template.
    pub fn with_template_dirs(dirs: &[PathBuf], extensions: &[String]) -> Result<Self, RenderError> {
        let mut templates = Vec::new();
        for dir in dirs {
            let files = utils::find_files_with_extensions(dir, extensions)
                .map_err(|e| RenderError::Load(e.to_string()))?;

            for file in files {
                let name = template_name(dir, &file);
                debug!("Loading template {} from {:?}", name, file);
                templates.push((file, Some(name)));
            }
        }

        // Added in one batch: inheritance and macro imports are only
        // resolved once every template is present
        let mut tera = Tera::default();
        tera.add_template_files(templates)
            .map_err(|e| RenderError::Load(e.to_string()))?;

        Ok(Self { tera })
    }

    /// Names of the shared templates
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tera.get_template_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Build the Tera context for a set of records
    pub fn build_context(records: &[Record], context: &RenderContext) -> Context {
        let mut tera_context = Context::new();
        let fields = records.first().map(field_names).unwrap_or_default();

        tera_context.insert("records", records);
        tera_context.insert("record_count", &records.len());
        tera_context.insert("fields", &fields);
        tera_context.insert("format", &context.format);
        tera_context.insert("source", &context.source);
        tera_context.insert("rendered_at", &chrono::Utc::now().to_rfc3339());
        tera_context.insert("vars", &context.variables);
        tera_context
    }

    /// Render template source `template` over `records`.
    ///
    /// `name` decides autoescaping the way Tera does: names ending in
    /// `.html`, `.htm` or `.xml` are escaped.
    pub fn render(
        &self,
        name: &str,
        template: &str,
        records: &[Record],
        context: &RenderContext,
    ) -> Result<String, RenderError> {
        // Clone so the main template can include the shared ones without
        // leaking into later renders
        let mut tera = self.tera.clone();
        tera.add_raw_template(name, template)
            .map_err(|e| RenderError::Render {
                template: name.to_string(),
                source: e,
            })?;

        let tera_context = Self::build_context(records, context);
        tera.render(name, &tera_context)
            .map_err(|e| RenderError::Render {
                template: name.to_string(),
                source: e,
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn template_name(dir: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(dir).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
