// Template resolution with cascading lookup
//
// Resolution order:
// 1. Custom templates directory ({templatesDir}/{name}.tera)
// 2. Builtin - compiled-in default templates

use crate::templates::builtin;
use anyhow::{anyhow, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Template source indicating where a template was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// File in the configured templates directory
    Custom,
    /// Built-in template (compiled into the application)
    Builtin,
}

/// Resolved template info
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub name: String,
    pub content: String,
    pub source: TemplateSource,
    /// Path to the template file (if file-based)
    pub path: Option<PathBuf>,
}

/// Template resolver with cascading lookup
pub struct TemplateResolver {
    templates_dir: Option<PathBuf>,
}

impl TemplateResolver {
    pub fn new() -> Self {
        Self {
            templates_dir: None,
        }
    }

    /// Set the directory searched before the built-in templates
    pub fn with_templates_dir(mut self, dir: Option<&Path>) -> Self {
        self.templates_dir = dir.map(|d| d.to_path_buf());
        self
    }

    fn custom_template_path(&self, name: &str) -> Option<PathBuf> {
        self.templates_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.tera", name)))
    }

    /// Resolve a template by name, custom directory first
    pub fn resolve(&self, name: &str) -> Result<ResolvedTemplate> {
        debug!("Resolving template: {}", name);

        if let Some(path) = self.custom_template_path(name) {
            if path.exists() {
                let content = fs::read_to_string(&path).map_err(|e| {
                    anyhow!("Failed to read template file '{}': {}", path.display(), e)
                })?;
                info!("Template '{}' resolved from {:?}", name, path);
                return Ok(ResolvedTemplate {
                    name: name.to_string(),
                    content,
                    source: TemplateSource::Custom,
                    path: Some(path),
                });
            }
        }

        if let Some(content) = builtin::get_builtin_template(name) {
            info!("Template '{}' resolved from builtin templates", name);
            return Ok(ResolvedTemplate {
                name: name.to_string(),
                content: content.to_string(),
                source: TemplateSource::Builtin,
                path: None,
            });
        }

        Err(anyhow!("Template '{}' not found in any location", name))
    }
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self::new()
    }
}
