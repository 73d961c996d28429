// Template system for script-generation prompts

pub mod builtin;
pub mod engine;
pub mod resolver;

// Re-export main types
pub use engine::{PromptContext, TemplateEngine};
pub use resolver::{ResolvedTemplate, TemplateResolver, TemplateSource};

use crate::config::PromptConfig;
use crate::discovery::DiscoverySession;
use anyhow::Result;
use std::path::Path;

/// Builds the script-generation prompt for a finished discovery session.
///
/// The template is chosen from the config handed in at construction, never
/// from process state. It is resolved and compiled once, then reused for
/// every session the builder renders.
pub struct PromptBuilder {
    engine: TemplateEngine,
    template: ResolvedTemplate,
}

impl PromptBuilder {
    pub fn new(config: &PromptConfig) -> Result<Self> {
        let name = template_name(config);
        let resolver = TemplateResolver::new()
            .with_templates_dir(config.templates_dir.as_deref().map(Path::new));
        let template = resolver.resolve(name)?;

        let mut engine = TemplateEngine::new();
        engine.add_template(name, &template.content)?;

        Ok(Self { engine, template })
    }

    /// Name of the template this builder renders
    pub fn template_name(&self) -> &str {
        &self.template.name
    }

    /// Where the template was loaded from
    pub fn template_source(&self) -> &TemplateSource {
        &self.template.source
    }

    /// Render the prompt for a session
    pub fn build(&self, session: &DiscoverySession) -> Result<String> {
        self.engine
            .render(&self.template.name, &PromptContext::from(session))
    }
}

/// Template picked by a prompt config
pub fn template_name(config: &PromptConfig) -> &'static str {
    if config.use_enhanced_prompt {
        builtin::SCRIPT_GENERATION_ENHANCED
    } else {
        builtin::SCRIPT_GENERATION
    }
}
