// Template rendering engine using Tera

use crate::discovery::DiscoverySession;
use crate::models::AnsweredQuestion;
use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tera::{Context, Tera};

/// Template context for rendering a script-generation prompt
#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptContext {
    /// Free text the creator submitted
    pub idea: String,
    pub topic: Option<String>,
    pub audience: Option<String>,
    pub goal: Option<String>,
    pub unique_angle: Option<String>,
    pub credibility: Option<String>,
    /// Entropy level name, e.g. "INTUITIVE"
    pub level: Option<String>,
    pub level_name: Option<String>,
    pub reasoning: Option<String>,
    pub answers: Vec<AnsweredQuestion>,
    /// Other confirmed fields
    pub extra: BTreeMap<String, Value>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

impl From<&DiscoverySession> for PromptContext {
    fn from(session: &DiscoverySession) -> Self {
        let inputs = &session.inputs;
        let credibility = match (non_empty(&inputs.credentials), non_empty(&inputs.proof_points)) {
            (Some(c), Some(p)) => Some(format!("{}; {}", c, p)),
            (c, p) => c.or(p),
        };

        Self {
            idea: session.combined_text(),
            topic: non_empty(&inputs.topic),
            audience: non_empty(&inputs.target_audience),
            goal: non_empty(&inputs.goal),
            unique_angle: non_empty(&inputs.uav_description),
            credibility,
            level: session.diagnosis.as_ref().map(|d| d.level.as_str().to_string()),
            level_name: session
                .diagnosis
                .as_ref()
                .map(|d| d.level.display_name().to_string()),
            reasoning: session.diagnosis.as_ref().map(|d| d.reasoning.clone()),
            answers: session.answers.clone(),
            extra: inputs.extra.clone(),
        }
    }
}

impl PromptContext {
    /// Convert to Tera context. Unset optional fields are left out so
    /// templates can fall back with `default(...)` or `{% if %}`.
    pub fn to_tera_context(&self) -> Result<Context> {
        let mut ctx = Context::new();

        ctx.insert("idea", &self.idea);

        let optional = [
            ("topic", &self.topic),
            ("audience", &self.audience),
            ("goal", &self.goal),
            ("unique_angle", &self.unique_angle),
            ("credibility", &self.credibility),
            ("level", &self.level),
            ("level_name", &self.level_name),
            ("reasoning", &self.reasoning),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                ctx.insert(key, value);
            }
        }

        ctx.insert("answers", &self.answers);
        ctx.insert("extra", &self.extra);

        Ok(ctx)
    }
}

/// Template engine for rendering prompts
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Add a template from a string
    pub fn add_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.tera
            .add_raw_template(name, template)
            .map_err(|e| anyhow!("Failed to add template '{}': {}", name, e))
    }

    /// Render a template with context
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        let ctx = context.to_tera_context()?;

        self.tera
            .render(template_name, &ctx)
            .map_err(|e| anyhow!("Failed to render template '{}': {}", template_name, e))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;

    #[test]
    fn test_render_with_defaults_for_missing_fields() {
        let mut engine = TemplateEngine::new();
        engine
            .add_template(
                "t",
                "{{ idea }} / {{ topic | default(value=\"none\") }}{% if goal %} / {{ goal }}{% endif %}",
            )
            .unwrap();

        let context = PromptContext {
            idea: "Sourdough basics".to_string(),
            ..Default::default()
        };

        assert_eq!(engine.render("t", &context).unwrap(), "Sourdough basics / none");
        assert!(engine.render("missing", &context).is_err());
    }

    #[test]
    fn test_render_answers_loop() {
        let mut engine = TemplateEngine::new();
        engine
            .add_template(
                "answers",
                "{% for item in answers %}{{ item.id }}={{ item.answer }};{% endfor %}",
            )
            .unwrap();

        let context = PromptContext {
            answers: vec![AnsweredQuestion {
                id: QuestionId::Tone,
                question: "Tone?".to_string(),
                answer: "playful".to_string(),
            }],
            ..Default::default()
        };

        assert_eq!(engine.render("answers", &context).unwrap(), "tone=playful;");
    }

    #[test]
    fn test_invalid_template_is_an_error() {
        let mut engine = TemplateEngine::new();
        assert!(engine.add_template("bad", "{% if %}").is_err());
        assert!(engine.render("bad", &PromptContext::default()).is_err());
    }

    #[test]
    fn test_context_merges_credibility_fields() {
        let mut session = DiscoverySession::new();
        session.inputs.credentials = Some("Certified trainer".to_string());
        session.inputs.proof_points = Some("500 clients".to_string());

        let context = PromptContext::from(&session);
        assert_eq!(
            context.credibility.as_deref(),
            Some("Certified trainer; 500 clients")
        );
        assert!(context.level.is_none());
    }

    #[test]
    fn test_render_non_string_extra() {
        let mut engine = TemplateEngine::new();
        engine
            .add_template(
                "extra",
                "{% for key, value in extra %}{{ key }}={{ value }};{% endfor %}",
            )
            .unwrap();

        let mut session = DiscoverySession::new();
        session
            .inputs
            .extra
            .insert("durationSeconds".to_string(), Value::from(60));
        session.inputs.extra.insert("platform".to_string(), Value::from("TikTok"));

        let rendered = engine.render("extra", &PromptContext::from(&session)).unwrap();
        assert_eq!(rendered, "durationSeconds=60;platform=TikTok;");
    }
}
