// ABOUTME: Main template engine implementation using MiniJinja
// ABOUTME: Provides string rendering, syntax validation, and filter registration

use minijinja::{Environment, ErrorKind, Syntax, UndefinedBehavior};

use super::context::RenderContext;
use super::error::{Result, TemplateError};
use super::filters;

/// Variable expression delimiters; `${{ name }}` rather than the engine's
/// default so template files can carry plain `{{`/`}}` untouched.
const VAR_START: &str = "${{";
const VAR_END: &str = "}}";

#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with all built-in filters
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();

        let syntax = Syntax {
            variable_start: VAR_START.into(),
            variable_end: VAR_END.into(),
            ..Syntax::default()
        };
        env.set_syntax(syntax)
            .map_err(|err| TemplateError::Render(err.to_string()))?;

        // Missing keys render as empty text. An absent value is a
        // template-authoring concern, not a system fault.
        env.set_undefined_behavior(UndefinedBehavior::Lenient);

        // Template-free content must round-trip byte-identical, so the
        // engine may not strip a trailing newline.
        env.set_keep_trailing_newline(true);

        filters::register_filters(&mut env);

        Ok(Self { env })
    }

    /// Render a template string with the given context. Numbers interpolate
    /// in their natural decimal form, booleans as `true`/`false`.
    pub fn render(&self, template: &str, context: &RenderContext) -> Result<String> {
        self.env
            .render_str(template, context.as_json())
            .map_err(|err| match err.kind() {
                ErrorKind::SyntaxError => TemplateError::Syntax {
                    template: template.to_string(),
                    message: err.to_string(),
                },
                _ => TemplateError::Render(err.to_string()),
            })
    }

    /// Validate template syntax without rendering
    pub fn validate(&self, template: &str) -> Result<()> {
        self.env
            .template_from_str(template)
            .map(|_| ())
            .map_err(|err| TemplateError::Syntax {
                template: template.to_string(),
                message: err.to_string(),
            })
    }

    /// Check if a string contains template expressions
    pub fn has_templates(&self, text: &str) -> bool {
        text.contains(VAR_START)
    }
}
