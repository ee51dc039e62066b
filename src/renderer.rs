//! Template rendering for create-mcp-server.
//! Template files use EJS-style delimiters (`<%= name %>`), rendered with MiniJinja.
use crate::error::{Error, Result};
use minijinja::syntax::SyntaxConfig;
use minijinja::value::{Value, ValueKind};
use minijinja::{escape_formatter, Environment, Output, State};
use std::fmt::Write;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer understanding `<%= expr %>`, `<%_ stmt _%>` and `<%# comment %>`.
    ///
    /// Jinja's default `{{ }}` and `{% %}` are left alone so that source files
    /// using braces pass through untouched.
    pub fn new() -> Result<Self> {
        let syntax = SyntaxConfig::builder()
            .block_delimiters("<%_", "_%>")
            .variable_delimiters("<%=", "%>")
            .comment_delimiters("<%#", "%>")
            .build()
            .map_err(Error::MinijinjaError)?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_keep_trailing_newline(true);
        env.set_formatter(format_value);
        Ok(Self { env })
    }
}

/// Writes booleans as `true`/`false`, the way they appear in JS and JSON sources.
fn format_value(
    out: &mut Output,
    state: &State,
    value: &Value,
) -> std::result::Result<(), minijinja::Error> {
    if value.kind() == ValueKind::Bool {
        write!(out, "{}", value.is_true())?;
        Ok(())
    } else {
        escape_formatter(out, state, value)
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template cannot be parsed or rendered
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_ejs_variables() {
        let engine = MiniJinjaRenderer::new().unwrap();
        let result = engine
            .render("node_modules/\n<%= tool %>.log", &json!({"tool": "echo"}))
            .unwrap();
        assert_eq!(result, "node_modules/\necho.log");
    }

    #[test]
    fn test_booleans_render_lowercase() {
        let engine = MiniJinjaRenderer::new().unwrap();
        let template = "X = <%= installForHost %>;\n";
        assert_eq!(
            engine.render(template, &json!({"installForHost": false})).unwrap(),
            "X = false;\n"
        );
        assert_eq!(
            engine.render(template, &json!({"installForHost": true})).unwrap(),
            "X = true;\n"
        );
        assert_eq!(
            engine.render("<%= n %> <%= s %>", &json!({"n": 3, "s": "True"})).unwrap(),
            "3 True"
        );
    }

    #[test]
    fn test_leaves_braces_alone() {
        let engine = MiniJinjaRenderer::new().unwrap();
        let source = "const x = { a: 1 };\nconst t = `${x}`;\n{{ not_a_var }} {% raw %}\n";
        assert_eq!(engine.render(source, &json!({})).unwrap(), source);
    }

    #[test]
    fn test_blocks_and_comments() {
        let engine = MiniJinjaRenderer::new().unwrap();
        let template = "<%# hidden %><%_ if installForHost _%>yes<%_ else _%>no<%_ endif _%>";
        assert_eq!(engine.render(template, &json!({"installForHost": true})).unwrap(), "yes");
        assert_eq!(engine.render(template, &json!({"installForHost": false})).unwrap(), "no");
    }
}
