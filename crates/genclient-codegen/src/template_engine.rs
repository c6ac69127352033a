//! Handlebars template engine for Go client generation.
//!
//! Provides the built-in `client/base` and `client/function` templates.
//! Output is Go source, so HTML escaping is turned off: `&` and `"` must
//! reach the generated file unchanged.
//!
//! # Examples
//!
//! ```
//! use genclient_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({
//!     "service": "Storage",
//!     "action": "GetObject",
//!     "response_type": "*storage.GetObjectResponse",
//!     "zero_response_expr": "&storage.GetObjectResponse{}",
//! });
//! let code = engine.render("client/function", &context).unwrap();
//! assert!(code.contains("r = &storage.GetObjectResponse{}"));
//! ```

use genclient_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Name of the template rendering the file header, struct, and constructor.
pub const BASE_TEMPLATE: &str = "client/base";

/// Name of the template rendering one wrapper method.
pub const FUNCTION_TEMPLATE: &str = "client/function";

/// Template engine for code generation.
///
/// Wraps Handlebars with the client templates pre-registered.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    ///
    /// # Examples
    ///
    /// ```
    /// use genclient_codegen::template_engine::TemplateEngine;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_client_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_client_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                BASE_TEMPLATE,
                include_str!("../templates/client/base.go.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register client base template: {e}"),
                source: None,
            })?;

        handlebars
            .register_template_string(
                FUNCTION_TEMPLATE,
                include_str!("../templates/client/function.go.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register client function template: {e}"),
                source: None,
            })?;

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable used by the template is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
                source: None,
            })
    }

    /// Registers a custom template.
    ///
    /// Registering under a built-in name replaces that template.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use genclient_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string(
    ///     "custom",
    ///     "// Custom template: {{service}}"
    /// ).unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
                source: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_render_base_template() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "generator": "gen-client",
            "package": "storage",
            "service": "Storage",
            "client_import": "github.com/volcengine/vkectl/pkg/client",
            "package_imports": ["\"example.com/repo/kitex_gen/storage\""],
        });

        let rendered = engine.render(BASE_TEMPLATE, &context).unwrap();

        assert!(rendered.starts_with("// Code generated by gen-client. DO NOT EDIT."));
        assert!(rendered.contains("package storage\n"));
        assert!(rendered.contains("\t\"net/url\""));
        assert!(rendered.contains("\t\"github.com/volcengine/vkectl/pkg/client\""));
        assert!(rendered.contains("\t\"example.com/repo/kitex_gen/storage\""));
        assert!(rendered.contains("type Storage struct {\n\tClient *client.Client\n}"));
        assert!(rendered.contains("return &Storage{Client: c}"));
    }

    #[test]
    fn test_render_function_template_does_not_escape() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "service": "Storage",
            "action": "GetObject",
            "response_type": "*storage.GetObjectResponse",
            "zero_response_expr": "&storage.GetObjectResponse{}",
        });

        let rendered = engine.render(FUNCTION_TEMPLATE, &context).unwrap();

        assert!(rendered.contains(
            "func (p *Storage) GetObject(body string, query url.Values) (r *storage.GetObjectResponse, statusCode int, err error) {"
        ));
        assert!(rendered.contains("\taction := \"GetObject\"\n"));
        assert!(rendered.contains("\tr = &storage.GetObjectResponse{}\n"));
        assert!(!rendered.contains("&amp;"));
        assert!(!rendered.contains("&quot;"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({"service": "Storage"});

        let err = engine.render(FUNCTION_TEMPLATE, &context).unwrap_err();
        assert!(err.is_template_error());
    }

    #[test]
    fn test_render_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("client/missing", &json!({})).unwrap_err();
        assert!(err.is_template_error());
    }

    #[test]
    fn test_register_custom_template() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("custom", "// {{service}}")
            .unwrap();

        let rendered = engine.render("custom", &json!({"service": "Storage"})).unwrap();
        assert_eq!(rendered, "// Storage");
    }

    #[test]
    fn test_register_invalid_template() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template_string("broken", "{{#each items}}");
        assert!(result.unwrap_err().is_template_error());
    }
}
