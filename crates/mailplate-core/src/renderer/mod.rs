pub mod file;
pub mod inline;

use std::path::Path;
use std::sync::Arc;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::config::RendererOptions;
use crate::error::{MailplateError, Result};
use crate::logger::{Logger, LoggerSlot};
use crate::notification::{non_empty, Notification, RenderContext, RenderedEmail, TemplateContent};

pub use file::FileTemplateRenderer;
pub use inline::InlineTemplateRenderer;

/// Rendering interface a notification dispatcher drives.
pub trait EmailTemplateRenderer: Send + Sync {
    /// Render the templates the notification references.
    fn render(
        &self,
        notification: &Notification,
        context: Option<&RenderContext>,
    ) -> Result<RenderedEmail>;

    /// Render literal template sources, bypassing path or key resolution.
    fn render_from_template_content(
        &self,
        notification: &Notification,
        content: &TemplateContent,
        context: Option<&RenderContext>,
    ) -> Result<RenderedEmail>;

    /// Attach a logger. Replaces any previously injected one.
    fn inject_logger(&mut self, logger: Arc<dyn Logger>);
}

/// Build the engine context from JSON bindings. A missing context is empty.
pub fn build_context(context: Option<&RenderContext>) -> Value {
    match context {
        Some(bindings) => Value::from_serialize(bindings),
        None => Value::from_serialize(RenderContext::new()),
    }
}

/// Undefined variables print as empty text; attribute access on them fails.
fn engine<'source>(options: &RendererOptions) -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Lenient);
    let escape = if options.autoescape {
        AutoEscape::Html
    } else {
        AutoEscape::None
    };
    env.set_auto_escape_callback(move |_name: &str| escape.clone());
    env
}

/// Compile `source` as a standalone unit and render it.
pub(crate) fn render_source(
    name: &str,
    source: &str,
    context: &Value,
    options: &RendererOptions,
) -> std::result::Result<String, minijinja::Error> {
    let mut env = engine(options);
    env.add_template(name, source)?;
    let template = env.get_template(name)?;
    template.render(context)
}

/// Read a template file verbatim.
pub(crate) fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MailplateError::Io {
        context: format!("reading template {}", path.display()),
        source: e,
    })
}

/// Compile `source` without rendering, to surface syntax errors.
pub(crate) fn compile_source(name: &str, source: &str) -> std::result::Result<(), minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(name, source)
}

/// Run a render step, reporting a failure on the logger's error channel
/// before handing it back unchanged.
pub(crate) fn logged<T>(
    logger: &LoggerSlot,
    failure: &str,
    step: impl FnOnce() -> std::result::Result<T, minijinja::Error>,
) -> Result<T> {
    step().map_err(|e| {
        logger.error(failure);
        MailplateError::Template(e)
    })
}

/// Literal-content rendering shared by both renderers.
///
/// The body is always compiled, so an empty body renders to an empty string;
/// only the subject is required.
pub(crate) fn render_template_content(
    tag: &str,
    logger: &LoggerSlot,
    options: &RendererOptions,
    notification: &Notification,
    content: &TemplateContent,
    context: Option<&RenderContext>,
) -> Result<RenderedEmail> {
    logger.info(&format!(
        "[{tag}] Rendering template from content for notification {}",
        notification.id
    ));

    let context = build_context(context);

    let body = logged(
        logger,
        &format!("[{tag}] Error rendering body template content"),
        || render_source("body", &content.body, &context, options),
    )?;

    let subject_source =
        non_empty(content.subject.as_deref()).ok_or(MailplateError::MissingSubjectTemplate)?;

    let subject = logged(
        logger,
        &format!("[{tag}] Error rendering subject template content"),
        || render_source("subject", subject_source, &context, options),
    )?;

    Ok(RenderedEmail { subject, body })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn bindings(value: serde_json::Value) -> RenderContext {
        value.as_object().cloned().unwrap()
    }

    fn plain() -> RendererOptions {
        RendererOptions {
            autoescape: false,
            ..RendererOptions::default()
        }
    }

    #[test]
    fn build_context_from_bindings() {
        let ctx = bindings(json!({"name": "John", "count": 3}));
        let rendered = render_source(
            "t",
            "{{ name }} has {{ count }}",
            &build_context(Some(&ctx)),
            &RendererOptions::default(),
        )
        .unwrap();
        assert_eq!(rendered, "John has 3");
    }

    #[test]
    fn undefined_variables_render_empty() {
        for context in [build_context(None), build_context(Some(&RenderContext::new()))] {
            let rendered =
                render_source("t", "Hello {{ name }}!", &context, &RendererOptions::default())
                    .unwrap();
            assert_eq!(rendered, "Hello !");
        }
    }

    #[test]
    fn attribute_access_on_undefined_fails() {
        let result = render_source(
            "t",
            "{{ undefined_variable.non_existent_property }}",
            &build_context(None),
            &RendererOptions::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn context_values_are_escaped_by_default() {
        let ctx = bindings(json!({"name": "<script>x</script>"}));
        let rendered = render_source(
            "body",
            "<h1>Hello {{ name }}!</h1>",
            &build_context(Some(&ctx)),
            &RendererOptions::default(),
        )
        .unwrap();
        assert!(rendered.starts_with("<h1>Hello &lt;script&gt;x&lt;"));
        assert!(!rendered.contains("<script>"));
    }

    #[test]
    fn autoescape_can_be_turned_off() {
        let ctx = bindings(json!({"name": "<b>John</b>"}));
        let rendered =
            render_source("page.html", "{{ name }}", &build_context(Some(&ctx)), &plain()).unwrap();
        assert_eq!(rendered, "<b>John</b>");
    }

    #[test]
    fn compile_source_reports_syntax_errors() {
        assert!(compile_source("ok", "Hi {{ name }}").is_ok());
        assert!(compile_source("bad", "Hi {{ name ").is_err());
    }
}
