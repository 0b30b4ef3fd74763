use std::sync::Arc;

use crate::config::RendererOptions;
use crate::error::{MailplateError, Result};
use crate::logger::{Logger, LoggerSlot};
use crate::notification::{Notification, RenderContext, RenderedEmail, TemplateContent};
use crate::renderer::{
    build_context, logged, read_template, render_source, render_template_content,
    EmailTemplateRenderer,
};

const TAG: &str = "FileTemplateRenderer";

/// Renders notifications whose template references are filesystem paths.
///
/// Template files are read and compiled on every call; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct FileTemplateRenderer {
    options: RendererOptions,
    logger: LoggerSlot,
}

impl FileTemplateRenderer {
    pub fn new(options: RendererOptions) -> Self {
        Self {
            options,
            logger: LoggerSlot::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger.set(logger);
        self
    }

    pub fn options(&self) -> &RendererOptions {
        &self.options
    }
}

impl EmailTemplateRenderer for FileTemplateRenderer {
    fn render(
        &self,
        notification: &Notification,
        context: Option<&RenderContext>,
    ) -> Result<RenderedEmail> {
        let body_path = notification
            .body_ref()
            .ok_or(MailplateError::MissingBodyTemplate)?;
        let subject_path = notification
            .subject_ref()
            .ok_or(MailplateError::MissingSubjectTemplate)?;

        let context = build_context(context);

        let body_path = self.options.resolve_path(body_path);
        let body_source = read_template(&body_path)?;
        let body_name = body_path.to_string_lossy();
        let body = logged(
            &self.logger,
            &format!("[{TAG}] Error rendering body template {body_name}"),
            || render_source(&body_name, &body_source, &context, &self.options),
        )?;

        let subject_path = self.options.resolve_path(subject_path);
        let subject_source = read_template(&subject_path)?;
        let subject_name = subject_path.to_string_lossy();
        let subject = logged(
            &self.logger,
            &format!("[{TAG}] Error rendering subject template {subject_name}"),
            || render_source(&subject_name, &subject_source, &context, &self.options),
        )?;

        Ok(RenderedEmail { subject, body })
    }

    fn render_from_template_content(
        &self,
        notification: &Notification,
        content: &TemplateContent,
        context: Option<&RenderContext>,
    ) -> Result<RenderedEmail> {
        render_template_content(
            TAG,
            &self.logger,
            &self.options,
            notification,
            content,
            context,
        )
    }

    fn inject_logger(&mut self, logger: Arc<dyn Logger>) {
        self.logger.set(logger);
    }
}
