use std::sync::Arc;

use crate::config::RendererOptions;
use crate::error::{MailplateError, Result};
use crate::logger::{Logger, LoggerSlot};
use crate::notification::{Notification, RenderContext, RenderedEmail, TemplateContent};
use crate::renderer::{
    build_context, logged, render_source, render_template_content, EmailTemplateRenderer,
};
use crate::template_map::TemplateMap;

const TAG: &str = "InlineTemplateRenderer";

/// Renders notifications whose template references are keys into a
/// [`TemplateMap`], for deployments that ship templates as a bundle rather
/// than as files.
#[derive(Debug, Clone, Default)]
pub struct InlineTemplateRenderer {
    templates: TemplateMap,
    options: RendererOptions,
    logger: LoggerSlot,
}

impl InlineTemplateRenderer {
    pub fn new(templates: TemplateMap) -> Self {
        Self {
            templates,
            options: RendererOptions::default(),
            logger: LoggerSlot::default(),
        }
    }

    pub fn with_options(mut self, options: RendererOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger.set(logger);
        self
    }

    pub fn templates(&self) -> &TemplateMap {
        &self.templates
    }

    fn lookup<'a>(
        &'a self,
        key: Option<&'a str>,
        missing: MailplateError,
        not_found: fn(String) -> MailplateError,
    ) -> Result<(&'a str, &'a str)> {
        let key = key.ok_or(missing)?;
        let source = self
            .templates
            .get(key)
            .ok_or_else(|| not_found(key.to_string()))?;
        Ok((key, source))
    }
}

impl EmailTemplateRenderer for InlineTemplateRenderer {
    fn render(
        &self,
        notification: &Notification,
        context: Option<&RenderContext>,
    ) -> Result<RenderedEmail> {
        let (body_key, body_source) = self.lookup(
            notification.body_ref(),
            MailplateError::MissingBodyTemplate,
            |key| MailplateError::BodyTemplateNotFound { key },
        )?;
        let (subject_key, subject_source) = self.lookup(
            notification.subject_ref(),
            MailplateError::MissingSubjectTemplate,
            |key| MailplateError::SubjectTemplateNotFound { key },
        )?;

        let context = build_context(context);

        let body = logged(
            &self.logger,
            &format!("[{TAG}] Error rendering body template"),
            || render_source(body_key, body_source, &context, &self.options),
        )?;

        let subject = logged(
            &self.logger,
            &format!("[{TAG}] Error rendering subject template"),
            || render_source(subject_key, subject_source, &context, &self.options),
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
