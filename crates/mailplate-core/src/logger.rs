use std::sync::Arc;

/// Logging capability a host attaches to a renderer after construction.
///
/// Renderers only ever observe through this trait; a missing logger turns
/// every call into a no-op.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards to the `tracing` macros under the `mailplate` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "mailplate", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "mailplate", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "mailplate", "{message}");
    }
}

/// Optional logger slot held by renderers.
#[derive(Clone, Default)]
pub(crate) struct LoggerSlot(Option<Arc<dyn Logger>>);

impl LoggerSlot {
    pub(crate) fn set(&mut self, logger: Arc<dyn Logger>) {
        self.0 = Some(logger);
    }

    pub(crate) fn info(&self, message: &str) {
        if let Some(logger) = &self.0 {
            logger.info(message);
        }
    }

    pub(crate) fn error(&self, message: &str) {
        if let Some(logger) = &self.0 {
            logger.error(message);
        }
    }
}

impl std::fmt::Debug for LoggerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0.is_some() { "Some(<logger>)" } else { "None" })
    }
}
