//! Task logger abstraction

/// Logger visible to the user running a pipeline.
///
/// Fire-and-forget: implementations must not fail.
pub trait PluginLogger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

/// Default logger forwarding to the `log` facade.
#[derive(Debug, Clone)]
pub struct LogFacade {
    target: String,
}

impl LogFacade {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new("certd::plugin")
    }
}

impl PluginLogger for LogFacade {
    fn info(&self, message: &str) {
        log::info!(target: &self.target, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: &self.target, "{message}");
    }
}
