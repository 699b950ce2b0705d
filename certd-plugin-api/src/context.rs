//! Capabilities injected into every plugin instance

use std::sync::Arc;

use crate::error::PluginResult;
use crate::traits::{
    AccessStore, ApiClient, ApiClientConfig, ApiClientFactory, LogFacade, PluginLogger,
};
use crate::types::Credential;

/// 插件上下文 - 持有所有宿主依赖
///
/// The host builds one context and hands it to each provider or task it constructs.
#[derive(Clone)]
pub struct PluginContext {
    /// Access store
    pub access_store: Arc<dyn AccessStore>,
    /// Signed-request client factory
    pub client_factory: Arc<dyn ApiClientFactory>,
    /// User-visible task logger
    pub logger: Arc<dyn PluginLogger>,
}

impl PluginContext {
    #[must_use]
    pub fn new(
        access_store: Arc<dyn AccessStore>,
        client_factory: Arc<dyn ApiClientFactory>,
        logger: Arc<dyn PluginLogger>,
    ) -> Self {
        Self {
            access_store,
            client_factory,
            logger,
        }
    }

    /// Context logging through the `log` facade.
    #[must_use]
    pub fn with_log_facade(
        access_store: Arc<dyn AccessStore>,
        client_factory: Arc<dyn ApiClientFactory>,
    ) -> Self {
        Self::new(access_store, client_factory, Arc::new(LogFacade::default()))
    }

    /// Resolve an access entry.
    pub async fn resolve_credential(&self, access_id: &str) -> PluginResult<Credential> {
        self.access_store.get_access(access_id).await
    }

    /// Build a client for one product endpoint.
    pub fn build_client(
        &self,
        credential: Credential,
        endpoint: &str,
        api_version: &str,
    ) -> PluginResult<Arc<dyn ApiClient>> {
        let config = ApiClientConfig::new(credential, endpoint, api_version);
        Ok(self.client_factory.build(config)?)
    }

    pub fn log_info(&self, message: &str) {
        self.logger.info(message);
    }

    pub fn log_error(&self, message: &str) {
        self.logger.error(message);
    }
}
