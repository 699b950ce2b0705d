//! In-crate test doubles for the host capabilities

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use certd_plugin_api::{
    ApiClient, ApiClientConfig, ApiClientFactory, Credential, InMemoryAccessStore, PluginContext,
    PluginLogger, ProviderError, ProviderResult, RequestOptions,
};

type Script = HashMap<String, VecDeque<ProviderResult<Value>>>;

/// Records every call and answers with responses scripted per action.
#[derive(Clone, Default)]
pub(crate) struct MockApiClient {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response of `action`.
    pub fn respond(&self, action: &str, response: ProviderResult<Value>) {
        self.script
            .lock()
            .unwrap()
            .entry(action.to_string())
            .or_default()
            .push_back(response);
    }

    /// `(action, params)` of every call so far, in order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, action: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| a == action)
            .count()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn request(
        &self,
        action: &str,
        params: Value,
        _options: RequestOptions,
    ) -> ProviderResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((action.to_string(), params));
        self.script
            .lock()
            .unwrap()
            .get_mut(action)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(ProviderError::Api {
                    provider: "mock".to_string(),
                    raw_code: Some("NotScripted".to_string()),
                    raw_message: format!("no response scripted for {action}"),
                })
            })
    }
}

/// Hands out the same [`MockApiClient`] and records the requested configs.
#[derive(Clone)]
pub(crate) struct MockClientFactory {
    client: MockApiClient,
    configs: Arc<Mutex<Vec<ApiClientConfig>>>,
}

impl MockClientFactory {
    pub fn configs(&self) -> Vec<ApiClientConfig> {
        self.configs.lock().unwrap().clone()
    }
}

impl ApiClientFactory for MockClientFactory {
    fn build(&self, config: ApiClientConfig) -> ProviderResult<Arc<dyn ApiClient>> {
        self.configs.lock().unwrap().push(config);
        Ok(Arc::new(self.client.clone()))
    }
}

#[derive(Default)]
pub(crate) struct CapturingLogger {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl CapturingLogger {
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl PluginLogger for CapturingLogger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Context whose access store holds entry `"1"`, backed by `client`.
pub(crate) fn context_with(
    client: MockApiClient,
) -> (PluginContext, Arc<CapturingLogger>, MockClientFactory) {
    let store = InMemoryAccessStore::from_entries([("1", Credential::new("AK", "SK"))]);
    let factory = MockClientFactory {
        client,
        configs: Arc::default(),
    };
    let logger = Arc::new(CapturingLogger::default());
    let ctx = PluginContext::new(Arc::new(store), Arc::new(factory.clone()), logger.clone());
    (ctx, logger, factory)
}
