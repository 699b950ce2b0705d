//! Cloud API client abstraction
//!
//! Signing, transport and any retry policy live behind these traits; plugins only
//! see `request(action, params, options) -> parsed response`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderResult;
use crate::types::Credential;

/// HTTP method used for an RPC call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
}

impl RequestOptions {
    pub const POST: Self = Self {
        method: HttpMethod::Post,
    };
}

/// Everything needed to build a signed-request client for one product endpoint.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub credential: Credential,
    /// Endpoint URL, e.g. `https://alidns.aliyuncs.com`.
    pub endpoint: String,
    /// Product API version, e.g. `2015-01-09`.
    pub api_version: String,
}

impl ApiClientConfig {
    pub fn new(credential: Credential, endpoint: &str, api_version: &str) -> Self {
        Self {
            credential,
            endpoint: endpoint.to_string(),
            api_version: api_version.to_string(),
        }
    }
}

/// Signed RPC client for one product endpoint.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue one RPC call and return the parsed JSON response.
    ///
    /// # Errors
    /// Transport failures surface as `NetworkError`/`Timeout`; errors reported by the
    /// remote surface as [`ProviderError::Api`](crate::ProviderError::Api) carrying the
    /// remote `{code, message}`.
    async fn request(
        &self,
        action: &str,
        params: serde_json::Value,
        options: RequestOptions,
    ) -> ProviderResult<serde_json::Value>;
}

/// Builds [`ApiClient`]s from credentials.
pub trait ApiClientFactory: Send + Sync {
    fn build(&self, config: ApiClientConfig) -> ProviderResult<Arc<dyn ApiClient>>;
}
