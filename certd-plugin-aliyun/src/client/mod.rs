//! 阿里云 POP (RPC 风格) API 客户端

mod http;
mod query;
mod sign;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use certd_plugin_api::{
    ApiClient, ApiClientConfig, ApiClientFactory, Credential, ProviderError, ProviderResult,
};

pub(crate) use http::remote_error;
pub(crate) use query::to_query_string;

pub(crate) const PROVIDER_NAME: &str = "aliyun";
/// 空 body 的 SHA256 hash (固定值)
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Signed-request client for one Aliyun product endpoint.
///
/// Authenticates via ACS3-HMAC-SHA256 with Access Key ID/Secret; parameters travel
/// in the query string and the body is empty.
pub struct AcsClient {
    pub(crate) http: Client,
    pub(crate) credential: Credential,
    /// `host[:port]`, as signed in the `host` header
    pub(crate) host: String,
    /// `scheme://host[:port]`
    pub(crate) base_url: String,
    pub(crate) api_version: String,
}

impl AcsClient {
    /// Creates a client with default timeouts.
    pub fn new(config: ApiClientConfig) -> ProviderResult<Self> {
        AcsClientFactory::default().build_client(config)
    }
}

impl std::fmt::Debug for AcsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcsClient")
            .field("credential", &self.credential)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

/// Builds [`AcsClient`]s sharing one connection pool.
///
/// # Construction
///
/// ```rust,no_run
/// use std::time::Duration;
/// use certd_plugin_aliyun::AcsClientFactory;
///
/// let factory = AcsClientFactory::builder()
///     .request_timeout(Duration::from_secs(60))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct AcsClientFactory {
    http: Client,
}

/// Builder for [`AcsClientFactory`] with configurable timeouts.
pub struct AcsClientFactoryBuilder {
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl AcsClientFactoryBuilder {
    fn new() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Set the TCP connect timeout (default: 10s).
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the whole-request timeout (default: 30s).
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the factory.
    pub fn build(self) -> ProviderResult<AcsClientFactory> {
        let http = Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| ProviderError::NetworkError {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(AcsClientFactory { http })
    }
}

impl AcsClientFactory {
    /// Returns a builder for customizing timeouts.
    pub fn builder() -> AcsClientFactoryBuilder {
        AcsClientFactoryBuilder::new()
    }

    /// Build a concrete client (the trait method returns it type-erased).
    pub fn build_client(&self, config: ApiClientConfig) -> ProviderResult<AcsClient> {
        let (host, base_url) = parse_endpoint(&config.endpoint)?;
        Ok(AcsClient {
            http: self.http.clone(),
            credential: config.credential,
            host,
            base_url,
            api_version: config.api_version,
        })
    }
}

impl Default for AcsClientFactory {
    fn default() -> Self {
        // 默认配置下 reqwest 仅在 TLS 后端初始化失败时报错
        Self {
            http: Client::new(),
        }
    }
}

impl ApiClientFactory for AcsClientFactory {
    fn build(&self, config: ApiClientConfig) -> ProviderResult<Arc<dyn ApiClient>> {
        Ok(Arc::new(self.build_client(config)?))
    }
}

/// Split an endpoint URL into the signed host and the request base URL.
///
/// A bare host (`alidns.aliyuncs.com`) is taken as HTTPS.
fn parse_endpoint(endpoint: &str) -> ProviderResult<(String, String)> {
    let invalid = |detail: String| ProviderError::InvalidParameter {
        provider: PROVIDER_NAME.to_string(),
        raw_code: None,
        param: "endpoint".to_string(),
        detail,
    };

    let with_scheme = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    };
    let url = Url::parse(&with_scheme).map_err(|e| invalid(format!("{endpoint}: {e}")))?;
    let host = url
        .host_str()
        .ok_or_else(|| invalid(format!("{endpoint}: missing host")))?;
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    let base_url = format!("{}://{host}", url.scheme());
    Ok((host, base_url))
}
