//! Aliyun RPC request execution

use async_trait::async_trait;
use chrono::Utc;
use reqwest::RequestBuilder;
use serde_json::Value;

use certd_plugin_api::{ApiClient, HttpMethod, ProviderError, ProviderResult, RequestOptions};

use super::{AcsClient, EMPTY_BODY_SHA256, PROVIDER_NAME, to_query_string};
use crate::utils::log_sanitizer::truncate_for_log;

/// Send a request and return status code and body text.
///
/// No retry: transport failures surface immediately as `Timeout`/`NetworkError`.
async fn execute_request(
    request_builder: RequestBuilder,
    action: &str,
) -> ProviderResult<(u16, String)> {
    log::debug!("[{PROVIDER_NAME}] POP {action}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::Timeout {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            }
        } else {
            ProviderError::NetworkError {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            }
        }
    })?;

    let status_code = response.status().as_u16();
    log::debug!("[{PROVIDER_NAME}] Response Status: {status_code}");

    let response_text = response
        .text()
        .await
        .map_err(|e| ProviderError::NetworkError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

    log::debug!(
        "[{PROVIDER_NAME}] Response Body: {}",
        truncate_for_log(&response_text)
    );

    Ok((status_code, response_text))
}

/// Extract the remote `{Code, Message}` pair from a POP error body.
pub(crate) fn remote_error(value: &Value) -> Option<ProviderError> {
    let code = value.get("Code").and_then(Value::as_str)?;
    let message = value
        .get("Message")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Some(ProviderError::Api {
        provider: PROVIDER_NAME.to_string(),
        raw_code: Some(code.to_string()),
        raw_message: message.to_string(),
    })
}

#[async_trait]
impl ApiClient for AcsClient {
    async fn request(
        &self,
        action: &str,
        params: Value,
        options: RequestOptions,
    ) -> ProviderResult<Value> {
        // 1. 参数序列化为 query string
        let query_string = to_query_string(&params)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();

        // 2. 签名
        let authorization = self.sign(options.method, action, &query_string, &timestamp, &nonce);

        // 3. 构造 URL
        let url = if query_string.is_empty() {
            format!("{}/", self.base_url)
        } else {
            format!("{}/?{query_string}", self.base_url)
        };

        let builder = match options.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        };
        let request = builder
            .header("Host", &self.host)
            .header("x-acs-action", action)
            .header("x-acs-version", &self.api_version)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization);

        let (status, response_text) = execute_request(request, action).await?;

        // HTTP 4xx/5xx: 尝试解析 JSON 错误体
        if status >= 400 {
            if let Some(err) = serde_json::from_str::<Value>(&response_text)
                .ok()
                .as_ref()
                .and_then(remote_error)
            {
                log::debug!("[{PROVIDER_NAME}] {action} returned {err}");
                return Err(err);
            }
            return Err(ProviderError::NetworkError {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("HTTP {status}: {}", truncate_for_log(&response_text)),
            });
        }

        let value: Value = serde_json::from_str(&response_text).map_err(|e| {
            log::error!("[{PROVIDER_NAME}] JSON parse failed: {e}");
            ProviderError::ParseError {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            }
        })?;

        // 部分接口在 HTTP 200 中返回错误码
        if let Some(err) = remote_error(&value) {
            log::debug!("[{PROVIDER_NAME}] {action} returned {err}");
            return Err(err);
        }

        Ok(value)
    }
}
