//! Helpers shared by the Aliyun plugins

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use certd_plugin_api::{ApiClient, PluginResult, ProviderError, RequestOptions};

use crate::client::PROVIDER_NAME;
use crate::error::{ErrorContext, map_error};

/// All RPC calls target this region.
pub(crate) const REGION_ID: &str = "cn-hangzhou";
/// Access type accepted by the plugins' `accessId` inputs.
pub(crate) const ACCESS_TYPE: &str = "aliyun";

/// Issue one POST call and return the raw response, with remote errors mapped.
pub(crate) async fn call_raw<P: Serialize>(
    client: &dyn ApiClient,
    action: &str,
    params: &P,
    ctx: ErrorContext,
) -> PluginResult<Value> {
    let params = serde_json::to_value(params).map_err(|e| ProviderError::SerializationError {
        provider: PROVIDER_NAME.to_string(),
        detail: e.to_string(),
    })?;
    client
        .request(action, params, RequestOptions::POST)
        .await
        .map_err(|e| {
            let err = map_error(e, ctx);
            if err.is_expected() {
                log::warn!("[{PROVIDER_NAME}] {action}: {err}");
            } else {
                log::error!("[{PROVIDER_NAME}] {action}: {err}");
            }
            err.into()
        })
}

/// Issue one POST call and decode the response into `T`.
pub(crate) async fn call<T: DeserializeOwned, P: Serialize>(
    client: &dyn ApiClient,
    action: &str,
    params: &P,
    ctx: ErrorContext,
) -> PluginResult<T> {
    let value = call_raw(client, action, params, ctx).await?;
    serde_json::from_value(value).map_err(|e| {
        ProviderError::ParseError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("{action}: {e}"),
        }
        .into()
    })
}

/// Hosts store access ids as strings or numbers; both are accepted.
pub(crate) fn deserialize_access_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AccessId {
        String(String),
        Number(u64),
    }

    Ok(match AccessId::deserialize(deserializer)? {
        AccessId::String(s) => s,
        AccessId::Number(n) => n.to_string(),
    })
}
