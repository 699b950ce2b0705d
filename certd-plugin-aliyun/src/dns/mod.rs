//! 阿里云 DNS Provider

mod provider;
mod types;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use certd_plugin_api::{ApiClient, InputField, PluginContext, PluginDefine, PluginResult};

use crate::common::{ACCESS_TYPE, deserialize_access_id};

pub(crate) const ALIDNS_ENDPOINT: &str = "https://alidns.aliyuncs.com";
pub(crate) const ALIDNS_VERSION: &str = "2015-01-09";
/// 阿里云 API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// Properties of the Aliyun DNS provider as configured by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsProviderProps {
    /// Access store entry holding the Aliyun access key.
    #[serde(deserialize_with = "deserialize_access_id")]
    pub access_id: String,
}

/// Alidns-backed DNS provider for ACME DNS-01 challenges.
///
/// Constructed fresh for every challenge: the credential is resolved and the
/// client built once per instance, nothing else is cached.
///
/// # Construction
///
/// ```rust,no_run
/// # use certd_plugin_api::{PluginContext, PluginResult};
/// use certd_plugin_aliyun::{AliyunDnsProvider, DnsProviderProps};
///
/// # async fn example(ctx: PluginContext) -> PluginResult<()> {
/// let props = DnsProviderProps { access_id: "1".to_string() };
/// let provider = AliyunDnsProvider::new(ctx, &props).await?;
/// # Ok(())
/// # }
/// ```
pub struct AliyunDnsProvider {
    pub(crate) ctx: PluginContext,
    pub(crate) client: Arc<dyn ApiClient>,
}

impl AliyunDnsProvider {
    /// Resolve the access entry and build the Alidns client.
    pub async fn new(ctx: PluginContext, props: &DnsProviderProps) -> PluginResult<Self> {
        let credential = ctx.resolve_credential(&props.access_id).await?;
        let client = ctx.build_client(credential, ALIDNS_ENDPOINT, ALIDNS_VERSION)?;
        Ok(Self { ctx, client })
    }

    pub(crate) fn definition() -> PluginDefine {
        PluginDefine {
            name: "aliyun".to_string(),
            label: "Aliyun".to_string(),
            desc: String::new(),
            input: vec![
                InputField::access("accessId", "Access", ACCESS_TYPE)
                    .with_desc("Requires an access of type aliyun"),
            ],
        }
    }
}
