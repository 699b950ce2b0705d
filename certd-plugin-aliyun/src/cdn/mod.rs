//! 阿里云 CDN 证书部署

mod task;

use serde::{Deserialize, Serialize};

use certd_plugin_api::{InputField, PluginContext, PluginDefine, SelectOption};

use crate::common::{ACCESS_TYPE, deserialize_access_id};

pub use task::cert_label;

pub(crate) const CDN_ENDPOINT: &str = "https://cdn.aliyuncs.com";
pub(crate) const CDN_VERSION: &str = "2018-05-10";
pub(crate) const SET_CERT_ACTION: &str = "SetDomainServerCertificate";

/// Where the CDN takes the certificate from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertSource {
    /// Certificate and key are uploaded with the call.
    #[default]
    #[serde(rename = "upload")]
    Upload,
    /// Certificate already uploaded to the Aliyun certificate store (CAS).
    #[serde(rename = "cas")]
    CertificateStore,
}

impl CertSource {
    /// Wire value of `CertType`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::CertificateStore => "cas",
        }
    }
}

/// Properties of the CDN deployment task as configured by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployToCdnProps {
    /// Accelerated domain whose HTTPS certificate is replaced.
    pub domain_name: String,
    /// Prefix of the uploaded certificate's name; defaults to the domain name.
    #[serde(default)]
    pub cert_name: Option<String>,
    #[serde(default)]
    pub from: CertSource,
    /// Access store entry holding the Aliyun access key.
    #[serde(deserialize_with = "deserialize_access_id")]
    pub access_id: String,
}

/// Deploys an issued certificate as the HTTPS certificate of an Aliyun CDN domain.
pub struct DeployCertToAliyunCdn {
    pub(crate) ctx: PluginContext,
}

impl DeployCertToAliyunCdn {
    pub fn new(ctx: PluginContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn definition() -> PluginDefine {
        PluginDefine {
            name: "deployCertToAliyunCDN".to_string(),
            label: "Deploy to Aliyun CDN".to_string(),
            desc: String::new(),
            input: vec![
                InputField::text("domainName", "CDN domain")
                    .required()
                    .with_placeholder("CDN accelerated domain"),
                InputField::text("certName", "Certificate name")
                    .with_placeholder("Used as prefix of the uploaded certificate name"),
                InputField::select(
                    "from",
                    "Certificate source",
                    vec![
                        SelectOption {
                            value: CertSource::Upload.as_str().to_string(),
                            label: "Upload directly".to_string(),
                            title: None,
                        },
                        SelectOption {
                            value: CertSource::CertificateStore.as_str().to_string(),
                            label: "From certificate store".to_string(),
                            title: Some("Requires uploadCertToAliyun as a previous task".to_string()),
                        },
                    ],
                )
                .required()
                .with_default(CertSource::Upload.as_str())
                .with_placeholder("Certificate source")
                .with_desc(
                    "When taking the certificate from the store, run \"upload certificate to Aliyun\" first",
                ),
                InputField::access("accessId", "Access", ACCESS_TYPE),
            ],
        }
    }
}
