use serde::{Deserialize, Serialize};

/// A DNS record as held by the remote provider.
///
/// The remote service is the system of record; `record_id` is assigned on creation
/// and is required for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Registered parent domain (e.g. `example.com`).
    pub domain_name: String,
    /// Record label relative to `domain_name` (e.g. `_acme-challenge`).
    pub rr: String,
    /// Record type (`TXT`, `A`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value.
    pub value: String,
    /// Remote record identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// TTL in seconds, when the remote reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Request to create a record under whichever registered domain owns `full_record`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    /// Fully-qualified record name (e.g. `_acme-challenge.foo.example.com`).
    pub full_record: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value (the challenge digest for DNS-01).
    pub value: String,
}

impl CreateRecordRequest {
    pub fn txt(full_record: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            full_record: full_record.into(),
            record_type: "TXT".to_string(),
            value: value.into(),
        }
    }
}

/// Request to remove a previously created record.
///
/// Only `record` (the remote identifier) keys the deletion; the other fields are
/// informational and used for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRecordRequest {
    /// Fully-qualified record name.
    pub full_record: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value.
    pub value: String,
    /// Remote record identifier returned by `create_record`.
    pub record: String,
}
