//! Plugin contracts implemented by providers and tasks

use async_trait::async_trait;

use crate::error::PluginResult;
use crate::types::{CreateRecordRequest, PluginDefine, RemoveRecordRequest, TaskInput};

/// DNS provider used by the ACME DNS-01 challenge flow.
#[async_trait]
pub trait DnsRecordProvider: Send + Sync {
    /// Static plugin metadata
    fn define() -> PluginDefine
    where
        Self: Sized;

    /// Create a record; returns the remote record ID.
    ///
    /// `Ok(None)` means the remote already holds an identical record.
    async fn create_record(&self, req: &CreateRecordRequest) -> PluginResult<Option<String>>;

    /// Remove a record by its remote ID; returns the ID the remote confirmed.
    async fn remove_record(&self, req: &RemoveRecordRequest) -> PluginResult<String>;
}

/// Certificate deployment step of a pipeline.
#[async_trait]
pub trait DeployTask: Send + Sync {
    /// Task properties as configured by the user
    type Props: Send + Sync;

    /// Static plugin metadata
    fn define() -> PluginDefine
    where
        Self: Sized;

    /// Run the task once. Either the certificate is fully accepted or an error is returned.
    async fn execute(&self, input: TaskInput<'_, Self::Props>) -> PluginResult<()>;
}
