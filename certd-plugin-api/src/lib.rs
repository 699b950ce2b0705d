//! # certd-plugin-api
//!
//! Contracts between the certd host and its provider plugins.
//!
//! The host owns credential storage, the signed-request transport and the task
//! log; plugins receive them through a [`PluginContext`] and implement one of:
//!
//! - [`DnsRecordProvider`] — create/remove DNS records for ACME DNS-01 challenges;
//! - [`DeployTask`] — push an issued certificate to a cloud service.
//!
//! Both expose static metadata ([`PluginDefine`]) describing their inputs for the
//! host UI.
//!
//! ## Error Handling
//!
//! Plugin operations return [`PluginResult<T>`]:
//!
//! - [`PluginError::CredentialError`] — access resolution or authentication failed
//! - [`PluginError::DomainNotFound`] — no registered domain owns the record name
//! - [`PluginError::Provider`] — any other remote failure, with the remote code and message
//!
//! Nothing is retried; every failure propagates to the invoking workflow.

mod context;
mod error;
mod traits;
mod types;
pub mod utils;

pub use context::PluginContext;
pub use error::{PluginError, PluginResult, ProviderError, ProviderResult};
pub use traits::{
    AccessStore, ApiClient, ApiClientConfig, ApiClientFactory, DeployTask, DnsRecordProvider,
    HttpMethod, InMemoryAccessStore, LogFacade, PluginLogger, RequestOptions,
};
pub use types::{
    CertificateBundle, ComponentHint, CreateRecordRequest, Credential, DomainRecord, FieldType,
    InputField, PluginDefine, RemoveRecordRequest, SelectOption, TaskInput,
};
