//! Host and plugin contracts

mod access_store;
mod api_client;
mod logger;
mod plugin;

pub use access_store::{AccessStore, InMemoryAccessStore};
pub use api_client::{ApiClient, ApiClientConfig, ApiClientFactory, HttpMethod, RequestOptions};
pub use logger::{LogFacade, PluginLogger};
pub use plugin::{DeployTask, DnsRecordProvider};
