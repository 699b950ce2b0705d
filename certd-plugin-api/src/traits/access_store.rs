//! Access store abstraction

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{PluginError, PluginResult};
use crate::types::Credential;

/// Access store Trait
///
/// Owned by the host framework; plugins only ever read from it.
#[async_trait]
pub trait AccessStore: Send + Sync {
    /// Resolve an access entry into a credential
    ///
    /// # Arguments
    /// * `access_id` - Access entry ID chosen by the user
    ///
    /// # Errors
    /// [`PluginError::CredentialError`] if the ID is unknown or unauthorized.
    async fn get_access(&self, access_id: &str) -> PluginResult<Credential>;
}

/// In-memory access store
///
/// For hosts that preload their credentials, and for tests.
#[derive(Clone, Default)]
pub struct InMemoryAccessStore {
    entries: Arc<RwLock<HashMap<String, Credential>>>,
}

impl InMemoryAccessStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with `(access_id, credential)` pairs
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Credential)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(id, credential)| (id.into(), credential))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Add or replace an entry
    pub async fn insert(&self, access_id: impl Into<String>, credential: Credential) {
        self.entries
            .write()
            .await
            .insert(access_id.into(), credential);
    }

    /// Add or replace an entry from the host's stored access fields
    /// (`accessKeyId` / `accessKeySecret`).
    ///
    /// # Errors
    /// [`PluginError::CredentialError`] if a field is missing or blank; the store is
    /// left unchanged.
    pub async fn insert_fields(
        &self,
        access_id: impl Into<String>,
        fields: &HashMap<String, String>,
    ) -> PluginResult<()> {
        let credential = Credential::from_map(fields)?;
        self.insert(access_id, credential).await;
        Ok(())
    }

    /// Remove an entry
    pub async fn remove(&self, access_id: &str) {
        self.entries.write().await.remove(access_id);
    }
}

#[async_trait]
impl AccessStore for InMemoryAccessStore {
    async fn get_access(&self, access_id: &str) -> PluginResult<Credential> {
        self.entries
            .read()
            .await
            .get(access_id)
            .cloned()
            .ok_or_else(|| PluginError::CredentialError(format!("access not found: {access_id}")))
    }
}
