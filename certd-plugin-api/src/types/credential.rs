use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;

/// Access key pair resolved from the host's access store.
///
/// Read-only to plugins; re-fetched every time a component is constructed.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Access Key ID.
    #[serde(alias = "accessKeyId")]
    pub key_id: String,
    /// Access Key Secret.
    #[serde(alias = "accessKeySecret")]
    pub key_secret: String,
}

impl Credential {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// Construct a credential from a flat key-value map (`accessKeyId` / `accessKeySecret`).
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::CredentialError`] if a field is missing or blank.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, PluginError> {
        Ok(Self {
            key_id: Self::get_required_field(map, "accessKeyId", "Access Key ID")?,
            key_secret: Self::get_required_field(map, "accessKeySecret", "Access Key Secret")?,
        })
    }

    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, PluginError> {
        match map.get(key) {
            None => Err(PluginError::CredentialError(format!(
                "Missing required field: {label}"
            ))),
            Some(v) if v.trim().is_empty() => Err(PluginError::CredentialError(format!(
                "Field must not be empty: {label}"
            ))),
            Some(v) => Ok(v.clone()),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key_id", &self.key_id)
            .field("key_secret", &"***")
            .finish()
    }
}
