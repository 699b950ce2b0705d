//! Error types shared by all plugins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced while talking to a cloud provider API.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Remote failures first surface as [`Api`](Self::Api) (the raw `{code, message}` pair the
/// remote returned) and are then refined by the provider's error mapper into one of the
/// more specific variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The access key was rejected by the remote API.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Remote error code, if the error came from the remote API.
        #[serde(default)]
        raw_code: Option<String>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A DNS record with the same name, type and value already exists.
    RecordExists {
        /// Provider that produced the error.
        provider: String,
        /// Remote error code, if the error came from the remote API.
        #[serde(default)]
        raw_code: Option<String>,
        /// Name of the conflicting record.
        record_name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified DNS record was not found.
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Remote error code, if the error came from the remote API.
        #[serde(default)]
        raw_code: Option<String>,
        /// ID of the record that was not found.
        record_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Remote error code, if the error came from the remote API.
        #[serde(default)]
        raw_code: Option<String>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected by the remote API.
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Remote error code, if the error came from the remote API.
        #[serde(default)]
        raw_code: Option<String>,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize request parameters.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// Raw error reported by the remote API, not yet mapped to a specific variant.
    Api {
        /// Provider that produced the error.
        provider: String,
        /// Remote error code, if the response carried one.
        raw_code: Option<String>,
        /// Remote error message.
        raw_message: String,
    },

    /// The call returned, but the response carries no success indicator.
    UnsuccessfulResponse {
        /// Provider that produced the error.
        provider: String,
        /// Action that was called.
        action: String,
        /// What was missing or wrong in the response.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Remote error code carried by this error, if any.
    pub fn raw_code(&self) -> Option<&str> {
        match self {
            Self::Api { raw_code, .. }
            | Self::Unknown { raw_code, .. }
            | Self::InvalidCredentials { raw_code, .. }
            | Self::RecordExists { raw_code, .. }
            | Self::RecordNotFound { raw_code, .. }
            | Self::PermissionDenied { raw_code, .. }
            | Self::InvalidParameter { raw_code, .. } => raw_code.as_deref(),
            _ => None,
        }
    }

    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::PermissionDenied { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_code,
                raw_message,
            } => {
                write!(f, "[{provider}] Invalid credentials{}", CodeTag(raw_code.as_deref()))?;
                if let Some(msg) = raw_message {
                    write!(f, ": {msg}")?;
                }
                Ok(())
            }
            Self::RecordExists {
                provider,
                raw_code,
                record_name,
                ..
            } => {
                write!(
                    f,
                    "[{provider}] Record '{record_name}' already exists{}",
                    CodeTag(raw_code.as_deref())
                )
            }
            Self::RecordNotFound {
                provider,
                raw_code,
                record_id,
                ..
            } => {
                write!(
                    f,
                    "[{provider}] Record '{record_id}' not found{}",
                    CodeTag(raw_code.as_deref())
                )
            }
            Self::PermissionDenied {
                provider,
                raw_code,
                raw_message,
            } => {
                write!(f, "[{provider}] Permission denied{}", CodeTag(raw_code.as_deref()))?;
                if let Some(msg) = raw_message {
                    write!(f, ": {msg}")?;
                }
                Ok(())
            }
            Self::InvalidParameter {
                provider,
                raw_code,
                param,
                detail,
            } => {
                write!(
                    f,
                    "[{provider}] Invalid parameter '{param}'{}: {detail}",
                    CodeTag(raw_code.as_deref())
                )
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Api {
                provider,
                raw_code,
                raw_message,
            }
            | Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] {raw_message}")
                }
            }
            Self::UnsuccessfulResponse {
                provider,
                action,
                detail,
            } => {
                write!(f, "[{provider}] {action} failed: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// 远端错误码，存在时显示为 ` (code)`
struct CodeTag<'a>(Option<&'a str>);

impl std::fmt::Display for CodeTag<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(code) => write!(f, " ({code})"),
            None => Ok(()),
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Task-level error surfaced to the invoking workflow.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PluginError {
    /// Access resolution failed, or the remote rejected the credential.
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// No registered domain is a suffix of the requested record name.
    #[error("can not find domain for record: {0}")]
    DomainNotFound(String),

    /// Any other remote API failure.
    #[error("{0}")]
    Provider(ProviderError),
}

impl PluginError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.), used for log levels.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CredentialError(_) | Self::DomainNotFound(_) => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

impl From<ProviderError> for PluginError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidCredentials { .. } => Self::CredentialError(err.to_string()),
            other => Self::Provider(other),
        }
    }
}

/// Plugin-level Result type alias.
pub type PluginResult<T> = std::result::Result<T, PluginError>;
