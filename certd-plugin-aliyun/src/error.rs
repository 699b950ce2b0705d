//! 阿里云错误映射

use certd_plugin_api::ProviderError;

/// 错误上下文信息
/// 用于在映射错误时补充请求侧信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录名称（用于 `RecordExists`）
    pub record_name: Option<String>,
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
    /// 域名（用于域名相关的参数错误）
    pub domain: Option<String>,
}

/// 将原始 [`ProviderError::Api`] 映射为具体错误类型，其他错误原样返回
///
/// Alidns 与 CDN 共用同一张错误码表（两者的鉴权、权限、域名错误码一致），
/// CDN 证书相关错误码单独列出。映射后的错误保留原始错误码。
/// 参考:
/// - <https://api.aliyun.com/document/Alidns/2015-01-09/errorCode>
/// - <https://api.aliyun.com/document/Cdn/2018-05-10/errorCode>
pub(crate) fn map_error(err: ProviderError, context: ErrorContext) -> ProviderError {
    let (provider, raw_code, raw_message) = match err {
        ProviderError::Api {
            provider,
            raw_code,
            raw_message,
        } => (provider, raw_code, raw_message),
        other => return other,
    };

    match raw_code.clone().as_deref() {
        // ============ 认证错误 ============
        Some(
            "InvalidAccessKeyId.NotFound"
            | "InvalidAccessKeyId.Inactive"
            | "SignatureDoesNotMatch"
            | "IncompleteSignature",
        ) => ProviderError::InvalidCredentials {
            provider,
            raw_code,
            raw_message: Some(raw_message),
        },

        // ============ 记录已存在 ============
        Some("DomainRecordDuplicate" | "DomainRecordConflict") => ProviderError::RecordExists {
            provider,
            raw_code,
            record_name: context.record_name.unwrap_or_default(),
            raw_message: Some(raw_message),
        },

        // ============ 记录不存在 ============
        Some("DomainRecordNotBelongToUser" | "InvalidRecordId.NotFound") => {
            ProviderError::RecordNotFound {
                provider,
                raw_code,
                record_id: context.record_id.unwrap_or_default(),
                raw_message: Some(raw_message),
            }
        }

        // ============ 权限/操作被拒绝 ============
        Some(
            "Forbidden"
            | "Forbidden.RAM"
            | "Forbidden.RiskControl"
            | "OperationDomain.NoPermission"
            | "IncorrectDomainUser"
            | "IllegalUser",
        ) => ProviderError::PermissionDenied {
            provider,
            raw_code,
            raw_message: Some(raw_message),
        },

        // ============ 参数无效 - 域名 ============
        Some(
            "InvalidDomainName.NoExist"
            | "InvalidDomainName.Format"
            | "InvalidDomain.NotFound"
            | "InvalidDomain.Offline",
        ) => ProviderError::InvalidParameter {
            provider,
            raw_code,
            param: "domain".to_string(),
            detail: match context.domain {
                Some(domain) => format!("{domain}: {raw_message}"),
                None => raw_message,
            },
        },

        // ============ 参数无效 - 主机记录 ============
        Some("InvalidRR.Format" | "InvalidRR.Length" | "InvalidRR.RrEmpty") => {
            ProviderError::InvalidParameter {
                provider,
                raw_code,
                param: "rr".to_string(),
                detail: raw_message,
            }
        }

        // ============ 参数无效 - 记录值 ============
        Some("InvalidRR.TypeEmpty" | "SubDomainInvalid.Type" | "SubDomainInvalid.Value") => {
            ProviderError::InvalidParameter {
                provider,
                raw_code,
                param: "value".to_string(),
                detail: raw_message,
            }
        }

        // ============ 参数无效 - CDN 证书 ============
        Some("Certificate.FormatError" | "Certificate.KeyNull") => {
            ProviderError::InvalidParameter {
                provider,
                raw_code,
                param: "certificate".to_string(),
                detail: raw_message,
            }
        }

        // ============ 其他错误 fallback ============
        _ => ProviderError::Unknown {
            provider,
            raw_code,
            raw_message,
        },
    }
}
