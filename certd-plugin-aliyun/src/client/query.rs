//! RPC query-string encoding

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write;

use certd_plugin_api::{ProviderError, ProviderResult};

use super::PROVIDER_NAME;

/// RFC3986 URL 编码
pub fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(char::from(byte));
            }
            _ => {
                let _ = write!(result, "%{byte:02X}");
            }
        }
    }
    result
}

/// 将 `serde_json::Value` 展平为 key-value 对 (嵌套对象用 `.` 连接, 数组下标从 1 开始)
pub fn flatten_value(prefix: &str, value: &Value, result: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let new_key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_value(&new_key, v, result);
            }
        }
        Value::Array(arr) => {
            for (i, v) in arr.iter().enumerate() {
                flatten_value(&format!("{prefix}.{}", i + 1), v, result);
            }
        }
        Value::String(s) => {
            result.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            result.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            result.insert(prefix.to_string(), b.to_string());
        }
        Value::Null => {}
    }
}

/// 将参数序列化为按 key 排序的 canonical query string
///
/// # Errors
/// `SerializationError` when `params` is not a JSON object (or null).
pub fn to_query_string(params: &Value) -> ProviderResult<String> {
    if !matches!(params, Value::Object(_) | Value::Null) {
        return Err(ProviderError::SerializationError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("RPC parameters must be an object, got: {params}"),
        });
    }

    let mut flat_map = BTreeMap::new();
    flatten_value("", params, &mut flat_map);

    Ok(flat_map
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&"))
}
