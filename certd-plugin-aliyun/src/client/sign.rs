//! 阿里云 ACS3-HMAC-SHA256 签名

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use certd_plugin_api::HttpMethod;

use super::{AcsClient, EMPTY_BODY_SHA256};

type HmacSha256 = Hmac<Sha256>;

const SIGNED_HEADERS: &str =
    "host;x-acs-action;x-acs-content-sha256;x-acs-date;x-acs-signature-nonce;x-acs-version";

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC 接受任意长度的 key, new_from_slice 不会失败
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        return Vec::new();
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

impl AcsClient {
    /// 生成 ACS3-HMAC-SHA256 Authorization 头
    /// 参考: <https://www.alibabacloud.com/help/zh/sdk/product-overview/v3-request-structure-and-signature>
    pub(crate) fn sign(
        &self,
        method: HttpMethod,
        action: &str,
        query_string: &str,
        timestamp: &str,
        nonce: &str,
    ) -> String {
        // 1. 规范化请求头 (body 为空)
        let canonical_headers = format!(
            "host:{}\nx-acs-action:{action}\nx-acs-content-sha256:{EMPTY_BODY_SHA256}\nx-acs-date:{timestamp}\nx-acs-signature-nonce:{nonce}\nx-acs-version:{}\n",
            self.host, self.api_version
        );

        // 2. 规范化请求 (RPC 风格: 参数在 query string 中)
        let canonical_request = format!(
            "{method}\n/\n{query_string}\n{canonical_headers}\n{SIGNED_HEADERS}\n{EMPTY_BODY_SHA256}"
        );

        log::debug!("CanonicalRequest:\n{canonical_request}");

        // 3. 待签名字符串
        let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!("ACS3-HMAC-SHA256\n{hashed_canonical_request}");

        // 4. 签名
        let signature = hex::encode(hmac_sha256(
            self.credential.key_secret.as_bytes(),
            string_to_sign.as_bytes(),
        ));

        format!(
            "ACS3-HMAC-SHA256 Credential={},SignedHeaders={SIGNED_HEADERS},Signature={signature}",
            self.credential.key_id
        )
    }
}
