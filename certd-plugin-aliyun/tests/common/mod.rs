//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use certd_plugin_aliyun::{AcsClientFactory, AliyunDnsProvider, DnsProviderProps};
use certd_plugin_api::{InMemoryAccessStore, PluginContext, RemoveRecordRequest};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: AliyunDnsProvider,
    pub domain: String,
}

impl TestContext {
    /// 创建 Aliyun 测试上下文
    pub async fn aliyun() -> Option<Self> {
        let access_key_id = env::var("ALIYUN_ACCESS_KEY_ID").ok()?;
        let access_key_secret = env::var("ALIYUN_ACCESS_KEY_SECRET").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let fields: HashMap<String, String> = [
            ("accessKeyId".to_string(), access_key_id),
            ("accessKeySecret".to_string(), access_key_secret),
        ]
        .into();
        let store = InMemoryAccessStore::new();
        store.insert_fields("1", &fields).await.ok()?;
        let factory = AcsClientFactory::builder().build().ok()?;
        let ctx = PluginContext::with_log_facade(Arc::new(store), Arc::new(factory));

        let props = DnsProviderProps {
            access_id: "1".to_string(),
        };
        let provider = AliyunDnsProvider::new(ctx, &props).await.ok()?;

        Some(Self { provider, domain })
    }

    /// 清理测试记录
    pub async fn cleanup_record(&self, full_record: &str, record_id: &str) {
        use certd_plugin_api::DnsRecordProvider;

        let _ = self
            .provider
            .remove_record(&RemoveRecordRequest {
                full_record: full_record.to_string(),
                record_type: "TXT".to_string(),
                value: String::new(),
                record: record_id.to_string(),
            })
            .await;
    }
}
