//! # certd-plugin-aliyun
//!
//! Aliyun plugins for certd:
//!
//! - [`AliyunDnsProvider`] — Alidns records for ACME DNS-01 challenges;
//! - [`DeployCertToAliyunCdn`] — sets an issued certificate as the HTTPS
//!   certificate of a CDN domain.
//!
//! Both talk to Aliyun through [`AcsClient`], an ACS3-HMAC-SHA256 signed RPC client.
//! Hosts register an [`AcsClientFactory`] in the [`PluginContext`](certd_plugin_api::PluginContext).
//!
//! ## Feature Flags
//!
//! - `native-tls` (default) — TLS through the platform library
//! - `rustls` — pure-Rust TLS

mod cdn;
mod client;
mod common;
mod dns;
mod error;
mod utils;

#[cfg(test)]
mod test_utils;

pub use cdn::{CertSource, DeployCertToAliyunCdn, DeployToCdnProps, cert_label};
pub use client::{AcsClient, AcsClientFactory, AcsClientFactoryBuilder};
pub use dns::{AliyunDnsProvider, DnsProviderProps};
