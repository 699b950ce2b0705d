//! Alidns API 请求/响应结构

use serde::{Deserialize, Serialize};

// ============ 请求 ============

#[derive(Debug, Serialize)]
pub struct DescribeDomainsRequest<'a> {
    #[serde(rename = "RegionId")]
    pub region_id: &'a str,
    #[serde(rename = "PageNumber")]
    pub page_number: u32,
    #[serde(rename = "PageSize")]
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub struct DescribeDomainRecordsRequest<'a> {
    #[serde(rename = "RegionId")]
    pub region_id: &'a str,
    #[serde(rename = "DomainName")]
    pub domain_name: &'a str,
    /// 主机记录关键字（模糊搜索）
    #[serde(rename = "RRKeyWord")]
    pub rr_keyword: &'a str,
    /// 记录值关键字（模糊搜索）
    #[serde(rename = "ValueKeyWord", skip_serializing_if = "Option::is_none")]
    pub value_keyword: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct AddDomainRecordRequest<'a> {
    #[serde(rename = "RegionId")]
    pub region_id: &'a str,
    #[serde(rename = "DomainName")]
    pub domain_name: &'a str,
    #[serde(rename = "RR")]
    pub rr: &'a str,
    #[serde(rename = "Type")]
    pub record_type: &'a str,
    #[serde(rename = "Value")]
    pub value: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DeleteDomainRecordRequest<'a> {
    #[serde(rename = "RegionId")]
    pub region_id: &'a str,
    #[serde(rename = "RecordId")]
    pub record_id: &'a str,
}

// ============ 域名相关结构 ============

#[derive(Debug, Deserialize)]
pub struct DescribeDomainsResponse {
    #[serde(rename = "Domains")]
    pub domains: Option<DomainsWrapper>,
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DomainsWrapper {
    #[serde(rename = "Domain")]
    pub domain: Option<Vec<AliyunDomain>>,
}

#[derive(Debug, Deserialize)]
pub struct AliyunDomain {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
}

// ============ 记录相关结构 ============

#[derive(Debug, Deserialize)]
pub struct DescribeDomainRecordsResponse {
    #[serde(rename = "DomainRecords")]
    pub domain_records: Option<DomainRecordsWrapper>,
}

#[derive(Debug, Deserialize)]
pub struct DomainRecordsWrapper {
    #[serde(rename = "Record")]
    pub record: Option<Vec<AliyunRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct AliyunRecord {
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "DomainName")]
    pub domain_name: Option<String>,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AddDomainRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteDomainRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: String,
}
