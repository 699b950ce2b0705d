//! 阿里云 DnsRecordProvider 实现

use async_trait::async_trait;
use futures::{Stream, TryStreamExt, stream};

use certd_plugin_api::utils::domain::{find_parent_domain, relative_record_name};
use certd_plugin_api::{
    CreateRecordRequest, DnsRecordProvider, DomainRecord, PluginDefine, PluginError, PluginResult,
    ProviderError, RemoveRecordRequest,
};

use super::types::{
    AddDomainRecordRequest, AddDomainRecordResponse, DeleteDomainRecordRequest,
    DeleteDomainRecordResponse, DescribeDomainRecordsRequest, DescribeDomainRecordsResponse,
    DescribeDomainsRequest, DescribeDomainsResponse,
};
use super::{AliyunDnsProvider, MAX_PAGE_SIZE};
use crate::common::{REGION_ID, call};
use crate::error::ErrorContext;

impl AliyunDnsProvider {
    async fn describe_domains(&self, page: u32) -> PluginResult<DescribeDomainsResponse> {
        let req = DescribeDomainsRequest {
            region_id: REGION_ID,
            page_number: page,
            page_size: MAX_PAGE_SIZE,
        };
        call(
            self.client.as_ref(),
            "DescribeDomains",
            &req,
            ErrorContext::default(),
        )
        .await
    }

    /// Registered domains of the account, in remote order.
    ///
    /// Lazy: a page is requested only once the previous one has been consumed, and
    /// dropping the stream stops paging.
    pub fn domain_stream(&self) -> impl Stream<Item = PluginResult<String>> + Send + '_ {
        stream::try_unfold(Some(1_u32), move |page| async move {
            let Some(page) = page else {
                return Ok::<_, PluginError>(None);
            };

            let response = self.describe_domains(page).await?;
            let names: Vec<String> = response
                .domains
                .and_then(|d| d.domain)
                .unwrap_or_default()
                .into_iter()
                .map(|d| d.domain_name)
                .collect();

            let fetched = (page - 1) * MAX_PAGE_SIZE
                + u32::try_from(names.len()).unwrap_or(MAX_PAGE_SIZE);
            let has_more = names.len() == MAX_PAGE_SIZE as usize
                && response.total_count.is_none_or(|total| fetched < total);
            let next = has_more.then_some(page + 1);

            let page_items = stream::iter(names.into_iter().map(Ok::<_, PluginError>));
            Ok(Some((page_items, next)))
        })
        .try_flatten()
    }

    /// All registered domain names of the account.
    pub async fn list_domains(&self) -> PluginResult<Vec<String>> {
        self.domain_stream().try_collect().await
    }

    /// Find the registered domain owning `full_record`.
    ///
    /// The first domain (in remote order) that is a suffix of `full_record` wins.
    /// The domain list is fetched again on every call.
    pub async fn match_domain(&self, full_record: &str) -> PluginResult<String> {
        find_parent_domain(self.domain_stream(), full_record).await
    }

    /// Existing records of `domain` whose RR (and optionally value) match the keywords.
    ///
    /// Read-only; duplicate detection is left to the caller.
    pub async fn get_records(
        &self,
        domain: &str,
        rr: &str,
        value: Option<&str>,
    ) -> PluginResult<Vec<DomainRecord>> {
        let req = DescribeDomainRecordsRequest {
            region_id: REGION_ID,
            domain_name: domain,
            rr_keyword: rr,
            value_keyword: value.filter(|v| !v.is_empty()),
        };
        let ctx = ErrorContext {
            domain: Some(domain.to_string()),
            ..ErrorContext::default()
        };
        let response: DescribeDomainRecordsResponse =
            call(self.client.as_ref(), "DescribeDomainRecords", &req, ctx).await?;

        Ok(response
            .domain_records
            .and_then(|r| r.record)
            .unwrap_or_default()
            .into_iter()
            .map(|r| DomainRecord {
                domain_name: r.domain_name.unwrap_or_else(|| domain.to_string()),
                rr: r.rr,
                record_type: r.record_type,
                value: r.value,
                record_id: Some(r.record_id),
                ttl: r.ttl,
            })
            .collect())
    }
}

#[async_trait]
impl DnsRecordProvider for AliyunDnsProvider {
    fn define() -> PluginDefine {
        Self::definition()
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> PluginResult<Option<String>> {
        self.ctx.log_info(&format!(
            "Adding DNS record: {} {} {}",
            req.full_record, req.record_type, req.value
        ));

        let domain = self.match_domain(&req.full_record).await?;
        let rr = relative_record_name(&req.full_record, &domain);

        let params = AddDomainRecordRequest {
            region_id: REGION_ID,
            domain_name: &domain,
            rr: &rr,
            record_type: &req.record_type,
            value: &req.value,
        };
        let ctx = ErrorContext {
            record_name: Some(rr.clone()),
            domain: Some(domain.clone()),
            ..ErrorContext::default()
        };

        match call::<AddDomainRecordResponse, _>(
            self.client.as_ref(),
            "AddDomainRecord",
            &params,
            ctx,
        )
        .await
        {
            Ok(response) => {
                self.ctx.log_info(&format!(
                    "DNS record added: {} {} (RecordId: {})",
                    req.full_record, req.value, response.record_id
                ));
                Ok(Some(response.record_id))
            }
            // 重复的验证记录视为成功，但拿不到已有记录的 ID
            Err(PluginError::Provider(ProviderError::RecordExists { .. })) => {
                log::warn!(
                    "DNS record already exists, skipping: {} {}",
                    req.full_record,
                    req.value
                );
                Ok(None)
            }
            Err(e) => {
                self.ctx
                    .log_error(&format!("Failed to add DNS record {}: {e}", req.full_record));
                Err(e)
            }
        }
    }

    async fn remove_record(&self, req: &RemoveRecordRequest) -> PluginResult<String> {
        let params = DeleteDomainRecordRequest {
            region_id: REGION_ID,
            record_id: &req.record,
        };
        let ctx = ErrorContext {
            record_id: Some(req.record.clone()),
            ..ErrorContext::default()
        };

        let response: DeleteDomainRecordResponse =
            call(self.client.as_ref(), "DeleteDomainRecord", &params, ctx)
                .await
                .inspect_err(|e| {
                    self.ctx
                        .log_error(&format!("Failed to remove DNS record {}: {e}", req.record));
                })?;

        self.ctx.log_info(&format!(
            "DNS record removed: {} {} (RecordId: {})",
            req.full_record, req.value, response.record_id
        ));
        Ok(response.record_id)
    }
}
