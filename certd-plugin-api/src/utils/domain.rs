//! Registered-domain resolution helpers

use futures::{Stream, StreamExt, pin_mut};

use crate::error::{PluginError, PluginResult};

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// Whether `domain` is a suffix of `full_record` (trailing dots ignored, empty names never match).
pub fn is_suffix_of(full_record: &str, domain: &str) -> bool {
    let domain = normalize_domain_name(domain);
    !domain.is_empty() && normalize_domain_name(full_record).ends_with(domain)
}

/// Select the first domain of `domains` that is a suffix of `full_record`.
///
/// The sequence is consumed lazily and abandoned at the first match, so a paged
/// source stops fetching as soon as the owner is found. Errors from the source
/// propagate unchanged.
///
/// # Errors
/// [`PluginError::DomainNotFound`] carrying `full_record` when nothing matches.
pub async fn find_parent_domain<S>(domains: S, full_record: &str) -> PluginResult<String>
where
    S: Stream<Item = PluginResult<String>>,
{
    pin_mut!(domains);
    while let Some(domain) = domains.next().await {
        let domain = domain?;
        if is_suffix_of(full_record, &domain) {
            return Ok(normalize_domain_name(&domain).to_string());
        }
    }
    Err(PluginError::DomainNotFound(full_record.to_string()))
}

/// 将完整记录名转换为相对名称（RR）
/// 如: "_acme-challenge.foo.example.com" + "example.com" -> "_acme-challenge.foo"
/// 如: "example.com" + "example.com" -> "@"
///
/// Exactly one trailing `".{domain}"` is stripped. A name that only matches without a
/// label boundary (`fooexample.com` vs `example.com`) is returned whole.
pub fn relative_record_name(full_record: &str, domain: &str) -> String {
    let full = normalize_domain_name(full_record);
    let zone = normalize_domain_name(domain);

    if full == zone {
        "@".to_string()
    } else if let Some(rr) = full.strip_suffix(&format!(".{zone}")) {
        rr.to_string()
    } else {
        full.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn domains(names: &[&str]) -> impl Stream<Item = PluginResult<String>> {
        stream::iter(
            names
                .iter()
                .map(|n| Ok(n.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[tokio::test]
    async fn first_suffix_wins() {
        let found = find_parent_domain(
            domains(&["other.org", "example.com", "foo.example.com"]),
            "_acme-challenge.foo.example.com",
        )
        .await
        .unwrap();
        // remote order decides, not the longest match
        assert_eq!(found, "example.com");
    }

    #[tokio::test]
    async fn no_match_is_domain_not_found() {
        let err = find_parent_domain(domains(&["example.com"]), "_acme-challenge.example.net")
            .await
            .unwrap_err();
        assert!(
            matches!(err, PluginError::DomainNotFound(ref name) if name == "_acme-challenge.example.net")
        );
    }

    #[tokio::test]
    async fn empty_list_is_domain_not_found() {
        let err = find_parent_domain(domains(&[]), "a.example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::DomainNotFound(_)));
    }

    #[tokio::test]
    async fn empty_domain_name_never_matches() {
        let found = find_parent_domain(domains(&["", "example.com"]), "a.example.com")
            .await
            .unwrap();
        assert_eq!(found, "example.com");
    }

    #[tokio::test]
    async fn stops_pulling_after_match() {
        let items: Vec<PluginResult<String>> = vec![
            Ok("example.com".to_string()),
            Err(PluginError::CredentialError("should not be reached".to_string())),
        ];
        let found = find_parent_domain(stream::iter(items), "x.example.com")
            .await
            .unwrap();
        assert_eq!(found, "example.com");
    }

    #[tokio::test]
    async fn source_error_propagates() {
        let items: Vec<PluginResult<String>> =
            vec![Err(PluginError::CredentialError("denied".to_string()))];
        let err = find_parent_domain(stream::iter(items), "x.example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::CredentialError(_)));
    }

    #[test]
    fn trailing_dots_ignored() {
        assert!(is_suffix_of("_acme-challenge.example.com.", "example.com"));
        assert!(is_suffix_of("_acme-challenge.example.com", "example.com."));
    }

    #[test]
    fn relative_strips_one_suffix() {
        assert_eq!(
            relative_record_name("_acme-challenge.foo.example.com", "example.com"),
            "_acme-challenge.foo"
        );
        assert_eq!(
            relative_record_name("_acme-challenge.example.com", "example.com"),
            "_acme-challenge"
        );
    }

    #[test]
    fn relative_strips_only_trailing_occurrence() {
        assert_eq!(
            relative_record_name("example.com.example.com", "example.com"),
            "example.com"
        );
    }

    #[test]
    fn relative_apex_is_at() {
        assert_eq!(relative_record_name("example.com", "example.com"), "@");
        assert_eq!(relative_record_name("example.com.", "example.com"), "@");
    }

    #[test]
    fn relative_without_label_boundary_is_unchanged() {
        assert_eq!(
            relative_record_name("fooexample.com", "example.com"),
            "fooexample.com"
        );
    }
}
