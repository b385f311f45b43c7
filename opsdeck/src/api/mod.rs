//! Record-provider boundary
//!
//! The lookup never talks to HTTP directly. It receives a
//! [`CredentialProvider`] and issues [`ListQuery`]s through it, so tests can
//! substitute an in-memory provider.

mod http;

use async_trait::async_trait;

use crate::credential::{Credential, Page};

pub use http::HttpCredentials;

/// Ordering field used by lookups
pub const LOOKUP_ORDER_BY: &str = "name";
/// Lookups only ever ask for the first page
pub const LOOKUP_PAGE: u32 = 1;
pub const LOOKUP_PAGE_SIZE: u32 = 5;

/// Errors from a record provider
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid base url {url:?}")]
    InvalidUrl { url: String },
}

/// A paginated list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Filter pairs, sent verbatim and in order
    pub filters: Vec<(String, String)>,
    pub order_by: String,
    pub page: u32,
    pub page_size: u32,
}

impl ListQuery {
    /// The lookup query: `{field: value, order_by: "name", page: 1, page_size: 5}`.
    pub fn lookup(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            filters: vec![(field.into(), value.into())],
            order_by: LOOKUP_ORDER_BY.to_string(),
            page: LOOKUP_PAGE,
            page_size: LOOKUP_PAGE_SIZE,
        }
    }

    /// Value of the first filter named `field`
    pub fn filter(&self, field: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Query-string pairs: filters first, then ordering and paging.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = self.filters.clone();
        params.push(("order_by".to_string(), self.order_by.clone()));
        params.push(("page".to_string(), self.page.to_string()));
        params.push(("page_size".to_string(), self.page_size.to_string()));
        params
    }
}

/// Source of credential pages
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn read(&self, query: &ListQuery) -> Result<Page<Credential>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_query_params() {
        let query = ListQuery::lookup("credential_type", "1");
        let params = query.to_params();

        let expected: Vec<(String, String)> = [
            ("credential_type", "1"),
            ("order_by", "name"),
            ("page", "1"),
            ("page_size", "5"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_filter_lookup() {
        let query = ListQuery::lookup("credential_type", "42");
        assert_eq!(query.filter("credential_type"), Some("42"));
        assert_eq!(query.filter("kind"), None);
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 403,
            url: "http://tower/api/v2/credentials/".into(),
        };
        assert_eq!(
            err.to_string(),
            "request to http://tower/api/v2/credentials/ failed with status 403"
        );
    }
}
