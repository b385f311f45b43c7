//! reqwest-backed provider for the console's REST API

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::{ApiError, CredentialProvider, ListQuery};
use crate::credential::{Credential, Page};

const CREDENTIALS_PATH: &str = "/api/v2/credentials/";

/// Reads credentials from `GET {base}/api/v2/credentials/`
#[derive(Debug, Clone)]
pub struct HttpCredentials {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl HttpCredentials {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ApiError::InvalidUrl {
                url: base_url.to_string(),
            });
        }
        Ok(Self {
            client: reqwest::Client::new(),
            url: format!("{base}{CREDENTIALS_PATH}"),
            token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => tracing::warn!("token contains characters not allowed in a header"),
            }
        }
        headers
    }
}

#[async_trait]
impl CredentialProvider for HttpCredentials {
    async fn read(&self, query: &ListQuery) -> Result<Page<Credential>, ApiError> {
        tracing::debug!(url = %self.url, params = ?query.to_params(), "listing credentials");

        let response = self
            .client
            .get(&self.url)
            .headers(self.headers())
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        Ok(response.json::<Page<Credential>>().await?)
    }
}
