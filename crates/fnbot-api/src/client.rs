//! HTTP client for the game-data API and the status page.
//!
//! One GET per call, no retries. The underlying `reqwest::Client` is built
//! once and owned by [`UpstreamClient`]; callers share the client by
//! reference instead of reaching for a process-wide instance.

use std::time::Duration;

use fnbot_core::{AppConfig, ShopLayout};
use reqwest::{Client, StatusCode, Url};

use crate::error::ApiError;

/// A logical upstream resource. Each maps to exactly one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource<'a> {
    Map,
    Shop(ShopLayout),
    News,
    CosmeticSearch { name: &'a str },
    Status,
}

impl std::fmt::Display for Resource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Map => write!(f, "map"),
            Resource::Shop(layout) => write!(f, "shop({layout})"),
            Resource::News => write!(f, "news"),
            Resource::CosmeticSearch { .. } => write!(f, "cosmetic-search"),
            Resource::Status => write!(f, "status"),
        }
    }
}

/// Client for the upstream game-data API and the status page.
///
/// Use [`UpstreamClient::from_config`] in the binary or
/// [`UpstreamClient::with_base_urls`] to point at a mock server in tests.
pub struct UpstreamClient {
    client: Client,
    api_base: Url,
    status_base: Url,
    language: String,
}

impl UpstreamClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if either base URL
    /// does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_base_urls(
            &config.api_base_url,
            &config.status_base_url,
            &config.language,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with explicit base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if either base URL
    /// does not parse or cannot carry a path.
    pub fn with_base_urls(
        api_base: &str,
        status_base: &str,
        language: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base: parse_base_url(api_base)?,
            status_base: parse_base_url(status_base)?,
            language: language.to_owned(),
        })
    }

    /// Builds the request URL for a resource with percent-encoded query
    /// parameters.
    #[must_use]
    pub fn resource_url(&self, resource: &Resource<'_>) -> Url {
        let language = self.language.as_str();
        match resource {
            Resource::Map => build_url(&self.api_base, &["v1", "map"], &[]),
            Resource::Shop(ShopLayout::Entries) => {
                build_url(&self.api_base, &["v2", "shop"], &[("language", language)])
            }
            Resource::Shop(ShopLayout::Sections) => {
                build_url(&self.api_base, &["v2", "shop", "br"], &[])
            }
            Resource::News => build_url(
                &self.api_base,
                &["v2", "news", "br"],
                &[("language", language)],
            ),
            Resource::CosmeticSearch { name } => build_url(
                &self.api_base,
                &["v2", "cosmetics", "br", "search"],
                &[("name", *name), ("language", language)],
            ),
            Resource::Status => {
                build_url(&self.status_base, &["api", "v2", "summary.json"], &[])
            }
        }
    }

    /// Sends one GET for `resource` and returns the response body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`]: HTTP 404.
    /// - [`ApiError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ApiError::Http`]: network or TLS failure, or an unreadable body.
    pub async fn fetch(&self, resource: &Resource<'_>) -> Result<String, ApiError> {
        let url = self.resource_url(resource);
        tracing::debug!(%resource, %url, "fetching upstream resource");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Parses a base URL and normalises it to end with exactly one slash so that
/// appended path segments land under any existing prefix.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let normalised = format!("{}/", raw.trim().trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: "URL cannot carry a path".to_owned(),
        });
    }
    Ok(url)
}

fn build_url(base: &Url, segments: &[&str], query: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    // Base URLs are checked by `parse_base_url`, so segments are always writable.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in query {
            pairs.append_pair(k, v);
        }
    }
    url
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
