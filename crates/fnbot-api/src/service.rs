//! The command surface: one method per bot command.
//!
//! Each method performs a single fetch, decodes, normalizes, and returns a
//! value. Nothing here returns `Result` or logs; failures come back as
//! [`MapResult::FetchFailed`], [`ShopListing::interrupted`], or
//! [`Lookup::Failed`] and the caller decides how to report them.

use chrono::Utc;
use fnbot_core::{
    AppConfig, CosmeticResult, Lookup, MapResult, NewsEntry, ServiceStatus, ShopLayout,
    ShopListing,
};

use crate::client::{Resource, UpstreamClient};
use crate::error::ApiError;
use crate::normalize::{
    normalize_cosmetic, normalize_map, normalize_news, normalize_shop, normalize_status,
};
use crate::parse::decode;
use crate::types::{CosmeticRecord, MapRecord, NewsRecord, ShopRecord, StatusRecord};

/// Bot commands backed by an injected [`UpstreamClient`].
pub struct FortniteService {
    client: UpstreamClient,
    shop_layout: ShopLayout,
}

impl FortniteService {
    #[must_use]
    pub fn new(client: UpstreamClient, shop_layout: ShopLayout) -> Self {
        Self {
            client,
            shop_layout,
        }
    }

    /// Builds the client from configuration and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            UpstreamClient::from_config(config)?,
            config.shop_layout,
        ))
    }

    #[must_use]
    pub fn shop_layout(&self) -> ShopLayout {
        self.shop_layout
    }

    /// Current POI map with a fresh disambiguation token.
    pub async fn get_map(&self) -> MapResult {
        let record = self
            .client
            .fetch(&Resource::Map)
            .await
            .and_then(|body| decode::<MapRecord>(&body, "map"));

        match record {
            Ok(record) => normalize_map(record, Utc::now()),
            Err(err) => MapResult::FetchFailed {
                failure: err.failure(),
            },
        }
    }

    /// Item shop lines in the configured layout. On failure the listing is
    /// empty (or partial) and `interrupted` says why.
    pub async fn get_shop(&self) -> ShopListing {
        let layout = self.shop_layout;
        let record = self
            .client
            .fetch(&Resource::Shop(layout))
            .await
            .and_then(|body| ShopRecord::decode(layout, &body));

        match record {
            Ok(record) => normalize_shop(record),
            Err(err) => ShopListing {
                lines: Vec::new(),
                interrupted: Some(err.failure()),
            },
        }
    }

    pub async fn get_status(&self) -> Lookup<ServiceStatus> {
        let record = self
            .client
            .fetch(&Resource::Status)
            .await
            .and_then(|body| decode::<StatusRecord>(&body, "status"));

        match record {
            Ok(record) => normalize_status(record).map_or(Lookup::Absent, Lookup::Found),
            Err(err) => Lookup::Failed(err.failure()),
        }
    }

    /// News tiles; `Absent` when the payload carries none.
    pub async fn get_news(&self) -> Lookup<Vec<NewsEntry>> {
        let record = self
            .client
            .fetch(&Resource::News)
            .await
            .and_then(|body| decode::<NewsRecord>(&body, "news"));

        match record {
            Ok(record) => match normalize_news(record) {
                Some(entries) if !entries.is_empty() => Lookup::Found(entries),
                _ => Lookup::Absent,
            },
            Err(err) => Lookup::Failed(err.failure()),
        }
    }

    /// Searches cosmetics by name. Matching happens upstream; a miss (404,
    /// any other non-success status, or no `data`) is `Absent`.
    pub async fn get_cosmetic(&self, name: &str) -> Lookup<CosmeticResult> {
        let name = name.trim();
        if name.is_empty() {
            return Lookup::Absent;
        }

        let record = self
            .client
            .fetch(&Resource::CosmeticSearch { name })
            .await
            .and_then(|body| decode::<CosmeticRecord>(&body, "cosmetic-search"));

        match record {
            Ok(record) => normalize_cosmetic(record).map_or(Lookup::Absent, Lookup::Found),
            Err(ApiError::NotFound { .. } | ApiError::UnexpectedStatus { .. }) => Lookup::Absent,
            Err(err) => Lookup::Failed(err.failure()),
        }
    }
}
