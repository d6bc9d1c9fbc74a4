//! HTTP API Client
//!
//! gloo-net implementation of [`DashboardApi`].

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use gdpscope::client::{DashboardApi, Endpoint, FetchError, FetchResult};
use gdpscope::model::{decode_records, FilterState, Record, StatRow, YearRange};

/// Local storage key holding an alternative API base URL
pub const API_BASE_KEY: &str = "gdpscope_api_url";

/// Same origin: the dev server proxies `/api`
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Dashboard API over the browser's fetch
#[derive(Debug, Clone)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(&base_url.into()),
        }
    }

    /// Client for the base URL stored in local storage
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        filter: Option<&FilterState>,
    ) -> FetchResult<T> {
        let url = endpoint.url(&self.base_url, filter);
        tracing::debug!(%url, "GET");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                endpoint,
                message: e.to_string(),
            })?;

        if !response.ok() {
            return Err(FetchError::Status {
                endpoint,
                status: response.status(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

impl Default for BrowserApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[async_trait(?Send)]
impl DashboardApi for BrowserApi {
    async fn countries(&self) -> FetchResult<Vec<String>> {
        self.get_json(Endpoint::Countries, None).await
    }

    async fn indicators(&self) -> FetchResult<Vec<String>> {
        self.get_json(Endpoint::Indicators, None).await
    }

    async fn year_range(&self) -> FetchResult<YearRange> {
        self.get_json(Endpoint::YearRange, None).await
    }

    async fn filtered_records(&self, filter: &FilterState) -> FetchResult<Vec<Record>> {
        let rows: Vec<serde_json::Value> =
            self.get_json(Endpoint::FilteredRecords, Some(filter)).await?;
        Ok(decode_records(rows))
    }

    async fn statistics(&self, filter: &FilterState) -> FetchResult<Vec<StatRow>> {
        self.get_json(Endpoint::Statistics, Some(filter)).await
    }
}
