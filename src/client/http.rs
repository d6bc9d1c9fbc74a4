//! Native HTTP client
//!
//! reqwest implementation of [`DashboardApi`], used by the CLI subcommands.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{DashboardApi, Endpoint, FetchError, FetchResult};
use crate::model::{decode_records, FilterState, Record, StatRow, YearRange};

/// Configuration for [`HttpApi`]
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL of the backend (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// Dashboard API over plain HTTP GETs
pub struct HttpApi {
    client: Client,
    config: HttpApiConfig,
}

impl HttpApi {
    pub fn new(config: HttpApiConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        filter: Option<&FilterState>,
    ) -> FetchResult<T> {
        let url = endpoint.url(&self.config.base_url, filter);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            FetchError::Transport {
                endpoint,
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_ms, 30_000);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let api = HttpApi::new(HttpApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_ms: 2_000,
        })
        .unwrap();

        let err = api.countries().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Transport {
                endpoint: Endpoint::Countries,
                ..
            }
        ));
    }
}
