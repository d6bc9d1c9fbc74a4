//! Dashboard API Client
//!
//! The read-only contract between the dashboard and the economic data API.
//!
//! - [`DashboardApi`]: the five reads the dashboard issues
//! - [`Endpoint`]: paths of the consumed endpoints
//! - [`FilterQuery`]: query string shared by the two filtered reads
//! - [`HttpApi`]: native implementation over reqwest (feature `native`)
//!
//! The trait is `?Send` so the browser adapter can implement it with
//! gloo-net futures, which are bound to the JS event loop.

mod error;
#[cfg(feature = "native")]
mod http;

pub use error::{FetchError, FetchResult};
#[cfg(feature = "native")]
pub use http::{HttpApi, HttpApiConfig};

use async_trait::async_trait;

use crate::model::{FilterState, Record, StatRow, YearRange};

/// Endpoints consumed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Countries,
    Indicators,
    YearRange,
    FilteredRecords,
    Statistics,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Countries => "/api/paises",
            Endpoint::Indicators => "/api/lista_indicadores",
            Endpoint::YearRange => "/api/anos_range",
            Endpoint::FilteredRecords => "/api/dados_filtrados_completos",
            Endpoint::Statistics => "/api/estatisticas_pib",
        }
    }

    /// Full URL for this endpoint; filtered reads carry the filter query
    pub fn url(&self, base: &str, filter: Option<&FilterState>) -> String {
        let base = base.trim_end_matches('/');
        match filter {
            Some(filter) => format!("{}{}?{}", base, self.path(), FilterQuery::from(filter)),
            None => format!("{}{}", base, self.path()),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Query parameters for the filtered reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub paises: String,
    pub min_ano: i32,
    pub max_ano: i32,
}

impl From<&FilterState> for FilterQuery {
    fn from(filter: &FilterState) -> Self {
        Self {
            paises: filter.countries().join(","),
            min_ano: filter.years().min(),
            max_ano: filter.years().max(),
        }
    }
}

impl std::fmt::Display for FilterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "paises={}&minAno={}&maxAno={}",
            urlencoding::encode(&self.paises),
            self.min_ano,
            self.max_ano
        )
    }
}

/// Read-only access to the dashboard's backend
#[async_trait(?Send)]
pub trait DashboardApi {
    /// Selectable country identifiers
    async fn countries(&self) -> FetchResult<Vec<String>>;

    /// Optional indicator keys
    async fn indicators(&self) -> FetchResult<Vec<String>>;

    /// Global year bounds of the dataset
    async fn year_range(&self) -> FetchResult<YearRange>;

    /// Every record matching the filter
    async fn filtered_records(&self, filter: &FilterState) -> FetchResult<Vec<Record>>;

    /// Per-country statistics for the filter
    async fn statistics(&self, filter: &FilterState) -> FetchResult<Vec<StatRow>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::YearBounds;

    fn filter() -> FilterState {
        FilterState::new(
            ["Brazil", "United States"],
            YearBounds::new(2015, 2020).unwrap(),
            None,
        )
    }

    #[test]
    fn test_filter_query_encoding() {
        let query = FilterQuery::from(&filter());
        assert_eq!(query.paises, "Brazil,United States");
        assert_eq!(
            query.to_string(),
            "paises=Brazil%2CUnited%20States&minAno=2015&maxAno=2020"
        );
    }

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            Endpoint::Countries.url("http://localhost:5000/", None),
            "http://localhost:5000/api/paises"
        );
        assert_eq!(
            Endpoint::Statistics.url("", Some(&filter())),
            "/api/estatisticas_pib?paises=Brazil%2CUnited%20States&minAno=2015&maxAno=2020"
        );
    }

    #[test]
    fn test_empty_selection_query() {
        let filter = FilterState::new(Vec::<String>::new(), YearBounds::new(2000, 2001).unwrap(), None);
        assert_eq!(FilterQuery::from(&filter).to_string(), "paises=&minAno=2000&maxAno=2001");
    }
}
