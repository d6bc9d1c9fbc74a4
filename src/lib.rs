//! # gdpscope
//!
//! GDP per capita dashboard - the filter store, chart and table renderers and
//! refresh orchestration behind a single-page view of an economic
//! time-series API.
//!
//! ## Features
//!
//! - **Typed records**: country-year observations with explicit indicator lookups
//! - **Plotly figures**: every chart is a serialisable figure, drawn in the
//!   browser or embedded in static reports
//! - **Stale-safe refresh**: overlapping refreshes never overwrite newer results
//! - **Browser and native**: the core builds for wasm; the `native` feature
//!   adds the HTTP client, CLI, dev server and exports
//!
//! ## Modules
//!
//! - [`model`]: records, statistics rows and the filter state
//! - [`client`]: the dashboard API contract and its HTTP implementation
//! - [`render`]: chart figures and HTML tables
//! - [`dashboard`]: initialisation, refresh orchestration and panel views
//! - [`server`]: dev server serving the front end and proxying the API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gdpscope::client::{HttpApi, HttpApiConfig};
//! use gdpscope::dashboard::{initialize, Dashboard, RefreshOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::new(HttpApi::new(HttpApiConfig::default())?);
//!
//!     // Populate the filter controls and build the initial selection
//!     let options = initialize(dashboard.api()).await;
//!     let filter = options.initial_filter().ok_or("year range unavailable")?;
//!
//!     match dashboard.refresh(&filter).await {
//!         RefreshOutcome::Rendered(view) => {
//!             for (id, panel) in view.panels() {
//!                 println!("{}: {:?}", id.dom_id(), panel.is_loading());
//!             }
//!         }
//!         RefreshOutcome::Superseded => {}
//!         RefreshOutcome::Failed(err) => eprintln!("refresh failed: {}", err),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dashboard;
pub mod model;
pub mod render;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod export;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod report;
#[cfg(feature = "native")]
pub mod server;

// Re-export top-level types for convenience
pub use model::{
    Cell, FilterError, FilterState, IndicatorKey, Reading, Record, RecordError, StatRow,
    YearBounds, YearRange,
};

pub use client::{DashboardApi, Endpoint, FetchError, FetchResult};

pub use render::{Figure, Locale};

pub use dashboard::{
    initialize, Dashboard, DashboardView, FilterOptions, Panel, PanelId, RefreshOutcome,
};

#[cfg(feature = "native")]
pub use client::{HttpApi, HttpApiConfig};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};

#[cfg(feature = "native")]
pub use server::{serve, ServeOptions, ServerError};
