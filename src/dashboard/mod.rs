//! Dashboard Orchestration
//!
//! Ties the filter store, the API and the renderers together without any
//! rendering surface, so the whole refresh cycle runs in plain tests.
//!
//! - [`init`]: filter control population at startup
//! - [`refresh`]: the refresh orchestrator and its tokens
//! - [`view`]: per-panel content of one refresh

pub mod init;
pub mod refresh;
pub mod view;

pub use init::{
    filter_from_inputs, initialize, year_label, FilterOptions, IndicatorOption,
    DEFAULT_SELECTED_COUNTRIES,
};
pub use refresh::{Dashboard, RefreshOutcome, RefreshToken, RefreshTokens};
pub use view::{DashboardView, Panel, PanelId};
