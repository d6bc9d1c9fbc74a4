//! UI Components
//!
//! Leptos components for the dashboard page.

pub mod filters;
pub mod loading;
pub mod panel;
pub mod plotly;

pub use filters::Filters;
pub use loading::Loading;
pub use panel::PanelMount;
